//! Progress state of the most recent content fetch

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressState {
    /// Nothing requested yet
    #[default]
    Waiting,
    Loading,
    Success,
    Error,
}

/// Three-valued loading indicator
///
/// A settle only applies while the state is still `Loading`, so a late
/// completion cannot overwrite a transition that already happened. This does
/// not stop a late response from being applied elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    state: ProgressState,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// A request is about to be issued
    pub fn begin(&mut self) {
        self.state = ProgressState::Loading;
    }

    /// A request settled. Returns whether the transition was applied.
    pub fn settle(&mut self, success: bool) -> bool {
        if self.state != ProgressState::Loading {
            return false;
        }

        self.state = if success {
            ProgressState::Success
        } else {
            ProgressState::Error
        };
        true
    }
}
