use folio_core::error::{ConfigurationError, TransformError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network failure, non-2xx status or undecodable body
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error(transparent)]
    MalformedContent(#[from] TransformError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl Error {
    /// `url` must not carry the access token query
    pub fn transport(url: &str, reason: impl std::fmt::Display) -> Self {
        Error::Transport {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
