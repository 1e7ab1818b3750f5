pub mod install;
pub mod obfuscate;

pub use install::install;
pub use obfuscate::obfuscate_token;
