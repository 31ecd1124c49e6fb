use thiserror::Error;

/// Invalid startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name
        var: String,
        /// Parse failure
        reason: String,
    },
}
