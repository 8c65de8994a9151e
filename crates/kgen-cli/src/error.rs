//! Error types for kgen-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid or incomplete configuration
    #[error(transparent)]
    Meta(#[from] kgen_meta::Error),

    /// Manifest rendering failed
    #[error(transparent)]
    Manifest(#[from] kgen_manifest::Error),

    /// Error from kgen-fs
    #[error(transparent)]
    Fs(#[from] kgen_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
