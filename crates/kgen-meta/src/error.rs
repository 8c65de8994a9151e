//! Error types for kgen-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] kgen_fs::Error),

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid numeric value for {field}: '{value}' (expected a positive integer)")]
    InvalidNumericValue { field: String, value: String },

    #[error(
        "Invalid {field} '{value}': must be lowercase alphanumerics or '-', start and end alphanumeric, at most 63 characters"
    )]
    InvalidName { field: String, value: String },

    #[error("Invalid environment '{0}': must be one of none, staging, production, both")]
    InvalidEnvironment(String),
}
