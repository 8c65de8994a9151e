//! Error types for manifest synthesis

use thiserror::Error;

/// Result type for kgen-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to render {kind} '{name}' as YAML: {source}")]
    Render {
        kind: String,
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
}
