//! Filesystem abstraction for kgen
//!
//! Provides confined output paths, atomic writes, checksums and
//! format-agnostic loading of configuration files.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::OutputPath;
