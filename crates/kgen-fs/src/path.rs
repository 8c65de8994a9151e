//! Output paths confined to a root directory

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path under an output root, stored with forward slashes.
///
/// Segments appended through [`OutputPath::join`] may never climb above the
/// root: `..`, absolute segments and drive prefixes are rejected. Conversion
/// to a platform-native path happens only at the I/O boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputPath {
    inner: String,
}

impl OutputPath {
    /// Create an output root from any path-like input.
    pub fn root(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        let trimmed = raw.trim_end_matches('/');
        let inner = if trimmed.is_empty() && raw.starts_with('/') {
            "/".to_string()
        } else if trimmed.is_empty() {
            ".".to_string()
        } else {
            trimmed.to_string()
        };
        Self { inner }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a relative segment, which may itself contain separators.
    ///
    /// Empty and `.` components are skipped.
    pub fn join(&self, segment: &str) -> Result<Self> {
        let normalized = segment.replace('\\', "/");
        if normalized.starts_with('/') || normalized.contains(':') {
            return Err(Error::PathEscape {
                segment: segment.to_string(),
            });
        }

        let mut inner = self.inner.clone();
        for component in normalized.split('/') {
            match component {
                "" | "." => continue,
                ".." => {
                    return Err(Error::PathEscape {
                        segment: segment.to_string(),
                    });
                }
                part => {
                    if !inner.ends_with('/') {
                        inner.push('/');
                    }
                    inner.push_str(part);
                }
            }
        }
        Ok(Self { inner })
    }

    /// Append every component of a relative native path.
    pub fn join_path(&self, relative: &Path) -> Result<Self> {
        self.join(&relative.to_string_lossy())
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

impl AsRef<Path> for OutputPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for OutputPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
