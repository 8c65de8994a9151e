//! Loading [`PartialConfig`] from configuration files

use std::path::{Path, PathBuf};

use kgen_fs::ConfigStore;

use crate::config::PartialConfig;
use crate::error::Result;

/// File names probed, in order, when no config file is given explicitly.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["kgen.toml", "kgen.yaml", "kgen.yml", "kgen.json"];

/// Load a partial configuration from a TOML, YAML or JSON file.
pub fn load_partial(path: &Path) -> Result<PartialConfig> {
    Ok(ConfigStore::new().load(path)?)
}

/// Find the first default config file present in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    let found = DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file());
    if let Some(path) = &found {
        tracing::debug!(path = %path.display(), "discovered config file");
    }
    found
}
