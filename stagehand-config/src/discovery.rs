//! Configuration file discovery
//!
//! Files are looked up in the working directory: `stagehand.toml` first, then
//! `.stagehand/config.{toml,yaml,yml,json}`. Later files override earlier ones
//! when merged.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory holding per-project configuration
pub const CONFIG_DIR: &str = ".stagehand";

/// Root-level configuration file
pub const ROOT_FILE: &str = "stagehand.toml";

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file (TOML, YAML, JSON)
    pub format: ConfigFormat,
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Finds configuration files under a base directory
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    base_dir: PathBuf,
}

impl FileDiscovery {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Every existing configuration file, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let config_dir = self.base_dir.join(CONFIG_DIR);
        let candidates = [
            self.base_dir.join(ROOT_FILE),
            config_dir.join("config.toml"),
            config_dir.join("config.yaml"),
            config_dir.join("config.yml"),
            config_dir.join("config.json"),
        ];

        let files: Vec<ConfigFile> = candidates
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let format = ConfigFormat::from_path(&path)?;
                trace!("Found config: {} ({:?})", path.display(), format);
                Some(ConfigFile { path, format })
            })
            .collect();

        debug!(
            "Discovered {} configuration files under {}",
            files.len(),
            self.base_dir.display()
        );
        files
    }
}
