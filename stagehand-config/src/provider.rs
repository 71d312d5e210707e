//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    error::ConfigError,
    types::StagehandConfig,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "STAGEHAND_";

/// Honoured when no API key is configured anywhere else
pub const API_KEY_FALLBACK_VAR: &str = "GEMINI_API_KEY";

/// Configuration provider using figment
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values (hardcoded)
/// 2. `GEMINI_API_KEY`, for the API key only
/// 3. Configuration files discovered under the base directory
/// 4. A file passed explicitly
/// 5. `STAGEHAND_` environment variables, `__` separating nested keys
///
/// Nothing is cached; every `load` reads the sources again.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    base_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    /// Provider that discovers files in the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that discovers files under `dir`
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
            explicit_file: None,
        }
    }

    /// Also merge `path`, above every discovered file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<StagehandConfig> {
        debug!("Loading configuration from all sources");

        let config: StagehandConfig = self.build_figment()?.extract()?;
        config.validate()?;

        info!(
            model = %config.ai.model,
            window_days = config.calendar.window_days,
            api_key = config.ai.api_key.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(StagehandConfig::default()))
            .merge(self.load_key_fallback())
            .merge(self.load_discovered_config_files()?);

        if let Some(path) = &self.explicit_file {
            figment = figment.merge(Self::load_explicit_file(path)?);
        }

        Ok(figment.merge(self.load_env_vars()))
    }

    fn base_dir(&self) -> ConfigResult<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                std::env::current_dir().map_err(|source| ConfigError::CurrentDirectory { source })
            }
        }
    }

    fn load_key_fallback(&self) -> Figment {
        Figment::from(
            Env::raw()
                .only(&[API_KEY_FALLBACK_VAR])
                .map(|_| "ai.api_key".into()),
        )
    }

    fn load_discovered_config_files(&self) -> ConfigResult<Figment> {
        let discovery = FileDiscovery::new(self.base_dir()?);

        let mut figment = Figment::new();
        for config_file in discovery.discover_all() {
            trace!(
                "Loading config file: {} ({:?})",
                config_file.path.display(),
                config_file.format
            );
            figment = figment.merge(Self::load_config_file(&config_file));
        }
        Ok(figment)
    }

    fn load_explicit_file(path: &Path) -> ConfigResult<Figment> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            format: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;

        Ok(Self::load_config_file(&ConfigFile {
            path: path.to_path_buf(),
            format,
        }))
    }

    /// Load a single configuration file based on its format
    fn load_config_file(config_file: &ConfigFile) -> Figment {
        let path = &config_file.path;

        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    fn load_env_vars(&self) -> Figment {
        Figment::from(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::CONFIG_DIR;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        for var in [
            API_KEY_FALLBACK_VAR,
            "STAGEHAND_AI__API_KEY",
            "STAGEHAND_AI__MODEL",
            "STAGEHAND_CALENDAR__WINDOW_DAYS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        clear_env();
        let temp = TempDir::new().unwrap();

        let config = ConfigProvider::with_base_dir(temp.path()).load().unwrap();

        assert_eq!(config, StagehandConfig::default());
    }

    #[test]
    #[serial]
    fn test_toml_file_overrides_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("stagehand.toml"),
            r#"
[artist]
name = "Luna Vega"

[calendar]
window_days = 14
"#,
        )
        .unwrap();

        let config = ConfigProvider::with_base_dir(temp.path()).load().unwrap();

        assert_eq!(config.artist.name, "Luna Vega");
        assert_eq!(config.calendar.window_days, 14);
        // Untouched keys keep their defaults
        assert_eq!(config.artist.style, StagehandConfig::default().artist.style);
    }

    #[test]
    #[serial]
    fn test_project_dir_overrides_root_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(temp.path().join("stagehand.toml"), "[ai]\nmodel = \"from-toml\"\n").unwrap();
        fs::write(dir.join("config.yaml"), "ai:\n  model: from-yaml\n").unwrap();

        let config = ConfigProvider::with_base_dir(temp.path()).load().unwrap();

        assert_eq!(config.ai.model, "from-yaml");
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        clear_env();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("stagehand.toml"), "[ai]\nmodel = \"from-toml\"\n").unwrap();
        std::env::set_var("STAGEHAND_AI__MODEL", "from-env");
        std::env::set_var("STAGEHAND_CALENDAR__WINDOW_DAYS", "10");

        let config = ConfigProvider::with_base_dir(temp.path()).load();
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.ai.model, "from-env");
        assert_eq!(config.calendar.window_days, 10);
    }

    #[test]
    #[serial]
    fn test_api_key_fallback_has_lowest_precedence() {
        clear_env();
        let temp = TempDir::new().unwrap();
        std::env::set_var(API_KEY_FALLBACK_VAR, "fallback-key");

        let fallback = ConfigProvider::with_base_dir(temp.path()).load().unwrap();
        std::env::set_var("STAGEHAND_AI__API_KEY", "primary-key");
        let primary = ConfigProvider::with_base_dir(temp.path()).load().unwrap();
        clear_env();

        assert_eq!(fallback.ai.api_key.as_deref(), Some("fallback-key"));
        assert_eq!(primary.ai.api_key.as_deref(), Some("primary-key"));
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        clear_env();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("stagehand.toml"), "[calendar]\nwindow_days = 90\n").unwrap();

        let result = ConfigProvider::with_base_dir(temp.path()).load();

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    #[serial]
    fn test_explicit_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tour.json");
        fs::write(&path, r#"{ "artist": { "market": "Mexico City" } }"#).unwrap();

        let config = ConfigProvider::with_base_dir(temp.path())
            .with_file(&path)
            .load()
            .unwrap();
        assert_eq!(config.artist.market, "Mexico City");

        let missing = ConfigProvider::with_base_dir(temp.path())
            .with_file(temp.path().join("nope.toml"))
            .load();
        assert!(matches!(missing, Err(ConfigError::FileNotFound { .. })));

        let ini = temp.path().join("settings.ini");
        fs::write(&ini, "").unwrap();
        let unsupported = ConfigProvider::with_base_dir(temp.path()).with_file(&ini).load();
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat { .. })));
    }
}
