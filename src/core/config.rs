use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encoders::{Backend, Codec};

/// Which encoder implementation to run.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendPreference {
    /// Fastest backend this CPU supports.
    #[default]
    Auto,
    /// Always the portable scalar codec.
    Scalar,
    /// AVX2 if available, otherwise scalar with a warning.
    Avx2,
}

impl BackendPreference {
    pub fn name(self) -> &'static str {
        match self {
            BackendPreference::Auto => "auto",
            BackendPreference::Scalar => "scalar",
            BackendPreference::Avx2 => "avx2",
        }
    }
}

/// Effective settings after all configuration layers are applied.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Encoder implementation
    pub backend: BackendPreference,
    /// Line width for encoded output in characters (0 = single line)
    pub wrap: usize,
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            backend: BackendPreference::Auto,
            wrap: 0,
            max_size: 100 * 1024 * 1024,
        }
    }
}

/// A configuration layer as written in TOML; absent keys leave the layer
/// below untouched.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    settings: SettingsLayer,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsLayer {
    backend: Option<BackendPreference>,
    wrap: Option<usize>,
    max_size: Option<usize>,
}

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RcnbConfig {
    pub settings: Settings,
}

impl RcnbConfig {
    /// Parses a configuration from TOML content, on top of the defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config = RcnbConfig::default();
        config.merge_toml(content)?;
        Ok(config)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../config.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Applies the keys present in `content` over the current values.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), toml::de::Error> {
        let layer: ConfigFile = toml::from_str(content)?;
        let SettingsLayer {
            backend,
            wrap,
            max_size,
        } = layer.settings;

        if let Some(backend) = backend {
            self.settings.backend = backend;
        }
        if let Some(wrap) = wrap {
            self.settings.wrap = wrap;
        }
        if let Some(max_size) = max_size {
            self.settings.max_size = max_size;
        }
        Ok(())
    }

    /// Applies a configuration file over the current values.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        self.merge_toml(&content)?;
        Ok(())
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/rcnb/config.toml` (user overrides)
    /// 3. `./rcnb.toml` (project-local overrides)
    ///
    /// Later layers override earlier ones key by key. A layer that fails to
    /// load is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("rcnb").join("config.toml");
            if user_config_path.exists()
                && let Err(e) = config.merge_file(&user_config_path)
            {
                warn!(
                    "Failed to load user config from {:?}: {}",
                    user_config_path, e
                );
            }
        }

        let local_config_path = Path::new("rcnb.toml");
        if local_config_path.exists()
            && let Err(e) = config.merge_file(local_config_path)
        {
            warn!(
                "Failed to load local config from {:?}: {}",
                local_config_path, e
            );
        }

        Ok(config)
    }

    /// The codec the configured backend preference resolves to on this CPU.
    pub fn codec(&self) -> Codec {
        match self.settings.backend {
            BackendPreference::Auto => Codec::new(),
            BackendPreference::Scalar => Codec::scalar(),
            BackendPreference::Avx2 => Codec::with_backend(Backend::Avx2).unwrap_or_else(|| {
                warn!("AVX2 backend requested but not supported, using scalar");
                Codec::scalar()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = RcnbConfig::load_default().unwrap();
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = RcnbConfig::from_toml("").unwrap();
        assert_eq!(config, RcnbConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let mut config = RcnbConfig::from_toml("[settings]\nwrap = 76\n").unwrap();
        assert_eq!(config.settings.wrap, 76);
        assert_eq!(config.settings.backend, BackendPreference::Auto);

        config
            .merge_toml("[settings]\nbackend = \"scalar\"\n")
            .unwrap();
        assert_eq!(config.settings.wrap, 76);
        assert_eq!(config.settings.backend, BackendPreference::Scalar);
        assert_eq!(config.codec(), Codec::scalar());
    }

    #[test]
    fn test_invalid_backend_rejected() {
        assert!(RcnbConfig::from_toml("[settings]\nbackend = \"neon\"\n").is_err());
    }

    #[test]
    fn test_avx2_preference_falls_back() {
        let config = RcnbConfig::from_toml("[settings]\nbackend = \"avx2\"\n").unwrap();
        let codec = config.codec();
        assert!(codec.backend().is_supported());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_string(&RcnbConfig::default()).unwrap();
        assert!(json.contains("\"backend\":\"auto\""));
        assert!(json.contains("\"wrap\":0"));
    }
}
