use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use statefmt_engine::DecodeErrorMode;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "STATEFMT_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DecodeErrors {
    /// Leave the failed block open, as older releases did
    #[default]
    Truncate,
    /// Close the failed block with a comment naming the problem
    Placeholder,
}

impl From<DecodeErrors> for DecodeErrorMode {
    fn from(value: DecodeErrors) -> Self {
        match value {
            DecodeErrors::Truncate => DecodeErrorMode::Truncate,
            DecodeErrors::Placeholder => DecodeErrorMode::Placeholder,
        }
    }
}

/// Defaults applied when the matching command line flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub color: ColorMode,
    #[serde(default)]
    pub decode_errors: DecodeErrors,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))
    }

    /// Resolve the config location:
    /// 1. STATEFMT_CONFIG environment variable
    /// 2. `statefmt/config.toml` under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("statefmt").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.decode_errors, DecodeErrors::Truncate);
    }

    #[test]
    fn test_load_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "color = \"never\"\ndecode_errors = \"placeholder\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.decode_errors, DecodeErrors::Placeholder);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "color = \"always\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(config.decode_errors, DecodeErrors::Truncate);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "color = \"sometimes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_explicit_modes() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    fn test_decode_errors_maps_to_engine_mode() {
        assert_eq!(
            DecodeErrorMode::from(DecodeErrors::Placeholder),
            DecodeErrorMode::Placeholder
        );
        assert_eq!(DecodeErrorMode::from(DecodeErrors::Truncate), DecodeErrorMode::Truncate);
    }
}
