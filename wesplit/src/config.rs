//! Configuration loaded from wesplit.toml

use miette::Diagnostic;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wesplit_ui::core::Theme;

pub const DEFAULT_CONFIG_PATH: &str = "wesplit.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("config file {} does not exist", path.display())]
    #[diagnostic(code(wesplit::config::missing), help("omit --config to run with the defaults"))]
    Missing { path: PathBuf },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(wesplit::config::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}", path.display())]
    #[diagnostic(code(wesplit::config::parse), help("see the [window], [theme] and [log] sections"))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Colour scheme selected by `[theme] mode`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Dark => Theme::dark(),
            ThemeMode::Light => Theme::light(),
        }
    }
}

/// [window] section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            title: "WeSplit".to_string(),
            width: 390,
            height: 844,
        }
    }
}

/// [theme] section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    pub mode: ThemeMode,
}

/// [log] section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directives, used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowSection,
    pub theme: ThemeSection,
    pub log: LogSection,
}

impl Config {
    /// Load `provided`, or `wesplit.toml` in the working directory if it exists
    pub fn load(provided: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), provided)
    }

    /// Like [`Config::load`], looking for `wesplit.toml` in `dir`
    pub fn load_in(dir: &Path, provided: Option<&Path>) -> Result<Self, ConfigError> {
        match provided {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => Err(ConfigError::Missing { path: path.to_path_buf() }),
            None => {
                let default = dir.join(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window.title, "WeSplit");
        assert_eq!((config.window.width, config.window.height), (390, 844));
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.log.filter, "info");
        assert_eq!(Config::parse("").unwrap(), config);
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let file = write_config("[window]\nwidth = 640\n\n[theme]\nmode = \"light\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 844);
        assert_eq!(config.window.title, "WeSplit");
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_log_filter_is_read() {
        let file = write_config("[log]\nfilter = \"wesplit=debug\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.log.filter, "wesplit=debug");
    }

    #[test]
    fn test_unknown_theme_mode_is_rejected() {
        let file = write_config("[theme]\nmode = \"sepia\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::parse("[window]\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { path: p } if p == path));
    }

    #[test]
    fn test_default_file_in_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_PATH), "[window]\ntitle = \"Split\"\n").unwrap();
        let config = Config::load_in(dir.path(), None).unwrap();
        assert_eq!(config.window.title, "Split");
        assert_eq!(config.window.width, 390);
    }

    #[test]
    fn test_empty_dir_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_in(dir.path(), None).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_path_wins_over_dir_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_PATH), "[theme]\nmode = \"light\"\n").unwrap();
        let file = write_config("[log]\nfilter = \"debug\"\n");
        let config = Config::load_in(dir.path(), Some(file.path())).unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_theme_mode_selects_palette() {
        assert_eq!(ThemeMode::Light.theme().background, Theme::light().background);
        assert_eq!(ThemeMode::Dark.theme().background, Theme::dark().background);
    }
}
