//! User configuration
//!
//! Optional TOML file at `<config dir>/archer/config.toml`. Only the shell
//! is configurable (theme, frame rate, logging); panel timing is fixed.
//! Command-line flags override file values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::Args;
use crate::tui::themes::DEFAULT_THEME;

pub const DEFAULT_FPS: u16 = 30;
pub const MAX_FPS: u16 = 120;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("fps must be between 1 and {max}, got {0}", max = MAX_FPS)]
    InvalidFps(u16),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub theme: Option<String>,
    pub fps: Option<u16>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("archer").join("config.toml"))
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// default location if a file is there, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Command-line flags win over file values
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(theme) = &args.theme {
            self.theme = Some(theme.clone());
        }
        if let Some(fps) = args.fps {
            self.fps = Some(fps);
        }
        if let Some(level) = &args.log_level {
            self.log_level = Some(level.clone());
        }
        if let Some(file) = &args.log_file {
            self.log_file = Some(file.clone());
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.fps {
            Some(fps) if fps == 0 || fps > MAX_FPS => Err(ConfigError::InvalidFps(fps)),
            _ => Ok(()),
        }
    }

    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    pub fn fps(&self) -> u16 {
        self.fps.unwrap_or(DEFAULT_FPS)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme(), "archer");
        assert_eq!(config.fps(), 30);
        assert_eq!(config.log_level(), "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_file() {
        let file = write_config(
            r#"
            theme = "phosphor"
            fps = 60
            log_level = "debug"
            log_file = "/tmp/archer.log"
            "#,
        );
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.theme(), "phosphor");
        assert_eq!(config.fps(), 60);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/archer.log")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("theme = \"terminal\"\n");
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.theme(), "terminal");
        assert_eq!(config.fps(), DEFAULT_FPS);
    }

    #[test]
    fn test_malformed_file_names_path() {
        let file = write_config("fps = \"fast\"\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("cycle_duration = 1000\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_args_override_file() {
        let mut config = AppConfig {
            theme: Some("phosphor".into()),
            fps: Some(60),
            ..AppConfig::default()
        };
        let args = Args::try_parse_from(["archer", "--theme", "terminal"]).unwrap();
        config.apply_args(&args);
        assert_eq!(config.theme(), "terminal");
        assert_eq!(config.fps(), 60);
    }

    #[test]
    fn test_fps_validated() {
        let config = AppConfig {
            fps: Some(0),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFps(0))));
        assert!(AppConfig::default().validate().is_ok());
    }
}
