//! Application configuration loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration. Command-line flags are applied on top by the binary.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::themes::parse_hex_color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 760.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"warn,tip_core=debug"`.
    pub level: String,
    pub stdout: bool,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stdout: true,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Accent color as `#rrggbb` or `#rrggbbaa`.
    pub accent: Option<String>,
}

impl AppConfig {
    /// Loads configuration from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(self.window.width.is_finite() && self.window.width > 0.0) {
            errors.push(format!("window width must be positive, got {}", self.window.width));
        }
        if !(self.window.height.is_finite() && self.window.height > 0.0) {
            errors.push(format!(
                "window height must be positive, got {}",
                self.window.height
            ));
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            errors.push(format!("log level '{}': {e}", self.logging.level));
        }

        if let Some(accent) = &self.theme.accent {
            if let Err(e) = parse_hex_color(accent) {
                errors.push(e.to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl fmt::Display for AppConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Window:     {} x {}",
            self.window.width, self.window.height
        )?;
        writeln!(f, "Log level:  {}", self.logging.level)?;
        writeln!(f, "Log stdout: {}", self.logging.stdout)?;
        writeln!(
            f,
            "Log file:   {}",
            self.logging
                .file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "—".to_string())
        )?;
        write!(
            f,
            "Accent:     {}",
            self.theme.accent.as_deref().unwrap_or("—")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.stdout);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("[window]\ndepth = 3.0\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_window_is_invalid() {
        let err = AppConfig::from_toml_str("[window]\nwidth = 0.0\nheight = -1.0\n").unwrap_err();

        match err {
            ConfigError::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn bad_accent_is_invalid() {
        let err = AppConfig::from_toml_str("[theme]\naccent = \"blue\"\n").unwrap_err();

        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn unreadable_path_reports_file() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();

        assert!(err.to_string().contains("here.toml"));
    }
}
