//! Editor configuration
//!
//! Read from `~/.config/codebox/config.yaml`. Every field has a default, so a
//! partial file only overrides what it names.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::autocomplete::PopupMetrics;
use crate::gutter::GutterMetrics;
use crate::syntax::DEFAULT_BACKTRACK_LIMIT;
use crate::theme::Theme;

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces inserted for Tab
    pub indent_width: usize,
    /// Popup row height in pixels
    pub item_height: i32,
    /// Backtracking cap per highlight match attempt
    pub backtrack_limit: usize,
    pub popup: PopupMetrics,
    pub gutter: GutterMetrics,
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            item_height: 16,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
            popup: PopupMetrics::default(),
            gutter: GutterMetrics::default(),
            theme: Theme::default(),
        }
    }
}

/// Errors from reading a config file
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: serde_yaml::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "Failed to parse config at {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => {
                write!(f, "Failed to parse config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Text inserted for Tab
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
