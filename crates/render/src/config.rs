//! Display configuration.
//!
//! Presentation settings only. The program schedule is fixed and cannot be
//! changed from here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tenure.toml";

/// Smallest chart height that leaves room for the timeline's month labels
/// and axis title, with 40px left for the bars.
pub const MIN_CHART_HEIGHT: u32 = 120;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// Value out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// How the page looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Page title
    pub title: String,

    /// Icon shown next to the title
    pub icon: String,

    /// Closing line under the timeline
    pub footer: String,

    /// Colour of completed slices and bars
    pub completed_color: String,

    /// Colour of pending slices and bars
    pub pending_color: String,

    /// Inner radius of the donut as a fraction of the outer radius
    pub donut_hole: f64,

    /// Chart height in pixels
    pub chart_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "How much of your program is behind you?".to_string(),
            icon: "🎓".to_string(),
            footer: "Keep going, you can do it".to_string(),
            completed_color: "royalblue".to_string(),
            pending_color: "lightgray".to_string(),
            donut_hole: 0.3,
            chart_height: 300,
        }
    }
}

impl DisplayConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: DisplayConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_required(path)
    }

    /// Load configuration from `path`, which must exist.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&contents, path)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.donut_hole) {
            return Err(ConfigError::Invalid {
                field: "donut_hole",
                reason: format!("{} is not in [0, 1)", self.donut_hole),
            });
        }
        if self.chart_height < MIN_CHART_HEIGHT {
            return Err(ConfigError::Invalid {
                field: "chart_height",
                reason: format!("{} is below the minimum of {MIN_CHART_HEIGHT}", self.chart_height),
            });
        }
        Ok(())
    }
}
