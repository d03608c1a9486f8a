use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base unit used when a caller doesn't name one
pub const DEFAULT_UNIT: &str = "in";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub units: UnitsConfig,

    // Font and resolution settings read by the unit table
    #[serde(flatten)]
    pub rc: RcSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnitsConfig {
    #[serde(default = "default_unit")]
    pub default: String,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            default: default_unit(),
        }
    }
}

/// Settings the font-relative and pixel units depend on
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RcSettings {
    #[serde(default)]
    pub font: FontConfig,

    #[serde(default)]
    pub dpi: DpiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontConfig {
    /// Base font size in points
    #[serde(default = "default_font_size")]
    pub size: f64,

    /// Title font size, in points or as a scale keyword such as "large"
    #[serde(default = "default_title_size")]
    pub title_size: FontSize,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: default_font_size(),
            title_size: default_title_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DpiConfig {
    /// Resolution on screen
    #[serde(default = "default_figure_dpi")]
    pub figure: Dpi,

    /// Resolution of saved figures
    #[serde(default = "default_savefig_dpi")]
    pub savefig: Dpi,
}

impl Default for DpiConfig {
    fn default() -> Self {
        Self {
            figure: default_figure_dpi(),
            savefig: default_savefig_dpi(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FontSize {
    Points(f64),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Dpi {
    Value(f64),
    // Placeholder like "figure", meaning "whatever the figure uses"
    Symbolic(String),
}

impl Dpi {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Dpi::Value(v) => Some(*v),
            Dpi::Symbolic(_) => None,
        }
    }
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_font_size() -> f64 {
    10.0
}

fn default_title_size() -> FontSize {
    FontSize::Named("large".to_string())
}

fn default_figure_dpi() -> Dpi {
    Dpi::Value(90.0)
}

fn default_savefig_dpi() -> Dpi {
    Dpi::Value(300.0)
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
