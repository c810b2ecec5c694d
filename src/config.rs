//! Chart configuration, loadable from `trazar.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level trazar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrazarConfig {
    /// Configuration file version
    pub version: String,

    /// Color theme ("light" or "dark")
    pub theme: String,

    /// Boxplot chart settings
    pub boxplot: ChartConfig,

    /// Grouped bar chart settings
    pub bars: ChartConfig,

    /// Time-series line chart settings
    pub line: ChartConfig,
}

impl Default for TrazarConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            theme: "light".to_string(),
            boxplot: ChartConfig {
                width: 760.0,
                height: 420.0,
                margin: Margin {
                    top: 24.0,
                    right: 24.0,
                    bottom: 48.0,
                    left: 60.0,
                },
                x_title: "Age Group".to_string(),
                y_title: "Number of Likes".to_string(),
            },
            bars: ChartConfig {
                width: 820.0,
                height: 440.0,
                margin: Margin {
                    top: 24.0,
                    right: 24.0,
                    bottom: 58.0,
                    left: 60.0,
                },
                x_title: "Platform".to_string(),
                y_title: "Average Likes".to_string(),
            },
            line: ChartConfig {
                width: 820.0,
                height: 380.0,
                margin: Margin {
                    top: 24.0,
                    right: 24.0,
                    bottom: 60.0,
                    left: 60.0,
                },
                x_title: "Date".to_string(),
                y_title: "Average Likes".to_string(),
            },
        }
    }
}

impl TrazarConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load from a file when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Dimensions and axis titles for one chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Outer width in pixels
    pub width: f64,

    /// Outer height in pixels
    pub height: f64,

    /// Margins around the plot area
    pub margin: Margin,

    /// X-axis title
    pub x_title: String,

    /// Y-axis title
    pub y_title: String,
}

impl ChartConfig {
    /// Plot-area width (outer width minus horizontal margins)
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Plot-area height (outer height minus vertical margins)
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Margins around the plot area, in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}
