//! trazar: static SVG charts from social engagement CSV exports.
//!
//! The library half is a pure pipeline: CSV rows are loaded into typed
//! structs (`data`), partitioned and summarized (`stats`), mapped to pixel
//! space (`scale`), and emitted as shape descriptors rendered by the SVG
//! builder (`svg`). The `chart` module wires these into the three chart
//! pipelines; `cli` adds the file-level jobs the binary runs.

pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod scale;
pub mod stats;
pub mod svg;

// Re-export key types for convenience
pub use config::{ChartConfig, Margin, TrazarConfig};
pub use data::{AvgLikesRow, DailyLikesRow, LikesRow};
pub use scale::{BandScale, LinearScale, TimeScale};
pub use stats::{group_by, quantile, FiveNumberSummary};
pub use svg::{ChartPalette, Color, SvgBuilder};
