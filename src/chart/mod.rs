//! Chart Pipelines
//!
//! Three independent pipelines, each a pure function from rows and
//! configuration to an SVG document string:
//! - `boxplot`: likes per age group, five-number summaries
//! - `bars`: average likes per platform, sub-grouped by post type
//! - `line`: average likes over time, natural-spline smoothed
//!
//! Drawing order within a chart is axes, then titles, then data shapes,
//! then (bars only) the legend.

pub mod axis;
pub mod bars;
pub mod boxplot;
pub mod line;
