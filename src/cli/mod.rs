//! CLI command logic - extracted for testability
//!
//! Chart jobs live here as plain functions; display and argument parsing
//! stay in main.rs. Each job is load, transform, render, write, and the
//! jobs are fully independent: a failure in one never aborts the others.

use crate::config::TrazarConfig;
use crate::svg::ChartPalette;
use crate::{chart, data};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Chart Kinds
// ============================================================================

/// The three chart pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Boxplot,
    Bars,
    Line,
}

impl ChartKind {
    /// All kinds, in render order
    pub fn all() -> [ChartKind; 3] {
        [Self::Boxplot, Self::Bars, Self::Line]
    }

    /// Conventional input file name for this chart
    pub fn default_input(self) -> &'static str {
        match self {
            Self::Boxplot => "socialMedia.csv",
            Self::Bars => "socialMediaAvg.csv",
            Self::Line => "socialMediaTime.csv",
        }
    }

    /// Conventional output file name for this chart
    pub fn default_output(self) -> &'static str {
        match self {
            Self::Boxplot => "boxplot.svg",
            Self::Bars => "barplot.svg",
            Self::Line => "lineplot.svg",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boxplot => "boxplot",
            Self::Bars => "bars",
            Self::Line => "line",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Chart Jobs
// ============================================================================

/// Run one chart job: load the CSV, render, write the SVG
pub fn run_chart(
    kind: ChartKind,
    input: &Path,
    output: &Path,
    config: &TrazarConfig,
) -> Result<()> {
    let palette = ChartPalette::for_theme(&config.theme);

    let svg = match kind {
        ChartKind::Boxplot => {
            let rows = data::load_likes(input)?;
            info!(rows = rows.len(), "rendering boxplot");
            chart::boxplot::render(&rows, &config.boxplot, &palette)
        }
        ChartKind::Bars => {
            let rows = data::load_avg_likes(input)?;
            info!(rows = rows.len(), "rendering grouped bars");
            chart::bars::render(&rows, &config.bars, &palette)
        }
        ChartKind::Line => {
            let rows = data::load_daily_likes(input)?;
            info!(rows = rows.len(), "rendering line chart");
            chart::line::render(&rows, &config.line, &palette)
        }
    };

    std::fs::write(output, svg)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

/// Run all three jobs over a data directory. Failed jobs are logged and
/// reported; the rest still render since each writes a disjoint output.
pub fn run_all(
    data_dir: &Path,
    out_dir: &Path,
    config: &TrazarConfig,
) -> Vec<(ChartKind, Result<PathBuf>)> {
    ChartKind::all()
        .into_iter()
        .map(|kind| {
            let input = data_dir.join(kind.default_input());
            let output = out_dir.join(kind.default_output());
            let result = run_chart(kind, &input, &output, config).map(|()| output);
            if let Err(err) = &result {
                warn!(chart = %kind, "chart job failed: {:#}", err);
            }
            (kind, result)
        })
        .collect()
}
