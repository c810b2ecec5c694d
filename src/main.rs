use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trazar::cli::{self, ChartKind};
use trazar::TrazarConfig;

#[derive(Parser)]
#[command(
    name = "trazar",
    about = "Render static SVG charts from social engagement CSV exports",
    version
)]
struct Cli {
    /// Path to a trazar.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress status output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the likes-by-age-group boxplot
    Boxplot {
        /// Input CSV (AgeGroup,Likes)
        #[arg(long, default_value = "socialMedia.csv")]
        input: PathBuf,
        /// Output SVG path
        #[arg(long, default_value = "boxplot.svg")]
        output: PathBuf,
    },
    /// Render the average-likes grouped bar chart
    Bars {
        /// Input CSV (Platform,PostType,AvgLikes)
        #[arg(long, default_value = "socialMediaAvg.csv")]
        input: PathBuf,
        /// Output SVG path
        #[arg(long, default_value = "barplot.svg")]
        output: PathBuf,
    },
    /// Render the likes-over-time line chart
    Line {
        /// Input CSV (Date,AvgLikes), dates as M/D/YYYY
        #[arg(long, default_value = "socialMediaTime.csv")]
        input: PathBuf,
        /// Output SVG path
        #[arg(long, default_value = "lineplot.svg")]
        output: PathBuf,
    },
    /// Render all three charts from a data directory
    All {
        /// Directory holding the three conventional CSV files
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Directory for the SVG outputs
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Cli::parse();
    let config = TrazarConfig::load_or_default(args.config.as_deref())?;

    match args.command {
        Command::Boxplot { input, output } => {
            cli::run_chart(ChartKind::Boxplot, &input, &output, &config)?;
            report_written(ChartKind::Boxplot, &output, args.quiet);
        }
        Command::Bars { input, output } => {
            cli::run_chart(ChartKind::Bars, &input, &output, &config)?;
            report_written(ChartKind::Bars, &output, args.quiet);
        }
        Command::Line { input, output } => {
            cli::run_chart(ChartKind::Line, &input, &output, &config)?;
            report_written(ChartKind::Line, &output, args.quiet);
        }
        Command::All { data_dir, out_dir } => {
            let results = cli::run_all(&data_dir, &out_dir, &config);
            let mut failed = 0;

            for (kind, result) in &results {
                match result {
                    Ok(path) => report_written(*kind, path, args.quiet),
                    Err(err) => {
                        failed += 1;
                        if !args.quiet {
                            eprintln!("  {} {}: {:#}", "✗".bright_red(), kind, err);
                        }
                    }
                }
            }

            if failed == results.len() {
                anyhow::bail!("all {} chart jobs failed", failed);
            }
        }
    }

    Ok(())
}

fn report_written(kind: ChartKind, path: &std::path::Path, quiet: bool) {
    if !quiet {
        println!(
            "  {} {} -> {}",
            "✓".bright_green(),
            kind.to_string().bold(),
            path.display()
        );
    }
}
