//! End-to-end tests: CSV fixtures on disk through to SVG documents.

use std::fs;
use tempfile::TempDir;
use trazar::cli::{run_all, run_chart, ChartKind};
use trazar::TrazarConfig;

fn write_fixtures(dir: &TempDir) {
    fs::write(
        dir.path().join("socialMedia.csv"),
        "AgeGroup,Likes\n\
         18-24,120\n\
         18-24,88\n\
         18-24,150\n\
         25-34,60\n\
         25-34,95\n\
         35-44,40\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("socialMediaAvg.csv"),
        "Platform,PostType,AvgLikes\n\
         X,video,92.5\n\
         X,image,45\n\
         X,link,12\n\
         TikTok,video,140\n\
         TikTok,image,71\n\
         TikTok,link,18\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("socialMediaTime.csv"),
        "Date,AvgLikes\n\
         3/1/2024,50\n\
         3/2/2024,64\n\
         3/3/2024,58\n\
         3/4/2024,80\n\
         3/5/2024,73\n\
         3/6/2024,91\n\
         3/7/2024,85\n",
    )
    .unwrap();
}

#[test]
fn all_three_charts_render_from_fixtures() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    let results = run_all(dir.path(), dir.path(), &TrazarConfig::default());
    assert!(results.iter().all(|(_, r)| r.is_ok()));

    let boxplot = fs::read_to_string(dir.path().join("boxplot.svg")).unwrap();
    assert!(boxplot.contains("viewBox=\"0 0 760 420\""));
    assert!(boxplot.contains("18-24"));
    assert!(boxplot.contains("35-44"));

    let bars = fs::read_to_string(dir.path().join("barplot.svg")).unwrap();
    assert!(bars.contains("TikTok"));
    // 6 bars + 3 legend swatches + background
    assert_eq!(bars.matches("<rect").count(), 10);

    let line = fs::read_to_string(dir.path().join("lineplot.svg")).unwrap();
    assert_eq!(line.matches("<circle").count(), 7);
    assert!(line.contains(">3/1<"));
}

#[test]
fn missing_input_fails_only_that_job() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    fs::remove_file(dir.path().join("socialMediaTime.csv")).unwrap();

    let results = run_all(dir.path(), dir.path(), &TrazarConfig::default());
    let failures: Vec<ChartKind> = results
        .iter()
        .filter(|(_, r)| r.is_err())
        .map(|(k, _)| *k)
        .collect();

    assert_eq!(failures, vec![ChartKind::Line]);
    assert!(dir.path().join("boxplot.svg").exists());
    assert!(dir.path().join("barplot.svg").exists());
    assert!(!dir.path().join("lineplot.svg").exists());
}

#[test]
fn header_only_csv_renders_empty_chart() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("socialMedia.csv");
    let output = dir.path().join("boxplot.svg");
    fs::write(&input, "AgeGroup,Likes\n").unwrap();

    run_chart(
        ChartKind::Boxplot,
        &input,
        &output,
        &TrazarConfig::default(),
    )
    .unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    // Axes and titles render, but no data shapes
    assert!(svg.contains("Age Group"));
    assert_eq!(svg.matches("<rect").count(), 1);
}

#[test]
fn single_day_series_renders_without_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("socialMediaTime.csv");
    let output = dir.path().join("lineplot.svg");
    fs::write(&input, "Date,AvgLikes\n3/1/2024,50\n").unwrap();

    run_chart(ChartKind::Line, &input, &output, &TrazarConfig::default()).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains("<path"));
}

#[test]
fn dark_theme_config_changes_palette() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);

    let config_path = dir.path().join("trazar.toml");
    fs::write(&config_path, "theme = \"dark\"\n").unwrap();
    let config = TrazarConfig::load(&config_path).unwrap();

    let output = dir.path().join("boxplot.svg");
    run_chart(
        ChartKind::Boxplot,
        &dir.path().join("socialMedia.csv"),
        &output,
        &config,
    )
    .unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("fill=\"#121212\""));
}
