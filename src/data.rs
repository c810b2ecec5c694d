//! CSV Data Loading
//!
//! Typed row structs for the three input files. Column names are the
//! contract: `AgeGroup,Likes`, `Platform,PostType,AvgLikes`, and
//! `Date,AvgLikes` with dates in `M/D/YYYY` form.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// One post's like count, keyed by audience age group
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LikesRow {
    #[serde(rename = "AgeGroup")]
    pub age_group: String,
    #[serde(rename = "Likes")]
    pub likes: f64,
}

/// Average likes per platform and post type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvgLikesRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "PostType")]
    pub post_type: String,
    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

/// Average likes for one calendar day
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyLikesRow {
    #[serde(rename = "Date", deserialize_with = "deserialize_mdy")]
    pub date: NaiveDate,
    #[serde(rename = "AvgLikes")]
    pub avg_likes: f64,
}

/// Parse `M/D/YYYY` dates (leading zeros optional)
fn deserialize_mdy<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(raw.trim(), "%m/%d/%Y").map_err(serde::de::Error::custom)
}

/// Load boxplot input rows
pub fn load_likes(path: &Path) -> Result<Vec<LikesRow>> {
    read_rows(path)
}

/// Load grouped-bar input rows
pub fn load_avg_likes(path: &Path) -> Result<Vec<AvgLikesRow>> {
    read_rows(path)
}

/// Load time-series input rows, in file order
pub fn load_daily_likes(path: &Path) -> Result<Vec<DailyLikesRow>> {
    read_rows(path)
}

/// Read and deserialize every record of a CSV file. A header-only file
/// yields an empty vector; malformed fields are an error with row context.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let row: T =
            record.with_context(|| format!("bad record at {}:{}", path.display(), i + 2))?;
        rows.push(row);
    }
    Ok(rows)
}
