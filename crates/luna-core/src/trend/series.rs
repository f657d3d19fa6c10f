//! Turns logged check-ins into a date-ordered series of chart points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::score::{display_label, score_energy, score_mood, Band};
use crate::tracking::MoodEntry;

/// Default x-axis label format, e.g. "May 01".
pub const DEFAULT_DATE_FORMAT: &str = "%b %d";

/// One chart point derived from a [`MoodEntry`]. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub date: NaiveDate,
    /// Date formatted for the x-axis
    pub date_label: String,
    pub mood_score: u8,
    pub energy_score: u8,
    /// Capitalised mood word, shown in the tooltip
    pub mood_label: String,
    /// Capitalised energy word, shown in the tooltip
    pub energy_label: String,
    pub mood_band: Band,
    pub energy_band: Band,
}

impl ScoredPoint {
    fn from_entry(entry: &MoodEntry, date_format: &str) -> Self {
        let mood_score = score_mood(&entry.mood);
        let energy_score = score_energy(&entry.energy);
        Self {
            date: entry.date,
            date_label: format_date(entry.date, date_format),
            mood_score,
            energy_score,
            mood_label: display_label(&entry.mood),
            energy_label: display_label(&entry.energy),
            mood_band: Band::from_score(mood_score),
            energy_band: Band::from_score(energy_score),
        }
    }
}

/// Format a date, falling back to ISO-8601 when the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Score and sort observations with the default date label format.
pub fn build_series(observations: &[MoodEntry]) -> Vec<ScoredPoint> {
    build_series_with_format(observations, DEFAULT_DATE_FORMAT)
}

/// Score every observation and sort ascending by date.
///
/// The sort is stable: observations logged for the same day keep their
/// input order. Empty input yields an empty series.
pub fn build_series_with_format(observations: &[MoodEntry], date_format: &str) -> Vec<ScoredPoint> {
    let mut points: Vec<ScoredPoint> = observations
        .iter()
        .map(|entry| ScoredPoint::from_entry(entry, date_format))
        .collect();

    points.sort_by_key(|p| p.date);

    tracing::debug!(points = points.len(), "built trend series");
    points
}
