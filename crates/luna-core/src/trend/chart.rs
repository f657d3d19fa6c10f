//! Chart metadata and a plain-text renderer for the mood/energy trend.

use serde::Serialize;

use super::score::{band_label, MAX_SCORE};
use super::series::ScoredPoint;
use crate::storage::MAX_BAR_WIDTH;

/// Y-axis domain of the trend chart.
pub const Y_DOMAIN: (u8, u8) = (0, MAX_SCORE);

/// Fixed y-axis tick positions.
pub const TICK_POSITIONS: [u8; 6] = [0, 2, 4, 6, 8, 10];

pub const DEFAULT_BAR_WIDTH: usize = 30;

/// A labelled y-axis tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    pub value: u8,
    pub label: &'static str,
}

/// Y-axis ticks labelled with the band of each position.
pub fn axis_ticks() -> Vec<AxisTick> {
    TICK_POSITIONS
        .iter()
        .map(|&value| AxisTick {
            value,
            label: band_label(value),
        })
        .collect()
}

/// Presentation of one line series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    /// Field of [`ScoredPoint`] plotted by this series
    pub key: &'static str,
    pub name: &'static str,
    /// Stroke color as hex
    pub color: &'static str,
}

pub const MOOD_SERIES: SeriesStyle = SeriesStyle {
    key: "mood_score",
    name: "Mood",
    color: "#D946EF",
};

pub const ENERGY_SERIES: SeriesStyle = SeriesStyle {
    key: "energy_score",
    name: "Energy",
    color: "#0EA5E9",
};

impl ScoredPoint {
    /// Tooltip lines: the date, then each series with its label.
    pub fn tooltip(&self) -> Vec<String> {
        vec![
            self.date_label.clone(),
            format!("{}: {}", MOOD_SERIES.name, self.mood_label),
            format!("{}: {}", ENERGY_SERIES.name, self.energy_label),
        ]
    }
}

/// Everything a charting surface needs to draw the trend.
#[derive(Debug, Clone, Serialize)]
pub struct TrendChart {
    pub points: Vec<ScoredPoint>,
    pub y_domain: (u8, u8),
    pub ticks: Vec<AxisTick>,
    pub series: Vec<SeriesStyle>,
    #[serde(skip)]
    bar_width: usize,
}

impl TrendChart {
    pub fn new(points: Vec<ScoredPoint>) -> Self {
        Self {
            points,
            y_domain: Y_DOMAIN,
            ticks: axis_ticks(),
            series: vec![MOOD_SERIES, ENERGY_SERIES],
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Width in characters of a full-scale bar, clamped to `1..=MAX_BAR_WIDTH`.
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.clamp(1, MAX_BAR_WIDTH as usize);
        self
    }

    fn bar(&self, score: u8) -> String {
        let filled = usize::from(score.min(MAX_SCORE)) * self.bar_width / usize::from(MAX_SCORE);
        format!(
            "{}{}",
            "█".repeat(filled),
            " ".repeat(self.bar_width - filled)
        )
    }

    /// Render as a text chart, two rows (mood, energy) per point.
    pub fn render_ascii(&self) -> String {
        let rule = "─".repeat(self.bar_width + 32);
        let mut output = String::from("\nMood & Energy Trend:\n");
        output.push_str(&rule);
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No entries logged yet.\n");
        }

        let date_width = self
            .points
            .iter()
            .map(|p| p.date_label.chars().count())
            .max()
            .unwrap_or(0);

        for point in &self.points {
            output.push_str(&format!(
                "{:<dw$} {:<6} {} {:>2} {} ({})\n",
                point.date_label,
                MOOD_SERIES.name,
                self.bar(point.mood_score),
                point.mood_score,
                point.mood_band,
                point.mood_label,
                dw = date_width,
            ));
            output.push_str(&format!(
                "{:<dw$} {:<6} {} {:>2} {} ({})\n",
                "",
                ENERGY_SERIES.name,
                self.bar(point.energy_score),
                point.energy_score,
                point.energy_band,
                point.energy_label,
                dw = date_width,
            ));
        }

        output.push_str(&rule);
        output.push('\n');
        let scale: Vec<String> = self
            .ticks
            .iter()
            .map(|t| format!("{} {}", t.value, t.label))
            .collect();
        output.push_str(&format!("Scale: {}\n", scale.join(" · ")));
        output
    }
}
