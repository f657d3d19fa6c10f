//! Mood/energy trend: scoring, series building and chart metadata.
//!
//! The pipeline is pure and allocation-only. [`build_series`] maps each
//! logged check-in to a [`ScoredPoint`] and orders the result by date, ready
//! for a line chart with one series for mood and one for energy.

mod chart;
mod score;
mod series;

pub use chart::{
    axis_ticks, AxisTick, SeriesStyle, TrendChart, DEFAULT_BAR_WIDTH, ENERGY_SERIES, MOOD_SERIES,
    TICK_POSITIONS, Y_DOMAIN,
};
pub use score::{
    band_label, display_label, score_category, score_energy, score_mood, Band, Scored, MAX_SCORE,
    NEUTRAL_SCORE,
};
pub use series::{
    build_series, build_series_with_format, format_date, ScoredPoint, DEFAULT_DATE_FORMAT,
};
