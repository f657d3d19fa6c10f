//! # Luna Core Library
//!
//! This library provides the logic behind Luna's cycle tracking dialogs:
//! logging mood/energy check-ins and medication intakes, and turning the
//! check-ins into a mood/energy trend chart. The `luna` CLI is a thin layer
//! over the same library.
//!
//! ## Architecture
//!
//! - **Tracking**: closed vocabularies (mood, energy, medication type) and the
//!   records logged against them
//! - **Trend**: categorical-to-numeric scoring and the date-ordered series a
//!   line chart consumes
//! - **Journal**: form drafts and an in-memory session log
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`build_series`]: Scores and sorts check-ins for charting
//! - [`TrendChart`]: Axis, series styles and a text renderer
//! - [`Journal`]: Session log of mood and medication entries
//! - [`Config`]: Application configuration management

pub mod error;
pub mod journal;
pub mod storage;
pub mod tracking;
pub mod trend;

pub use error::{ConfigError, CoreError, ValidationError};
pub use journal::{medication_history, Journal, MedicationDraft, MedicationHistoryRow, MoodDraft};
pub use storage::Config;
pub use tracking::{Categorical, Category, Energy, MedicationEntry, MedicationType, Mood, MoodEntry};
pub use trend::{
    axis_ticks, band_label, build_series, build_series_with_format, score_energy, score_mood, Band,
    ScoredPoint, TrendChart,
};
