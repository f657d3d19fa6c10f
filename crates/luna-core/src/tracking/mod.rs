//! Tracking vocabularies, logged entries and sample fixtures.

mod category;
mod entry;
mod fixtures;

pub use category::{capitalize, parse_category, Categorical, Category, Energy, MedicationType, Mood};
pub use entry::{parse_date, parse_time, MedicationEntry, MoodEntry, TIME_FORMAT};
pub use fixtures::{mock_medication_entries, mock_mood_entries};
