//! Logging workflow: form drafts, medication history and the session journal.
//!
//! The [`Journal`] is an in-memory record of what was logged during a
//! session. Nothing is written to disk.

mod history;
mod medication_form;
mod mood_form;

pub use history::{medication_history, MedicationHistoryRow};
pub use medication_form::MedicationDraft;
pub use mood_form::MoodDraft;

use crate::tracking::{mock_medication_entries, mock_mood_entries, MedicationEntry, MoodEntry};
use crate::trend::{build_series_with_format, ScoredPoint, DEFAULT_DATE_FORMAT};

/// Check-ins and medication intakes logged in this session.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    moods: Vec<MoodEntry>,
    medications: Vec<MedicationEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Journal pre-filled with the sample May 2023 data.
    pub fn with_fixtures() -> Self {
        Self {
            moods: mock_mood_entries(),
            medications: mock_medication_entries(),
        }
    }

    pub fn record_mood(&mut self, entry: MoodEntry) {
        tracing::debug!(date = %entry.date, mood = entry.mood.as_str(), energy = entry.energy.as_str(), "recorded mood entry");
        self.moods.push(entry);
    }

    pub fn record_medication(&mut self, entry: MedicationEntry) {
        tracing::debug!(date = %entry.date, name = %entry.name, kind = %entry.kind, "recorded medication entry");
        self.medications.push(entry);
    }

    pub fn mood_entries(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn medication_entries(&self) -> &[MedicationEntry] {
        &self.medications
    }

    /// Trend series over all recorded check-ins.
    pub fn trend(&self) -> Vec<ScoredPoint> {
        self.trend_with_format(DEFAULT_DATE_FORMAT)
    }

    pub fn trend_with_format(&self, date_format: &str) -> Vec<ScoredPoint> {
        build_series_with_format(&self.moods, date_format)
    }

    pub fn medication_history(&self) -> Vec<MedicationHistoryRow> {
        medication_history(&self.medications)
    }
}
