//! Form state behind the "Log Mood & Energy" dialog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tracking::{Energy, Mood, MoodEntry};

/// Editable state of a mood/energy check-in before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDraft {
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy: Energy,
    pub notes: String,
}

impl MoodDraft {
    pub const DEFAULT_MOOD: Mood = Mood::Happy;
    pub const DEFAULT_ENERGY: Energy = Energy::Normal;

    /// Fresh form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            mood: Self::DEFAULT_MOOD,
            energy: Self::DEFAULT_ENERGY,
            notes: String::new(),
        }
    }

    /// Build the entry and reset the form for the next check-in.
    ///
    /// Whitespace-only notes are dropped.
    pub fn submit(&mut self, today: NaiveDate) -> MoodEntry {
        let notes = std::mem::take(&mut self.notes);
        let entry = MoodEntry {
            date: self.date,
            mood: self.mood.into(),
            energy: self.energy.into(),
            notes: (!notes.trim().is_empty()).then_some(notes),
        };
        *self = Self::new(today);
        entry
    }
}
