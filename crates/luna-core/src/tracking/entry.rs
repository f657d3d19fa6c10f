//! Logged records: one mood/energy check-in or one medication intake.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::category::{Category, Energy, MedicationType, Mood};
use crate::error::ValidationError;

/// Wire format for scheduled times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Parse an `HH:MM` time of day.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(raw.to_string()))
}

/// A single mood/energy observation for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Category<Mood>,
    pub energy: Category<Energy>,
    /// Free text, never used for scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood, energy: Energy) -> Self {
        Self {
            date,
            mood: mood.into(),
            energy: energy.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A medication or supplement intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MedicationType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    /// Recurring medication
    pub is_scheduled: bool,
    #[serde(default, with = "hhmm", skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MedicationEntry {
    /// One-off intake with no dosage or schedule.
    pub fn new(date: NaiveDate, kind: MedicationType, name: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            name: name.into(),
            dosage: None,
            is_scheduled: false,
            scheduled_time: None,
            notes: None,
        }
    }

    pub fn with_dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = Some(dosage.into());
        self
    }

    /// Mark as a daily recurring medication taken at `time`.
    pub fn scheduled_at(mut self, time: NaiveTime) -> Self {
        self.is_scheduled = true;
        self.scheduled_time = Some(time);
        self
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
