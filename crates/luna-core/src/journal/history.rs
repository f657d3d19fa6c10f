//! Rows for the medication history view.

use serde::Serialize;

use crate::tracking::{Categorical, MedicationEntry, TIME_FORMAT};
use crate::trend::{format_date, DEFAULT_DATE_FORMAT};

/// One medication intake prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationHistoryRow {
    pub emoji: &'static str,
    pub name: String,
    pub date_label: String,
    pub dosage: Option<String>,
    pub type_label: String,
    pub scheduled: bool,
    /// "Scheduled daily at HH:MM" for recurring medications
    pub schedule_note: Option<String>,
}

impl MedicationHistoryRow {
    pub fn from_entry(entry: &MedicationEntry) -> Self {
        let schedule_note = entry.is_scheduled.then(|| match entry.scheduled_time {
            Some(time) => format!("Scheduled daily at {}", time.format(TIME_FORMAT)),
            None => "Scheduled daily".to_string(),
        });

        Self {
            emoji: entry.kind.emoji(),
            name: entry.name.clone(),
            date_label: format_date(entry.date, DEFAULT_DATE_FORMAT),
            dosage: entry.dosage.clone(),
            type_label: entry.kind.label(),
            scheduled: entry.is_scheduled,
            schedule_note,
        }
    }

    /// Single-line text form used by the CLI.
    pub fn render_line(&self) -> String {
        let mut line = format!("{} {:<20} {}", self.emoji, self.name, self.date_label);
        if let Some(dosage) = &self.dosage {
            line.push_str(&format!("  {dosage}"));
        }
        line.push_str(&format!("  [{}]", self.type_label));
        if let Some(note) = &self.schedule_note {
            line.push_str(&format!("  {note}"));
        }
        line
    }
}

/// History rows in the order the entries were logged.
pub fn medication_history(entries: &[MedicationEntry]) -> Vec<MedicationHistoryRow> {
    entries.iter().map(MedicationHistoryRow::from_entry).collect()
}
