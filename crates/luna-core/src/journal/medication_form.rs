//! Form state behind the "Log Medication" dialog.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::tracking::{MedicationEntry, MedicationType};

/// Editable state of a medication intake before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationDraft {
    pub date: NaiveDate,
    pub kind: MedicationType,
    pub name: String,
    pub dosage: String,
    pub is_scheduled: bool,
    /// Only used when `is_scheduled` is set
    pub scheduled_time: NaiveTime,
    pub notes: String,
}

impl MedicationDraft {
    pub const DEFAULT_KIND: MedicationType = MedicationType::BirthControl;

    pub fn default_scheduled_time() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
    }

    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            kind: Self::DEFAULT_KIND,
            name: String::new(),
            dosage: String::new(),
            is_scheduled: false,
            scheduled_time: Self::default_scheduled_time(),
            notes: String::new(),
        }
    }

    /// The save action stays disabled until a name is entered.
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Build the entry and reset the form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when the name is blank; the
    /// draft is left as it was.
    pub fn submit(&mut self, today: NaiveDate) -> Result<MedicationEntry> {
        if !self.can_save() {
            return Err(ValidationError::missing("name").into());
        }

        let draft = std::mem::replace(self, Self::new(today));
        Ok(MedicationEntry {
            date: draft.date,
            kind: draft.kind,
            name: draft.name,
            dosage: non_blank(draft.dosage),
            is_scheduled: draft.is_scheduled,
            scheduled_time: draft.is_scheduled.then_some(draft.scheduled_time),
            notes: non_blank(draft.notes),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn defaults() {
        let draft = MedicationDraft::new(day(1));
        assert_eq!(draft.kind, MedicationType::BirthControl);
        assert!(!draft.is_scheduled);
        assert_eq!(draft.scheduled_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert!(!draft.can_save());
    }

    #[test]
    fn blank_name_is_rejected_and_draft_kept() {
        let mut draft = MedicationDraft::new(day(1));
        draft.name = "   ".into();
        draft.dosage = "1 tablet".into();

        let err = draft.submit(day(2)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingField { ref field }) if field == "name"
        ));
        assert_eq!(draft.dosage, "1 tablet");
        assert_eq!(draft.date, day(1));
    }

    #[test]
    fn unscheduled_entry_drops_time() {
        let mut draft = MedicationDraft::new(day(1));
        draft.kind = MedicationType::Painkillers;
        draft.name = "Ibuprofen".into();
        draft.dosage = "400mg".into();

        let entry = draft.submit(day(1)).unwrap();
        assert_eq!(entry.kind, MedicationType::Painkillers);
        assert_eq!(entry.dosage.as_deref(), Some("400mg"));
        assert!(!entry.is_scheduled);
        assert_eq!(entry.scheduled_time, None);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn scheduled_entry_keeps_time_and_resets_form() {
        let mut draft = MedicationDraft::new(day(1));
        draft.name = "Iron Supplement".into();
        draft.is_scheduled = true;
        draft.scheduled_time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        draft.dosage = " ".into();

        let entry = draft.submit(day(4)).unwrap();
        assert!(entry.is_scheduled);
        assert_eq!(entry.scheduled_time, NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(entry.dosage, None);

        assert_eq!(draft, MedicationDraft::new(day(4)));
    }
}
