//! Sample data used to seed a fresh journal.

use chrono::{NaiveDate, NaiveTime};

use super::category::{Energy, MedicationType, Mood};
use super::entry::{MedicationEntry, MoodEntry};

fn may_2023(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, day).unwrap_or_default()
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Ten check-ins spread over May 2023.
pub fn mock_mood_entries() -> Vec<MoodEntry> {
    [
        (1, Mood::Happy, Energy::High),
        (3, Mood::Relaxed, Energy::Normal),
        (5, Mood::Irritable, Energy::Low),
        (8, Mood::Anxious, Energy::Exhausted),
        (12, Mood::Emotional, Energy::Low),
        (15, Mood::Sad, Energy::Normal),
        (18, Mood::Happy, Energy::High),
        (22, Mood::Relaxed, Energy::Normal),
        (25, Mood::Happy, Energy::High),
        (28, Mood::Irritable, Energy::Low),
    ]
    .into_iter()
    .map(|(day, mood, energy)| MoodEntry::new(may_2023(day), mood, energy))
    .collect()
}

/// Five intakes in the first half of May 2023.
pub fn mock_medication_entries() -> Vec<MedicationEntry> {
    vec![
        MedicationEntry::new(may_2023(1), MedicationType::BirthControl, "Birth Control Pill")
            .scheduled_at(at(8)),
        MedicationEntry::new(may_2023(4), MedicationType::Painkillers, "Ibuprofen")
            .with_dosage("400mg"),
        MedicationEntry::new(may_2023(8), MedicationType::HerbalRemedies, "Chamomile Tea"),
        MedicationEntry::new(may_2023(12), MedicationType::IronSupplements, "Iron Supplement")
            .with_dosage("65mg")
            .scheduled_at(at(12)),
        MedicationEntry::new(may_2023(15), MedicationType::BirthControl, "Birth Control Pill")
            .scheduled_at(at(8)),
    ]
}
