//! Closed vocabularies used by the tracking dialogs.
//!
//! Every vocabulary implements [`Categorical`], which carries the wire name,
//! the display label and the emoji shown next to each option.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A closed set of labelled options.
pub trait Categorical: Copy + Sized + 'static {
    /// Name of the vocabulary, used in error messages.
    const KIND: &'static str;

    /// Every member, in the order the log form presents them.
    const ALL: &'static [Self];

    /// Wire name (the serialized form).
    fn as_str(self) -> &'static str;

    fn emoji(self) -> &'static str;

    /// Human-readable label. Defaults to the capitalised wire name.
    fn label(self) -> String {
        capitalize(self.as_str())
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a member of `T` from user input.
///
/// Matching ignores case and any non-alphanumeric characters, so
/// `"Birth Control"`, `"birth-control"` and `"birthControl"` all resolve.
pub fn parse_category<T: Categorical>(raw: &str) -> Result<T, ValidationError> {
    let wanted = normalize(raw);
    T::ALL
        .iter()
        .copied()
        .find(|member| normalize(member.as_str()) == wanted)
        .ok_or_else(|| ValidationError::UnknownCategory {
            kind: T::KIND,
            value: raw.trim().to_string(),
            expected: T::ALL
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// How the user felt on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Irritable,
    Emotional,
    Relaxed,
    Anxious,
}

impl Categorical for Mood {
    const KIND: &'static str = "mood";
    const ALL: &'static [Self] = &[
        Mood::Happy,
        Mood::Relaxed,
        Mood::Sad,
        Mood::Irritable,
        Mood::Emotional,
        Mood::Anxious,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Irritable => "irritable",
            Mood::Emotional => "emotional",
            Mood::Relaxed => "relaxed",
            Mood::Anxious => "anxious",
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😔",
            Mood::Irritable => "😠",
            Mood::Emotional => "😢",
            Mood::Relaxed => "😌",
            Mood::Anxious => "😰",
        }
    }
}

/// Self-reported energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    High,
    Normal,
    Low,
    Exhausted,
}

impl Categorical for Energy {
    const KIND: &'static str = "energy";
    const ALL: &'static [Self] = &[Energy::High, Energy::Normal, Energy::Low, Energy::Exhausted];

    fn as_str(self) -> &'static str {
        match self {
            Energy::High => "high",
            Energy::Normal => "normal",
            Energy::Low => "low",
            Energy::Exhausted => "exhausted",
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            Energy::High => "⚡",
            Energy::Normal => "🔋",
            Energy::Low => "🛏️",
            Energy::Exhausted => "😩",
        }
    }
}

/// Kind of medication or supplement logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MedicationType {
    BirthControl,
    Painkillers,
    IronSupplements,
    HerbalRemedies,
    Other,
}

impl Categorical for MedicationType {
    const KIND: &'static str = "medication type";
    const ALL: &'static [Self] = &[
        MedicationType::BirthControl,
        MedicationType::Painkillers,
        MedicationType::IronSupplements,
        MedicationType::HerbalRemedies,
        MedicationType::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            MedicationType::BirthControl => "birthControl",
            MedicationType::Painkillers => "painkillers",
            MedicationType::IronSupplements => "ironSupplements",
            MedicationType::HerbalRemedies => "herbalRemedies",
            MedicationType::Other => "other",
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            MedicationType::BirthControl => "💊",
            MedicationType::Painkillers => "🔥",
            MedicationType::IronSupplements => "🩸",
            MedicationType::HerbalRemedies => "🍃",
            MedicationType::Other => "📝",
        }
    }

    fn label(self) -> String {
        match self {
            MedicationType::BirthControl => "Birth Control",
            MedicationType::Painkillers => "Painkillers",
            MedicationType::IronSupplements => "Iron Supplements",
            MedicationType::HerbalRemedies => "Herbal Remedies",
            MedicationType::Other => "Other",
        }
        .to_string()
    }
}

macro_rules! impl_str_traits {
    ($($ty:ty),*) => {
        $(
            impl FromStr for $ty {
                type Err = ValidationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_category(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_str_traits!(Mood, Energy, MedicationType);

/// A vocabulary value as it arrives from outside the type system.
///
/// Records deserialized from JSON may carry words outside the closed set,
/// or no word at all (`null`, a number). Those are kept as
/// [`Category::Unrecognized`] so a single bad record degrades to a neutral
/// value instead of rejecting the whole batch.
///
/// Deserialization goes through [`Category::parse`], so it accepts the same
/// spellings as `FromStr` (`"Happy"`, `"HIGH"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Category<T> {
    Known(T),
    Unrecognized(String),
}

impl<'de, T: Categorical> Deserialize<'de> for Category<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => Category::parse(&raw),
            other => Category::Unrecognized(other.to_string()),
        })
    }
}

impl<T: Categorical> Category<T> {
    /// Parse leniently: unknown input becomes `Unrecognized`.
    pub fn parse(raw: &str) -> Self {
        match parse_category::<T>(raw) {
            Ok(value) => Category::Known(value),
            Err(_) => Category::Unrecognized(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Category::Known(value) => Some(*value),
            Category::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Known(value) => value.as_str(),
            Category::Unrecognized(raw) => raw,
        }
    }

    /// Display label; unrecognized words are capitalised as-is.
    pub fn label(&self) -> String {
        match self {
            Category::Known(value) => value.label(),
            Category::Unrecognized(raw) => capitalize(raw),
        }
    }
}

impl<T> From<T> for Category<T> {
    fn from(value: T) -> Self {
        Category::Known(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_labels_are_capitalised_words() {
        assert_eq!(Mood::Irritable.label(), "Irritable");
        assert_eq!(Mood::Happy.label(), "Happy");
        assert_eq!(Energy::Exhausted.label(), "Exhausted");
    }

    #[test]
    fn medication_labels_are_spelled_out() {
        assert_eq!(MedicationType::BirthControl.label(), "Birth Control");
        assert_eq!(MedicationType::IronSupplements.label(), "Iron Supplements");
        assert_eq!(MedicationType::HerbalRemedies.label(), "Herbal Remedies");
    }

    #[test]
    fn form_order_for_moods() {
        let order: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            order,
            vec!["happy", "relaxed", "sad", "irritable", "emotional", "anxious"]
        );
    }

    #[test]
    fn parse_is_case_and_separator_insensitive() {
        assert_eq!("HAPPY".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!(" low ".parse::<Energy>().unwrap(), Energy::Low);
        assert_eq!(
            "birth-control".parse::<MedicationType>().unwrap(),
            MedicationType::BirthControl
        );
        assert_eq!(
            "Herbal Remedies".parse::<MedicationType>().unwrap(),
            MedicationType::HerbalRemedies
        );
    }

    #[test]
    fn parse_rejects_words_outside_the_vocabulary() {
        let err = "bored".parse::<Mood>().unwrap_err();
        match err {
            ValidationError::UnknownCategory { kind, value, .. } => {
                assert_eq!(kind, "mood");
                assert_eq!(value, "bored");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Mood::Relaxed).unwrap(), "\"relaxed\"");
        assert_eq!(
            serde_json::to_string(&MedicationType::IronSupplements).unwrap(),
            "\"ironSupplements\""
        );
    }

    #[test]
    fn category_keeps_unknown_words() {
        let known: Category<Mood> = serde_json::from_str("\"sad\"").unwrap();
        assert_eq!(known, Category::Known(Mood::Sad));

        let unknown: Category<Mood> = serde_json::from_str("\"bored\"").unwrap();
        assert_eq!(unknown, Category::Unrecognized("bored".into()));
        assert_eq!(unknown.label(), "Bored");
        assert_eq!(unknown.known(), None);
    }

    #[test]
    fn category_deserializes_any_spelling_of_a_member() {
        let mood: Category<Mood> = serde_json::from_str("\"Happy\"").unwrap();
        assert_eq!(mood, Category::Known(Mood::Happy));
        let energy: Category<Energy> = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(energy, Category::Known(Energy::High));
    }

    #[test]
    fn category_keeps_non_string_values() {
        let null: Category<Mood> = serde_json::from_str("null").unwrap();
        assert_eq!(null, Category::Unrecognized("null".into()));
        let number: Category<Energy> = serde_json::from_str("3").unwrap();
        assert_eq!(number, Category::Unrecognized("3".into()));
    }

    #[test]
    fn category_parse_is_lenient() {
        assert_eq!(Category::<Energy>::parse("High"), Category::Known(Energy::High));
        assert_eq!(
            Category::<Energy>::parse("wired"),
            Category::Unrecognized("wired".into())
        );
    }

    #[test]
    fn capitalize_handles_empty_input() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
