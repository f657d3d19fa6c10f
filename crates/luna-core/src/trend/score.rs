//! Categorical-to-numeric mapping for the mood/energy chart.
//!
//! Scores sit on a 0-10 scale. The cut-points are authored, not derived:
//!
//! | mood      | score | energy    | score |
//! |-----------|-------|-----------|-------|
//! | happy     | 10    | high      | 10    |
//! | relaxed   | 8     | normal    | 7     |
//! | emotional | 6     | low       | 4     |
//! | irritable | 4     | exhausted | 1     |
//! | anxious   | 2     |           |       |
//! | sad       | 0     |           |       |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tracking::{Categorical, Category, Energy, Mood};

/// Upper end of the score scale.
pub const MAX_SCORE: u8 = 10;

/// Score used for values outside the vocabulary.
pub const NEUTRAL_SCORE: u8 = 5;

/// A vocabulary whose members sit on the 0-10 chart scale.
pub trait Scored: Categorical {
    fn score(self) -> u8;
}

impl Scored for Mood {
    fn score(self) -> u8 {
        match self {
            Mood::Happy => 10,
            Mood::Relaxed => 8,
            Mood::Emotional => 6,
            Mood::Irritable => 4,
            Mood::Anxious => 2,
            Mood::Sad => 0,
        }
    }
}

impl Scored for Energy {
    fn score(self) -> u8 {
        match self {
            Energy::High => 10,
            Energy::Normal => 7,
            Energy::Low => 4,
            Energy::Exhausted => 1,
        }
    }
}

/// Score any category, falling back to [`NEUTRAL_SCORE`] for unknown words.
pub fn score_category<T: Scored>(value: &Category<T>) -> u8 {
    match value {
        Category::Known(v) => v.score(),
        Category::Unrecognized(raw) => {
            tracing::warn!(kind = T::KIND, value = %raw, "unrecognized value, using neutral score");
            NEUTRAL_SCORE
        }
    }
}

pub fn score_mood(mood: &Category<Mood>) -> u8 {
    score_category(mood)
}

pub fn score_energy(energy: &Category<Energy>) -> u8 {
    score_category(energy)
}

/// Capitalised vocabulary word, independent of the score.
pub fn display_label<T: Categorical>(value: &Category<T>) -> String {
    value.label()
}

/// Qualitative band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Poor,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl Band {
    /// Lower bounds are inclusive: 9+ Excellent, 7+ Good, 5+ Moderate, 3+ Low.
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => Band::Excellent,
            7..=8 => Band::Good,
            5..=6 => Band::Moderate,
            3..=4 => Band::Low,
            _ => Band::Poor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::Moderate => "Moderate",
            Band::Low => "Low",
            Band::Poor => "Poor",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn band_label(score: u8) -> &'static str {
    Band::from_score(score).as_str()
}
