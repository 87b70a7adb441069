//! Archetype Classifier - maps an (x, y) score pair to one of nine
//! distributional-preference archetypes.
//!
//! Each axis falls into one of three bands: below -0.5, exactly ±0.5, or
//! above 0.5. The table index is
//! `1 + 3·[y ∈ {±0.5}] + 6·[y < -0.5] + [x ∈ {±0.5}] + 2·[x > 0.5]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Scores;

/// Absolute tolerance used when comparing scores against ±0.5.
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// Distributional-preference archetypes, in table order (index 1 to 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Inequality-Averse")]
    InequalityAverse,
    #[serde(rename = "Maximin")]
    Maximin,
    #[serde(rename = "Altruistic")]
    Altruistic,
    #[serde(rename = "Envious")]
    Envious,
    #[serde(rename = "Selfish")]
    Selfish,
    #[serde(rename = "Kiss-Up")]
    KissUp,
    #[serde(rename = "Spiteful")]
    Spiteful,
    #[serde(rename = "Kick-Down")]
    KickDown,
    #[serde(rename = "Equality-Averse")]
    EqualityAverse,
}

impl Archetype {
    /// All archetypes in table order.
    pub const ALL: [Archetype; 9] = [
        Archetype::InequalityAverse,
        Archetype::Maximin,
        Archetype::Altruistic,
        Archetype::Envious,
        Archetype::Selfish,
        Archetype::KissUp,
        Archetype::Spiteful,
        Archetype::KickDown,
        Archetype::EqualityAverse,
    ];

    /// 1-based table index.
    pub fn index(&self) -> u8 {
        match self {
            Archetype::InequalityAverse => 1,
            Archetype::Maximin => 2,
            Archetype::Altruistic => 3,
            Archetype::Envious => 4,
            Archetype::Selfish => 5,
            Archetype::KissUp => 6,
            Archetype::Spiteful => 7,
            Archetype::KickDown => 8,
            Archetype::EqualityAverse => 9,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=9 => Some(Self::ALL[usize::from(index - 1)]),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::InequalityAverse => "Inequality-Averse",
            Archetype::Maximin => "Maximin",
            Archetype::Altruistic => "Altruistic",
            Archetype::Envious => "Envious",
            Archetype::Selfish => "Selfish",
            Archetype::KissUp => "Kiss-Up",
            Archetype::Spiteful => "Spiteful",
            Archetype::KickDown => "Kick-Down",
            Archetype::EqualityAverse => "Equality-Averse",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Archetype classification functions.
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// Table index (1 to 9) for a score pair.
    pub fn index(x: f64, y: f64) -> u8 {
        let mut index = 1;
        if Self::is_half(y) {
            index += 3;
        }
        if y < -0.5 - SCORE_TOLERANCE {
            index += 6;
        }
        if Self::is_half(x) {
            index += 1;
        }
        if x > 0.5 + SCORE_TOLERANCE {
            index += 2;
        }
        index
    }

    /// Classifies a score pair.
    ///
    /// # Edge Cases
    /// - Either score undefined: no archetype
    pub fn classify(scores: &Scores) -> Option<Archetype> {
        scores
            .pair()
            .and_then(|(x, y)| Archetype::from_index(Self::index(x, y)))
    }

    fn is_half(value: f64) -> bool {
        (value.abs() - 0.5).abs() <= SCORE_TOLERANCE
    }
}
