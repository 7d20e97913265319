//! Values produced by the rules-text extraction pipeline.
//!
//! Every type here models "feature not present in this text" as an absent
//! `Option`, never as an error: free-form rules text is expected to miss.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effect::SpecialDuration;

/// DC scaling behavior; monster features always use a flat DC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveScaling {
    #[default]
    Flat,
}

/// A saving throw parsed out of rules text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSave {
    pub dc: u32,
    /// Three-letter lowercase ability code, taken verbatim from the text
    /// (first three letters of the captured word, lowercased).
    pub ability: String,
    #[serde(default)]
    pub scaling: SaveScaling,
}

/// A condition parsed out of rules text, with any early-expiry marker the
/// surrounding phrasing implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCondition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_duration: Option<SpecialDuration>,
}

/// One (formula, damage type) pair from a damage expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamagePart {
    pub formula: String,
    pub damage_type: String,
}

/// Ordered damage parts parsed from a recurring-damage phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDamage {
    pub parts: Vec<DamagePart>,
}

impl ExtractedDamage {
    /// Host damage-roll syntax: `dice[type] + dice[type] + ...`.
    pub fn formula(&self) -> String {
        self.parts
            .iter()
            .map(|part| format!("{}[{}]", part.formula, part.damage_type))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Point in the turn order at which an over-time effect re-triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnTrigger {
    Start,
    End,
}

impl fmt::Display for TurnTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnTrigger::Start => write!(f, "start"),
            TurnTrigger::End => write!(f, "end"),
        }
    }
}

/// What happens to the recurring damage when the save succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveDamageMode {
    #[default]
    #[serde(rename = "nodamage")]
    NoDamage,
    #[serde(rename = "halfdamage")]
    HalfDamage,
    #[serde(rename = "fulldamage")]
    FullDamage,
}

impl fmt::Display for SaveDamageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveDamageMode::NoDamage => write!(f, "nodamage"),
            SaveDamageMode::HalfDamage => write!(f, "halfdamage"),
            SaveDamageMode::FullDamage => write!(f, "fulldamage"),
        }
    }
}
