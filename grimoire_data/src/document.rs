//! Document snapshots decorated by the import pipeline.
//!
//! The host owns the real documents; these are the slices of them the
//! importer reads and rewrites. Builder functions in `grimoire_engine` take
//! a snapshot by value and return the updated snapshot, so the caller decides
//! when (and whether) to persist.

use serde::{Deserialize, Serialize};

use crate::effect::ActiveEffect;
use crate::extract::SaveDamageMode;

/// Manually authored values that take precedence over text-derived defaults
/// for the over-time pipeline. Stored under `flags.grimoire.overTime` on the
/// document; read-only from the pipeline's perspective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverTimeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_remove: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_damage: Option<SaveDamageMode>,
}

/// Importer flag namespace on a feature document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImporterFlags {
    pub over_time: OverTimeOverrides,
}

/// Flag store on a feature document; only the importer namespace is modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentFlags {
    pub grimoire: ImporterFlags,
}

/// A monster feature or feat ready for effect extraction.
///
/// `description` is the RuleText: natural-language rules prose, possibly with
/// embedded HTML-ish markup. It is never mutated by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub flags: DocumentFlags,
    #[serde(default)]
    pub effects: Vec<ActiveEffect>,
}

/// Importer flag namespace on the owning actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActorFlags {
    /// Set when any of the actor's features carry an over-time effect, so
    /// downstream tooling knows the actor needs turn automation.
    pub over_time_effect: bool,
}

/// Provenance flags stamped onto imported spell documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellImportFlags {
    pub generic: bool,
    pub lookup: String,
    pub lookup_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_at_level: Option<u32>,
}

/// Spell damage block in the host schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellDamage {
    /// Ordered (formula, damage type) pairs.
    #[serde(default)]
    pub parts: Vec<(String, String)>,
    #[serde(default)]
    pub versatile: String,
}

/// Spell targeting block in the host schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    /// The host stores this under the bare key `type`.
    #[serde(rename = "type")]
    pub target_type: String,
}

/// Spell range block in the host schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    pub units: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<u32>,
}

/// Spell save block in the host schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellSave {
    pub ability: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc: Option<u32>,
}

/// System data block of an imported spell document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellSystem {
    pub level: u32,
    pub school: String,
    pub description: String,
    pub damage: SpellDamage,
    pub target: SpellTarget,
    pub range: SpellRange,
    pub action_type: String,
    pub save: SpellSave,
}

/// An imported spell in the host document format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellDocument {
    pub name: String,
    pub system: SpellSystem,
    pub flags: SpellImportFlags,
    pub effects: Vec<ActiveEffect>,
}
