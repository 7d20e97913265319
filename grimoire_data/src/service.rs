//! Payload types returned by the character-builder service's proxy API.
//!
//! These mirror the service's JSON camelCase fields. Only the fields the
//! importer reads are modeled; `#[serde(default)]` keeps unknown or missing
//! data from failing a whole import.

use serde::{Deserialize, Serialize};

/// Envelope every proxy endpoint wraps its payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// Reference to the sourcebook a definition was published in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReference {
    pub source_id: u32,
}

/// A feat definition from the proxy's feats endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatDefinition {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub sources: Vec<SourceReference>,
    pub is_homebrew: bool,
}

/// A spell definition from the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellDefinition {
    pub id: u64,
    pub name: String,
    pub level: u32,
    pub school: String,
    pub description: String,
    pub sources: Vec<SourceReference>,
}

/// A spell entry as it appears on a character: the definition plus the level
/// it is being cast at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellEntry {
    pub definition: Option<SpellDefinition>,
    pub cast_at_level: Option<u32>,
}

/// A modifier granted by a class, race, background, feat, or item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Modifier {
    #[serde(rename = "type")]
    pub modifier_type: String,
    pub sub_type: String,
    pub friendly_subtype_name: String,
    pub value: i64,
}

/// A per-character manual override value (custom proficiency, ability swap,
/// or flat bonus) keyed by the service's type/value id scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterValue {
    pub type_id: u32,
    pub value_id: u32,
    pub value: i64,
}
