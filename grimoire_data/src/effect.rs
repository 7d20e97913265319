//! Wire-format mirror of the host engine's active-effect schema.
//!
//! An `ActiveEffect` bundles field-level `Change` records with a duration and
//! a flag block. Effects are created fresh per rule, appended to the owning
//! document's effect list, and never mutated after attachment.

use serde::{Deserialize, Serialize};

/// Application mode for a single change record, matching the host engine's
/// `ACTIVE_EFFECT_MODES` table (serialized as the host's integer codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EffectMode {
    Custom,
    Multiply,
    Add,
    Downgrade,
    Upgrade,
    Override,
}

impl From<EffectMode> for u8 {
    fn from(mode: EffectMode) -> u8 {
        match mode {
            EffectMode::Custom => 0,
            EffectMode::Multiply => 1,
            EffectMode::Add => 2,
            EffectMode::Downgrade => 3,
            EffectMode::Upgrade => 4,
            EffectMode::Override => 5,
        }
    }
}

impl TryFrom<u8> for EffectMode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EffectMode::Custom),
            1 => Ok(EffectMode::Multiply),
            2 => Ok(EffectMode::Add),
            3 => Ok(EffectMode::Downgrade),
            4 => Ok(EffectMode::Upgrade),
            5 => Ok(EffectMode::Override),
            other => Err(format!("unknown active effect mode code {other}")),
        }
    }
}

/// One field-level mutation instruction within an active effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Dotted path into the host document model, e.g. `data.skills.prc.ability`.
    pub key: String,
    pub mode: EffectMode,
    pub value: String,
    /// The host accepts strings here; "20" is the conventional default.
    pub priority: String,
}

/// Effect lifetime; the host tracks world-time seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDuration {
    #[serde(default)]
    pub seconds: u32,
}

/// Early-expiry markers understood by the host's effect automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialDuration {
    /// Expires at the end of the affected creature's next turn.
    TurnEnd,
    /// Expires at the start of the source creature's turn.
    TurnStartSource,
}

/// Aura parameters for effects that radiate from the caster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraFlags {
    pub is_aura: bool,
    /// Disposition the aura applies to ("Enemy", "Allies", "All").
    pub aura: String,
    /// Radius in feet.
    pub radius: u32,
    #[serde(default)]
    pub ignore_self: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub hostile: bool,
    #[serde(default)]
    pub only_once: bool,
    #[serde(default)]
    pub display_temp: bool,
}

/// Flag block attached to an effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectFlags {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_duration: Vec<SpecialDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aura: Option<AuraFlags>,
}

/// A timed or persistent modification applied to a game entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub duration: EffectDuration,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub transfer: bool,
    #[serde(default)]
    pub flags: EffectFlags,
}

impl ActiveEffect {
    /// Fresh effect shell with an empty change list.
    pub fn new(label: impl Into<String>) -> Self {
        ActiveEffect {
            label: label.into(),
            ..ActiveEffect::default()
        }
    }

    /// Tag this effect to expire early at the given point in the turn order.
    pub fn set_special_duration(&mut self, duration: SpecialDuration) {
        self.flags.special_duration = vec![duration];
    }
}

/// Change record instructing the host to apply a named status effect.
pub fn status_effect_change(status: &str) -> Change {
    Change {
        key: "macro.StatusEffect".to_string(),
        mode: EffectMode::Custom,
        value: status.to_string(),
        priority: "20".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_mode_serializes_as_host_integer_code() {
        let json = serde_json::to_string(&EffectMode::Override).unwrap();
        assert_eq!(json, "5");
        let mode: EffectMode = serde_json::from_str("2").unwrap();
        assert_eq!(mode, EffectMode::Add);
    }

    #[test]
    fn effect_mode_rejects_unknown_codes() {
        let parsed: Result<EffectMode, _> = serde_json::from_str("9");
        assert!(parsed.is_err());
    }

    #[test]
    fn special_duration_uses_camel_case_keys() {
        let json = serde_json::to_string(&SpecialDuration::TurnStartSource).unwrap();
        assert_eq!(json, "\"turnStartSource\"");
    }

    #[test]
    fn status_change_targets_status_macro() {
        let change = status_effect_change("Prone");
        assert_eq!(change.key, "macro.StatusEffect");
        assert_eq!(change.mode, EffectMode::Custom);
        assert_eq!(change.value, "Prone");
    }
}
