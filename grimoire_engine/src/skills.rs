//! Skill proficiency parsing.
//!
//! Derives each skill's proficiency multiplier from the character's modifier
//! list, then lets per-character manual values override the result. A custom
//! governing-ability override additionally emits a host change record so the
//! sheet rolls with the swapped ability.

use grimoire_data::{
    Ability, ActiveEffect, Change, CharacterValue, EffectMode, Modifier, SKILLS, Skill,
    custom_proficiency_multiplier,
};
use log::debug;

/// Service type ids for per-character skill overrides.
const VALUE_TYPE_BONUS_MISC: u32 = 24;
const VALUE_TYPE_BONUS_MAGIC: u32 = 25;
const VALUE_TYPE_PROFICIENCY: u32 = 26;
const VALUE_TYPE_ABILITY: u32 = 27;

/// Label of the effect that collects skill-ability override changes.
const SKILL_EFFECT_LABEL: &str = "Skill Ability Changes";

/// One parsed skill: proficiency multiplier plus flat bonuses.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillSummary {
    pub name: &'static str,
    pub label: &'static str,
    pub ability: Ability,
    /// 0, 0.5, 1, or 2 — the proficiency-bonus multiplier.
    pub proficiency: f32,
    /// Proficiency-bonus portion, rounded per the round-up modifiers.
    pub proficiency_bonus: i64,
    /// Flat bonus from modifiers and manual values.
    pub bonus: i64,
}

/// Whether a round-up modifier targets checks with this skill's ability.
fn half_proficiency_rounded_up(modifiers: &[Modifier], skill: &Skill) -> bool {
    let target = format!("{}-ability-checks", skill.ability.long());
    modifiers
        .iter()
        .any(|m| m.modifier_type == "half-proficiency-round-up" && m.sub_type == target)
}

/// Proficiency multiplier for a skill from the modifier list alone:
/// expertise beats proficiency beats half proficiency beats nothing.
pub fn skill_proficiency(modifiers: &[Modifier], skill: &Skill) -> f32 {
    let kinds: Vec<&str> = modifiers
        .iter()
        .filter(|m| m.friendly_subtype_name == skill.label)
        .map(|m| m.modifier_type.as_str())
        .collect();

    let half = modifiers
        .iter()
        .any(|m| m.modifier_type == "half-proficiency" && m.sub_type == "ability-checks")
        || half_proficiency_rounded_up(modifiers, skill);

    if kinds.contains(&"expertise") {
        2.0
    } else if kinds.contains(&"proficiency") {
        1.0
    } else if half {
        0.5
    } else {
        0.0
    }
}

/// Manually set proficiency for a skill, when present. A stored value of
/// zero means "no override".
fn custom_skill_proficiency(values: &[CharacterValue], skill: &Skill) -> Option<f32> {
    values
        .iter()
        .find(|v| v.type_id == VALUE_TYPE_PROFICIENCY && v.value_id == skill.value_id && v.value != 0)
        .and_then(|v| custom_proficiency_multiplier(v.value))
}

/// Manually swapped governing ability for a skill, when present.
fn custom_skill_ability(values: &[CharacterValue], skill: &Skill) -> Option<Ability> {
    values
        .iter()
        .find(|v| v.type_id == VALUE_TYPE_ABILITY && v.value_id == skill.value_id)
        .and_then(|v| u32::try_from(v.value).ok())
        .and_then(Ability::from_service_id)
}

/// Sum of manual flat bonuses (misc and magic) for a skill.
fn custom_skill_bonus(values: &[CharacterValue], skill: &Skill) -> i64 {
    values
        .iter()
        .filter(|v| {
            (v.type_id == VALUE_TYPE_BONUS_MISC || v.type_id == VALUE_TYPE_BONUS_MAGIC)
                && v.value_id == skill.value_id
        })
        .map(|v| v.value)
        .sum()
}

/// Flat bonus to a skill from the modifier list (items and features).
fn modifier_bonus(modifiers: &[Modifier], skill: &Skill) -> i64 {
    modifiers
        .iter()
        .filter(|m| m.modifier_type == "bonus" && m.sub_type == skill.sub_type)
        .map(|m| m.value)
        .sum()
}

/// Parse every skill in the dictionary against the character's modifiers and
/// manual values. `prof_bonus` is the character's proficiency bonus.
pub fn parse_skills(
    modifiers: &[Modifier],
    values: &[CharacterValue],
    prof_bonus: u32,
) -> Vec<SkillSummary> {
    SKILLS
        .iter()
        .map(|skill| {
            let proficiency = custom_skill_proficiency(values, skill)
                .unwrap_or_else(|| skill_proficiency(modifiers, skill));

            // Some features round the half-proficiency bonus up instead of down.
            let raw = f64::from(prof_bonus) * f64::from(proficiency);
            let rounded = if half_proficiency_rounded_up(modifiers, skill) {
                raw.ceil()
            } else {
                raw.floor()
            };
            #[allow(clippy::cast_possible_truncation)]
            let proficiency_bonus = rounded as i64;

            let ability = custom_skill_ability(values, skill).unwrap_or(skill.ability);
            SkillSummary {
                name: skill.name,
                label: skill.label,
                ability,
                proficiency,
                proficiency_bonus,
                bonus: modifier_bonus(modifiers, skill) + custom_skill_bonus(values, skill),
            }
        })
        .collect()
}

/// Change record overriding a skill's governing ability on the host sheet.
fn skill_ability_change(skill: &Skill, ability: Ability) -> Change {
    Change {
        key: format!("data.skills.{}.ability", skill.name),
        mode: EffectMode::Override,
        value: ability.code().to_string(),
        priority: "20".to_string(),
    }
}

/// Append skill-ability override changes to the character's effect list.
///
/// All overrides share one "Skill Ability Changes" effect: it is created on
/// the first override and appended to afterwards.
pub fn apply_skill_ability_overrides(
    values: &[CharacterValue],
    mut effects: Vec<ActiveEffect>,
) -> Vec<ActiveEffect> {
    for skill in SKILLS {
        let Some(ability) = custom_skill_ability(values, skill) else {
            continue;
        };
        debug!("skill {} rolls with {} by manual override", skill.label, ability.code());
        let change = skill_ability_change(skill, ability);
        if let Some(existing) = effects.iter_mut().find(|e| e.label == SKILL_EFFECT_LABEL) {
            existing.changes.push(change);
        } else {
            let mut effect = ActiveEffect::new(SKILL_EFFECT_LABEL);
            effect.changes.push(change);
            effects.push(effect);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_data::skill_by_name;

    fn modifier(kind: &str, sub_type: &str, friendly: &str) -> Modifier {
        Modifier {
            modifier_type: kind.to_string(),
            sub_type: sub_type.to_string(),
            friendly_subtype_name: friendly.to_string(),
            value: 0,
        }
    }

    #[test]
    fn expertise_beats_proficiency() {
        let skill = skill_by_name("prc").unwrap();
        let modifiers = vec![
            modifier("proficiency", "perception", "Perception"),
            modifier("expertise", "perception", "Perception"),
        ];
        assert_eq!(skill_proficiency(&modifiers, skill), 2.0);
    }

    #[test]
    fn half_proficiency_applies_without_a_direct_match() {
        let skill = skill_by_name("ath").unwrap();
        let modifiers = vec![modifier("half-proficiency", "ability-checks", "Ability Checks")];
        assert_eq!(skill_proficiency(&modifiers, skill), 0.5);
    }

    #[test]
    fn unmodified_skill_has_no_proficiency() {
        let skill = skill_by_name("arc").unwrap();
        assert_eq!(skill_proficiency(&[], skill), 0.0);
    }

    #[test]
    fn custom_proficiency_beats_modifier_derived_value() {
        let skill = skill_by_name("ste").unwrap();
        let modifiers = vec![modifier("proficiency", "stealth", "Stealth")];
        let values = vec![CharacterValue {
            type_id: VALUE_TYPE_PROFICIENCY,
            value_id: skill.value_id,
            value: 4,
        }];
        let summaries = parse_skills(&modifiers, &values, 3);
        let stealth = summaries.iter().find(|s| s.name == "ste").unwrap();
        assert_eq!(stealth.proficiency, 2.0);
        assert_eq!(stealth.proficiency_bonus, 6);
    }

    #[test]
    fn round_up_modifier_rounds_half_proficiency_up() {
        let skill = skill_by_name("itm").unwrap();
        let modifiers = vec![modifier(
            "half-proficiency-round-up",
            "charisma-ability-checks",
            "Charisma Ability Checks",
        )];
        let summaries = parse_skills(&modifiers, &[], 3);
        let intimidation = summaries.iter().find(|s| s.name == skill.name).unwrap();
        assert_eq!(intimidation.proficiency, 0.5);
        assert_eq!(intimidation.proficiency_bonus, 2); // ceil(3 * 0.5)
    }

    #[test]
    fn flat_bonuses_sum_modifiers_and_manual_values() {
        let skill = skill_by_name("prc").unwrap();
        let mut bonus_modifier = modifier("bonus", "perception", "Perception");
        bonus_modifier.value = 2;
        let values = vec![CharacterValue {
            type_id: VALUE_TYPE_BONUS_MAGIC,
            value_id: skill.value_id,
            value: 1,
        }];
        let summaries = parse_skills(&[bonus_modifier], &values, 2);
        let perception = summaries.iter().find(|s| s.name == "prc").unwrap();
        assert_eq!(perception.bonus, 3);
    }

    #[test]
    fn ability_override_swaps_governing_ability_and_emits_change() {
        let skill = skill_by_name("itm").unwrap();
        let values = vec![CharacterValue {
            type_id: VALUE_TYPE_ABILITY,
            value_id: skill.value_id,
            value: i64::from(Ability::Strength.service_id()),
        }];

        let summaries = parse_skills(&[], &values, 2);
        let intimidation = summaries.iter().find(|s| s.name == "itm").unwrap();
        assert_eq!(intimidation.ability, Ability::Strength);

        let effects = apply_skill_ability_overrides(&values, Vec::new());
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].label, SKILL_EFFECT_LABEL);
        assert_eq!(effects[0].changes[0].key, "data.skills.itm.ability");
        assert_eq!(effects[0].changes[0].value, "str");
    }

    #[test]
    fn overrides_share_a_single_skill_effect() {
        let itm = skill_by_name("itm").unwrap();
        let ath = skill_by_name("ath").unwrap();
        let values = vec![
            CharacterValue {
                type_id: VALUE_TYPE_ABILITY,
                value_id: itm.value_id,
                value: i64::from(Ability::Strength.service_id()),
            },
            CharacterValue {
                type_id: VALUE_TYPE_ABILITY,
                value_id: ath.value_id,
                value: i64::from(Ability::Constitution.service_id()),
            },
        ];
        let effects = apply_skill_ability_overrides(&values, Vec::new());
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].changes.len(), 2);
    }
}
