//! Recurring-damage extraction from monster feature text.

use grimoire_data::{DamagePart, ExtractedDamage, is_damage_type};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // Matches "10 (3d6) fire damage", "3d6 fire damage", and "10 fire damage".
    // The averaged form prefers the parenthesized dice expression.
    static ref DAMAGE_EXPR: Regex = Regex::new(
        r"(?i)(?:(\d+)\s*\(\s*(\d+d\d+(?:\s*[+-]\s*\d+)?)\s*\)|(\d+d\d+(?:\s*[+-]\s*\d+)?)|(\d+))\s+(\w+)\s+damage"
    )
    .unwrap();
}

/// Parse every damage expression in `text` into ordered (formula, type) parts.
///
/// Words that are not recognized damage types are skipped, which keeps
/// phrases like "30 damage or more" from producing bogus parts. Embedded
/// markup between expressions is tolerated.
pub fn parse_damage(text: &str) -> ExtractedDamage {
    let mut parts = Vec::new();
    for captures in DAMAGE_EXPR.captures_iter(text) {
        let type_word = &captures[5];
        if !is_damage_type(type_word) {
            continue;
        }
        let formula = captures
            .get(2)
            .or_else(|| captures.get(3))
            .or_else(|| captures.get(4))
            .map(|m| m.as_str().replace(' ', ""))
            .unwrap_or_default();
        parts.push(DamagePart {
            formula,
            damage_type: type_word.to_lowercase(),
        });
    }
    ExtractedDamage { parts }
}

/// Detect recurring damage phrased as "...taking <damage> on a failed save"
/// or "...<damage> damage on a failure".
///
/// Absence aborts the over-time pipeline: `None` here means the feature has
/// no recurring damage, not that anything went wrong.
pub fn over_time_damage(text: &str) -> Option<ExtractedDamage> {
    let triggered = text.contains("taking")
        && (text.contains("on a failed save") || text.contains("damage on a failure"));
    if !triggered {
        return None;
    }
    let damage_text = text.split_once("taking").map(|(_, after)| after)?;
    let damage = parse_damage(damage_text);
    if damage.parts.is_empty() {
        debug!("damage trigger phrase present but no formula parsed");
        return None;
    }
    Some(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averaged_dice_form_prefers_parenthesized_formula() {
        let damage = parse_damage("takes 35 (10d6) acid damage at the start of each turn");
        assert_eq!(damage.parts.len(), 1);
        assert_eq!(damage.parts[0].formula, "10d6");
        assert_eq!(damage.parts[0].damage_type, "acid");
    }

    #[test]
    fn bare_dice_and_flat_forms_parse() {
        let damage = parse_damage("take 2d4 piercing damage and 5 cold damage");
        assert_eq!(damage.parts.len(), 2);
        assert_eq!(damage.parts[0].formula, "2d4");
        assert_eq!(damage.parts[1].formula, "5");
        assert_eq!(damage.parts[1].damage_type, "cold");
    }

    #[test]
    fn modifier_dice_keep_their_bonus() {
        let damage = parse_damage("takes 9 (2d6 + 2) fire damage");
        assert_eq!(damage.parts[0].formula, "2d6+2");
    }

    #[test]
    fn unknown_damage_words_are_skipped() {
        let damage = parse_damage("takes 30 damage or more on a single turn");
        assert!(damage.parts.is_empty());
    }

    #[test]
    fn markup_between_expressions_is_tolerated() {
        let damage = parse_damage("<p>taking 10 (3d6) fire damage on a failed save.</p>");
        assert_eq!(damage.parts[0].damage_type, "fire");
    }

    #[test]
    fn over_time_damage_requires_both_trigger_phrases() {
        assert!(over_time_damage("taking 10 (3d6) fire damage on a failed save").is_some());
        assert!(over_time_damage("3d6 fire damage on a failure without the verb").is_none());
        assert!(over_time_damage("taking 10 (3d6) fire damage, no save mentioned").is_none());
    }

    #[test]
    fn over_time_damage_parses_text_after_taking() {
        let text = "The target must repeat the save at the end of each of its turns, \
                    taking 10 (3d6) fire damage on a failed save.";
        let damage = over_time_damage(text).expect("damage should parse");
        assert_eq!(damage.formula(), "3d6[fire]");
    }

    #[test]
    fn damage_on_a_failure_variant_triggers() {
        let text = "taking 7 (2d6) poison damage on a failure";
        assert!(over_time_damage(text).is_some());
    }
}
