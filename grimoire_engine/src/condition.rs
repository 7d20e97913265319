//! Save-or-condition extraction from monster feature text.
//!
//! One fixed composite pattern covers the common phrasing
//! `DC <n> <Ability> saving throw or <verb phrase> <condition> ...`.
//! Only the first match is considered: a sentence listing several conditions
//! populates only the fields the single capture reaches. That limitation is
//! deliberate; do not widen it without also widening the tests.

use grimoire_data::{
    ActiveEffect, ExtractedCondition, ExtractedSave, SaveScaling, SpecialDuration, condition_by_word,
    status_effect_change,
};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::text::normalize_apostrophes;

lazy_static! {
    // Capture groups: 1 DC, 2 ability word, 3 verb phrase, 4 condition word,
    // 5/6 optional "for N minute", 7 trailing text.
    static ref SAVE_OR_CONDITION: Regex = Regex::new(
        r"DC (\d+) (\w+) saving throw(?:,)? or (be |be cursed|become|die|contract|have|it can't|suffer|gain|lose the)\s?(?:knocked )?(\w+)?\s?(?:for (\d+) (minute))?(.*)?"
    )
    .unwrap();
}

/// Result of running the composite extractor over one rule text.
#[derive(Debug, Clone)]
pub struct ConditionOutcome {
    /// The effect, with a status change appended when a condition resolved.
    pub effect: ActiveEffect,
    /// Parsed save, present whenever the composite pattern matched.
    pub save: Option<ExtractedSave>,
    /// The resolved condition, when the captured word was in the dictionary.
    pub condition: Option<ExtractedCondition>,
}

impl ConditionOutcome {
    fn unmatched(effect: ActiveEffect) -> Self {
        ConditionOutcome {
            effect,
            save: None,
            condition: None,
        }
    }
}

/// Apply the save-or-condition pattern to `text`, appending a status change
/// to `effect` when a known condition (or the literal verb "die") is found.
///
/// An unmatched pattern returns the effect unchanged; rules text that fails
/// to parse is "no condition present", never an error.
pub fn condition_effect(mut effect: ActiveEffect, text: &str) -> ConditionOutcome {
    let text = normalize_apostrophes(text);
    let Some(captures) = SAVE_OR_CONDITION.captures(&text) else {
        return ConditionOutcome::unmatched(effect);
    };
    let Ok(dc) = captures[1].parse::<u32>() else {
        return ConditionOutcome::unmatched(effect);
    };
    debug!("save-or-condition match in \"{}\"", &captures[0]);

    let save = ExtractedSave {
        dc,
        ability: captures[2].to_lowercase().chars().take(3).collect(),
        scaling: SaveScaling::Flat,
    };

    let condition_word = captures.get(4).map(|m| m.as_str()).unwrap_or_default();
    let trailer = captures.get(7).map(|m| m.as_str()).unwrap_or_default();

    let condition = if let Some(found) = condition_by_word(condition_word) {
        effect.changes.push(status_effect_change(found.name));
        let special = special_duration(trailer);
        if let Some(marker) = special {
            effect.set_special_duration(marker);
        }
        Some(ExtractedCondition {
            name: found.value.to_string(),
            special_duration: special,
        })
    } else if &captures[3] == "die" {
        // "or die." sets the Dead status regardless of the dictionary.
        effect.changes.push(status_effect_change("Dead"));
        None
    } else {
        None
    };

    ConditionOutcome {
        effect,
        save: Some(save),
        condition,
    }
}

/// Early-expiry marker implied by the text following the condition.
fn special_duration(trailer: &str) -> Option<SpecialDuration> {
    if trailer.contains("until the end of its next turn")
        || trailer.contains("until the end of the target's next turn")
    {
        Some(SpecialDuration::TurnEnd)
    } else if trailer.contains("until the start of the") {
        Some(SpecialDuration::TurnStartSource)
    } else {
        None
    }
}
