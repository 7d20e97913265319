//! Over-time effect builder.
//!
//! Orchestrates the extraction pipeline for one monster feature: condition,
//! turn trigger, saving throw, recurring damage, then override resolution.
//! Every step that fails to find its pattern short-circuits silently — the
//! document comes back as-is (possibly with a bare condition effect) and no
//! error is ever raised, because free-form rules text is expected to miss.
//!
//! Builders take snapshots by value and return the updated snapshots;
//! the caller persists them. Attachment is append-only: running a builder
//! twice on the same document appends two effects. That is expected, not a
//! deduplication bug.

use grimoire_data::{
    ActiveEffect, ActorFlags, Change, EffectMode, ExtractedSave, FeatureDocument, SaveDamageMode,
    TurnTrigger,
};
use log::{debug, info};

use crate::condition::condition_effect;
use crate::damage::over_time_damage;
use crate::save::find_save;
use crate::turns::{duration_seconds, turn_trigger};

/// Fields encoded into the host automation's recurring-effect change value.
struct OverTimeFields<'a> {
    turn: TurnTrigger,
    label: &'a str,
    damage: &'a str,
    damage_type: &'a str,
    save_remove: bool,
    save_damage: SaveDamageMode,
    save: &'a ExtractedSave,
}

/// The single structured change record driving turn automation.
fn over_time_change(fields: &OverTimeFields<'_>) -> Change {
    let turn_label = match fields.turn {
        TurnTrigger::Start => "Start of Turn",
        TurnTrigger::End => "End of Turn",
    };
    Change {
        key: "flags.automation.OverTime".to_string(),
        mode: EffectMode::Override,
        value: format!(
            "turn={},label={} ({turn_label}),damageRoll={},damageType={},saveRemove={},saveDC={},saveAbility={},saveDamage={}",
            fields.turn,
            fields.label,
            fields.damage,
            fields.damage_type,
            fields.save_remove,
            fields.save.dc,
            fields.save.ability,
            fields.save_damage,
        ),
        priority: "20".to_string(),
    }
}

/// Base effect shell for a monster feature: named after the feature, with an
/// empty change list.
fn base_feature_effect(document: &FeatureDocument) -> ActiveEffect {
    ActiveEffect::new(document.name.clone())
}

/// Attach `effect` only if something was actually extracted into it.
fn attach_if_nonempty(mut document: FeatureDocument, effect: ActiveEffect) -> FeatureDocument {
    if !effect.changes.is_empty() {
        document.effects.push(effect);
    }
    document
}

/// Run the full over-time pipeline for one feature document.
///
/// Returns the updated document and actor-flag snapshots. Extraction is a
/// pure function of the feature's description plus its override flags; no
/// global state is consulted or mutated.
pub fn generate_over_time_effect(
    mut document: FeatureDocument,
    mut actor: ActorFlags,
) -> (FeatureDocument, ActorFlags) {
    debug!("generating over-time effect for \"{}\"", document.name);
    let description = document.description.clone();
    let overrides = document.flags.grimoire.over_time.clone();

    let mut effect = base_feature_effect(&document);
    let outcome = condition_effect(effect, &description);
    effect = outcome.effect;

    let Some(turn) = turn_trigger(&description) else {
        debug!("no turn trigger in \"{}\"; skipping over-time damage", document.name);
        return (attach_if_nonempty(document, effect), actor);
    };

    let Some(save) = find_save(&description) else {
        debug!("no saving throw found in \"{}\"", document.name);
        return (attach_if_nonempty(document, effect), actor);
    };

    let Some(extracted) = over_time_damage(&description) else {
        debug!("no recurring damage in \"{}\"", document.name);
        return (attach_if_nonempty(document, effect), actor);
    };

    // Manual overrides beat extracted values, field by field.
    let damage = overrides.damage.unwrap_or_else(|| extracted.formula());
    let damage_type = overrides
        .damage_type
        .unwrap_or_else(|| extracted.parts[0].damage_type.clone());
    let save_remove = overrides.save_remove.unwrap_or(true);
    let seconds = overrides
        .duration_seconds
        .unwrap_or_else(|| duration_seconds(&description));
    let save_damage = overrides.save_damage.unwrap_or_default();

    effect.changes.push(over_time_change(&OverTimeFields {
        turn,
        label: &document.name,
        damage: &damage,
        damage_type: &damage_type,
        save_remove,
        save_damage,
        save: &save,
    }));
    effect.duration.seconds = seconds;

    actor.over_time_effect = true;
    document.effects.push(effect);
    info!(
        "over-time effect attached to \"{}\": {turn} of turn, DC {} {}",
        document.name, save.dc, save.ability
    );
    (document, actor)
}

/// Direct builder for callers that already know the numbers.
#[derive(Debug, Clone, Default)]
pub struct DamageOverTimeSpec {
    pub start_turn: bool,
    pub end_turn: bool,
    pub duration_seconds: u32,
    pub damage: String,
    pub damage_type: String,
    pub save: Option<ExtractedSave>,
    pub save_remove: bool,
    pub save_damage: SaveDamageMode,
}

/// Attach an explicit damage-over-time effect to a document.
///
/// With neither turn flag set (or no save), the document is returned
/// unchanged — same silent-no-op contract as the extraction pipeline.
pub fn damage_over_time_effect(
    mut document: FeatureDocument,
    spec: &DamageOverTimeSpec,
) -> FeatureDocument {
    if !spec.start_turn && !spec.end_turn {
        return document;
    }
    let Some(save) = spec.save.as_ref() else {
        return document;
    };

    let mut effect = base_feature_effect(&document);
    for turn in [
        spec.start_turn.then_some(TurnTrigger::Start),
        spec.end_turn.then_some(TurnTrigger::End),
    ]
    .into_iter()
    .flatten()
    {
        effect.changes.push(over_time_change(&OverTimeFields {
            turn,
            label: &document.name,
            damage: &spec.damage,
            damage_type: &spec.damage_type,
            save_remove: spec.save_remove,
            save_damage: spec.save_damage,
            save,
        }));
    }
    effect.duration.seconds = spec.duration_seconds;
    document.effects.push(effect);
    document
}
