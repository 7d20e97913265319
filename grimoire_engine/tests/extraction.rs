use ge::{condition_effect, damage::over_time_damage, generate_over_time_effect};
use grimoire_data::{ActiveEffect, ActorFlags, FeatureDocument, SpecialDuration};
use grimoire_engine as ge;

fn feature(name: &str, description: &str) -> FeatureDocument {
    FeatureDocument {
        name: name.to_string(),
        description: description.to_string(),
        ..FeatureDocument::default()
    }
}

#[test]
fn test_lib_version() {
    assert!(!ge::GRIMOIRE_VERSION.is_empty());
}

#[test]
fn test_no_trigger_phrase_appends_no_recurring_change() {
    let texts = [
        "DC 12 Charisma saving throw or become cursed",
        "The target regains 5 hit points.",
        "taking 10 (3d6) fire damage on a failed save", // damage but no turn phrase
    ];
    for text in texts {
        let (document, actor) =
            generate_over_time_effect(feature("Feature", text), ActorFlags::default());
        assert!(
            document
                .effects
                .iter()
                .all(|e| e.changes.iter().all(|c| c.key != "flags.automation.OverTime")),
            "unexpected recurring change for: {text}"
        );
        assert!(!actor.over_time_effect);
    }
}

#[test]
fn test_duration_table() {
    assert_eq!(ge::duration_seconds("or be paralyzed for 1 minute"), 60);
    assert_eq!(ge::duration_seconds("or be paralyzed for 10 minutes"), 600);
    assert_eq!(ge::duration_seconds("or be stunned for 2 rounds"), 12);
    assert_eq!(ge::duration_seconds("or be stunned indefinitely"), 60);
}

#[test]
fn test_knocked_prone_condition() {
    let outcome = condition_effect(
        ActiveEffect::new("Trip Attack"),
        "DC 18 Strength saving throw or be knocked prone",
    );
    let save = outcome.save.expect("save should parse");
    assert_eq!(save.dc, 18);
    assert_eq!(save.ability, "str");
    assert_eq!(outcome.effect.changes[0].value, "Prone");
}

#[test]
fn test_or_die_sets_dead_status() {
    let outcome = condition_effect(
        ActiveEffect::new("Power Word"),
        "DC 15 Constitution saving throw or die.",
    );
    assert_eq!(outcome.effect.changes[0].value, "Dead");
}

#[test]
fn test_end_of_turn_fire_damage_full_pipeline() {
    let text = "A creature in the cloud must succeed on a DC 15 Constitution saving throw \
                at the end of each of its turns, taking 10 (3d6) fire damage on a failed save.";
    let (document, actor) =
        generate_over_time_effect(feature("Burning Cloud", text), ActorFlags::default());

    assert!(actor.over_time_effect);
    let effect = document.effects.last().expect("effect attached");
    assert_eq!(effect.duration.seconds, 60); // no explicit duration in text
    let change = effect.changes.last().unwrap();
    assert!(change.value.starts_with("turn=end,"));
    assert!(change.value.contains("damageRoll=3d6[fire]"));
    assert!(change.value.contains("damageType=fire"));
    assert!(change.value.contains("saveDC=15"));
    assert!(change.value.contains("saveAbility=con"));
    assert!(change.value.contains("saveRemove=true"));
}

#[test]
fn test_start_of_turn_trigger_and_explicit_minutes() {
    let text = "The target is cursed. At the start of each of its turns the target must \
                make a DC 14 Wisdom saving throw, taking 7 (2d6) necrotic damage on a failed \
                save, and is frightened for 1 minute.";
    let (document, _) =
        generate_over_time_effect(feature("Dread Curse", text), ActorFlags::default());
    let effect = document.effects.last().expect("effect attached");
    assert_eq!(effect.duration.seconds, 60);
    assert!(effect.changes.last().unwrap().value.starts_with("turn=start,"));
}

#[test]
fn test_duration_override_wins() {
    let text = "must succeed on a DC 15 Constitution saving throw at the end of each of its \
                turns, taking 10 (3d6) fire damage on a failed save";
    let mut document = feature("Burning Cloud", text);
    document.flags.grimoire.over_time.duration_seconds = Some(120);
    let (document, _) = generate_over_time_effect(document, ActorFlags::default());
    assert_eq!(document.effects[0].duration.seconds, 120);
}

#[test]
fn test_condition_and_recurring_damage_share_one_effect() {
    let text = "DC 20 Constitution saving throw or be paralyzed for 1 minute. The paralyzed \
                target repeats the save at the end of each of its turns, \
                taking 11 (2d10) poison damage on a failed save.";
    let (document, _) = generate_over_time_effect(feature("Venom", text), ActorFlags::default());
    assert_eq!(document.effects.len(), 1);
    let effect = &document.effects[0];
    assert_eq!(effect.changes.len(), 2);
    assert_eq!(effect.changes[0].value, "Paralyzed");
    assert!(effect.changes[1].value.contains("damageType=poison"));
    assert_eq!(effect.duration.seconds, 60); // "for 1 minute"
}

#[test]
fn test_special_duration_markers_round_trip_to_effect_flags() {
    let outcome = condition_effect(
        ActiveEffect::new("Terrifying Glare"),
        "DC 15 Wisdom saving throw or be frightened until the end of its next turn.",
    );
    assert_eq!(outcome.effect.flags.special_duration, vec![SpecialDuration::TurnEnd]);
}

#[test]
fn test_damage_trigger_requires_exact_phrases() {
    assert!(over_time_damage("taking 10 (3d6) fire damage on a failed save").is_some());
    assert!(over_time_damage("takes 10 (3d6) fire damage when it fails").is_none());
}

#[test]
fn test_markup_in_rule_text_is_tolerated() {
    let text = "<p>Each creature must succeed on a DC 13 Dexterity saving throw at the \
                start of each of its turns, taking 4 (1d8) lightning damage on a failed \
                save.</p>";
    let (document, _) = generate_over_time_effect(feature("Storm Field", text), ActorFlags::default());
    let change = document.effects[0].changes.last().unwrap();
    assert!(change.value.contains("damageRoll=1d8[lightning]"));
    assert!(change.value.contains("saveAbility=dex"));
}
