//! Generic spell import.
//!
//! Remaps character-service spell entries into host spell documents, tagging
//! each with importer provenance flags. Archived sourcebook material is
//! filtered out before parsing.

use grimoire_data::{
    ActiveEffect, AuraFlags, Change, EffectMode, SpellDocument, SpellEntry, SpellImportFlags,
    SpellSystem,
};
use log::debug;

/// Source id the service uses for archived (pre-errata) material.
const ARCHIVED_SOURCE_ID: u32 = 39;

/// Remap a list of service spell entries into spell documents.
///
/// Entries without a definition, and entries published only in the archived
/// sourcebook, are dropped.
pub fn generic_spells(entries: Vec<SpellEntry>) -> Vec<SpellDocument> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let definition = entry.definition?;
            if definition
                .sources
                .iter()
                .any(|source| source.source_id == ARCHIVED_SOURCE_ID)
            {
                debug!("skipping archived spell \"{}\"", definition.name);
                return None;
            }
            let flags = SpellImportFlags {
                generic: true,
                lookup: "generic".to_string(),
                lookup_name: "generic".to_string(),
                level: entry.cast_at_level,
                cast_at_level: entry.cast_at_level,
            };
            Some(SpellDocument {
                name: definition.name,
                system: SpellSystem {
                    level: definition.level,
                    school: definition.school,
                    description: definition.description,
                    ..SpellSystem::default()
                },
                flags,
                effects: Vec::new(),
            })
        })
        .collect()
}

/// Base effect shell for a spell, named after the spell.
fn base_spell_effect(document: &SpellDocument) -> ActiveEffect {
    ActiveEffect::new(document.name.clone())
}

/// Decorate a necrotic-shroud style aura spell: a 10-foot hostile aura that
/// slows enemies, cast on self.
///
/// Pushes the aura marker and movement changes, attaches aura flags, and
/// rewrites the document's targeting to self-cast with no direct damage.
pub fn spirit_shroud_effect(mut document: SpellDocument) -> SpellDocument {
    let mut effect = base_spell_effect(&document);
    effect.changes.push(Change {
        key: "flags.automation.spiritShroud".to_string(),
        mode: EffectMode::Override,
        value: "@uuid".to_string(),
        priority: "20".to_string(),
    });
    effect.changes.push(Change {
        key: "data.attributes.movement.all".to_string(),
        mode: EffectMode::Custom,
        value: "-10".to_string(),
        priority: "15".to_string(),
    });
    effect.flags.aura = Some(AuraFlags {
        is_aura: true,
        aura: "Enemy".to_string(),
        radius: 10,
        ignore_self: true,
        hidden: false,
        hostile: false,
        only_once: false,
        display_temp: true,
    });

    // The aura handles damage; the document itself stops targeting.
    document.system.damage.parts.clear();
    document.system.damage.versatile.clear();
    document.system.target.target_type = "self".to_string();
    document.system.target.value = None;
    document.system.range.units = "self".to_string();
    document.system.range.value = None;
    document.system.range.long = None;
    document.system.action_type = "other".to_string();
    document.system.save.ability.clear();

    document.effects.push(effect);
    document
}
