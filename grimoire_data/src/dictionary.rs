//! Static rules dictionaries.
//!
//! Closed sets with fallible lookup: an unknown word is an `Option::None`,
//! never a panic, because rules text is free-form and unpredictable.

use serde::{Deserialize, Serialize};

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "wis")]
    Wisdom,
    #[serde(rename = "cha")]
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Three-letter lowercase code used in host document paths.
    pub fn code(self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    /// Full lowercase name as it appears in rules text.
    pub fn long(self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }

    /// Numeric id used by the character-builder service.
    pub fn service_id(self) -> u32 {
        match self {
            Ability::Strength => 1,
            Ability::Dexterity => 2,
            Ability::Constitution => 3,
            Ability::Intelligence => 4,
            Ability::Wisdom => 5,
            Ability::Charisma => 6,
        }
    }

    /// Resolve a word from rules text ("Strength", "str") to an ability.
    pub fn from_word(word: &str) -> Option<Ability> {
        let lower = word.to_lowercase();
        Ability::ALL
            .into_iter()
            .find(|ability| ability.long() == lower || ability.code() == lower)
    }

    pub fn from_service_id(id: u32) -> Option<Ability> {
        Ability::ALL.into_iter().find(|ability| ability.service_id() == id)
    }
}

/// One entry in the condition dictionary: display name plus the lowercase
/// value the host status-effect automation keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub name: &'static str,
    pub value: &'static str,
}

pub const CONDITIONS: &[Condition] = &[
    Condition { name: "Blinded", value: "blinded" },
    Condition { name: "Charmed", value: "charmed" },
    Condition { name: "Deafened", value: "deafened" },
    Condition { name: "Exhaustion", value: "exhaustion" },
    Condition { name: "Frightened", value: "frightened" },
    Condition { name: "Grappled", value: "grappled" },
    Condition { name: "Incapacitated", value: "incapacitated" },
    Condition { name: "Invisible", value: "invisible" },
    Condition { name: "Paralyzed", value: "paralyzed" },
    Condition { name: "Petrified", value: "petrified" },
    Condition { name: "Poisoned", value: "poisoned" },
    Condition { name: "Prone", value: "prone" },
    Condition { name: "Restrained", value: "restrained" },
    Condition { name: "Stunned", value: "stunned" },
    Condition { name: "Unconscious", value: "unconscious" },
];

/// Resolve a word captured from rules text against the condition dictionary.
/// Matches either the display name or the status value, case-insensitively.
pub fn condition_by_word(word: &str) -> Option<&'static Condition> {
    let lower = word.to_lowercase();
    CONDITIONS
        .iter()
        .find(|c| c.name.to_lowercase() == lower || c.value == lower)
}

pub const DAMAGE_TYPES: &[&str] = &[
    "acid",
    "bludgeoning",
    "cold",
    "fire",
    "force",
    "lightning",
    "necrotic",
    "piercing",
    "poison",
    "psychic",
    "radiant",
    "slashing",
    "thunder",
];

/// Whether a word from rules text names a recognized damage type.
pub fn is_damage_type(word: &str) -> bool {
    let lower = word.to_lowercase();
    DAMAGE_TYPES.contains(&lower.as_str())
}

/// One entry in the skill dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Short key used in host document paths, e.g. `prc`.
    pub name: &'static str,
    pub label: &'static str,
    pub ability: Ability,
    /// Modifier sub-type the service uses for bonuses to this skill.
    pub sub_type: &'static str,
    /// Id the service uses in per-character value overrides.
    pub value_id: u32,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "acr", label: "Acrobatics", ability: Ability::Dexterity, sub_type: "acrobatics", value_id: 1 },
    Skill { name: "ani", label: "Animal Handling", ability: Ability::Wisdom, sub_type: "animal-handling", value_id: 2 },
    Skill { name: "arc", label: "Arcana", ability: Ability::Intelligence, sub_type: "arcana", value_id: 3 },
    Skill { name: "ath", label: "Athletics", ability: Ability::Strength, sub_type: "athletics", value_id: 4 },
    Skill { name: "dec", label: "Deception", ability: Ability::Charisma, sub_type: "deception", value_id: 5 },
    Skill { name: "his", label: "History", ability: Ability::Intelligence, sub_type: "history", value_id: 6 },
    Skill { name: "ins", label: "Insight", ability: Ability::Wisdom, sub_type: "insight", value_id: 7 },
    Skill { name: "itm", label: "Intimidation", ability: Ability::Charisma, sub_type: "intimidation", value_id: 8 },
    Skill { name: "inv", label: "Investigation", ability: Ability::Intelligence, sub_type: "investigation", value_id: 9 },
    Skill { name: "med", label: "Medicine", ability: Ability::Wisdom, sub_type: "medicine", value_id: 10 },
    Skill { name: "nat", label: "Nature", ability: Ability::Intelligence, sub_type: "nature", value_id: 11 },
    Skill { name: "prc", label: "Perception", ability: Ability::Wisdom, sub_type: "perception", value_id: 12 },
    Skill { name: "prf", label: "Performance", ability: Ability::Charisma, sub_type: "performance", value_id: 13 },
    Skill { name: "per", label: "Persuasion", ability: Ability::Charisma, sub_type: "persuasion", value_id: 14 },
    Skill { name: "rel", label: "Religion", ability: Ability::Intelligence, sub_type: "religion", value_id: 15 },
    Skill { name: "slt", label: "Sleight of Hand", ability: Ability::Dexterity, sub_type: "sleight-of-hand", value_id: 16 },
    Skill { name: "ste", label: "Stealth", ability: Ability::Dexterity, sub_type: "stealth", value_id: 17 },
    Skill { name: "sur", label: "Survival", ability: Ability::Wisdom, sub_type: "survival", value_id: 18 },
];

pub fn skill_by_name(name: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|skill| skill.name == name)
}

/// Proficiency multiplier encoded by the service's custom-proficiency values.
pub fn custom_proficiency_multiplier(value: i64) -> Option<f32> {
    match value {
        1 => Some(0.0),
        2 => Some(0.5),
        3 => Some(1.0),
        4 => Some(2.0),
        _ => None,
    }
}
