//! Shared data model for Grimoire content.

pub mod dictionary;
pub mod document;
pub mod effect;
pub mod extract;
pub mod service;

pub use dictionary::{
    Ability, CONDITIONS, Condition, DAMAGE_TYPES, SKILLS, Skill, condition_by_word,
    custom_proficiency_multiplier, is_damage_type, skill_by_name,
};
pub use document::*;
pub use effect::*;
pub use extract::*;
pub use service::*;
