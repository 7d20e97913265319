#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GRIMOIRE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod condition;
pub mod config;
pub mod damage;
pub mod feats;
pub mod overtime;
pub mod save;
pub mod skills;
pub mod spells;
pub mod text;
pub mod turns;

// Re-exports for convenience
pub use condition::{ConditionOutcome, condition_effect};
pub use config::{ImporterConfig, load_config};
pub use damage::{over_time_damage, parse_damage};
pub use feats::{FetchError, ProxyClient};
pub use overtime::{DamageOverTimeSpec, damage_over_time_effect, generate_over_time_effect};
pub use save::find_save;
pub use skills::{SkillSummary, parse_skills};
pub use spells::{generic_spells, spirit_shroud_effect};
pub use turns::{duration_seconds, turn_trigger};
