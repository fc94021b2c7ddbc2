//! Creature data model and static registries

pub mod ai_state;
pub mod bestiary;
pub mod combat_style;
pub mod kind;
pub mod monster;
pub mod personality;

pub use ai_state::{AiPhase, AiState};
pub use bestiary::{base_stats, BaseStats};
pub use combat_style::{CombatStyle, StyleModifiers};
pub use kind::MonsterKind;
pub use monster::{AttackType, Monster, MonsterTrait, TraitSet};
pub use personality::{personality, Personality};
