//! Combat styles and the tactical modifiers they map to

use serde::{Deserialize, Serialize};

/// How a creature fights once committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CombatStyle {
    #[default]
    Berserker,
    Cautious,
    Tactical,
    HitAndRun,
    Siege,
    Swarm,
    Ambush,
}

/// Tactical knobs derived from a combat style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleModifiers {
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub retreat_after_attack: bool,
    pub prefers_flanking: bool,
    pub stays_at_range: bool,
}

impl CombatStyle {
    pub fn modifiers(&self) -> StyleModifiers {
        match self {
            CombatStyle::Berserker => StyleModifiers {
                attack_bonus: 2,
                defense_bonus: -1,
                retreat_after_attack: false,
                prefers_flanking: false,
                stays_at_range: false,
            },
            CombatStyle::Cautious => StyleModifiers {
                attack_bonus: 0,
                defense_bonus: 1,
                retreat_after_attack: false,
                prefers_flanking: false,
                stays_at_range: false,
            },
            CombatStyle::Tactical => StyleModifiers {
                attack_bonus: 1,
                defense_bonus: 0,
                retreat_after_attack: false,
                prefers_flanking: true,
                stays_at_range: false,
            },
            CombatStyle::HitAndRun => StyleModifiers {
                attack_bonus: 1,
                defense_bonus: 0,
                retreat_after_attack: true,
                prefers_flanking: true,
                stays_at_range: false,
            },
            CombatStyle::Siege => StyleModifiers {
                attack_bonus: 0,
                defense_bonus: 2,
                retreat_after_attack: false,
                prefers_flanking: false,
                stays_at_range: true,
            },
            CombatStyle::Swarm => StyleModifiers {
                attack_bonus: 0,
                defense_bonus: -1,
                retreat_after_attack: false,
                prefers_flanking: true,
                stays_at_range: false,
            },
            CombatStyle::Ambush => StyleModifiers {
                attack_bonus: 2,
                defense_bonus: 0,
                retreat_after_attack: true,
                prefers_flanking: false,
                stays_at_range: false,
            },
        }
    }

    /// Styles that hold position rather than close distance
    pub fn is_defensive(&self) -> bool {
        matches!(self, CombatStyle::Cautious | CombatStyle::Siege)
    }
}
