//! Per-creature behavioral state
//!
//! Transitions are explicit functions returning the full next state; the
//! turn processor merges nothing, it replaces.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::core::types::Round;

/// Behavioral phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AiPhase {
    #[default]
    Idle,
    Patrol,
    Alert,
    Hunting,
    Fleeing,
}

/// Mutable AI bookkeeping carried on each creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AiState {
    pub phase: AiPhase,
    pub alert_level: u8,
    pub last_known_target: Option<HexCoord>,
    pub search_rounds_remaining: u8,
    pub last_seen_round: Round,
    pub ability_used_this_round: bool,
}

impl AiState {
    pub fn new(phase: AiPhase) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }

    /// Rounds of active searching a lost target earns, by aggression
    pub fn search_tier(aggression: u8) -> u8 {
        match aggression {
            0..=49 => 2,
            50..=79 => 4,
            _ => 6,
        }
    }

    /// Next state after spotting a target this round
    pub fn spotted(&self, target_pos: HexCoord, round: Round, aggression: u8) -> Self {
        Self {
            phase: AiPhase::Hunting,
            alert_level: 100,
            last_known_target: Some(target_pos),
            search_rounds_remaining: Self::search_tier(aggression),
            last_seen_round: round,
            ability_used_this_round: self.ability_used_this_round,
        }
    }

    /// Next state after a round with no visible target
    pub fn lost_sight(&self) -> Self {
        let remaining = self.search_rounds_remaining.saturating_sub(1);
        Self {
            phase: if remaining > 0 && self.last_known_target.is_some() {
                AiPhase::Alert
            } else if matches!(self.phase, AiPhase::Fleeing) {
                AiPhase::Fleeing
            } else {
                AiPhase::Patrol
            },
            alert_level: self.alert_level.saturating_sub(10),
            last_known_target: if remaining > 0 {
                self.last_known_target
            } else {
                None
            },
            search_rounds_remaining: remaining,
            last_seen_round: self.last_seen_round,
            ability_used_this_round: self.ability_used_this_round,
        }
    }

    /// Next state when the creature turns and runs
    pub fn panicked(&self) -> Self {
        Self {
            phase: AiPhase::Fleeing,
            ..*self
        }
    }

    /// Next state when an ally's cry pointed this creature somewhere
    pub fn alerted(&self, target_pos: HexCoord, round: Round) -> Self {
        Self {
            phase: AiPhase::Alert,
            alert_level: self.alert_level.max(60),
            last_known_target: Some(target_pos),
            search_rounds_remaining: self.search_rounds_remaining.max(2),
            last_seen_round: round,
            ability_used_this_round: self.ability_used_this_round,
        }
    }
}
