//! Read-only view of an investigator
//!
//! The engine never mutates players; hit points and sanity are applied by
//! the combat resolution layer after a round's attacks come back.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::core::types::EntityId;

/// Investigator occupation, used by class preference scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestigatorClass {
    Detective,
    Professor,
    Doctor,
    Journalist,
    Occultist,
    Drifter,
    Priest,
    Veteran,
}

/// One player character, as the monsters see them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigator {
    pub id: EntityId,
    pub pos: HexCoord,
    pub hp: i32,
    pub max_hp: i32,
    pub sanity: i32,
    pub max_sanity: i32,
    pub is_dead: bool,
    pub class: InvestigatorClass,
}

impl Investigator {
    pub fn new(pos: HexCoord, class: InvestigatorClass) -> Self {
        Self {
            id: EntityId::new(),
            pos,
            hp: 10,
            max_hp: 10,
            sanity: 10,
            max_sanity: 10,
            is_dead: false,
            class,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead && self.hp > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_investigator_alive() {
        let inv = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective);
        assert!(inv.is_alive());
    }

    #[test]
    fn test_dead_flag_wins() {
        let mut inv = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Doctor);
        inv.is_dead = true;
        assert!(!inv.is_alive());
    }
}
