//! Creature data: traits, attack types, and the Monster record itself

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::core::types::EntityId;
use crate::creature::ai_state::AiState;
use crate::creature::kind::MonsterKind;

/// Capability and build tags. A set, not a hierarchy: a shantak is both
/// Flying and Massive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterTrait {
    Flying,
    Aquatic,
    Slow,
    Fast,
    Ranged,
    Massive,
    Ethereal,
}

impl MonsterTrait {
    const ALL: [MonsterTrait; 7] = [
        MonsterTrait::Flying,
        MonsterTrait::Aquatic,
        MonsterTrait::Slow,
        MonsterTrait::Fast,
        MonsterTrait::Ranged,
        MonsterTrait::Massive,
        MonsterTrait::Ethereal,
    ];

    fn bit(&self) -> u8 {
        match self {
            MonsterTrait::Flying => 1 << 0,
            MonsterTrait::Aquatic => 1 << 1,
            MonsterTrait::Slow => 1 << 2,
            MonsterTrait::Fast => 1 << 3,
            MonsterTrait::Ranged => 1 << 4,
            MonsterTrait::Massive => 1 << 5,
            MonsterTrait::Ethereal => 1 << 6,
        }
    }
}

/// Compact trait set over the closed trait enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitSet(u8);

impl TraitSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn of(traits: &[MonsterTrait]) -> Self {
        let mut set = Self::empty();
        for t in traits {
            set = set.with(*t);
        }
        set
    }

    pub fn with(self, t: MonsterTrait) -> Self {
        Self(self.0 | t.bit())
    }

    pub fn contains(&self, t: MonsterTrait) -> bool {
        self.0 & t.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = MonsterTrait> + '_ {
        MonsterTrait::ALL.into_iter().filter(|t| self.contains(*t))
    }
}

/// How a creature's attack lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
    Sanity,
    Doom,
}

/// One active creature on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: EntityId,
    pub kind: MonsterKind,
    pub hp: i32,
    pub max_hp: i32,
    pub pos: HexCoord,
    /// Tiles of movement budget per round; 0 means "moves every other round"
    pub speed: u32,
    pub vision_range: u32,
    pub attack_range: u32,
    pub attack_type: AttackType,
    pub traits: TraitSet,
    pub ai: AiState,
}

impl Monster {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn has_trait(&self, t: MonsterTrait) -> bool {
        self.traits.contains(t)
    }

    /// HP as a 0-100 percentage of max, the unit cowardice thresholds use
    pub fn hp_percent(&self) -> i32 {
        if self.max_hp <= 0 {
            return 0;
        }
        self.hp * 100 / self.max_hp
    }

    /// Can this creature's own body cross a given obstacle regardless of
    /// the obstacle's rules? True only for the scripted phasing kinds.
    pub fn phases_through_obstacles(&self) -> bool {
        self.kind.phases_through_obstacles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::create_monster;

    #[test]
    fn test_trait_set_membership() {
        let set = TraitSet::of(&[MonsterTrait::Flying, MonsterTrait::Massive]);
        assert!(set.contains(MonsterTrait::Flying));
        assert!(set.contains(MonsterTrait::Massive));
        assert!(!set.contains(MonsterTrait::Aquatic));
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_trait_set_empty() {
        let set = TraitSet::empty();
        assert!(!set.contains(MonsterTrait::Slow));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_hp_percent() {
        let mut ghoul = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 0));
        ghoul.max_hp = 50;
        ghoul.hp = 5;
        assert_eq!(ghoul.hp_percent(), 10);

        ghoul.hp = 0;
        assert!(!ghoul.is_alive());
    }
}
