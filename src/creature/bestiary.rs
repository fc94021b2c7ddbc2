//! Base stat blocks per creature kind
//!
//! Static data, keyed by the closed kind enum. Damage and horror are carried
//! for the combat resolution layer; the engine itself only reads speed,
//! vision, range, attack type, and traits.

use serde::{Deserialize, Serialize};

use crate::creature::kind::MonsterKind;
use crate::creature::monster::{AttackType, MonsterTrait, TraitSet};

/// Spawn-time stat block
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: i32,
    pub damage: i32,
    pub horror: i32,
    pub speed: u32,
    pub vision_range: u32,
    pub attack_range: u32,
    pub attack_type: AttackType,
    pub traits: TraitSet,
}

/// Look up the stat block for a kind
pub fn base_stats(kind: MonsterKind) -> BaseStats {
    use AttackType::*;
    use MonsterTrait::*;

    let (hp, damage, horror, speed, vision, range, attack, traits): (
        i32,
        i32,
        i32,
        u32,
        u32,
        u32,
        AttackType,
        &[MonsterTrait],
    ) = match kind {
        MonsterKind::Cultist => (4, 1, 0, 2, 5, 1, Melee, &[]),
        MonsterKind::CultistSniper => (3, 2, 0, 2, 7, 3, AttackType::Ranged, &[MonsterTrait::Ranged]),
        MonsterKind::CultistPriest => (4, 1, 1, 2, 5, 2, Sanity, &[]),
        MonsterKind::CrazedVagrant => (3, 1, 0, 2, 4, 1, Melee, &[]),
        MonsterKind::Zombie => (6, 2, 1, 1, 3, 1, Melee, &[Slow]),
        MonsterKind::Ghoul => (5, 2, 1, 3, 6, 1, Melee, &[Fast]),
        MonsterKind::GhoulElder => (8, 3, 2, 3, 6, 1, Melee, &[Fast]),
        MonsterKind::RabidDog => (3, 1, 0, 4, 6, 1, Melee, &[Fast]),
        MonsterKind::SwarmOfRats => (4, 1, 0, 3, 4, 1, Melee, &[Fast]),
        MonsterKind::DeepOne => (6, 2, 1, 2, 5, 1, Melee, &[Aquatic]),
        MonsterKind::DeepOneWarrior => (8, 3, 1, 2, 5, 1, Melee, &[Aquatic]),
        MonsterKind::DeepOnePriest => (7, 2, 2, 2, 6, 2, Sanity, &[Aquatic]),
        MonsterKind::MiGo => (5, 2, 1, 3, 6, 2, AttackType::Ranged, &[Flying, MonsterTrait::Ranged]),
        MonsterKind::MiGoSurgeon => (6, 2, 2, 3, 6, 1, Melee, &[Flying]),
        MonsterKind::Nightgaunt => (6, 2, 2, 4, 7, 1, Melee, &[Flying, Fast]),
        MonsterKind::Byakhee => (7, 3, 2, 4, 7, 1, Melee, &[Flying, Fast]),
        MonsterKind::Shantak => (10, 3, 2, 3, 8, 1, Melee, &[Flying, Massive]),
        MonsterKind::HuntingHorror => (12, 4, 3, 4, 8, 1, Melee, &[Flying, Fast, Massive]),
        MonsterKind::Hound => (9, 3, 3, 3, 9, 1, Melee, &[Fast]),
        MonsterKind::DimensionalShambler => (8, 3, 2, 3, 6, 1, Melee, &[Ethereal]),
        MonsterKind::MoonBeast => (9, 3, 2, 2, 6, 2, AttackType::Ranged, &[MonsterTrait::Ranged]),
        MonsterKind::Specter => (5, 1, 3, 3, 7, 1, Sanity, &[Ethereal, Flying]),
        MonsterKind::Poltergeist => (4, 1, 2, 3, 6, 2, Sanity, &[Ethereal]),
        MonsterKind::Shoggoth => (16, 5, 4, 2, 6, 1, Melee, &[Massive, Aquatic]),
        MonsterKind::StarSpawn => (18, 5, 4, 2, 7, 1, Melee, &[Massive]),
        MonsterKind::DarkYoung => (14, 4, 3, 3, 6, 1, Melee, &[Massive]),
        MonsterKind::FormlessSpawn => (10, 3, 2, 3, 5, 1, Melee, &[Aquatic, Fast]),
        MonsterKind::ServitorOfTheOuterGods => {
            (12, 2, 3, 2, 8, 3, Doom, &[MonsterTrait::Ranged])
        }
        MonsterKind::FleshColossus => (20, 6, 3, 0, 5, 1, Melee, &[Massive, Slow]),
        MonsterKind::ElderThing => (11, 3, 2, 2, 7, 2, AttackType::Ranged, &[Aquatic, MonsterTrait::Ranged]),
    };

    BaseStats {
        hp,
        damage,
        horror,
        speed,
        vision_range: vision,
        attack_range: range,
        attack_type: attack,
        traits: TraitSet::of(traits),
    }
}
