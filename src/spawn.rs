//! Spawn tables and creature constructors
//!
//! Spawning weighs tile category against the doom level: early rounds leak
//! cultists and strays, deep doom opens the door to the great horrors.

use rand::Rng;

use crate::board::hex::HexCoord;
use crate::board::tile::{BoardMap, TileCategory};
use crate::core::types::EntityId;
use crate::creature::ai_state::{AiPhase, AiState};
use crate::creature::bestiary::base_stats;
use crate::creature::combat_style::CombatStyle;
use crate::creature::kind::MonsterKind;
use crate::creature::monster::Monster;
use crate::creature::personality::personality;
use crate::engine::passability::can_pass;

/// Doom level at which mid-tier horrors join the spawn pool
const DOOM_MID_TIER: u32 = 4;
/// Doom level at which the great horrors join the spawn pool
const DOOM_GREAT_TIER: u32 = 8;

/// Build a creature from its stat block, AI zeroed
pub fn create_monster(kind: MonsterKind, pos: HexCoord) -> Monster {
    let stats = base_stats(kind);
    Monster {
        id: EntityId::new(),
        kind,
        hp: stats.hp,
        max_hp: stats.hp,
        pos,
        speed: stats.speed,
        vision_range: stats.vision_range,
        attack_range: stats.attack_range,
        attack_type: stats.attack_type,
        traits: stats.traits,
        ai: AiState::default(),
    }
}

/// Build a creature with its AI phase seeded from personality: eager kinds
/// wake up hunting, ambushers lie still, the rest walk their rounds
pub fn create_monster_with_ai(kind: MonsterKind, pos: HexCoord) -> Monster {
    let profile = personality(kind);
    let phase = if profile.aggression >= 70 {
        AiPhase::Hunting
    } else if profile.style == CombatStyle::Ambush {
        AiPhase::Idle
    } else {
        AiPhase::Patrol
    };

    let mut monster = create_monster(kind, pos);
    monster.ai = AiState::new(phase);
    monster
}

/// Roll whether something crawls out of this tile category at this doom level
pub fn should_spawn_monster(category: TileCategory, doom: u32, rng: &mut impl Rng) -> bool {
    let base = match category {
        TileCategory::Crypt => 0.35,
        TileCategory::Basement => 0.30,
        TileCategory::Room => 0.20,
        TileCategory::Corridor => 0.15,
        TileCategory::Foyer => 0.15,
        TileCategory::Street => 0.15,
        TileCategory::Urban => 0.12,
        TileCategory::Stairs => 0.10,
        TileCategory::Facade => 0.10,
        TileCategory::Nature => 0.10,
    };
    let chance = (base * (1.0 + doom as f64 * 0.05)).min(0.9);
    rng.gen_bool(chance)
}

/// Weighted spawn pool for a doom level
fn spawn_pool(doom: u32) -> Vec<(MonsterKind, u32)> {
    let mut pool = vec![
        (MonsterKind::Cultist, 10),
        (MonsterKind::CrazedVagrant, 6),
        (MonsterKind::RabidDog, 6),
        (MonsterKind::SwarmOfRats, 6),
        (MonsterKind::Zombie, 8),
        (MonsterKind::CultistSniper, 4),
    ];

    if doom >= DOOM_MID_TIER {
        pool.extend([
            (MonsterKind::Ghoul, 8),
            (MonsterKind::CultistPriest, 4),
            (MonsterKind::DeepOne, 6),
            (MonsterKind::DeepOneWarrior, 3),
            (MonsterKind::MiGo, 4),
            (MonsterKind::Nightgaunt, 4),
            (MonsterKind::Byakhee, 3),
            (MonsterKind::Specter, 3),
            (MonsterKind::Poltergeist, 3),
            (MonsterKind::GhoulElder, 2),
            (MonsterKind::DeepOnePriest, 2),
            (MonsterKind::MiGoSurgeon, 2),
        ]);
    }

    if doom >= DOOM_GREAT_TIER {
        pool.extend([
            (MonsterKind::Hound, 4),
            (MonsterKind::DimensionalShambler, 4),
            (MonsterKind::MoonBeast, 3),
            (MonsterKind::Shantak, 3),
            (MonsterKind::HuntingHorror, 2),
            (MonsterKind::FormlessSpawn, 3),
            (MonsterKind::Shoggoth, 2),
            (MonsterKind::DarkYoung, 2),
            (MonsterKind::ElderThing, 2),
            (MonsterKind::ServitorOfTheOuterGods, 1),
            (MonsterKind::StarSpawn, 1),
            (MonsterKind::FleshColossus, 1),
        ]);
    }

    pool
}

/// Pick one kind from the doom-weighted pool
pub fn select_random_enemy(doom: u32, rng: &mut impl Rng) -> MonsterKind {
    let pool = spawn_pool(doom);
    let total: u32 = pool.iter().map(|(_, w)| w).sum();

    let mut roll = rng.gen_range(0..total);
    for (kind, weight) in &pool {
        if roll < *weight {
            return *kind;
        }
        roll -= weight;
    }
    MonsterKind::Cultist
}

/// Pick several kinds, discouraging repeats: one reroll per duplicate
pub fn select_varied_enemies(count: usize, doom: u32, rng: &mut impl Rng) -> Vec<MonsterKind> {
    let mut picks = Vec::with_capacity(count);
    for _ in 0..count {
        let mut kind = select_random_enemy(doom, rng);
        if picks.contains(&kind) {
            kind = select_random_enemy(doom, rng);
        }
        picks.push(kind);
    }
    picks
}

/// Spawn a wave around an anchor tile. Wave size scales with the round;
/// creatures land on open tiles ringing the anchor.
pub fn spawn_wave(
    round: u32,
    doom: u32,
    anchor: HexCoord,
    board: &BoardMap,
    rng: &mut impl Rng,
) -> Vec<Monster> {
    let count = (1 + round / 3).min(4) as usize;
    let kinds = select_varied_enemies(count, doom, rng);

    let mut wave: Vec<Monster> = Vec::with_capacity(count);
    let mut candidates: Vec<HexCoord> = anchor.ring(1);
    candidates.extend(anchor.ring(2));

    for kind in kinds {
        let monster_probe = create_monster_with_ai(kind, anchor);
        let landing = candidates.iter().copied().find(|pos| {
            board
                .get(pos)
                .is_some_and(|tile| can_pass(&monster_probe, tile).can_pass)
                && !wave.iter().any(|m| m.pos == *pos)
        });
        if let Some(pos) = landing {
            let mut monster = monster_probe;
            monster.pos = pos;
            wave.push(monster);
        }
    }

    wave
}
