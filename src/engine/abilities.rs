//! Special ability gating and effect resolution
//!
//! Most abilities are a static table from identifier to fixed effect. Three
//! need live game state: pack tactics counts adjacent kin, drag-under checks
//! the target's footing, summon rolls its brood size. Teleport is owned by
//! the decision machine (its destination is a board search, not an effect)
//! and only shares the once-per-round gate here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::tile::BoardMap;
use crate::creature::kind::MonsterKind;
use crate::creature::monster::Monster;
use crate::player::Investigator;

/// Closed set of special ability identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityId {
    Enrage,
    Charge,
    Terrify,
    Ritual,
    Wail,
    VenomSpit,
    Regenerate,
    PackTactics,
    DragUnder,
    Summon,
    Teleport,
}

/// The kind a summoning rite calls down
pub const SUMMONED_KIND: MonsterKind = MonsterKind::Byakhee;

/// Stateless outcome of one ability use
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectResult {
    pub damage: i32,
    pub sanity_damage: i32,
    pub doom_delta: i32,
    pub healing: i32,
    pub bonus_dice: i32,
    pub spawns: Vec<MonsterKind>,
    pub message: String,
}

/// May this creature use the ability right now?
///
/// Refuses an ability already spent this round, and enforces each ability's
/// HP window: enrage is pain-fueled, a charge takes an intact body, mending
/// flesh needs a wound to mend.
pub fn can_use_ability(monster: &Monster, ability: AbilityId) -> bool {
    if monster.ai.ability_used_this_round {
        return false;
    }

    match ability {
        AbilityId::Enrage => monster.hp_percent() <= 50,
        AbilityId::Charge => monster.hp_percent() > 30,
        AbilityId::Regenerate => monster.hp < monster.max_hp,
        _ => true,
    }
}

/// Compute the effect of one ability use. Never mutates its inputs.
pub fn execute_ability(
    monster: &Monster,
    ability: AbilityId,
    target: Option<&Investigator>,
    all_monsters: &[Monster],
    board: &BoardMap,
    rng: &mut impl Rng,
) -> EffectResult {
    let name = monster.kind.name();

    match ability {
        AbilityId::Enrage => EffectResult {
            bonus_dice: 2,
            message: format!("The wounded {name} flies into a frenzy!"),
            ..EffectResult::default()
        },
        AbilityId::Charge => EffectResult {
            damage: 1,
            bonus_dice: 1,
            message: format!("The {name} charges headlong!"),
            ..EffectResult::default()
        },
        AbilityId::Terrify => EffectResult {
            sanity_damage: 1,
            message: format!("The {name}'s presence gnaws at the mind."),
            ..EffectResult::default()
        },
        AbilityId::Ritual => EffectResult {
            doom_delta: 1,
            message: format!("The {name} chants, and the stars lean closer."),
            ..EffectResult::default()
        },
        AbilityId::Wail => EffectResult {
            sanity_damage: 2,
            message: format!("An unearthly wail pours from the {name}."),
            ..EffectResult::default()
        },
        AbilityId::VenomSpit => EffectResult {
            damage: 1,
            message: format!("The {name} spits a rope of caustic ichor."),
            ..EffectResult::default()
        },
        AbilityId::Regenerate => EffectResult {
            healing: 2,
            message: format!("The {name}'s wounds knit closed."),
            ..EffectResult::default()
        },
        AbilityId::PackTactics => {
            let adjacent_kin = all_monsters
                .iter()
                .filter(|other| other.id != monster.id && other.is_alive())
                .filter(|other| other.kind == monster.kind)
                .filter(|other| other.pos.distance(&monster.pos) <= 1)
                .count() as i32;
            EffectResult {
                bonus_dice: adjacent_kin,
                message: format!("The {name} pack closes in as one."),
                ..EffectResult::default()
            }
        }
        AbilityId::DragUnder => {
            let target_in_water = target
                .and_then(|t| board.get(&t.pos))
                .is_some_and(|tile| tile.has_water);
            if target_in_water {
                EffectResult {
                    damage: 2,
                    message: format!("The {name} drags its prey beneath the surface!"),
                    ..EffectResult::default()
                }
            } else {
                EffectResult {
                    message: format!("The {name} gropes for water that is not there."),
                    ..EffectResult::default()
                }
            }
        }
        AbilityId::Summon => {
            let brood = rng.gen_range(1..=2);
            EffectResult {
                spawns: vec![SUMMONED_KIND; brood],
                message: format!("The {name}'s call is answered by beating wings."),
                ..EffectResult::default()
            }
        }
        AbilityId::Teleport => EffectResult {
            message: format!("The {name} folds out of the angles of the room."),
            ..EffectResult::default()
        },
    }
}
