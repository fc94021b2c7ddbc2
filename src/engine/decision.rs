//! The layered decision state machine
//!
//! One decision per creature per round, evaluated as an ordered pipeline
//! where the first matching rule wins: flee, then no-target behavior
//! (teleport / search / roam / ambush / patrol), then engagement
//! (hesitate / ranged / melee / teleport / hold / chase / wait).

use ahash::AHashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::flood::fallback_path;
use crate::board::hex::HexCoord;
use crate::board::los::has_line_of_sight;
use crate::board::tile::BoardMap;
use crate::core::types::{EntityId, Round};
use crate::creature::ai_state::AiState;
use crate::creature::combat_style::CombatStyle;
use crate::creature::monster::{AttackType, Monster, MonsterTrait};
use crate::creature::personality::{personality, Personality};
use crate::engine::abilities::{can_use_ability, AbilityId};
use crate::engine::constants::{
    DEFENSIVE_HOLD_DISTANCE, HESITATION_BASE_AGGRESSION, HESITATION_DISTANCE_RELIEF,
    HESITATION_MIN_DISTANCE, MAX_PATH_DEPTH, OPTIMAL_RANGED_DISTANCE, ROAM_AGGRESSION_FLOOR,
    ROAM_DEVIATION_CHANCE, TELEPORT_TRIGGER_DISTANCE,
};
use crate::engine::messages;
use crate::engine::passability::can_pass;
use crate::engine::pathfinding::find_path;
use crate::engine::targeting::pick_best_target;
use crate::player::Investigator;
use crate::weather::Weather;

/// What the creature will do this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move { to: HexCoord },
    Attack { target: EntityId },
    /// Teleport relocation; the turn processor records a special event
    Special { teleport_to: HexCoord },
    Wait,
}

/// The single output of one decision pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub message: Option<String>,
    /// Full next AI state; replaces the creature's current state outright
    pub next_ai: AiState,
}

/// Read-only snapshot the decision machine works from
pub struct DecisionContext<'a> {
    pub board: &'a BoardMap,
    pub players: &'a [Investigator],
    pub monsters: &'a [Monster],
    pub weather: Weather,
    pub round: Round,
}

impl<'a> DecisionContext<'a> {
    /// Tiles occupied by other living bodies; impassable during movement
    fn occupied(&self, me: &Monster) -> AHashSet<HexCoord> {
        let mut set: AHashSet<HexCoord> = self
            .monsters
            .iter()
            .filter(|m| m.id != me.id && m.is_alive())
            .map(|m| m.pos)
            .collect();
        set.extend(self.players.iter().filter(|p| p.is_alive()).map(|p| p.pos));
        set
    }

    fn living_players(&self) -> impl Iterator<Item = &Investigator> {
        self.players.iter().filter(|p| p.is_alive())
    }

    fn nearest_player_to(&self, pos: HexCoord) -> Option<&Investigator> {
        self.living_players().min_by_key(|p| pos.distance(&p.pos))
    }
}

/// Movement budget this round; speed 0 creatures lurch forward only on
/// even-numbered rounds.
pub fn movement_budget(monster: &Monster, round: Round) -> u32 {
    if monster.speed == 0 {
        if round % 2 == 0 {
            1
        } else {
            0
        }
    } else {
        monster.speed
    }
}

/// Decide one creature's action for this round
pub fn decide(monster: &Monster, ctx: &DecisionContext, rng: &mut impl Rng) -> Decision {
    let profile = personality(monster.kind);
    let budget = movement_budget(monster, ctx.round);

    // 1. Flee when hurt past the cowardice threshold
    if profile.cowardice_threshold > 0
        && monster.hp_percent() <= profile.cowardice_threshold as i32
    {
        if let Some(dest) = flee_step(monster, ctx) {
            trace!(kind = %monster.kind, "fleeing");
            return Decision {
                action: Action::Move { to: dest },
                message: Some(messages::flee_message(monster.kind)),
                next_ai: monster.ai.panicked(),
            };
        }
        // Cornered: no farther tile exists, fall through and fight on
    }

    match pick_best_target(monster, ctx.players, ctx.board, ctx.weather) {
        Some(target) => engage(monster, &profile, target, ctx, budget, rng),
        None => no_target(monster, &profile, ctx, budget, rng),
    }
}

/// Behavior with a visible target
fn engage(
    monster: &Monster,
    profile: &Personality,
    target: &Investigator,
    ctx: &DecisionContext,
    budget: u32,
    rng: &mut impl Rng,
) -> Decision {
    let next_ai = monster
        .ai
        .spotted(target.pos, ctx.round, profile.aggression);
    let d = monster.pos.distance(&target.pos);
    let style = profile.style.modifiers();

    // Hesitation: timid creatures balk at a distant quarry
    if profile.aggression < HESITATION_BASE_AGGRESSION && d >= HESITATION_MIN_DISTANCE {
        let chance = (HESITATION_BASE_AGGRESSION - profile.aggression) as i32
            - (d - HESITATION_MIN_DISTANCE) as i32 * HESITATION_DISTANCE_RELIEF;
        if chance > 0 && rng.gen_range(0..100) < chance {
            return Decision {
                action: Action::Wait,
                message: Some(messages::hesitate_message(monster.kind)),
                next_ai,
            };
        }
    }

    // Ranged positioning and fire
    let ranged_capable =
        monster.has_trait(MonsterTrait::Ranged) || monster.attack_type == AttackType::Ranged;
    if ranged_capable || style.stays_at_range {
        if d <= monster.attack_range && has_line_of_sight(ctx.board, monster.pos, target.pos) {
            return Decision {
                action: Action::Attack { target: target.id },
                message: Some(messages::attack_message(monster.kind)),
                next_ai,
            };
        }
        if budget > 0 {
            if let Some(dest) = ranged_reposition(monster, target, ctx, budget) {
                return Decision {
                    action: Action::Move { to: dest },
                    message: None,
                    next_ai,
                };
            }
            if d < OPTIMAL_RANGED_DISTANCE
                && (style.stays_at_range || profile.cowardice_threshold > 0)
            {
                if let Some(dest) = step_away(monster, target.pos, ctx) {
                    return Decision {
                        action: Action::Move { to: dest },
                        message: None,
                        next_ai,
                    };
                }
            }
        }
    }

    // Melee: an in-range hit is never refused
    if d <= monster.attack_range {
        return Decision {
            action: Action::Attack { target: target.id },
            message: Some(messages::attack_message(monster.kind)),
            next_ai,
        };
    }

    // Teleporting kinds skip the approach entirely
    if profile.has_ability(AbilityId::Teleport)
        && d > TELEPORT_TRIGGER_DISTANCE
        && can_use_ability(monster, AbilityId::Teleport)
    {
        if let Some(dest) = open_tile_beside(monster, target.pos, ctx) {
            let mut ai = next_ai;
            ai.ability_used_this_round = true;
            return Decision {
                action: Action::Special { teleport_to: dest },
                message: Some(messages::teleport_message(monster.kind)),
                next_ai: ai,
            };
        }
    }

    // Defensive styles hold their ground at distance
    if profile.style.is_defensive() && d > DEFENSIVE_HOLD_DISTANCE {
        return Decision {
            action: Action::Wait,
            message: Some(messages::wait_message(monster.kind)),
            next_ai,
        };
    }

    // Chase: weighted path first, cost-blind fallback second
    if budget > 0 {
        let occupied = ctx.occupied(monster);
        if let Some(result) = find_path(
            monster,
            monster.pos,
            &[target.pos],
            ctx.board,
            &occupied,
            MAX_PATH_DEPTH,
        ) {
            if let Some(dest) = advance_along(monster, &result.path, budget, target.pos, ctx.board)
            {
                return Decision {
                    action: Action::Move { to: dest },
                    message: None,
                    next_ai,
                };
            }
        }

        let board = ctx.board;
        if let Some(path) = fallback_path(
            board,
            monster.pos,
            target.pos,
            &occupied,
            MAX_PATH_DEPTH,
            |p| board.get(p).is_some_and(|t| can_pass(monster, t).can_pass),
        ) {
            if let Some(dest) = advance_along(monster, &path, budget, target.pos, ctx.board) {
                return Decision {
                    action: Action::Move { to: dest },
                    message: None,
                    next_ai,
                };
            }
        }
    }

    Decision {
        action: Action::Wait,
        message: None,
        next_ai,
    }
}

/// Behavior with nothing in sight
fn no_target(
    monster: &Monster,
    profile: &Personality,
    ctx: &DecisionContext,
    budget: u32,
    rng: &mut impl Rng,
) -> Decision {
    let next_ai = monster.ai.lost_sight();

    // Teleporters hunt blind through the angles toward frayed minds
    if profile.has_ability(AbilityId::Teleport) && can_use_ability(monster, AbilityId::Teleport) {
        let prey = ctx
            .living_players()
            .min_by_key(|p| p.sanity);
        if let Some(prey) = prey {
            if let Some(dest) = open_tile_beside(monster, prey.pos, ctx) {
                let mut ai = monster.ai.spotted(prey.pos, ctx.round, profile.aggression);
                ai.ability_used_this_round = true;
                return Decision {
                    action: Action::Special { teleport_to: dest },
                    message: Some(messages::teleport_message(monster.kind)),
                    next_ai: ai,
                };
            }
        }
    }

    // Search the last place prey was seen
    if let Some(last) = monster.ai.last_known_target {
        if monster.ai.search_rounds_remaining > 0 {
            if monster.pos.distance(&last) > 1 {
                if budget > 0 {
                    if let Some(dest) = path_step_toward(monster, last, ctx, budget) {
                        return Decision {
                            action: Action::Move { to: dest },
                            message: None,
                            next_ai,
                        };
                    }
                }
            } else if let Some(dest) = random_open_neighbor(monster, ctx, rng) {
                // Already at the spot: poke around nearby
                return Decision {
                    action: Action::Move { to: dest },
                    message: None,
                    next_ai,
                };
            }
            return Decision {
                action: Action::Wait,
                message: None,
                next_ai,
            };
        }
    }

    // Eager hunters roam toward where the living cluster
    if profile.aggression >= ROAM_AGGRESSION_FLOOR && profile.style != CombatStyle::Ambush {
        if let Some(centroid) = living_centroid(ctx) {
            if budget > 0 {
                if let Some(dest) = roam_step(monster, profile, centroid, ctx, rng) {
                    return Decision {
                        action: Action::Move { to: dest },
                        message: None,
                        next_ai,
                    };
                }
            }
        }
    }

    // Ambushers lie in wait
    if profile.style == CombatStyle::Ambush {
        return Decision {
            action: Action::Wait,
            message: None,
            next_ai,
        };
    }

    // Everyone else drifts on patrol
    if budget > 0 {
        if let Some(dest) = patrol_step(monster, profile, ctx, rng) {
            return Decision {
                action: Action::Move { to: dest },
                message: None,
                next_ai,
            };
        }
    }

    Decision {
        action: Action::Wait,
        message: None,
        next_ai,
    }
}

/// Can the creature stand on this tile right now?
fn enterable(monster: &Monster, ctx: &DecisionContext, occupied: &AHashSet<HexCoord>, pos: HexCoord) -> bool {
    if occupied.contains(&pos) {
        return false;
    }
    if ctx.board.blocks_crossing(monster.pos, pos) && monster.pos.distance(&pos) <= 1 {
        return false;
    }
    match ctx.board.get(&pos) {
        Some(tile) => can_pass(monster, tile).can_pass,
        None => false,
    }
}

/// One step that strictly increases distance to the nearest living player
fn flee_step(monster: &Monster, ctx: &DecisionContext) -> Option<HexCoord> {
    let threat = ctx.nearest_player_to(monster.pos)?;
    step_away(monster, threat.pos, ctx)
}

/// Neighbor strictly farther from `from` than the current tile
fn step_away(monster: &Monster, from: HexCoord, ctx: &DecisionContext) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);
    let current = monster.pos.distance(&from);

    monster
        .pos
        .neighbors()
        .into_iter()
        .filter(|n| enterable(monster, ctx, &occupied, *n))
        .filter(|n| n.distance(&from) > current)
        .max_by_key(|n| n.distance(&from))
}

/// Closest open tile on the ring at the optimal ranged distance with a clear
/// line to the target
fn ranged_reposition(
    monster: &Monster,
    target: &Investigator,
    ctx: &DecisionContext,
    budget: u32,
) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);
    let perch = target
        .pos
        .ring(OPTIMAL_RANGED_DISTANCE)
        .into_iter()
        .filter(|p| *p != monster.pos)
        .filter(|p| enterable(monster, ctx, &occupied, *p))
        .filter(|p| has_line_of_sight(ctx.board, *p, target.pos))
        .min_by_key(|p| monster.pos.distance(p))?;

    let result = find_path(
        monster,
        monster.pos,
        &[perch],
        ctx.board,
        &occupied,
        MAX_PATH_DEPTH,
    )?;
    advance_along(monster, &result.path, budget, target.pos, ctx.board)
}

/// First open tile adjacent to `anchor`, for teleport arrivals
fn open_tile_beside(
    monster: &Monster,
    anchor: HexCoord,
    ctx: &DecisionContext,
) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);
    anchor.ring(1).into_iter().find(|p| {
        !occupied.contains(p)
            && ctx
                .board
                .get(p)
                .is_some_and(|t| can_pass(monster, t).can_pass)
    })
}

/// Walk a path up to the movement budget, never onto the goal-holder's tile
fn advance_along(
    monster: &Monster,
    path: &[HexCoord],
    budget: u32,
    stop_before: HexCoord,
    board: &BoardMap,
) -> Option<HexCoord> {
    let mut spent = 0u32;
    let mut dest: Option<HexCoord> = None;

    for &pos in path.iter().skip(1) {
        if pos == stop_before {
            break;
        }
        let Some(tile) = board.get(&pos) else {
            break;
        };
        let verdict = can_pass(monster, tile);
        if !verdict.can_pass {
            break;
        }
        spent += 1 + verdict.extra_cost.max(0) as u32;
        if spent > budget {
            break;
        }
        dest = Some(pos);
    }

    dest
}

/// One step toward a remembered position, weighted search first
fn path_step_toward(
    monster: &Monster,
    goal: HexCoord,
    ctx: &DecisionContext,
    budget: u32,
) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);

    if let Some(result) = find_path(
        monster,
        monster.pos,
        &[goal],
        ctx.board,
        &occupied,
        MAX_PATH_DEPTH,
    ) {
        if let Some(dest) = advance_along(monster, &result.path, budget, goal, ctx.board) {
            return Some(dest);
        }
    }

    let board = ctx.board;
    let path = fallback_path(board, monster.pos, goal, &occupied, MAX_PATH_DEPTH, |p| {
        board.get(p).is_some_and(|t| can_pass(monster, t).can_pass)
    })?;
    advance_along(monster, &path, budget, goal, ctx.board)
}

/// Uniform random open neighbor, for poking around a search site
fn random_open_neighbor(
    monster: &Monster,
    ctx: &DecisionContext,
    rng: &mut impl Rng,
) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);
    let options: Vec<HexCoord> = monster
        .pos
        .neighbors()
        .into_iter()
        .filter(|n| enterable(monster, ctx, &occupied, *n))
        .collect();
    if options.is_empty() {
        return None;
    }
    Some(options[rng.gen_range(0..options.len())])
}

/// Centroid of living player positions
fn living_centroid(ctx: &DecisionContext) -> Option<HexCoord> {
    let mut count = 0i32;
    let (mut sum_q, mut sum_r) = (0i32, 0i32);
    for p in ctx.living_players() {
        sum_q += p.pos.q;
        sum_r += p.pos.r;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(HexCoord::new(sum_q / count, sum_r / count))
}

/// Step toward the centroid, biased toward doorways and preferred terrain,
/// with a slice of random deviation
fn roam_step(
    monster: &Monster,
    profile: &Personality,
    centroid: HexCoord,
    ctx: &DecisionContext,
    rng: &mut impl Rng,
) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);
    let options: Vec<HexCoord> = monster
        .pos
        .neighbors()
        .into_iter()
        .filter(|n| enterable(monster, ctx, &occupied, *n))
        .collect();
    if options.is_empty() {
        return None;
    }

    if rng.gen_bool(ROAM_DEVIATION_CHANCE) {
        return Some(options[rng.gen_range(0..options.len())]);
    }

    options.into_iter().max_by_key(|n| {
        let mut score = -(n.distance(&centroid) as i32) * 2;
        if let Some(tile) = ctx.board.get(n) {
            if tile.has_door_edge() {
                score += 2;
            }
            if profile.preferred_terrain.contains(&tile.category) {
                score += 2;
            }
        }
        score
    })
}

/// Weighted random patrol step shaped by build and habitat
fn patrol_step(
    monster: &Monster,
    profile: &Personality,
    ctx: &DecisionContext,
    rng: &mut impl Rng,
) -> Option<HexCoord> {
    let occupied = ctx.occupied(monster);
    let flying = monster.has_trait(MonsterTrait::Flying);

    let weighted: Vec<(HexCoord, u32)> = monster
        .pos
        .neighbors()
        .into_iter()
        .filter(|n| enterable(monster, ctx, &occupied, *n))
        .filter_map(|n| {
            let tile = ctx.board.get(&n)?;
            // Hazards are shunned by anything that has to touch them
            if tile.obstacle.is_some_and(|o| o.is_hazard()) && !flying {
                return None;
            }
            let mut weight = 1u32;
            if tile.has_water && monster.has_trait(MonsterTrait::Aquatic) {
                weight += 3;
            }
            if profile.preferred_terrain.contains(&tile.category) {
                weight += 2;
            }
            if flying && tile.category.is_open_ground() {
                weight += 2;
            }
            Some((n, weight))
        })
        .collect();

    let total: u32 = weighted.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for (pos, weight) in weighted {
        if roll < weight {
            return Some(pos);
        }
        roll -= weight;
    }
    None
}
