//! Target prioritization
//!
//! A player is a candidate only if inside the weather-adjusted vision range
//! with line of sight. Candidates are scored additively from the hunting
//! creature's preferences; weather scales the total and favored kinds get a
//! flat bump. Ties keep the first-seen candidate (stable, encounter order).

use serde::{Deserialize, Serialize};

use crate::board::los::has_line_of_sight;
use crate::board::tile::BoardMap;
use crate::creature::monster::Monster;
use crate::creature::personality::personality;
use crate::engine::constants::{
    CLASS_AVOID_PENALTY, CLASS_PREFER_BONUS, ISOLATION_BONUS, ISOLATION_RADIUS, WATER_PREY_BONUS,
    WEATHER_FAVOR_BONUS,
};
use crate::player::Investigator;
use crate::weather::Weather;

/// Score breakdown for one candidate target. Ephemeral: recomputed fresh
/// every evaluation, never persisted between rounds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetScore {
    pub total: i32,
    pub distance: i32,
    pub low_hp: i32,
    pub low_sanity: i32,
    pub isolation: i32,
    pub class_preference: i32,
    pub terrain: i32,
}

/// Can the creature see this player right now?
pub fn is_visible(
    monster: &Monster,
    player: &Investigator,
    board: &BoardMap,
    weather: Weather,
) -> bool {
    let range = weather.adjusted_vision(monster.vision_range);
    if monster.pos.distance(&player.pos) > range {
        return false;
    }
    has_line_of_sight(board, monster.pos, player.pos)
}

/// All living players the creature can currently see, in encounter order
pub fn visible_players<'a>(
    monster: &Monster,
    players: &'a [Investigator],
    board: &BoardMap,
    weather: Weather,
) -> Vec<&'a Investigator> {
    players
        .iter()
        .filter(|p| p.is_alive())
        .filter(|p| is_visible(monster, p, board, weather))
        .collect()
}

/// Raw preference score for one candidate, before weather scaling
pub fn score_target(
    monster: &Monster,
    player: &Investigator,
    all_players: &[Investigator],
    board: &BoardMap,
) -> TargetScore {
    let profile = personality(monster.kind);
    let d = monster.pos.distance(&player.pos) as i32;

    let distance = ((10 - d) * 10).max(0);

    let low_hp = if profile.prefers_low_hp && player.max_hp > 0 {
        ((1.0 - player.hp as f32 / player.max_hp as f32) * 30.0).round() as i32
    } else {
        0
    };

    let low_sanity = if profile.prefers_low_sanity && player.max_sanity > 0 {
        ((1.0 - player.sanity as f32 / player.max_sanity as f32) * 25.0).round() as i32
    } else {
        0
    };

    let isolation = if profile.prefers_isolated {
        let has_nearby_ally = all_players.iter().any(|other| {
            other.id != player.id
                && other.is_alive()
                && other.pos.distance(&player.pos) <= ISOLATION_RADIUS
        });
        if has_nearby_ally {
            0
        } else {
            ISOLATION_BONUS
        }
    } else {
        0
    };

    // Avoid dominates should a class somehow sit on both lists
    let class_preference = if profile.avoided_classes.contains(&player.class) {
        CLASS_AVOID_PENALTY
    } else if profile.preferred_classes.contains(&player.class) {
        CLASS_PREFER_BONUS
    } else {
        0
    };

    let terrain = if profile.prefers_water_targets
        && board.get(&player.pos).is_some_and(|t| t.has_water)
    {
        WATER_PREY_BONUS
    } else {
        0
    };

    TargetScore {
        total: distance + low_hp + low_sanity + isolation + class_preference + terrain,
        distance,
        low_hp,
        low_sanity,
        isolation,
        class_preference,
        terrain,
    }
}

/// Weather-scaled total for ranking
fn weighted_total(monster: &Monster, score: &TargetScore, weather: Weather) -> i32 {
    let mut total = (score.total as f32 * weather.aggression_modifier()).floor() as i32;
    if weather.favors(monster.kind) {
        total += WEATHER_FAVOR_BONUS;
    }
    total
}

/// The best visible target, or None when nothing is in sight
pub fn pick_best_target<'a>(
    monster: &Monster,
    players: &'a [Investigator],
    board: &BoardMap,
    weather: Weather,
) -> Option<&'a Investigator> {
    let mut best: Option<(&Investigator, i32)> = None;

    for player in visible_players(monster, players, board, weather) {
        let score = score_target(monster, player, players, board);
        let total = weighted_total(monster, &score, weather);

        // Strictly-greater keeps the first-seen candidate on ties
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((player, total)),
        }
    }

    best.map(|(player, _)| player)
}
