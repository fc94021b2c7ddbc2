//! Obstacle passability model
//!
//! Total over every creature/tile pair: never panics, never mutates. The
//! pathfinder turns the verdict into edge costs.

use serde::{Deserialize, Serialize};

use crate::board::tile::Tile;
use crate::creature::monster::{Monster, MonsterTrait};

/// Verdict for one creature entering one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passability {
    pub can_pass: bool,
    /// May be negative (aquatic water discount); the pathfinder floors the
    /// final edge cost at 1.
    pub extra_cost: i32,
}

impl Passability {
    pub fn blocked() -> Self {
        Self {
            can_pass: false,
            extra_cost: 0,
        }
    }

    pub fn free() -> Self {
        Self {
            can_pass: true,
            extra_cost: 0,
        }
    }
}

/// Can this creature enter this tile, and at what extra movement cost?
pub fn can_pass(monster: &Monster, tile: &Tile) -> Passability {
    let mut extra = 0;

    // (a) tile-occupying obstacle
    if let Some(obstacle) = tile.obstacle {
        if obstacle.blocks() {
            if monster.phases_through_obstacles() {
                // The scripted phasing kinds ignore obstacles entirely
            } else if monster.has_trait(MonsterTrait::Massive) {
                // Too big to squeeze past; smashing through is not a thing yet
                return Passability::blocked();
            } else if monster.has_trait(MonsterTrait::Flying) && !obstacle.blocks_flight() {
                // Over the top
            } else {
                return Passability::blocked();
            }
        } else {
            extra += obstacle.extra_cost();
        }
    }

    // (b, c) furnishings
    if let Some(object) = tile.object {
        if object.blocks() {
            let capabilities = [
                MonsterTrait::Flying,
                MonsterTrait::Aquatic,
                MonsterTrait::Ethereal,
            ];
            let permitted = capabilities
                .into_iter()
                .any(|c| monster.has_trait(c) && object.passable_with(c));
            if !permitted {
                return Passability::blocked();
            }
        } else {
            extra += object.move_cost();
        }
    }

    // (d) water
    if tile.has_water {
        if monster.has_trait(MonsterTrait::Aquatic) {
            extra -= 1;
        } else if monster.has_trait(MonsterTrait::Flying) {
            // No penalty above the surface
        } else {
            extra += 1;
        }
    }

    Passability {
        can_pass: true,
        extra_cost: extra,
    }
}
