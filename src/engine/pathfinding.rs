//! Weighted A* pathfinding over the hex board
//!
//! Edge costs come from the passability model; occupied tiles are pruned
//! unless they are goals. The heuristic is plain hex distance to the nearest
//! goal, which never exceeds the real cost (every step costs at least 1).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};

use crate::board::hex::HexCoord;
use crate::board::tile::BoardMap;
use crate::creature::monster::Monster;
use crate::engine::passability::can_pass;

/// A found path and its accumulated movement cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub path: Vec<HexCoord>,
    pub total_cost: u32,
}

/// Node in the A* open set
#[derive(Debug, Clone, Copy)]
struct PathNode {
    coord: HexCoord,
    f_cost: u32,
    /// Insertion order; breaks exact f-cost ties deterministically
    seq: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; earlier insertion wins exact ties
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path from `start` to any of `goals`
///
/// Returns `None` when no goal is reachable within `max_depth` hex-steps.
/// Tiles in `blocked` (other creatures) are impassable unless they are goals.
pub fn find_path(
    monster: &Monster,
    start: HexCoord,
    goals: &[HexCoord],
    board: &BoardMap,
    blocked: &AHashSet<HexCoord>,
    max_depth: u32,
) -> Option<PathResult> {
    if goals.is_empty() {
        return None;
    }

    let goal_set: AHashSet<HexCoord> = goals.iter().copied().collect();
    if goal_set.contains(&start) {
        return Some(PathResult {
            path: vec![start],
            total_cost: 0,
        });
    }

    let heuristic =
        |coord: &HexCoord| -> u32 { goals.iter().map(|g| coord.distance(g)).min().unwrap_or(0) };

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<HexCoord, HexCoord> = AHashMap::new();
    // coord -> (cost from start, steps from start)
    let mut best: AHashMap<HexCoord, (u32, u32)> = AHashMap::new();
    let mut seq: u64 = 0;

    best.insert(start, (0, 0));
    open_set.push(PathNode {
        coord: start,
        f_cost: heuristic(&start),
        seq,
    });

    while let Some(current) = open_set.pop() {
        if goal_set.contains(&current.coord) {
            let total_cost = best.get(&current.coord).map(|(g, _)| *g).unwrap_or(0);
            return Some(PathResult {
                path: reconstruct_path(&came_from, current.coord),
                total_cost,
            });
        }

        let Some(&(current_g, current_depth)) = best.get(&current.coord) else {
            continue;
        };
        if current_depth >= max_depth {
            continue;
        }

        for neighbor in current.coord.neighbors() {
            if board.blocks_crossing(current.coord, neighbor) {
                continue;
            }
            let Some(tile) = board.get(&neighbor) else {
                continue;
            };
            let is_goal = goal_set.contains(&neighbor);
            if blocked.contains(&neighbor) && !is_goal {
                continue;
            }

            let verdict = can_pass(monster, tile);
            if !verdict.can_pass {
                continue;
            }

            let step_cost = 1 + verdict.extra_cost.max(0) as u32;
            let tentative_g = current_g + step_cost;
            let neighbor_g = best.get(&neighbor).map(|(g, _)| *g).unwrap_or(u32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.coord);
                best.insert(neighbor, (tentative_g, current_depth + 1));

                seq += 1;
                open_set.push(PathNode {
                    coord: neighbor,
                    f_cost: tentative_g + heuristic(&neighbor),
                    seq,
                });
            }
        }
    }

    None // No goal within reach
}

fn reconstruct_path(came_from: &AHashMap<HexCoord, HexCoord>, mut current: HexCoord) -> Vec<HexCoord> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
