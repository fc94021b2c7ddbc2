//! Unweighted breadth-first fallback pathfinder
//!
//! Cost-blind: every enterable step counts as one. Used when the weighted
//! search fails, so a creature still lurches in roughly the right direction.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::board::hex::HexCoord;
use crate::board::tile::BoardMap;

/// Breadth-first path from `start` to `goal`, ignoring movement costs.
///
/// `can_enter` decides tile enterability for the walking creature. Occupied
/// positions in `blocked` are skipped unless they are the goal itself.
/// Returns the full path including both endpoints, or `None` when the goal
/// is unreachable within `max_depth` steps.
pub fn fallback_path(
    board: &BoardMap,
    start: HexCoord,
    goal: HexCoord,
    blocked: &AHashSet<HexCoord>,
    max_depth: u32,
    can_enter: impl Fn(&HexCoord) -> bool,
) -> Option<Vec<HexCoord>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut came_from: AHashMap<HexCoord, HexCoord> = AHashMap::new();
    let mut depth: AHashMap<HexCoord, u32> = AHashMap::new();
    let mut queue = VecDeque::new();

    depth.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let current_depth = depth[&current];
        if current_depth >= max_depth {
            continue;
        }

        for neighbor in current.neighbors() {
            if depth.contains_key(&neighbor) {
                continue;
            }
            if board.blocks_crossing(current, neighbor) {
                continue;
            }
            if neighbor != goal {
                if blocked.contains(&neighbor) || !can_enter(&neighbor) {
                    continue;
                }
            }

            came_from.insert(neighbor, current);
            depth.insert(neighbor, current_depth + 1);

            if neighbor == goal {
                return Some(reconstruct(&came_from, neighbor));
            }
            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct(came_from: &AHashMap<HexCoord, HexCoord>, mut current: HexCoord) -> Vec<HexCoord> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tile::TileCategory;

    fn open_board() -> BoardMap {
        BoardMap::open_room(HexCoord::new(0, 0), 6, TileCategory::Room)
    }

    #[test]
    fn test_straight_path() {
        let board = open_board();
        let path = fallback_path(
            &board,
            HexCoord::new(0, 0),
            HexCoord::new(4, 0),
            &AHashSet::new(),
            12,
            |p| board.get(p).is_some(),
        )
        .expect("open board should be walkable");

        assert_eq!(path.first(), Some(&HexCoord::new(0, 0)));
        assert_eq!(path.last(), Some(&HexCoord::new(4, 0)));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn test_routes_around_blockers() {
        let board = open_board();
        let mut blocked = AHashSet::new();
        blocked.insert(HexCoord::new(1, 0));

        let path = fallback_path(
            &board,
            HexCoord::new(0, 0),
            HexCoord::new(2, 0),
            &blocked,
            12,
            |p| board.get(p).is_some(),
        )
        .expect("detour should exist");

        assert!(!path.contains(&HexCoord::new(1, 0)));
    }

    #[test]
    fn test_blocked_goal_still_reachable() {
        let board = open_board();
        let mut blocked = AHashSet::new();
        blocked.insert(HexCoord::new(3, 0));

        // The goal itself being occupied must not make it unreachable
        let path = fallback_path(
            &board,
            HexCoord::new(0, 0),
            HexCoord::new(3, 0),
            &blocked,
            12,
            |p| board.get(p).is_some(),
        );
        assert!(path.is_some());
    }

    #[test]
    fn test_depth_cap() {
        let board = open_board();
        let path = fallback_path(
            &board,
            HexCoord::new(-5, 0),
            HexCoord::new(5, 0),
            &AHashSet::new(),
            4,
            |p| board.get(p).is_some(),
        );
        assert!(path.is_none());
    }

    #[test]
    fn test_same_start_goal() {
        let board = open_board();
        let path = fallback_path(
            &board,
            HexCoord::new(2, 2),
            HexCoord::new(2, 2),
            &AHashSet::new(),
            12,
            |p| board.get(p).is_some(),
        );
        assert_eq!(path, Some(vec![HexCoord::new(2, 2)]));
    }
}
