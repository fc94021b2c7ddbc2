//! Wall and door aware line of sight
//!
//! Adjacent tiles always see each other unless a sight-blocking edge lies
//! directly between them. Longer sightlines walk the hex line and fail on the
//! first blocking edge, missing tile, or fog wall.

use crate::board::hex::HexCoord;
use crate::board::tile::{BoardMap, ObstacleKind};

/// Can `from` see `to` across the board?
pub fn has_line_of_sight(board: &BoardMap, from: HexCoord, to: HexCoord) -> bool {
    if from == to {
        return true;
    }

    if from.distance(&to) <= 1 {
        return !edge_blocks_sight(board, from, to);
    }

    let line = from.line_to(&to);
    for pair in line.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if edge_blocks_sight(board, a, b) {
            return false;
        }
        // Interior tiles must exist and not be fogged over
        if b != to {
            match board.get(&b) {
                None => return false,
                Some(tile) => {
                    if tile
                        .obstacle
                        .is_some_and(|o| o.kind == ObstacleKind::FogWall)
                    {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Does the edge between two adjacent hexes block sight?
fn edge_blocks_sight(board: &BoardMap, a: HexCoord, b: HexCoord) -> bool {
    let Some(dir) = a.direction_to(&b) else {
        return false;
    };
    match board.get(&a) {
        Some(tile) => tile.edge_toward(dir).blocks_sight(),
        None => false,
    }
}

/// Accumulated cover between attacker and target from furnishings on the
/// tiles strictly between them. Endpoints contribute nothing.
pub fn cover_penalty(board: &BoardMap, from: HexCoord, to: HexCoord) -> i32 {
    if from.distance(&to) <= 1 {
        return 0;
    }

    let line = from.line_to(&to);
    line.iter()
        .skip(1)
        .take(line.len().saturating_sub(2))
        .filter_map(|pos| board.get(pos))
        .filter_map(|tile| tile.object)
        .map(|obj| obj.cover())
        .sum()
}
