//! Board support layer: hex geometry, tiles, sight, and the fallback pathfinder
//!
//! Everything here is pure functions over read-only data. The decision engine
//! consumes this layer; it never mutates it mid-round.

pub mod flood;
pub mod hex;
pub mod los;
pub mod tile;

pub use hex::{HexCoord, HexDirection};
pub use tile::{
    BoardMap, DoorState, EdgeKind, Obstacle, ObstacleKind, Tile, TileCategory, TileObject,
    TileObjectKind,
};
