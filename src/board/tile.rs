//! Board tiles: categories, edges, obstacles, and furnishings
//!
//! A tile's passability is decided by the engine's passability model; this
//! module only states the facts (what blocks, what costs, what covers).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::board::hex::{HexCoord, HexDirection};
use crate::creature::MonsterTrait;

/// Tile category, used for spawn weighting and terrain preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileCategory {
    Nature,
    Urban,
    Street,
    Facade,
    Foyer,
    Corridor,
    #[default]
    Room,
    Stairs,
    Basement,
    Crypt,
}

impl TileCategory {
    /// Underground and unlit categories, favored by darkness-dwellers
    pub fn is_dark(&self) -> bool {
        matches!(self, TileCategory::Basement | TileCategory::Crypt)
    }

    /// Open-sky categories, favored by flyers
    pub fn is_open_ground(&self) -> bool {
        matches!(
            self,
            TileCategory::Nature | TileCategory::Street | TileCategory::Urban
        )
    }
}

/// State of a door edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorState {
    Open,
    Closed,
    Locked,
}

/// One of a tile's six edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EdgeKind {
    #[default]
    Open,
    Wall,
    Window,
    Door(DoorState),
}

impl EdgeKind {
    /// Does this edge stop movement across it? A closed door can be pushed
    /// open in passing; a locked one cannot.
    pub fn blocks_movement(&self) -> bool {
        match self {
            EdgeKind::Open => false,
            EdgeKind::Wall => true,
            EdgeKind::Window => true,
            EdgeKind::Door(DoorState::Open) => false,
            EdgeKind::Door(DoorState::Closed) => false,
            EdgeKind::Door(DoorState::Locked) => true,
        }
    }

    /// Does this edge stop sight across it? Windows and open doors let sight through.
    pub fn blocks_sight(&self) -> bool {
        match self {
            EdgeKind::Open => false,
            EdgeKind::Wall => true,
            EdgeKind::Window => false,
            EdgeKind::Door(DoorState::Open) => false,
            EdgeKind::Door(DoorState::Closed) => true,
            EdgeKind::Door(DoorState::Locked) => true,
        }
    }

    pub fn is_door(&self) -> bool {
        matches!(self, EdgeKind::Door(_))
    }
}

/// Kinds of tile-occupying obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    LockedDoor,
    Rubble,
    Fire,
    Trap,
    FogWall,
    Gate,
    Barricade,
}

/// An obstacle occupying a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind) -> Self {
        Self { kind }
    }

    /// Does this obstacle block ground movement outright?
    pub fn blocks(&self) -> bool {
        match self.kind {
            ObstacleKind::LockedDoor
            | ObstacleKind::Rubble
            | ObstacleKind::FogWall
            | ObstacleKind::Gate
            | ObstacleKind::Barricade => true,
            ObstacleKind::Fire | ObstacleKind::Trap => false,
        }
    }

    /// Blocking even for flyers. Doorframes and gates have lintels; a fog
    /// wall reaches as high as anything cares to fly.
    pub fn blocks_flight(&self) -> bool {
        matches!(
            self.kind,
            ObstacleKind::LockedDoor | ObstacleKind::Gate | ObstacleKind::FogWall
        )
    }

    /// Extra movement cost for non-blocking obstacles
    pub fn extra_cost(&self) -> i32 {
        match self.kind {
            ObstacleKind::Fire => 2,
            ObstacleKind::Trap => 1,
            _ => 0,
        }
    }

    /// Hazards are avoided during patrol unless the creature flies over them
    pub fn is_hazard(&self) -> bool {
        matches!(self.kind, ObstacleKind::Fire | ObstacleKind::Trap)
    }
}

/// Kinds of furnishings that may sit on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileObjectKind {
    Crate,
    Bookshelf,
    Table,
    Bed,
    Altar,
    Statue,
    Fountain,
    Cabinet,
}

/// A furnishing on a tile. Never as absolute as an obstacle: blocking kinds
/// yield to specific capabilities, non-blocking kinds slow or shelter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileObject {
    pub kind: TileObjectKind,
}

impl TileObject {
    pub fn new(kind: TileObjectKind) -> Self {
        Self { kind }
    }

    /// Does this object block ground movement?
    pub fn blocks(&self) -> bool {
        matches!(
            self.kind,
            TileObjectKind::Statue | TileObjectKind::Fountain | TileObjectKind::Cabinet
        )
    }

    /// Capability table for blocking objects
    pub fn passable_with(&self, capability: MonsterTrait) -> bool {
        match self.kind {
            TileObjectKind::Statue => matches!(
                capability,
                MonsterTrait::Flying | MonsterTrait::Ethereal
            ),
            TileObjectKind::Fountain => matches!(
                capability,
                MonsterTrait::Flying | MonsterTrait::Aquatic | MonsterTrait::Ethereal
            ),
            TileObjectKind::Cabinet => matches!(capability, MonsterTrait::Ethereal),
            _ => true,
        }
    }

    /// Extra movement cost for non-blocking objects
    pub fn move_cost(&self) -> i32 {
        match self.kind {
            TileObjectKind::Crate => 1,
            TileObjectKind::Bookshelf => 1,
            TileObjectKind::Table => 1,
            TileObjectKind::Bed => 1,
            TileObjectKind::Altar => 0,
            _ => 0,
        }
    }

    /// Cover value against ranged attacks traced through this tile
    pub fn cover(&self) -> i32 {
        match self.kind {
            TileObjectKind::Crate => 1,
            TileObjectKind::Bookshelf => 2,
            TileObjectKind::Table => 1,
            TileObjectKind::Bed => 0,
            TileObjectKind::Altar => 1,
            TileObjectKind::Statue => 1,
            TileObjectKind::Fountain => 0,
            TileObjectKind::Cabinet => 1,
        }
    }
}

/// One board tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub pos: HexCoord,
    pub category: TileCategory,
    pub edges: [EdgeKind; 6],
    pub obstacle: Option<Obstacle>,
    pub object: Option<TileObject>,
    pub has_water: bool,
}

impl Tile {
    pub fn new(pos: HexCoord, category: TileCategory) -> Self {
        Self {
            pos,
            category,
            edges: [EdgeKind::Open; 6],
            obstacle: None,
            object: None,
            has_water: false,
        }
    }

    /// The edge facing an adjacent hex direction
    pub fn edge_toward(&self, dir: HexDirection) -> EdgeKind {
        self.edges[dir.index()]
    }

    /// True if any edge of this tile is a doorway
    pub fn has_door_edge(&self) -> bool {
        self.edges.iter().any(|e| e.is_door())
    }
}

/// Tile storage for one scenario board
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardMap {
    tiles: AHashMap<HexCoord, Tile>,
}

impl BoardMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: &HexCoord) -> Option<&Tile> {
        self.tiles.get(pos)
    }

    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.pos, tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Fill all hexes within `radius` of `center` with open tiles of one category
    pub fn open_room(center: HexCoord, radius: u32, category: TileCategory) -> Self {
        let mut board = Self::new();
        for pos in center.hexes_in_range(radius) {
            board.insert(Tile::new(pos, category));
        }
        board
    }

    pub fn set_category(&mut self, pos: HexCoord, category: TileCategory) {
        if let Some(tile) = self.tiles.get_mut(&pos) {
            tile.category = category;
        }
    }

    pub fn set_obstacle(&mut self, pos: HexCoord, kind: ObstacleKind) {
        if let Some(tile) = self.tiles.get_mut(&pos) {
            tile.obstacle = Some(Obstacle::new(kind));
        }
    }

    pub fn set_object(&mut self, pos: HexCoord, kind: TileObjectKind) {
        if let Some(tile) = self.tiles.get_mut(&pos) {
            tile.object = Some(TileObject::new(kind));
        }
    }

    pub fn set_water(&mut self, pos: HexCoord, has_water: bool) {
        if let Some(tile) = self.tiles.get_mut(&pos) {
            tile.has_water = has_water;
        }
    }

    /// Does the boundary between two adjacent hexes stop movement?
    pub fn blocks_crossing(&self, a: HexCoord, b: HexCoord) -> bool {
        let Some(dir) = a.direction_to(&b) else {
            return false;
        };
        match self.get(&a) {
            Some(tile) => tile.edge_toward(dir).blocks_movement(),
            None => false,
        }
    }

    /// Set an edge on both sides of the boundary between `pos` and its neighbor
    pub fn set_edge(&mut self, pos: HexCoord, dir: HexDirection, edge: EdgeKind) {
        if let Some(tile) = self.tiles.get_mut(&pos) {
            tile.edges[dir.index()] = edge;
        }
        let step = dir.offset();
        let neighbor = HexCoord::new(pos.q + step.q, pos.r + step.r);
        if let Some(tile) = self.tiles.get_mut(&neighbor) {
            tile.edges[dir.opposite().index()] = edge;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_room_tile_count() {
        let board = BoardMap::open_room(HexCoord::new(0, 0), 2, TileCategory::Room);
        assert_eq!(board.len(), 19); // 1 + 6 + 12
    }

    #[test]
    fn test_edge_blocks() {
        assert!(EdgeKind::Wall.blocks_movement());
        assert!(EdgeKind::Wall.blocks_sight());
        assert!(EdgeKind::Window.blocks_movement());
        assert!(!EdgeKind::Window.blocks_sight());
        assert!(!EdgeKind::Door(DoorState::Open).blocks_movement());
        assert!(!EdgeKind::Door(DoorState::Closed).blocks_movement());
        assert!(EdgeKind::Door(DoorState::Closed).blocks_sight());
        assert!(EdgeKind::Door(DoorState::Locked).blocks_movement());
        assert!(EdgeKind::Door(DoorState::Locked).blocks_sight());
    }

    #[test]
    fn test_obstacle_blocking() {
        assert!(Obstacle::new(ObstacleKind::Rubble).blocks());
        assert!(!Obstacle::new(ObstacleKind::Fire).blocks());
        assert!(Obstacle::new(ObstacleKind::Fire).is_hazard());
        assert_eq!(Obstacle::new(ObstacleKind::Fire).extra_cost(), 2);
    }

    #[test]
    fn test_fog_wall_blocks_flight() {
        assert!(Obstacle::new(ObstacleKind::FogWall).blocks_flight());
        assert!(!Obstacle::new(ObstacleKind::Rubble).blocks_flight());
    }

    #[test]
    fn test_fountain_passable_for_aquatic() {
        let fountain = TileObject::new(TileObjectKind::Fountain);
        assert!(fountain.blocks());
        assert!(fountain.passable_with(MonsterTrait::Aquatic));
        assert!(fountain.passable_with(MonsterTrait::Flying));
        assert!(!fountain.passable_with(MonsterTrait::Massive));
    }

    #[test]
    fn test_bookshelf_covers_more_than_crate() {
        let shelf = TileObject::new(TileObjectKind::Bookshelf);
        let crate_ = TileObject::new(TileObjectKind::Crate);
        assert!(shelf.cover() > crate_.cover());
    }

    #[test]
    fn test_set_edge_mirrors_to_neighbor() {
        let mut board = BoardMap::open_room(HexCoord::new(0, 0), 1, TileCategory::Room);
        board.set_edge(HexCoord::new(0, 0), HexDirection::East, EdgeKind::Wall);

        let here = board.get(&HexCoord::new(0, 0)).unwrap();
        assert_eq!(here.edge_toward(HexDirection::East), EdgeKind::Wall);

        let there = board.get(&HexCoord::new(1, 0)).unwrap();
        assert_eq!(there.edge_toward(HexDirection::West), EdgeKind::Wall);
    }

    #[test]
    fn test_dark_categories() {
        assert!(TileCategory::Crypt.is_dark());
        assert!(TileCategory::Basement.is_dark());
        assert!(!TileCategory::Street.is_dark());
        assert!(TileCategory::Street.is_open_ground());
    }
}
