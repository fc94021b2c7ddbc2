//! Property suite for the engine's total functions

use ahash::AHashSet;
use proptest::prelude::*;

use mythos_quest::board::hex::HexCoord;
use mythos_quest::board::tile::{
    BoardMap, Obstacle, ObstacleKind, Tile, TileCategory, TileObject, TileObjectKind,
};
use mythos_quest::creature::kind::MonsterKind;
use mythos_quest::engine::constants::MAX_PATH_DEPTH;
use mythos_quest::engine::passability::can_pass;
use mythos_quest::engine::pathfinding::find_path;
use mythos_quest::engine::targeting::score_target;
use mythos_quest::player::{Investigator, InvestigatorClass};
use mythos_quest::spawn::create_monster;

fn kind_strategy() -> impl Strategy<Value = MonsterKind> {
    prop::sample::select(MonsterKind::ALL.to_vec())
}

fn obstacle_strategy() -> impl Strategy<Value = ObstacleKind> {
    prop::sample::select(vec![
        ObstacleKind::LockedDoor,
        ObstacleKind::Rubble,
        ObstacleKind::Fire,
        ObstacleKind::Trap,
        ObstacleKind::FogWall,
        ObstacleKind::Gate,
        ObstacleKind::Barricade,
    ])
}

fn object_strategy() -> impl Strategy<Value = TileObjectKind> {
    prop::sample::select(vec![
        TileObjectKind::Crate,
        TileObjectKind::Bookshelf,
        TileObjectKind::Table,
        TileObjectKind::Bed,
        TileObjectKind::Altar,
        TileObjectKind::Statue,
        TileObjectKind::Fountain,
        TileObjectKind::Cabinet,
    ])
}

proptest! {
    /// Total over every creature/tile combination, and idempotent
    #[test]
    fn can_pass_is_total_and_idempotent(
        kind in kind_strategy(),
        obstacle in proptest::option::of(obstacle_strategy()),
        object in proptest::option::of(object_strategy()),
        water in any::<bool>(),
    ) {
        let monster = create_monster(kind, HexCoord::new(0, 0));
        let mut tile = Tile::new(HexCoord::new(0, 0), TileCategory::Room);
        tile.obstacle = obstacle.map(Obstacle::new);
        tile.object = object.map(TileObject::new);
        tile.has_water = water;

        let first = can_pass(&monster, &tile);
        let second = can_pass(&monster, &tile);
        prop_assert_eq!(first, second);
    }

    /// A non-massive flyer is never stopped by an obstacle that flight clears
    #[test]
    fn flyers_clear_flyable_obstacles(
        kind in prop::sample::select(vec![
            MonsterKind::Nightgaunt,
            MonsterKind::MiGo,
            MonsterKind::Byakhee,
            MonsterKind::Specter,
        ]),
        obstacle in prop::sample::select(vec![
            ObstacleKind::Rubble,
            ObstacleKind::Barricade,
        ]),
    ) {
        let monster = create_monster(kind, HexCoord::new(0, 0));
        let mut tile = Tile::new(HexCoord::new(0, 0), TileCategory::Street);
        tile.obstacle = Some(Obstacle::new(obstacle));

        prop_assert!(can_pass(&monster, &tile).can_pass);
    }

    /// Same inputs, same path; and no path ever beats the hex-distance bound
    #[test]
    fn pathfinding_idempotent_and_admissible(
        kind in kind_strategy(),
        obstacles in prop::collection::vec(((-4i32..=4), (-4i32..=4), obstacle_strategy()), 0..8),
        water in prop::collection::vec(((-4i32..=4), (-4i32..=4)), 0..8),
        goal_q in -4i32..=4,
        goal_r in -4i32..=4,
    ) {
        let mut board = BoardMap::open_room(HexCoord::new(0, 0), 4, TileCategory::Room);
        for (q, r, obstacle) in obstacles {
            let pos = HexCoord::new(q, r);
            if pos != HexCoord::new(0, 0) {
                board.set_obstacle(pos, obstacle); // no-op off the board
            }
        }
        for (q, r) in water {
            board.set_water(HexCoord::new(q, r), true);
        }

        let goal = HexCoord::new(goal_q, goal_r);
        prop_assume!(board.get(&goal).is_some());

        let monster = create_monster(kind, HexCoord::new(0, 0));
        let start = HexCoord::new(0, 0);
        let blocked = AHashSet::new();

        let first = find_path(&monster, start, &[goal], &board, &blocked, MAX_PATH_DEPTH);
        let second = find_path(&monster, start, &[goal], &board, &blocked, MAX_PATH_DEPTH);
        prop_assert_eq!(&first, &second);

        if let Some(result) = first {
            prop_assert!(result.total_cost >= start.distance(&goal));
            prop_assert_eq!(result.path.first(), Some(&start));
            prop_assert_eq!(result.path.last(), Some(&goal));
        }
    }

    /// Holding everything else equal, a strictly closer player never scores
    /// lower
    #[test]
    fn closer_target_never_scores_lower(
        kind in kind_strategy(),
        near in 1u32..=9,
        far in 1u32..=9,
    ) {
        prop_assume!(near < far);

        let board = BoardMap::open_room(HexCoord::new(0, 0), 10, TileCategory::Room);
        let monster = create_monster(kind, HexCoord::new(0, 0));

        let near_player =
            Investigator::new(HexCoord::new(near as i32, 0), InvestigatorClass::Detective);
        let far_player =
            Investigator::new(HexCoord::new(far as i32, 0), InvestigatorClass::Detective);
        let players = vec![near_player.clone(), far_player.clone()];

        let near_score = score_target(&monster, &near_player, &players, &board);
        let far_score = score_target(&monster, &far_player, &players, &board);
        prop_assert!(near_score.total >= far_score.total);
    }
}
