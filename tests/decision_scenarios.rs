//! Scenario-level acceptance tests for the decision machine

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mythos_quest::board::hex::HexCoord;
use mythos_quest::board::tile::{BoardMap, TileCategory, TileObjectKind};
use mythos_quest::core::types::Round;
use mythos_quest::creature::ai_state::AiPhase;
use mythos_quest::creature::kind::MonsterKind;
use mythos_quest::creature::monster::Monster;
use mythos_quest::engine::decision::{decide, Action, DecisionContext};
use mythos_quest::engine::turn::TurnEngine;
use mythos_quest::player::{Investigator, InvestigatorClass};
use mythos_quest::spawn::{create_monster, create_monster_with_ai};
use mythos_quest::weather::Weather;

fn open_board(radius: u32) -> BoardMap {
    BoardMap::open_room(HexCoord::new(0, 0), radius, TileCategory::Room)
}

fn ctx<'a>(
    board: &'a BoardMap,
    players: &'a [Investigator],
    monsters: &'a [Monster],
    round: Round,
) -> DecisionContext<'a> {
    DecisionContext {
        board,
        players,
        monsters,
        weather: Weather::Clear,
        round,
    }
}

#[test]
fn cowardly_creature_never_attacks_or_approaches() {
    let board = open_board(8);
    let mut ghoul = create_monster(MonsterKind::Ghoul, HexCoord::new(3, 0));
    ghoul.hp = 1; // 20% of 5, under the 30% threshold

    let players = vec![Investigator::new(
        HexCoord::new(0, 0),
        InvestigatorClass::Detective,
    )];
    let monsters = vec![ghoul.clone()];

    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decision = decide(&ghoul, &ctx(&board, &players, &monsters, 1), &mut rng);
        match decision.action {
            Action::Attack { .. } => panic!("coward attacked at seed {seed}"),
            Action::Move { to } => {
                assert!(
                    to.distance(&players[0].pos) > ghoul.pos.distance(&players[0].pos),
                    "coward closed distance at seed {seed}"
                );
            }
            _ => {}
        }
    }
}

#[test]
fn hound_at_threshold_boundary_panics_and_runs() {
    let board = open_board(8);
    let mut hound = create_monster(MonsterKind::Hound, HexCoord::new(3, 0));
    hound.max_hp = 50;
    hound.hp = 5; // exactly 10%, on the hound's 10-percent threshold

    let players = vec![
        Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective),
        Investigator::new(HexCoord::new(1, 1), InvestigatorClass::Occultist),
    ];
    let monsters = vec![hound.clone()];
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let decision = decide(&hound, &ctx(&board, &players, &monsters, 1), &mut rng);
    match decision.action {
        Action::Move { to } => {
            for p in &players {
                assert!(to.distance(&p.pos) >= hound.pos.distance(&p.pos));
            }
            // Strictly farther from the nearest threat
            let nearest = players
                .iter()
                .map(|p| hound.pos.distance(&p.pos))
                .min()
                .unwrap();
            let after = players.iter().map(|p| to.distance(&p.pos)).min().unwrap();
            assert!(after > nearest);
        }
        other => panic!("expected panic flight, got {other:?}"),
    }
    let message = decision.message.expect("flight should be narrated");
    assert!(message.contains("howls"), "unexpected message: {message}");
    assert_eq!(decision.next_ai.phase, AiPhase::Fleeing);
}

#[test]
fn aggressive_melee_in_range_is_unconditional() {
    let board = open_board(6);
    // Aggression >= 70, target adjacent and visible: must attack on any roll
    for kind in [
        MonsterKind::Zombie,
        MonsterKind::HuntingHorror,
        MonsterKind::Shoggoth,
        MonsterKind::GhoulElder,
    ] {
        let monster = create_monster(kind, HexCoord::new(1, 0));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Veteran,
        )];
        let monsters = vec![monster.clone()];

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let decision = decide(&monster, &ctx(&board, &players, &monsters, 1), &mut rng);
            assert!(
                matches!(decision.action, Action::Attack { target } if target == players[0].id),
                "{kind} refused an in-range hit at seed {seed}: {:?}",
                decision.action
            );
        }
    }
}

#[test]
fn ghoul_chases_visible_player_five_hexes_out() {
    let board = open_board(8);
    let ghoul = create_monster(MonsterKind::Ghoul, HexCoord::new(5, 0));
    let players = vec![Investigator::new(
        HexCoord::new(0, 0),
        InvestigatorClass::Journalist,
    )];
    let monsters = vec![ghoul.clone()];

    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decision = decide(&ghoul, &ctx(&board, &players, &monsters, 1), &mut rng);
        match decision.action {
            Action::Move { to } => {
                assert!(to.distance(&players[0].pos) < 5, "seed {seed} did not close");
            }
            other => panic!("expected chase, got {other:?} at seed {seed}"),
        }
        assert_eq!(decision.next_ai.phase, AiPhase::Hunting);
    }
}

#[test]
fn sniper_fires_through_crates_with_cover_penalty() {
    let mut board = open_board(8);
    board.set_object(HexCoord::new(1, 0), TileObjectKind::Crate);

    let sniper = create_monster_with_ai(MonsterKind::CultistSniper, HexCoord::new(2, 0));
    let players = vec![Investigator::new(
        HexCoord::new(0, 0),
        InvestigatorClass::Detective,
    )];

    let mut engine = TurnEngine::with_seed(6);
    let outcome = engine.process_turn(vec![sniper], &players, &board, Weather::Clear);

    let attack = outcome.attacks.first().expect("sniper at range 2 must fire");
    assert!(attack.is_ranged);
    assert_eq!(attack.cover_penalty, 1);
    assert_eq!(attack.target, players[0].id);
}

#[test]
fn search_tier_hunts_six_rounds_then_reverts() {
    let board = open_board(10);
    let last_seen = HexCoord::new(3, 4);

    // Hound: aggression 85 earns the six-round search tier. Sight was lost
    // after round 10; the prey is simply gone from the board.
    let mut hound = create_monster(MonsterKind::Hound, HexCoord::new(-3, 0));
    hound.ai = hound.ai.spotted(last_seen, 10, 85);

    let players: Vec<Investigator> = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(14);

    for round in 11..=16 {
        let monsters = vec![hound.clone()];
        let context = ctx(&board, &players, &monsters, round);
        let decision = decide(&hound, &context, &mut rng);

        match decision.action {
            Action::Move { to } => {
                if hound.pos.distance(&last_seen) > 1 {
                    assert!(
                        to.distance(&last_seen) < hound.pos.distance(&last_seen),
                        "round {round}: search should close on the last-known spot"
                    );
                } else {
                    // Poking around the site stays local
                    assert!(to.distance(&last_seen) <= 2);
                }
                hound.pos = to;
            }
            other => panic!("round {round}: expected a search move, got {other:?}"),
        }
        hound.ai = decision.next_ai;
        assert_eq!(
            hound.ai.search_rounds_remaining,
            (16 - round) as u8,
            "round {round}"
        );
    }

    // Search exhausted: the spot is forgotten and the hound drifts again
    assert_eq!(hound.ai.last_known_target, None);
    let monsters = vec![hound.clone()];
    let context = ctx(&board, &players, &monsters, 17);
    let decision = decide(&hound, &context, &mut rng);
    match decision.action {
        Action::Move { to } => assert_eq!(hound.pos.distance(&to), 1), // patrol step
        Action::Wait => {}
        other => panic!("expected patrol after search exhausted, got {other:?}"),
    }
    assert_eq!(decision.next_ai.last_known_target, None);
}

#[test]
fn darkness_hides_distant_prey() {
    let board = open_board(10);
    let ghoul = create_monster(MonsterKind::Ghoul, HexCoord::new(5, 0));
    let players = vec![Investigator::new(
        HexCoord::new(0, 0),
        InvestigatorClass::Detective,
    )];
    let monsters = vec![ghoul.clone()];
    let mut rng = ChaCha8Rng::seed_from_u64(30);

    // Clear: vision 6 covers distance 5, the ghoul hunts
    let clear = DecisionContext {
        board: &board,
        players: &players,
        monsters: &monsters,
        weather: Weather::Clear,
        round: 1,
    };
    let seen = decide(&ghoul, &clear, &mut rng);
    assert_eq!(seen.next_ai.phase, AiPhase::Hunting);

    // Unnatural darkness: vision drops to 2, the ambusher waits blind
    let dark = DecisionContext {
        board: &board,
        players: &players,
        monsters: &monsters,
        weather: Weather::UnnaturalDarkness,
        round: 1,
    };
    let blind = decide(&ghoul, &dark, &mut rng);
    assert!(matches!(blind.action, Action::Wait));
    assert_ne!(blind.next_ai.phase, AiPhase::Hunting);
}
