//! Headless Horde Runner
//!
//! Runs monster rounds against stationary investigators and prints a JSON
//! report. Useful for eyeballing behavior tuning without the game client.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use mythos_quest::board::hex::HexCoord;
use mythos_quest::board::tile::{BoardMap, TileCategory};
use mythos_quest::core::error::Result;
use mythos_quest::creature::kind::MonsterKind;
use mythos_quest::creature::monster::Monster;
use mythos_quest::engine::turn::TurnEngine;
use mythos_quest::player::{Investigator, InvestigatorClass};
use mythos_quest::spawn::{create_monster_with_ai, spawn_wave};
use mythos_quest::weather::Weather;

/// Headless horde runner - drive monster rounds and report what happened
#[derive(Parser, Debug)]
#[command(name = "horde_sim")]
#[command(about = "Run monster AI rounds and output a JSON report")]
struct Args {
    /// Rounds to simulate
    #[arg(long, default_value_t = 10)]
    rounds: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated monster kinds (kebab-case); empty uses a spawn wave
    #[arg(long, default_value = "")]
    monsters: String,

    /// Weather condition: clear, fog, rain, storm, darkness, glow
    #[arg(long, default_value = "clear")]
    weather: String,

    /// Doom level feeding the spawn tables
    #[arg(long, default_value_t = 5)]
    doom: u32,

    /// Board radius in hexes
    #[arg(long, default_value_t = 8)]
    radius: u32,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct SimReport {
    rounds: u32,
    seed: u64,
    weather: String,
    monsters: Vec<String>,
    attacks: usize,
    ranged_attacks: usize,
    opportunistic_attacks: usize,
    special_events: usize,
    messages: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let weather: Weather = args.weather.parse()?;
    let board = BoardMap::open_room(HexCoord::new(0, 0), args.radius, TileCategory::Room);

    let players = vec![
        Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective),
        Investigator::new(HexCoord::new(1, 0), InvestigatorClass::Occultist),
    ];

    // Monsters start along the far edge of the room
    let spawn_anchor = HexCoord::new(0, args.radius as i32 - 2);
    let mut monsters: Vec<Monster> = if args.monsters.is_empty() {
        let mut rng = StdRng::seed_from_u64(seed);
        spawn_wave(1, args.doom, spawn_anchor, &board, &mut rng)
    } else {
        args.monsters
            .split(',')
            .map(|name| name.parse::<MonsterKind>())
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let pos = HexCoord::new(spawn_anchor.q + i as i32, spawn_anchor.r - i as i32);
                create_monster_with_ai(kind, pos)
            })
            .collect()
    };

    let roster: Vec<String> = monsters.iter().map(|m| m.kind.to_string()).collect();
    let mut engine = TurnEngine::with_seed(seed);

    let mut attacks = 0;
    let mut ranged_attacks = 0;
    let mut opportunistic_attacks = 0;
    let mut special_events = 0;
    let mut messages = Vec::new();

    for _ in 0..args.rounds {
        let outcome = engine.process_turn(monsters, &players, &board, weather);
        monsters = outcome.monsters;
        attacks += outcome.attacks.len();
        ranged_attacks += outcome.attacks.iter().filter(|a| a.is_ranged).count();
        opportunistic_attacks += outcome.attacks.iter().filter(|a| a.opportunistic).count();
        special_events += outcome.events.len();
        messages.extend(outcome.messages);
    }

    let report = SimReport {
        rounds: args.rounds,
        seed,
        weather: args.weather,
        monsters: roster,
        attacks,
        ranged_attacks,
        opportunistic_attacks,
        special_events,
        messages,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
