//! Round processing
//!
//! Creatures act strictly sequentially in array order, each seeing the
//! already-updated positions of those before it. The creature list comes in
//! owned and goes out as a new vector; board and players are read-only
//! snapshots for the whole round.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::hex::HexCoord;
use crate::board::los::cover_penalty;
use crate::board::tile::BoardMap;
use crate::core::types::{EntityId, Round};
use crate::creature::ai_state::AiPhase;
use crate::creature::combat_style::CombatStyle;
use crate::creature::kind::MonsterKind;
use crate::creature::monster::{AttackType, Monster, MonsterTrait};
use crate::creature::personality::personality;
use crate::engine::abilities::{can_use_ability, execute_ability, AbilityId};
use crate::engine::constants::{CALL_FOR_HELP_RANGE, SLOW_SKIP_CHANCE};
use crate::engine::decision::{decide, Action, DecisionContext};
use crate::engine::flanking::{is_flanking, pack_bonus};
use crate::engine::messages;
use crate::engine::passability::can_pass;
use crate::engine::targeting::pick_best_target;
use crate::player::Investigator;
use crate::weather::Weather;

/// One attack selected this round, with its situational bonuses attached.
/// Hit and damage resolution belongs to the combat layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackRecord {
    pub attacker: EntityId,
    pub attacker_kind: MonsterKind,
    pub target: EntityId,
    pub is_ranged: bool,
    pub cover_penalty: i32,
    pub bonus_dice: i32,
    pub bonus_damage: i32,
    pub style_attack_bonus: i32,
    pub sanity_damage: i32,
    pub doom_delta: i32,
    pub is_flanking: bool,
    pub pack_morale: bool,
    pub opportunistic: bool,
}

/// Out-of-band happenings the caller may want to narrate or apply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpecialEvent {
    Teleported {
        monster: EntityId,
        kind: MonsterKind,
        from: HexCoord,
        to: HexCoord,
    },
    AbilityUsed {
        monster: EntityId,
        kind: MonsterKind,
        ability: AbilityId,
        spawns: Vec<MonsterKind>,
        doom_delta: i32,
    },
    CalledForHelp {
        monster: EntityId,
        kind: MonsterKind,
        allies_alerted: usize,
    },
}

/// Everything one round produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub monsters: Vec<Monster>,
    pub attacks: Vec<AttackRecord>,
    pub messages: Vec<String>,
    pub events: Vec<SpecialEvent>,
}

/// The round driver. Owns the RNG so full games replay from one seed.
pub struct TurnEngine {
    rng: StdRng,
    round: Round,
}

impl TurnEngine {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            round: 0,
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }

    /// Process one full round for every living creature
    pub fn process_turn(
        &mut self,
        monsters: Vec<Monster>,
        players: &[Investigator],
        board: &BoardMap,
        weather: Weather,
    ) -> TurnOutcome {
        self.round += 1;
        let round = self.round;
        debug!(round, creatures = monsters.len(), "processing round");

        let mut monsters = monsters;
        let mut attacks = Vec::new();
        let mut messages = Vec::new();
        let mut events = Vec::new();

        for i in 0..monsters.len() {
            if !monsters[i].is_alive() {
                continue;
            }
            // Malformed input: a creature off the board sits the round out
            if board.get(&monsters[i].pos).is_none() {
                trace!(kind = %monsters[i].kind, "no tile under creature, skipping");
                continue;
            }

            monsters[i].ai.ability_used_this_round = false;

            if monsters[i].has_trait(MonsterTrait::Slow) {
                let skip_chance =
                    (SLOW_SKIP_CHANCE / weather.speed_modifier() as f64).clamp(0.0, 1.0);
                if self.rng.gen_bool(skip_chance) {
                    trace!(kind = %monsters[i].kind, "too slow this round");
                    continue;
                }
            }

            let actor = monsters[i].clone();
            let prev_phase = actor.ai.phase;
            let decision = {
                let ctx = DecisionContext {
                    board,
                    players,
                    monsters: &monsters,
                    weather,
                    round,
                };
                decide(&actor, &ctx, &mut self.rng)
            };
            trace!(kind = %actor.kind, action = ?decision.action, "decided");

            if let Some(msg) = &decision.message {
                messages.push(msg.clone());
            }
            monsters[i].ai = decision.next_ai;

            match decision.action {
                Action::Wait => {}
                Action::Move { to } => {
                    monsters[i].pos = to;
                    self.opportunistic_attack(
                        i,
                        &mut monsters,
                        players,
                        board,
                        weather,
                        &mut attacks,
                        &mut events,
                        &mut messages,
                    );
                }
                Action::Special { teleport_to } => {
                    let from = monsters[i].pos;
                    monsters[i].pos = teleport_to;
                    events.push(SpecialEvent::Teleported {
                        monster: monsters[i].id,
                        kind: monsters[i].kind,
                        from,
                        to: teleport_to,
                    });
                    self.opportunistic_attack(
                        i,
                        &mut monsters,
                        players,
                        board,
                        weather,
                        &mut attacks,
                        &mut events,
                        &mut messages,
                    );
                }
                Action::Attack { target } => {
                    self.resolve_attack(
                        i,
                        target,
                        false,
                        &mut monsters,
                        players,
                        board,
                        weather,
                        &mut attacks,
                        &mut events,
                        &mut messages,
                    );
                }
            }

            // A fresh hunter may raise the alarm for its kin
            if prev_phase != AiPhase::Hunting && monsters[i].ai.phase == AiPhase::Hunting {
                messages.push(messages::spotted_message(monsters[i].kind));
                self.call_for_help(i, round, &mut monsters, &mut events, &mut messages);
            }
        }

        TurnOutcome {
            monsters,
            attacks,
            messages,
            events,
        }
    }

    /// Build an attack record for attacker `i` against a player
    #[allow(clippy::too_many_arguments)]
    fn resolve_attack(
        &mut self,
        i: usize,
        target_id: EntityId,
        opportunistic: bool,
        monsters: &mut [Monster],
        players: &[Investigator],
        board: &BoardMap,
        weather: Weather,
        attacks: &mut Vec<AttackRecord>,
        events: &mut Vec<SpecialEvent>,
        messages: &mut Vec<String>,
    ) {
        let Some(target) = players.iter().find(|p| p.id == target_id) else {
            return;
        };
        let attacker = monsters[i].clone();
        let profile = personality(attacker.kind);
        let style = profile.style.modifiers();

        let distance = attacker.pos.distance(&target.pos);
        let is_ranged = attacker.attack_type == AttackType::Ranged || distance > 1;
        let cover = if is_ranged {
            cover_penalty(board, attacker.pos, target.pos)
        } else {
            0
        };

        let flanking = is_flanking(&attacker, target, monsters);
        let pack = pack_bonus(&attacker, monsters);
        let mut bonus_dice = pack.bonus_dice;
        if flanking && style.prefers_flanking {
            bonus_dice += 1;
        }
        // Ambushers striking hand-to-hand ride the weather's concealment
        if profile.style == CombatStyle::Ambush && !is_ranged {
            bonus_dice += weather.stealth_bonus();
        }

        let mut bonus_damage = 0;
        let mut sanity_damage = 0;
        let mut doom_delta = 0;

        // Fold in one usable special ability, chosen at random
        let usable: Vec<AbilityId> = profile
            .abilities
            .iter()
            .copied()
            .filter(|a| *a != AbilityId::Teleport)
            .filter(|a| can_use_ability(&attacker, *a))
            .collect();
        if !usable.is_empty() {
            let ability = usable[self.rng.gen_range(0..usable.len())];
            let effect = execute_ability(
                &attacker,
                ability,
                Some(target),
                monsters,
                board,
                &mut self.rng,
            );
            bonus_dice += effect.bonus_dice;
            bonus_damage += effect.damage;
            sanity_damage += effect.sanity_damage;
            doom_delta += effect.doom_delta;
            if effect.healing > 0 {
                monsters[i].hp = (monsters[i].hp + effect.healing).min(monsters[i].max_hp);
            }
            messages.push(effect.message.clone());
            events.push(SpecialEvent::AbilityUsed {
                monster: attacker.id,
                kind: attacker.kind,
                ability,
                spawns: effect.spawns,
                doom_delta: effect.doom_delta,
            });
            monsters[i].ai.ability_used_this_round = true;
        }

        attacks.push(AttackRecord {
            attacker: attacker.id,
            attacker_kind: attacker.kind,
            target: target_id,
            is_ranged,
            cover_penalty: cover,
            bonus_dice,
            bonus_damage,
            style_attack_bonus: style.attack_bonus,
            sanity_damage,
            doom_delta,
            is_flanking: flanking,
            pack_morale: pack.morale,
            opportunistic,
        });

        // Hit-and-run melee attackers slip back out of reach
        if !is_ranged && style.retreat_after_attack {
            if let Some(dest) = Self::retreat_step(i, target.pos, monsters, players, board) {
                monsters[i].pos = dest;
            }
        }
    }

    /// After relocating, a creature may find prey newly in reach
    #[allow(clippy::too_many_arguments)]
    fn opportunistic_attack(
        &mut self,
        i: usize,
        monsters: &mut [Monster],
        players: &[Investigator],
        board: &BoardMap,
        weather: Weather,
        attacks: &mut Vec<AttackRecord>,
        events: &mut Vec<SpecialEvent>,
        messages: &mut Vec<String>,
    ) {
        let actor = monsters[i].clone();
        // A creature that just broke and ran keeps running
        if actor.ai.phase == AiPhase::Fleeing {
            return;
        }
        let in_reach: Vec<Investigator> = players
            .iter()
            .filter(|p| p.is_alive())
            .filter(|p| actor.pos.distance(&p.pos) <= actor.attack_range)
            .cloned()
            .collect();
        if in_reach.is_empty() {
            return;
        }

        let Some(target) = pick_best_target(&actor, &in_reach, board, weather) else {
            return;
        };
        let target_id = target.id;
        messages.push(messages::attack_message(actor.kind));
        self.resolve_attack(
            i, target_id, true, monsters, players, board, weather, attacks, events, messages,
        );
    }

    /// Roll the caller's alarm cry and rouse kin within earshot
    fn call_for_help(
        &mut self,
        i: usize,
        round: Round,
        monsters: &mut [Monster],
        events: &mut Vec<SpecialEvent>,
        messages: &mut Vec<String>,
    ) {
        let caller = monsters[i].clone();
        let profile = personality(caller.kind);
        if profile.call_for_help_chance <= 0.0 {
            return;
        }
        let Some(target_pos) = caller.ai.last_known_target else {
            return;
        };
        if !self.rng.gen_bool(profile.call_for_help_chance as f64) {
            return;
        }

        let mut alerted = 0;
        for j in 0..monsters.len() {
            if j == i || !monsters[j].is_alive() {
                continue;
            }
            if monsters[j].pos.distance(&caller.pos) > CALL_FOR_HELP_RANGE {
                continue;
            }
            if matches!(monsters[j].ai.phase, AiPhase::Hunting | AiPhase::Fleeing) {
                continue;
            }
            monsters[j].ai = monsters[j].ai.alerted(target_pos, round);
            alerted += 1;
        }

        if alerted > 0 {
            messages.push(messages::call_for_help_message(caller.kind));
            events.push(SpecialEvent::CalledForHelp {
                monster: caller.id,
                kind: caller.kind,
                allies_alerted: alerted,
            });
        }
    }

    /// Neighbor strictly farther from the struck target, for post-attack
    /// repositioning
    fn retreat_step(
        i: usize,
        from: HexCoord,
        monsters: &[Monster],
        players: &[Investigator],
        board: &BoardMap,
    ) -> Option<HexCoord> {
        let me = &monsters[i];
        let current = me.pos.distance(&from);

        me.pos
            .neighbors()
            .into_iter()
            .filter(|n| {
                board
                    .get(n)
                    .is_some_and(|tile| can_pass(me, tile).can_pass)
            })
            .filter(|n| !board.blocks_crossing(me.pos, *n))
            .filter(|n| {
                !monsters
                    .iter()
                    .any(|m| m.id != me.id && m.is_alive() && m.pos == *n)
            })
            .filter(|n| !players.iter().any(|p| p.is_alive() && p.pos == *n))
            .filter(|n| n.distance(&from) > current)
            .max_by_key(|n| n.distance(&from))
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tile::TileCategory;
    use crate::player::InvestigatorClass;
    use crate::spawn::create_monster_with_ai;

    fn open_board() -> BoardMap {
        BoardMap::open_room(HexCoord::new(0, 0), 10, TileCategory::Room)
    }

    #[test]
    fn test_dead_creature_does_nothing() {
        let board = open_board();
        let mut ghoul = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(1, 0));
        ghoul.hp = 0;
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        let mut engine = TurnEngine::with_seed(1);
        let outcome = engine.process_turn(vec![ghoul.clone()], &players, &board, Weather::Clear);

        assert!(outcome.attacks.is_empty());
        assert_eq!(outcome.monsters[0].pos, ghoul.pos);
    }

    #[test]
    fn test_creature_off_board_is_skipped() {
        let board = open_board();
        let ghoul = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(50, 50));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        let mut engine = TurnEngine::with_seed(1);
        let outcome = engine.process_turn(vec![ghoul.clone()], &players, &board, Weather::Clear);

        assert!(outcome.attacks.is_empty());
        assert_eq!(outcome.monsters[0].pos, HexCoord::new(50, 50));
    }

    #[test]
    fn test_adjacent_attacker_produces_record() {
        let board = open_board();
        let zombie = create_monster_with_ai(MonsterKind::Zombie, HexCoord::new(1, 0));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        // Zombies are slow; try seeds until the skip roll lets one act
        for seed in 0..20 {
            let mut engine = TurnEngine::with_seed(seed);
            let outcome =
                engine.process_turn(vec![zombie.clone()], &players, &board, Weather::Clear);
            if let Some(attack) = outcome.attacks.first() {
                assert_eq!(attack.target, players[0].id);
                assert!(!attack.is_ranged);
                assert_eq!(attack.cover_penalty, 0);
                return;
            }
        }
        panic!("zombie never got to act across 20 seeds");
    }

    #[test]
    fn test_ranged_attack_reports_cover() {
        use crate::board::tile::TileObjectKind;

        let mut board = open_board();
        board.set_object(HexCoord::new(1, 0), TileObjectKind::Crate);

        let sniper = create_monster_with_ai(MonsterKind::CultistSniper, HexCoord::new(2, 0));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        let mut engine = TurnEngine::with_seed(3);
        let outcome = engine.process_turn(vec![sniper], &players, &board, Weather::Clear);

        let attack = outcome.attacks.first().expect("sniper should fire");
        assert!(attack.is_ranged);
        assert_eq!(attack.cover_penalty, 1);
    }

    #[test]
    fn test_move_converts_to_opportunistic_attack() {
        let board = open_board();
        // Ghoul three tiles out: speed 3 brings it adjacent, then it bites
        let ghoul = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(4, 0));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        for seed in 0..20 {
            let mut engine = TurnEngine::with_seed(seed);
            let outcome =
                engine.process_turn(vec![ghoul.clone()], &players, &board, Weather::Clear);
            if let Some(attack) = outcome.attacks.first() {
                assert!(attack.opportunistic);
                assert_eq!(outcome.monsters[0].pos.distance(&players[0].pos), 1);
                return;
            }
        }
        panic!("ghoul never reached the player across 20 seeds");
    }

    #[test]
    fn test_hit_and_run_retreats_after_melee() {
        let board = open_board();
        // Nightgaunt: HitAndRun style, melee
        let gaunt = create_monster_with_ai(MonsterKind::Nightgaunt, HexCoord::new(1, 0));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        let mut engine = TurnEngine::with_seed(5);
        let outcome = engine.process_turn(vec![gaunt], &players, &board, Weather::Clear);

        assert_eq!(outcome.attacks.len(), 1);
        // After striking it slipped back out of reach
        assert!(outcome.monsters[0].pos.distance(&players[0].pos) > 1);
    }

    #[test]
    fn test_teleport_emits_event() {
        let board = open_board();
        let hound = create_monster_with_ai(MonsterKind::Hound, HexCoord::new(8, 0));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Occultist,
        )];

        let mut engine = TurnEngine::with_seed(2);
        let outcome = engine.process_turn(vec![hound], &players, &board, Weather::Clear);

        assert!(outcome
            .events
            .iter()
            .any(|e| matches!(e, SpecialEvent::Teleported { .. })));
        // Arrived adjacent, then took the opportunistic bite
        assert_eq!(outcome.monsters[0].pos.distance(&players[0].pos), 1);
        assert!(!outcome.attacks.is_empty());
    }

    #[test]
    fn test_round_counter_advances() {
        let board = open_board();
        let mut engine = TurnEngine::with_seed(1);
        assert_eq!(engine.round(), 0);

        let players = Vec::new();
        engine.process_turn(Vec::new(), &players, &board, Weather::Clear);
        engine.process_turn(Vec::new(), &players, &board, Weather::Clear);
        assert_eq!(engine.round(), 2);
    }

    #[test]
    fn test_outcome_is_new_vector() {
        let board = open_board();
        let ghoul = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(3, 0));
        let original = vec![ghoul];
        let snapshot = original.clone();

        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];
        let mut engine = TurnEngine::with_seed(7);
        let outcome = engine.process_turn(original, &players, &board, Weather::Clear);

        // The caller's snapshot is untouched; the outcome owns fresh state
        assert_eq!(snapshot[0].pos, HexCoord::new(3, 0));
        assert_eq!(outcome.monsters.len(), 1);
    }

    #[test]
    fn test_pack_bonus_lands_on_record() {
        let board = open_board();
        let a = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let b = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(1, -1));
        let c = create_monster_with_ai(MonsterKind::Ghoul, HexCoord::new(2, -1));
        let players = vec![Investigator::new(
            HexCoord::new(0, 0),
            InvestigatorClass::Detective,
        )];

        let mut engine = TurnEngine::with_seed(9);
        let outcome = engine.process_turn(vec![a, b, c], &players, &board, Weather::Clear);

        let first = outcome.attacks.first().expect("pack should attack");
        assert!(first.pack_morale);
        // Two packmates within reach: +1 pack die, plus pack tactics if the
        // ability fired
        assert!(first.bonus_dice >= 1);
    }
}
