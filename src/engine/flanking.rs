//! Flanking and pack-mentality bonuses
//!
//! Computed at attack-resolution time and attached to the attack record;
//! creature state is never mutated here.

use serde::{Deserialize, Serialize};

use crate::creature::monster::Monster;
use crate::engine::constants::PACK_RADIUS;
use crate::player::Investigator;

/// Pack support around an attacker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackBonus {
    pub bonus_dice: i32,
    /// Reserved for morale-break behavior; currently informational
    pub morale: bool,
}

/// Is some other creature pressing the target from the roughly opposite side?
///
/// Offsets from the target to each attacker are compared by sign: a strictly
/// negative sign-dot means at least one axis opposes and none aligns.
pub fn is_flanking(monster: &Monster, target: &Investigator, all_monsters: &[Monster]) -> bool {
    let a_q = (monster.pos.q - target.pos.q).signum();
    let a_r = (monster.pos.r - target.pos.r).signum();

    all_monsters
        .iter()
        .filter(|other| other.id != monster.id && other.is_alive())
        .filter(|other| other.pos.distance(&target.pos) <= 1)
        .any(|other| {
            let b_q = (other.pos.q - target.pos.q).signum();
            let b_r = (other.pos.r - target.pos.r).signum();
            a_q * b_q + a_r * b_r < 0
        })
}

/// Same-kind allies within the pack radius
pub fn pack_bonus(monster: &Monster, all_monsters: &[Monster]) -> PackBonus {
    let allies = all_monsters
        .iter()
        .filter(|other| other.id != monster.id && other.is_alive())
        .filter(|other| other.kind == monster.kind)
        .filter(|other| other.pos.distance(&monster.pos) <= PACK_RADIUS)
        .count();

    match allies {
        0 => PackBonus {
            bonus_dice: 0,
            morale: false,
        },
        1 => PackBonus {
            bonus_dice: 0,
            morale: true,
        },
        _ => PackBonus {
            bonus_dice: 1,
            morale: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::HexCoord;
    use crate::creature::kind::MonsterKind;
    use crate::player::InvestigatorClass;
    use crate::spawn::create_monster;

    #[test]
    fn test_opposite_attacker_flanks() {
        let target = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective);
        let east = create_monster(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let west = create_monster(MonsterKind::Cultist, HexCoord::new(-1, 0));
        let all = vec![east.clone(), west];

        assert!(is_flanking(&east, &target, &all));
    }

    #[test]
    fn test_diagonal_opposite_counts() {
        let target = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective);
        let east = create_monster(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let southwest = create_monster(MonsterKind::Zombie, HexCoord::new(-1, 1));
        let all = vec![east.clone(), southwest];

        assert!(is_flanking(&east, &target, &all));
    }

    #[test]
    fn test_perpendicular_ally_does_not_flank() {
        let target = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective);
        let east = create_monster(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let northwest = create_monster(MonsterKind::Zombie, HexCoord::new(0, -1));
        let all = vec![east.clone(), northwest];

        assert!(!is_flanking(&east, &target, &all));
    }

    #[test]
    fn test_distant_ally_does_not_flank() {
        let target = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective);
        let east = create_monster(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let far_west = create_monster(MonsterKind::Zombie, HexCoord::new(-3, 0));
        let all = vec![east.clone(), far_west];

        assert!(!is_flanking(&east, &target, &all));
    }

    #[test]
    fn test_dead_ally_does_not_flank() {
        let target = Investigator::new(HexCoord::new(0, 0), InvestigatorClass::Detective);
        let east = create_monster(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let mut west = create_monster(MonsterKind::Zombie, HexCoord::new(-1, 0));
        west.hp = 0;
        let all = vec![east.clone(), west];

        assert!(!is_flanking(&east, &target, &all));
    }

    #[test]
    fn test_pack_of_three_gets_die() {
        let a = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 0));
        let b = create_monster(MonsterKind::Ghoul, HexCoord::new(1, 0));
        let c = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 1));
        let all = vec![a.clone(), b, c];

        let bonus = pack_bonus(&a, &all);
        assert_eq!(bonus.bonus_dice, 1);
        assert!(bonus.morale);
    }

    #[test]
    fn test_pair_keeps_morale_without_die() {
        let a = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 0));
        let b = create_monster(MonsterKind::Ghoul, HexCoord::new(2, 0));
        let all = vec![a.clone(), b];

        let bonus = pack_bonus(&a, &all);
        assert_eq!(bonus.bonus_dice, 0);
        assert!(bonus.morale);
    }

    #[test]
    fn test_loner_loses_morale() {
        let a = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 0));
        // Different kind nearby does not count as pack
        let b = create_monster(MonsterKind::Zombie, HexCoord::new(1, 0));
        let all = vec![a.clone(), b];

        let bonus = pack_bonus(&a, &all);
        assert_eq!(bonus.bonus_dice, 0);
        assert!(!bonus.morale);
    }

    #[test]
    fn test_far_pack_does_not_count() {
        let a = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 0));
        let b = create_monster(MonsterKind::Ghoul, HexCoord::new(5, 0));
        let c = create_monster(MonsterKind::Ghoul, HexCoord::new(0, 5));
        let all = vec![a.clone(), b, c];

        assert!(!pack_bonus(&a, &all).morale);
    }
}
