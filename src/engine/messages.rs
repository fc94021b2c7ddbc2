//! Player-facing flavor messages, one table per concern
//!
//! Every per-kind message lives here so the decision machine and turn
//! processor never grow their own competing switch statements.

use crate::creature::kind::MonsterKind;

/// How a kind's attack reads on the log
pub fn attack_message(kind: MonsterKind) -> String {
    let name = kind.name();
    let verb = match kind {
        MonsterKind::Cultist | MonsterKind::CrazedVagrant => "slashes wildly at",
        MonsterKind::CultistSniper => "fires from the shadows at",
        MonsterKind::CultistPriest | MonsterKind::DeepOnePriest => "shrieks blasphemies at",
        MonsterKind::Zombie => "claws and bites at",
        MonsterKind::Ghoul | MonsterKind::GhoulElder => "lunges with grave-stained claws at",
        MonsterKind::RabidDog | MonsterKind::SwarmOfRats => "swarms over",
        MonsterKind::DeepOne | MonsterKind::DeepOneWarrior => "rakes with webbed talons at",
        MonsterKind::MiGo | MonsterKind::MiGoSurgeon => "reaches with surgical pincers for",
        MonsterKind::Nightgaunt => "grasps with rubbery fingers at",
        MonsterKind::Byakhee | MonsterKind::Shantak => "dives screaming at",
        MonsterKind::HuntingHorror | MonsterKind::Hound => "strikes like a whip at",
        MonsterKind::DimensionalShambler => "claws from an impossible angle at",
        MonsterKind::MoonBeast => "hurls a barbed dart at",
        MonsterKind::Specter | MonsterKind::Poltergeist => "passes cold through",
        MonsterKind::Shoggoth | MonsterKind::FormlessSpawn => "crashes as a wave of flesh over",
        MonsterKind::StarSpawn
        | MonsterKind::DarkYoung
        | MonsterKind::ServitorOfTheOuterGods
        | MonsterKind::FleshColossus => "brings titanic limbs down upon",
        MonsterKind::ElderThing => "lashes with ancient tendrils at",
    };
    format!("The {name} {verb} its prey!")
}

/// Idle mutterings when a kind holds still
pub fn wait_message(kind: MonsterKind) -> String {
    let name = kind.name();
    let doing = match kind {
        MonsterKind::Cultist | MonsterKind::CultistPriest => "mutters a low chant",
        MonsterKind::CultistSniper => "watches down its sights",
        MonsterKind::Zombie | MonsterKind::FleshColossus => "sways in place",
        MonsterKind::Ghoul | MonsterKind::GhoulElder => "crouches among the stones",
        MonsterKind::Specter | MonsterKind::Poltergeist => "flickers at the edge of sight",
        MonsterKind::Hound => "circles, tasting the angles",
        MonsterKind::Shoggoth => "bubbles and reforms",
        _ => "waits in the gloom",
    };
    format!("The {name} {doing}.")
}

/// Panic flight flavor
pub fn flee_message(kind: MonsterKind) -> String {
    let name = kind.name();
    let how = match kind {
        MonsterKind::Cultist | MonsterKind::CultistSniper | MonsterKind::CrazedVagrant => {
            "breaks and runs"
        }
        MonsterKind::RabidDog => "yelps and bolts",
        MonsterKind::Ghoul | MonsterKind::GhoulElder => "scrambles for the dark",
        MonsterKind::Hound => "howls and streaks away through the corners",
        _ => "recoils and retreats",
    };
    format!("The {name} {how}!")
}

/// First-sighting flavor when a kind locks onto prey
pub fn spotted_message(kind: MonsterKind) -> String {
    format!("The {} has caught the scent!", kind.name())
}

/// Balking at a distant, dangerous-looking target
pub fn hesitate_message(kind: MonsterKind) -> String {
    format!("The {} hesitates, wary of its prey.", kind.name())
}

/// Stepping outside space for a moment
pub fn teleport_message(kind: MonsterKind) -> String {
    format!("The {} folds out of the angles of the room!", kind.name())
}

/// Cry that rouses nearby allies
pub fn call_for_help_message(kind: MonsterKind) -> String {
    format!("The {} raises an alarm-cry that echoes off the stones!", kind.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_messages() {
        for kind in MonsterKind::ALL {
            assert!(attack_message(kind).contains(kind.name()));
            assert!(!wait_message(kind).is_empty());
            assert!(!flee_message(kind).is_empty());
        }
    }

    #[test]
    fn test_sniper_attacks_from_range() {
        assert!(attack_message(MonsterKind::CultistSniper).contains("fires"));
    }
}
