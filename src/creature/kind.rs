//! The closed bestiary roster

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// Every creature kind the engine knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Cultist,
    CultistSniper,
    CultistPriest,
    CrazedVagrant,
    Zombie,
    Ghoul,
    GhoulElder,
    RabidDog,
    SwarmOfRats,
    DeepOne,
    DeepOneWarrior,
    DeepOnePriest,
    MiGo,
    MiGoSurgeon,
    Nightgaunt,
    Byakhee,
    Shantak,
    HuntingHorror,
    Hound,
    DimensionalShambler,
    MoonBeast,
    Specter,
    Poltergeist,
    Shoggoth,
    StarSpawn,
    DarkYoung,
    FormlessSpawn,
    ServitorOfTheOuterGods,
    FleshColossus,
    ElderThing,
}

impl MonsterKind {
    /// All kinds, in spawn-table order
    pub const ALL: [MonsterKind; 30] = [
        MonsterKind::Cultist,
        MonsterKind::CultistSniper,
        MonsterKind::CultistPriest,
        MonsterKind::CrazedVagrant,
        MonsterKind::Zombie,
        MonsterKind::Ghoul,
        MonsterKind::GhoulElder,
        MonsterKind::RabidDog,
        MonsterKind::SwarmOfRats,
        MonsterKind::DeepOne,
        MonsterKind::DeepOneWarrior,
        MonsterKind::DeepOnePriest,
        MonsterKind::MiGo,
        MonsterKind::MiGoSurgeon,
        MonsterKind::Nightgaunt,
        MonsterKind::Byakhee,
        MonsterKind::Shantak,
        MonsterKind::HuntingHorror,
        MonsterKind::Hound,
        MonsterKind::DimensionalShambler,
        MonsterKind::MoonBeast,
        MonsterKind::Specter,
        MonsterKind::Poltergeist,
        MonsterKind::Shoggoth,
        MonsterKind::StarSpawn,
        MonsterKind::DarkYoung,
        MonsterKind::FormlessSpawn,
        MonsterKind::ServitorOfTheOuterGods,
        MonsterKind::FleshColossus,
        MonsterKind::ElderThing,
    ];

    /// The two scripted kinds that phase through any obstacle
    pub fn phases_through_obstacles(&self) -> bool {
        matches!(self, MonsterKind::Specter | MonsterKind::Poltergeist)
    }

    /// Display name used in player-facing messages
    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Cultist => "cultist",
            MonsterKind::CultistSniper => "cultist sniper",
            MonsterKind::CultistPriest => "cultist priest",
            MonsterKind::CrazedVagrant => "crazed vagrant",
            MonsterKind::Zombie => "zombie",
            MonsterKind::Ghoul => "ghoul",
            MonsterKind::GhoulElder => "ghoul elder",
            MonsterKind::RabidDog => "rabid dog",
            MonsterKind::SwarmOfRats => "swarm of rats",
            MonsterKind::DeepOne => "deep one",
            MonsterKind::DeepOneWarrior => "deep one warrior",
            MonsterKind::DeepOnePriest => "deep one priest",
            MonsterKind::MiGo => "mi-go",
            MonsterKind::MiGoSurgeon => "mi-go surgeon",
            MonsterKind::Nightgaunt => "nightgaunt",
            MonsterKind::Byakhee => "byakhee",
            MonsterKind::Shantak => "shantak",
            MonsterKind::HuntingHorror => "hunting horror",
            MonsterKind::Hound => "hound of Tindalos",
            MonsterKind::DimensionalShambler => "dimensional shambler",
            MonsterKind::MoonBeast => "moon-beast",
            MonsterKind::Specter => "specter",
            MonsterKind::Poltergeist => "poltergeist",
            MonsterKind::Shoggoth => "shoggoth",
            MonsterKind::StarSpawn => "star spawn",
            MonsterKind::DarkYoung => "dark young",
            MonsterKind::FormlessSpawn => "formless spawn",
            MonsterKind::ServitorOfTheOuterGods => "servitor of the Outer Gods",
            MonsterKind::FleshColossus => "flesh colossus",
            MonsterKind::ElderThing => "elder thing",
        }
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MonsterKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "cultist" => MonsterKind::Cultist,
            "cultist-sniper" => MonsterKind::CultistSniper,
            "cultist-priest" => MonsterKind::CultistPriest,
            "crazed-vagrant" => MonsterKind::CrazedVagrant,
            "zombie" => MonsterKind::Zombie,
            "ghoul" => MonsterKind::Ghoul,
            "ghoul-elder" => MonsterKind::GhoulElder,
            "rabid-dog" => MonsterKind::RabidDog,
            "swarm-of-rats" => MonsterKind::SwarmOfRats,
            "deep-one" => MonsterKind::DeepOne,
            "deep-one-warrior" => MonsterKind::DeepOneWarrior,
            "deep-one-priest" => MonsterKind::DeepOnePriest,
            "mi-go" => MonsterKind::MiGo,
            "mi-go-surgeon" => MonsterKind::MiGoSurgeon,
            "nightgaunt" => MonsterKind::Nightgaunt,
            "byakhee" => MonsterKind::Byakhee,
            "shantak" => MonsterKind::Shantak,
            "hunting-horror" => MonsterKind::HuntingHorror,
            "hound" => MonsterKind::Hound,
            "dimensional-shambler" => MonsterKind::DimensionalShambler,
            "moon-beast" => MonsterKind::MoonBeast,
            "specter" => MonsterKind::Specter,
            "poltergeist" => MonsterKind::Poltergeist,
            "shoggoth" => MonsterKind::Shoggoth,
            "star-spawn" => MonsterKind::StarSpawn,
            "dark-young" => MonsterKind::DarkYoung,
            "formless-spawn" => MonsterKind::FormlessSpawn,
            "servitor" => MonsterKind::ServitorOfTheOuterGods,
            "flesh-colossus" => MonsterKind::FleshColossus,
            "elder-thing" => MonsterKind::ElderThing,
            other => return Err(EngineError::UnknownMonsterKind(other.to_string())),
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size() {
        assert_eq!(MonsterKind::ALL.len(), 30);
    }

    #[test]
    fn test_phasing_kinds() {
        assert!(MonsterKind::Specter.phases_through_obstacles());
        assert!(MonsterKind::Poltergeist.phases_through_obstacles());
        assert!(!MonsterKind::Ghoul.phases_through_obstacles());
    }

    #[test]
    fn test_from_str_roundtrip() {
        assert_eq!("ghoul".parse::<MonsterKind>().unwrap(), MonsterKind::Ghoul);
        assert_eq!(
            "deep-one-warrior".parse::<MonsterKind>().unwrap(),
            MonsterKind::DeepOneWarrior
        );
        assert!("color-out-of-space".parse::<MonsterKind>().is_err());
    }
}
