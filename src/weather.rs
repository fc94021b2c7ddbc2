//! Weather conditions and their behavioral modifiers
//!
//! Weather scales vision and aggression, slows or frees movement, and some
//! kinds are simply at home in it.

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::creature::kind::MonsterKind;
use crate::creature::monster::MonsterTrait;
use crate::creature::{base_stats, personality};

/// Current weather condition over the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Clear,
    Fog,
    Rain,
    Storm,
    UnnaturalDarkness,
    EldritchGlow,
}

impl Weather {
    /// Vision range multiplier (1.0 = normal)
    pub fn vision_modifier(&self) -> f32 {
        match self {
            Self::Clear => 1.0,
            Self::Fog => 0.5,
            Self::Rain => 0.8,
            Self::Storm => 0.6,
            Self::UnnaturalDarkness => 0.4,
            Self::EldritchGlow => 1.2,
        }
    }

    /// Target-score multiplier; hostile weather whips creatures on
    pub fn aggression_modifier(&self) -> f32 {
        match self {
            Self::Clear => 1.0,
            Self::Fog => 1.1,
            Self::Rain => 1.0,
            Self::Storm => 1.2,
            Self::UnnaturalDarkness => 1.3,
            Self::EldritchGlow => 1.1,
        }
    }

    /// Movement/action-rate multiplier
    pub fn speed_modifier(&self) -> f32 {
        match self {
            Self::Clear => 1.0,
            Self::Fog => 0.9,
            Self::Rain => 0.9,
            Self::Storm => 0.7,
            Self::UnnaturalDarkness => 1.1,
            Self::EldritchGlow => 1.0,
        }
    }

    /// Bonus attack dice for ambushers striking from concealment
    pub fn stealth_bonus(&self) -> i32 {
        match self {
            Self::Clear => 0,
            Self::Fog => 1,
            Self::Rain => 0,
            Self::Storm => 1,
            Self::UnnaturalDarkness => 2,
            Self::EldritchGlow => 0,
        }
    }

    /// Does this weather favor the given kind? Darkness-dwellers thrive in
    /// unnatural dark, glow-drawn kinds in eldritch light, aquatic kinds in
    /// rain and storm.
    pub fn favors(&self, kind: MonsterKind) -> bool {
        match self {
            Self::UnnaturalDarkness => is_darkness_dweller(kind),
            Self::EldritchGlow => is_glow_drawn(kind),
            Self::Rain | Self::Storm => base_stats(kind).traits.contains(MonsterTrait::Aquatic),
            Self::Clear | Self::Fog => false,
        }
    }

    /// Weather-adjusted vision range for a kind's base vision
    pub fn adjusted_vision(&self, vision_range: u32) -> u32 {
        (vision_range as f32 * self.vision_modifier()).floor() as u32
    }
}

/// Kinds that hunt better without light
fn is_darkness_dweller(kind: MonsterKind) -> bool {
    personality(kind)
        .preferred_terrain
        .iter()
        .any(|t| t.is_dark())
        || matches!(
            kind,
            MonsterKind::Nightgaunt | MonsterKind::Hound | MonsterKind::DimensionalShambler
        )
}

/// Kinds drawn to the glow of the spheres
fn is_glow_drawn(kind: MonsterKind) -> bool {
    matches!(
        kind,
        MonsterKind::MiGo
            | MonsterKind::MiGoSurgeon
            | MonsterKind::Byakhee
            | MonsterKind::StarSpawn
            | MonsterKind::ServitorOfTheOuterGods
    )
}

impl std::str::FromStr for Weather {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "fog" => Ok(Self::Fog),
            "rain" => Ok(Self::Rain),
            "storm" => Ok(Self::Storm),
            "darkness" | "unnatural-darkness" => Ok(Self::UnnaturalDarkness),
            "glow" | "eldritch-glow" => Ok(Self::EldritchGlow),
            other => Err(EngineError::UnknownWeather(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_weather_neutral() {
        assert_eq!(Weather::Clear.vision_modifier(), 1.0);
        assert_eq!(Weather::Clear.aggression_modifier(), 1.0);
        assert_eq!(Weather::Clear.stealth_bonus(), 0);
    }

    #[test]
    fn test_darkness_shortens_sight() {
        assert!(Weather::UnnaturalDarkness.vision_modifier() < Weather::Fog.vision_modifier());
        assert_eq!(Weather::UnnaturalDarkness.adjusted_vision(10), 4);
    }

    #[test]
    fn test_rain_favors_deep_ones() {
        assert!(Weather::Rain.favors(MonsterKind::DeepOne));
        assert!(Weather::Storm.favors(MonsterKind::Shoggoth));
        assert!(!Weather::Rain.favors(MonsterKind::Cultist));
    }

    #[test]
    fn test_darkness_favors_ghouls() {
        assert!(Weather::UnnaturalDarkness.favors(MonsterKind::Ghoul));
        assert!(Weather::UnnaturalDarkness.favors(MonsterKind::Hound));
        assert!(!Weather::UnnaturalDarkness.favors(MonsterKind::CultistSniper));
    }

    #[test]
    fn test_glow_favors_migo() {
        assert!(Weather::EldritchGlow.favors(MonsterKind::MiGo));
        assert!(!Weather::EldritchGlow.favors(MonsterKind::Ghoul));
    }

    #[test]
    fn test_weather_parse() {
        assert_eq!("storm".parse::<Weather>().unwrap(), Weather::Storm);
        assert_eq!(
            "darkness".parse::<Weather>().unwrap(),
            Weather::UnnaturalDarkness
        );
        assert!("hail".parse::<Weather>().is_err());
    }
}
