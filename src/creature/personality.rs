//! Behavior profiles per creature kind
//!
//! Static registry keyed by the closed kind enum; nothing here mutates at
//! runtime. Kinds without a bespoke profile share an aggressive default, so
//! the lookup is total.

use crate::board::tile::TileCategory;
use crate::creature::combat_style::CombatStyle;
use crate::creature::kind::MonsterKind;
use crate::engine::abilities::AbilityId;
use crate::player::InvestigatorClass;

/// How a kind behaves: when it commits, when it breaks, what it wants
#[derive(Debug, Clone)]
pub struct Personality {
    /// 0-100; gates hesitation and roaming eagerness
    pub aggression: u8,
    /// HP percentage at or below which the creature tries to flee; 0 = never
    pub cowardice_threshold: u8,
    pub pack_mentality: bool,
    pub call_for_help_chance: f32,
    pub style: CombatStyle,
    pub prefers_low_hp: bool,
    pub prefers_low_sanity: bool,
    pub prefers_isolated: bool,
    pub prefers_water_targets: bool,
    pub preferred_classes: &'static [InvestigatorClass],
    pub avoided_classes: &'static [InvestigatorClass],
    pub preferred_terrain: &'static [TileCategory],
    pub abilities: &'static [AbilityId],
}

impl Personality {
    /// Fallback profile: straightforward and hostile, no preferences
    pub fn aggressive_default() -> Self {
        Self {
            aggression: 80,
            cowardice_threshold: 0,
            pack_mentality: false,
            call_for_help_chance: 0.0,
            style: CombatStyle::Berserker,
            prefers_low_hp: false,
            prefers_low_sanity: false,
            prefers_isolated: false,
            prefers_water_targets: false,
            preferred_classes: &[],
            avoided_classes: &[],
            preferred_terrain: &[],
            abilities: &[],
        }
    }

    pub fn has_ability(&self, ability: AbilityId) -> bool {
        self.abilities.contains(&ability)
    }
}

/// Look up the behavior profile for a kind
pub fn personality(kind: MonsterKind) -> Personality {
    use InvestigatorClass::*;
    use TileCategory::*;

    let default = Personality::aggressive_default();
    match kind {
        MonsterKind::Cultist => Personality {
            aggression: 50,
            cowardice_threshold: 40,
            pack_mentality: true,
            call_for_help_chance: 0.3,
            style: CombatStyle::Swarm,
            preferred_classes: &[Occultist, Professor],
            avoided_classes: &[Veteran],
            preferred_terrain: &[Crypt, Basement],
            ..default
        },
        MonsterKind::CultistSniper => Personality {
            aggression: 55,
            cowardice_threshold: 20,
            call_for_help_chance: 0.2,
            style: CombatStyle::Siege,
            prefers_isolated: true,
            preferred_terrain: &[Facade, Street],
            ..default
        },
        MonsterKind::CultistPriest => Personality {
            aggression: 45,
            cowardice_threshold: 50,
            pack_mentality: true,
            call_for_help_chance: 0.5,
            style: CombatStyle::Cautious,
            prefers_low_sanity: true,
            avoided_classes: &[Priest],
            preferred_terrain: &[Crypt],
            abilities: &[AbilityId::Ritual, AbilityId::Summon],
            ..default
        },
        MonsterKind::CrazedVagrant => Personality {
            aggression: 40,
            cowardice_threshold: 60,
            style: CombatStyle::HitAndRun,
            preferred_terrain: &[Street, Urban],
            ..default
        },
        MonsterKind::Zombie => Personality {
            aggression: 90,
            cowardice_threshold: 0,
            style: CombatStyle::Berserker,
            prefers_low_hp: true,
            ..default
        },
        MonsterKind::Ghoul => Personality {
            aggression: 65,
            cowardice_threshold: 30,
            pack_mentality: true,
            call_for_help_chance: 0.25,
            style: CombatStyle::Ambush,
            prefers_low_hp: true,
            preferred_terrain: &[Crypt, Basement],
            abilities: &[AbilityId::PackTactics],
            ..default
        },
        MonsterKind::GhoulElder => Personality {
            aggression: 75,
            cowardice_threshold: 15,
            pack_mentality: true,
            call_for_help_chance: 0.4,
            style: CombatStyle::Tactical,
            prefers_low_hp: true,
            preferred_terrain: &[Crypt, Basement],
            abilities: &[AbilityId::PackTactics, AbilityId::Enrage],
            ..default
        },
        MonsterKind::RabidDog => Personality {
            aggression: 85,
            cowardice_threshold: 20,
            pack_mentality: true,
            style: CombatStyle::Swarm,
            prefers_isolated: true,
            ..default
        },
        MonsterKind::SwarmOfRats => Personality {
            aggression: 60,
            cowardice_threshold: 50,
            pack_mentality: true,
            style: CombatStyle::Swarm,
            preferred_terrain: &[Basement, Corridor],
            ..default
        },
        MonsterKind::DeepOne => Personality {
            aggression: 70,
            cowardice_threshold: 20,
            pack_mentality: true,
            call_for_help_chance: 0.3,
            style: CombatStyle::Swarm,
            prefers_water_targets: true,
            preferred_terrain: &[Nature],
            abilities: &[AbilityId::DragUnder],
            ..default
        },
        MonsterKind::DeepOneWarrior => Personality {
            aggression: 80,
            cowardice_threshold: 10,
            pack_mentality: true,
            style: CombatStyle::Tactical,
            prefers_water_targets: true,
            preferred_terrain: &[Nature],
            abilities: &[AbilityId::DragUnder, AbilityId::Charge],
            ..default
        },
        MonsterKind::DeepOnePriest => Personality {
            aggression: 55,
            cowardice_threshold: 35,
            pack_mentality: true,
            call_for_help_chance: 0.5,
            style: CombatStyle::Cautious,
            prefers_low_sanity: true,
            prefers_water_targets: true,
            preferred_terrain: &[Nature, Crypt],
            abilities: &[AbilityId::Ritual, AbilityId::DragUnder],
            ..default
        },
        MonsterKind::MiGo => Personality {
            aggression: 65,
            cowardice_threshold: 25,
            style: CombatStyle::Tactical,
            prefers_isolated: true,
            preferred_classes: &[Professor, Doctor],
            abilities: &[AbilityId::VenomSpit],
            ..default
        },
        MonsterKind::MiGoSurgeon => Personality {
            aggression: 55,
            cowardice_threshold: 30,
            style: CombatStyle::Cautious,
            prefers_low_hp: true,
            preferred_classes: &[Doctor],
            abilities: &[AbilityId::Regenerate],
            ..default
        },
        MonsterKind::Nightgaunt => Personality {
            aggression: 75,
            cowardice_threshold: 15,
            style: CombatStyle::HitAndRun,
            prefers_isolated: true,
            preferred_terrain: &[Nature, Street],
            ..default
        },
        MonsterKind::Byakhee => Personality {
            aggression: 80,
            cowardice_threshold: 10,
            pack_mentality: true,
            style: CombatStyle::HitAndRun,
            preferred_terrain: &[Nature, Street],
            abilities: &[AbilityId::Charge],
            ..default
        },
        MonsterKind::Shantak => Personality {
            aggression: 70,
            cowardice_threshold: 25,
            style: CombatStyle::Berserker,
            preferred_terrain: &[Nature],
            ..default
        },
        MonsterKind::HuntingHorror => Personality {
            aggression: 95,
            cowardice_threshold: 0,
            style: CombatStyle::Berserker,
            prefers_isolated: true,
            abilities: &[AbilityId::Charge],
            ..default
        },
        MonsterKind::Hound => Personality {
            aggression: 85,
            cowardice_threshold: 10,
            style: CombatStyle::Tactical,
            prefers_low_sanity: true,
            abilities: &[AbilityId::Teleport],
            ..default
        },
        MonsterKind::DimensionalShambler => Personality {
            aggression: 70,
            cowardice_threshold: 20,
            style: CombatStyle::HitAndRun,
            prefers_isolated: true,
            abilities: &[AbilityId::Teleport],
            ..default
        },
        MonsterKind::MoonBeast => Personality {
            aggression: 60,
            cowardice_threshold: 30,
            style: CombatStyle::Siege,
            preferred_terrain: &[Facade, Foyer],
            ..default
        },
        MonsterKind::Specter => Personality {
            aggression: 60,
            cowardice_threshold: 0,
            style: CombatStyle::Ambush,
            prefers_low_sanity: true,
            preferred_terrain: &[Crypt, Room],
            abilities: &[AbilityId::Wail],
            ..default
        },
        MonsterKind::Poltergeist => Personality {
            aggression: 55,
            cowardice_threshold: 0,
            style: CombatStyle::Ambush,
            prefers_low_sanity: true,
            preferred_terrain: &[Room, Foyer],
            abilities: &[AbilityId::Terrify],
            ..default
        },
        MonsterKind::Shoggoth => Personality {
            aggression: 90,
            cowardice_threshold: 0,
            style: CombatStyle::Berserker,
            prefers_water_targets: true,
            preferred_terrain: &[Basement, Crypt],
            abilities: &[AbilityId::Enrage],
            ..default
        },
        MonsterKind::StarSpawn => Personality {
            aggression: 95,
            cowardice_threshold: 0,
            style: CombatStyle::Berserker,
            abilities: &[AbilityId::Terrify],
            ..default
        },
        MonsterKind::DarkYoung => Personality {
            aggression: 85,
            cowardice_threshold: 0,
            style: CombatStyle::Berserker,
            preferred_terrain: &[Nature],
            abilities: &[AbilityId::Charge],
            ..default
        },
        MonsterKind::FormlessSpawn => Personality {
            aggression: 80,
            cowardice_threshold: 0,
            style: CombatStyle::Swarm,
            prefers_water_targets: true,
            preferred_terrain: &[Basement],
            ..default
        },
        MonsterKind::ServitorOfTheOuterGods => Personality {
            aggression: 50,
            cowardice_threshold: 0,
            call_for_help_chance: 0.6,
            style: CombatStyle::Siege,
            prefers_low_sanity: true,
            preferred_terrain: &[Crypt],
            abilities: &[AbilityId::Ritual, AbilityId::Summon],
            ..default
        },
        MonsterKind::FleshColossus => Personality {
            aggression: 90,
            cowardice_threshold: 0,
            style: CombatStyle::Berserker,
            prefers_low_hp: true,
            ..default
        },
        MonsterKind::ElderThing => Personality {
            aggression: 45,
            cowardice_threshold: 40,
            style: CombatStyle::Cautious,
            preferred_classes: &[Professor],
            preferred_terrain: &[Basement, Crypt],
            ..default
        },
    }
}
