//! Engine tunables - all decision thresholds in one place

// Pathfinding
pub const MAX_PATH_DEPTH: u32 = 12;

// Engagement
pub const OPTIMAL_RANGED_DISTANCE: u32 = 2;
pub const TELEPORT_TRIGGER_DISTANCE: u32 = 3;
pub const DEFENSIVE_HOLD_DISTANCE: u32 = 3;

// Hesitation: creatures below the base aggression may balk when the target
// is still HESITATION_MIN_DISTANCE or more away; each hex beyond that
// relieves the urge by HESITATION_DISTANCE_RELIEF percent.
pub const HESITATION_BASE_AGGRESSION: u8 = 70;
pub const HESITATION_MIN_DISTANCE: u32 = 3;
pub const HESITATION_DISTANCE_RELIEF: i32 = 5;

// Roaming and patrol
pub const ROAM_AGGRESSION_FLOOR: u8 = 70;
pub const ROAM_DEVIATION_CHANCE: f64 = 0.2;

// Scoring bonuses
pub const CLASS_PREFER_BONUS: i32 = 15;
pub const CLASS_AVOID_PENALTY: i32 = -20;
pub const ISOLATION_BONUS: i32 = 20;
pub const WATER_PREY_BONUS: i32 = 15;
pub const WEATHER_FAVOR_BONUS: i32 = 15;
pub const ISOLATION_RADIUS: u32 = 2;

// Pack behavior
pub const PACK_RADIUS: u32 = 2;
pub const CALL_FOR_HELP_RANGE: u32 = 6;

// Slow-trait creatures skip their activation this often in neutral weather
pub const SLOW_SKIP_CHANCE: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_depth_reaches_across_a_room() {
        assert!(MAX_PATH_DEPTH >= 10);
    }

    #[test]
    fn test_hesitation_window_sits_below_roam_floor() {
        assert!(HESITATION_BASE_AGGRESSION <= ROAM_AGGRESSION_FLOOR);
    }

    #[test]
    fn test_chances_are_probabilities() {
        assert!((0.0..=1.0).contains(&ROAM_DEVIATION_CHANCE));
        assert!((0.0..=1.0).contains(&SLOW_SKIP_CHANCE));
    }
}
