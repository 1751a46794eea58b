//! Level-dependent difficulty formulas
//!
//! Pure and deterministic: every value is a function of the level alone.
//! Spawn delays are in milliseconds of the driving clock.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Difficulty level, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32")]
pub struct Level(u32);

impl Level {
    /// Levels below 1 are raised to 1
    pub fn new(level: u32) -> Self {
        Self(level.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    fn log_scale(self) -> f64 {
        (f64::from(self.0) + 1.0).log10()
    }

    /// Desired size of the general (wanderer + chaser) population
    pub fn enemy_target(self) -> f64 {
        20.0 * self.log_scale()
    }

    /// Desired size of the patrol population
    pub fn patrol_target(self) -> f64 {
        self.log_scale() * 2.3 + 1.0
    }

    /// Whether bosses appear at all on this level
    pub fn boss_gate(self) -> bool {
        let phase = f64::from(self.0) * PI / 2.0 * (self.log_scale() / 5.0);
        (phase.sin() * 10.0).round_ties_even() == 10.0
    }

    /// Desired size of the boss population (only meaningful when gated in)
    pub fn boss_target(self) -> i64 {
        let decay = (1.0 / 1.02f64).powf(f64::from(self.0) - 35.0);
        (-decay + 3.0).round_ties_even() as i64 - 1
    }

    /// Delay before the scheduler's first run
    pub fn initial_spawn_delay_ms(self) -> u64 {
        (2000.0 / self.enemy_target()).floor() as u64 + 1
    }

    /// Delay between steady-state scheduler runs; shrinks as targets grow
    pub fn spawn_delay_ms(self) -> u64 {
        (5000.0 / (self.enemy_target() + self.patrol_target())).round_ties_even() as u64
    }
}

impl From<u32> for Level {
    fn from(level: u32) -> Self {
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_one_values() {
        let l = Level::new(1);
        assert!((l.enemy_target() - 6.0206).abs() < 1e-3);
        assert!((l.patrol_target() - 1.6924).abs() < 1e-3);
        assert_eq!(l.initial_spawn_delay_ms(), 333);
        assert_eq!(l.spawn_delay_ms(), 648);
        assert!(!l.boss_gate());
    }

    #[test]
    fn test_zero_level_is_raised() {
        assert_eq!(Level::new(0).get(), 1);
        assert_eq!(Level::from(0), Level::new(1));
    }

    #[test]
    fn test_seed_and_steady_delay_differ() {
        let l = Level::new(9);
        assert_ne!(l.initial_spawn_delay_ms(), l.spawn_delay_ms());
        // 20 * log10(10) = 20
        assert_eq!(l.enemy_target(), 20.0);
        assert_eq!(l.initial_spawn_delay_ms(), 101);
        assert_eq!(l.spawn_delay_ms(), 215);
    }

    #[test]
    fn test_deserialized_level_is_clamped() {
        let l: Level = serde_json::from_str("0").unwrap();
        assert_eq!(l, Level::new(1));
        assert_eq!(l.initial_spawn_delay_ms(), 333);
        assert_eq!(serde_json::to_string(&Level::new(4)).unwrap(), "4");
    }

    #[test]
    fn test_boss_gate_levels() {
        assert!(!Level::new(5).boss_gate());
        assert!(Level::new(6).boss_gate());
        assert!(Level::new(19).boss_gate());
    }

    #[test]
    fn test_boss_target_grows_with_level() {
        assert_eq!(Level::new(1).boss_target(), 0);
        assert_eq!(Level::new(35).boss_target(), 1);
        assert_eq!(Level::new(200).boss_target(), 2);
    }

    #[test]
    fn test_formulas_are_deterministic() {
        let a = Level::new(9).enemy_target();
        let b = Level::new(9).enemy_target();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_enemy_target_monotonic(level in 1u32..100_000) {
            let lo = Level::new(level);
            let hi = Level::new(level + 1);
            prop_assert!(hi.enemy_target() >= lo.enemy_target());
            prop_assert!(hi.patrol_target() >= lo.patrol_target());
            prop_assert!(hi.spawn_delay_ms() <= lo.spawn_delay_ms());
        }

        #[test]
        fn prop_delays_are_positive(level in 1u32..100_000) {
            let l = Level::new(level);
            prop_assert!(l.initial_spawn_delay_ms() >= 1);
            prop_assert!(l.spawn_delay_ms() >= 1);
        }
    }
}
