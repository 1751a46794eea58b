//! Game settings and tuning
//!
//! Loaded from a JSON file; anything missing falls back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Color;

/// Per-archetype appearance and movement parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeParams {
    pub size: f32,
    pub color: Color,
    pub speed: f32,
}

impl ArchetypeParams {
    pub const fn new(size: f32, color: Color, speed: f32) -> Self {
        Self { size, color, speed }
    }
}

/// Enemy balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub wanderer: ArchetypeParams,
    pub chaser: ArchetypeParams,
    pub patroller: ArchetypeParams,
    pub boss: ArchetypeParams,
    pub bullet: ArchetypeParams,
    /// Smallest patrol square side (inclusive)
    pub patrol_side_min: u32,
    /// Largest patrol square side (inclusive)
    pub patrol_side_max: u32,
    /// Chance that a new patroller walks its square backwards
    pub patrol_reverse_chance: f64,
    /// Chance per tick that a boss fires a bullet
    pub boss_fire_chance: f64,
    /// Bullet acceleration as a fraction of bullet speed
    pub bullet_acceleration: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            wanderer: ArchetypeParams::new(20.0, Color::Red, 3.0),
            chaser: ArchetypeParams::new(20.0, Color::Green, 3.0),
            patroller: ArchetypeParams::new(20.0, Color::Blue, 2.0),
            boss: ArchetypeParams::new(20.0, Color::Black, 2.0),
            bullet: ArchetypeParams::new(10.0, Color::Black, 2.0),
            patrol_side_min: 100,
            patrol_side_max: 200,
            patrol_reverse_chance: 0.0,
            boss_fire_chance: 0.5,
            bullet_acceleration: 0.1,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty level (>= 1)
    pub level: u32,
    /// RNG seed; `None` lets the runner pick one
    pub seed: Option<u64>,

    // === Surface ===
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Driving clock tick (milliseconds)
    pub tick_ms: u32,
    /// Headless runner gives up after this many ticks
    pub max_ticks: u64,

    // === Player & home ===
    pub player_speed: f32,
    pub player_start_x: f32,
    pub home_size: f32,
    /// Distance of home from the right edge
    pub home_inset: f32,

    pub enemies: EnemyTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: 1,
            seed: None,

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_ms: TICK_MS,
            max_ticks: 10_000,

            player_speed: PLAYER_SPEED,
            player_start_x: PLAYER_START_X,
            home_size: HOME_SIZE,
            home_inset: HOME_INSET,

            enemies: EnemyTuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Cannot read settings {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.validated()
            }
            Err(err) => {
                log::warn!("Malformed settings {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values back into their valid domain
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.level == 0 {
            log::warn!("level must be >= 1, using 1");
            self.level = 1;
        }
        if self.tick_ms == 0 {
            log::warn!("tick_ms must be > 0, using {}", defaults.tick_ms);
            self.tick_ms = defaults.tick_ms;
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            log::warn!("canvas must not be empty, using {CANVAS_WIDTH}x{CANVAS_HEIGHT}");
            self.canvas_width = defaults.canvas_width;
            self.canvas_height = defaults.canvas_height;
        }
        if !(self.player_speed > 0.0) {
            log::warn!("player_speed must be > 0, using {PLAYER_SPEED}");
            self.player_speed = defaults.player_speed;
        }
        if !(self.home_size > 0.0) {
            log::warn!("home_size must be > 0, using {HOME_SIZE}");
            self.home_size = defaults.home_size;
        }

        let fallback = EnemyTuning::default();
        let tuning = &mut self.enemies;
        for (name, params, default) in [
            ("wanderer", &mut tuning.wanderer, fallback.wanderer),
            ("chaser", &mut tuning.chaser, fallback.chaser),
            ("patroller", &mut tuning.patroller, fallback.patroller),
            ("boss", &mut tuning.boss, fallback.boss),
            ("bullet", &mut tuning.bullet, fallback.bullet),
        ] {
            if !(params.speed > 0.0) || !(params.size > 0.0) {
                log::warn!("{name} speed and size must be > 0, using defaults");
                params.speed = default.speed;
                params.size = default.size;
            }
        }
        if tuning.patrol_side_min > tuning.patrol_side_max {
            log::warn!("patrol side range is inverted, swapping");
            std::mem::swap(&mut tuning.patrol_side_min, &mut tuning.patrol_side_max);
        }
        tuning.patrol_reverse_chance = clamp_probability("patrol_reverse_chance", tuning.patrol_reverse_chance);
        tuning.boss_fire_chance = clamp_probability("boss_fire_chance", tuning.boss_fire_chance);
        if !(tuning.bullet_acceleration > 0.0) {
            log::warn!("bullet_acceleration must be > 0, using {}", fallback.bullet_acceleration);
            tuning.bullet_acceleration = fallback.bullet_acceleration;
        }

        self
    }
}

fn clamp_probability(name: &str, p: f64) -> f64 {
    if (0.0..=1.0).contains(&p) {
        p
    } else {
        let fixed = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        log::warn!("{name} must be within [0, 1], using {fixed}");
        fixed
    }
}
