//! Homeward - a 2D chase/avoidance game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, enemies, spawning, session)
//! - `timer`: Delayed-callback queue owned by the driver
//! - `driver`: Fixed-tick engine that runs timers, updates and rendering
//! - `renderer`: Drawing surface abstraction and element lifecycle hooks
//! - `settings`: Data-driven configuration

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timer;

pub use driver::Driver;
pub use settings::{EnemyTuning, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval of the driving clock (milliseconds)
    pub const TICK_MS: u32 = 20;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 50.0;

    /// Home sits this far from the right edge, vertically centered
    pub const HOME_INSET: f32 = 100.0;
    pub const HOME_SIZE: f32 = 20.0;

    /// Half-length of each waypoint cross stroke
    pub const WAYPOINT_ARM: f32 = 10.0;

    /// Arrival tolerance divisor for bucket-equal checks
    pub const ARRIVAL_BUCKET: f32 = 5.0;
}
