//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod level;
pub mod spawner;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{contains, hits, out_of_bounds};
pub use enemy::{Archetype, Behavior, Collection, Enemy, SessionView, UpdateOutcome, spawn_point};
pub use entity::{Color, Home, Player, Waypoint};
pub use level::Level;
pub use spawner::EnemyGenerator;
pub use state::{Collections, GameEvent, GamePhase, GameState};
pub use steering::{arrived, step_toward};
pub use tick::{TickInput, tick};
