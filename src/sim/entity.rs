//! Player, waypoint and home

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::steering::step_toward;

/// Cosmetic element color (no gameplay effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
    Brown,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Brown => "brown",
        }
    }
}

/// Click target the player walks toward.
///
/// A single instance lives for the whole session; clicks move and
/// re-activate it rather than creating a new one.
#[derive(Debug, Clone, Default)]
pub struct Waypoint {
    pub pos: Vec2,
    active: bool,
}

impl Waypoint {
    /// Place the waypoint and make it steer the player
    pub fn activate(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The player's home; reaching it wins the game
#[derive(Debug, Clone)]
pub struct Home {
    pos: Vec2,
    size: f32,
}

impl Home {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Closed-box containment (edges count)
    pub fn contains(&self, point: Vec2) -> bool {
        collision::contains(self.pos, self.size, point)
    }
}

/// The player-controlled token
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    speed: f32,
}

impl Player {
    /// Non-positive speeds fall back to 1.0
    pub fn new(pos: Vec2, speed: f32) -> Self {
        let speed = if speed > 0.0 { speed } else { 1.0 };
        Self { pos, speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Walk one step toward an active waypoint, releasing it once the
    /// remaining distance drops below one step.
    pub fn follow(&mut self, waypoint: &mut Waypoint) {
        if !waypoint.is_active() {
            return;
        }
        self.pos = step_toward(self.pos, waypoint.pos, self.speed);
        if self.pos.distance(waypoint.pos) < self.speed {
            waypoint.deactivate();
        }
    }
}
