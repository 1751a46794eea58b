//! Enemy archetypes and their per-tick steering
//!
//! Every archetype shares one contact test (`hits`) and one arrival test
//! (`steering::arrived`); they differ only in what they steer toward and
//! when they pick a new target.

use glam::{UVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::entity::Color;
use super::steering::{arrived, heading, step_toward};
use crate::settings::ArchetypeParams;

/// Enemy behavior family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Drifts between random points on the canvas
    Wanderer,
    /// Homes on the player every tick
    Chaser,
    /// Walks the corners of a square around home
    Patroller,
    /// Homes on the player and sprays bullets
    Boss,
    /// Boss projectile with accumulated, curving velocity
    Bullet,
}

impl Archetype {
    /// Session collection an enemy of this archetype is stored in
    pub fn collection(self) -> Collection {
        match self {
            Archetype::Wanderer | Archetype::Chaser => Collection::General,
            Archetype::Patroller => Collection::Patrol,
            Archetype::Boss => Collection::Boss,
            Archetype::Bullet => Collection::Bullet,
        }
    }
}

/// The four disjoint enemy collections of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    General,
    Patrol,
    Boss,
    Bullet,
}

/// Archetype-specific steering state
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    Wander {
        target: Vec2,
    },
    Chase,
    Patrol {
        /// Corners in cyclic order
        corners: [Vec2; 4],
        index: usize,
        reverse: bool,
    },
    Boss {
        fire_chance: f64,
    },
    Bullet {
        vel: Vec2,
        acceleration: f32,
    },
}

impl Behavior {
    /// Wander toward a random point on the canvas
    pub fn wander<R: Rng>(rng: &mut R, canvas: UVec2) -> Self {
        Behavior::Wander {
            target: random_point(rng, canvas),
        }
    }

    /// Patrol a square of side `side` centered on `center`
    pub fn patrol(center: Vec2, side: f32, reverse: bool) -> Self {
        let s = side / 2.0;
        Behavior::Patrol {
            corners: [
                center + Vec2::new(s, s),
                center + Vec2::new(s, -s),
                center + Vec2::new(-s, -s),
                center + Vec2::new(-s, s),
            ],
            index: 0,
            reverse,
        }
    }

    pub fn boss(fire_chance: f64) -> Self {
        Behavior::Boss { fire_chance }
    }

    /// Bullet starting at rest
    pub fn bullet(acceleration: f32) -> Self {
        Behavior::Bullet {
            vel: Vec2::ZERO,
            acceleration,
        }
    }

    pub fn archetype(&self) -> Archetype {
        match self {
            Behavior::Wander { .. } => Archetype::Wanderer,
            Behavior::Chase => Archetype::Chaser,
            Behavior::Patrol { .. } => Archetype::Patroller,
            Behavior::Boss { .. } => Archetype::Boss,
            Behavior::Bullet { .. } => Archetype::Bullet,
        }
    }
}

/// What an enemy reads from its session each tick
#[derive(Debug, Clone, Copy)]
pub struct SessionView {
    pub player: Vec2,
    /// Canvas extent; positions are valid within `[0, extent]`
    pub canvas: Vec2,
    pub canvas_size: UVec2,
}

/// Side effects an enemy asks the session to apply after its update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpdateOutcome {
    pub hit_player: bool,
    /// Spawn a bullet at this position
    pub fire: Option<Vec2>,
    pub left_canvas: bool,
}

/// A hostile element
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Assigned by the session on insertion
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    speed: f32,
    behavior: Behavior,
}

impl Enemy {
    /// Non-positive speeds fall back to 1.0
    pub fn new(pos: Vec2, params: ArchetypeParams, behavior: Behavior) -> Self {
        let speed = if params.speed > 0.0 { params.speed } else { 1.0 };
        Self {
            id: 0,
            pos,
            size: params.size,
            color: params.color,
            speed,
            behavior,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.behavior.archetype()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Current patrol corner index, for patrollers
    pub fn patrol_index(&self) -> Option<usize> {
        match self.behavior {
            Behavior::Patrol { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Contact test against a point using this enemy's box
    pub fn hits(&self, point: Vec2) -> bool {
        collision::hits(self.pos, self.size, point)
    }

    /// Advance one tick: steer, then test contact with the player
    pub fn update<R: Rng>(&mut self, view: &SessionView, rng: &mut R) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::default();
        let speed = self.speed;

        match &mut self.behavior {
            Behavior::Wander { target } => {
                self.pos = step_toward(self.pos, *target, speed);
                if arrived(self.pos, *target, speed) {
                    *target = random_point(rng, view.canvas_size);
                }
            }
            Behavior::Chase => {
                self.pos = step_toward(self.pos, view.player, speed);
            }
            Behavior::Patrol {
                corners,
                index,
                reverse,
            } => {
                let corner = corners[*index];
                self.pos = step_toward(self.pos, corner, speed);
                if arrived(self.pos, corner, speed) {
                    *index = next_corner(*index, *reverse);
                }
            }
            Behavior::Boss { fire_chance } => {
                self.pos = step_toward(self.pos, view.player, speed);
                if rng.random::<f64>() < *fire_chance {
                    outcome.fire = Some(self.pos);
                }
            }
            Behavior::Bullet { vel, acceleration } => {
                if let Some(dir) = heading(self.pos, view.player) {
                    *vel += dir * *acceleration;
                }
                self.pos += *vel;
                outcome.left_canvas = collision::out_of_bounds(self.pos, view.canvas);
            }
        }

        outcome.hit_player = self.hits(view.player);
        outcome
    }
}

/// Next patrol corner, cycling 0..4 forward or backward
fn next_corner(index: usize, reverse: bool) -> usize {
    if reverse { (index + 3) % 4 } else { (index + 1) % 4 }
}

/// Uniform integer point inside the canvas
pub fn random_point<R: Rng>(rng: &mut R, canvas: UVec2) -> Vec2 {
    Vec2::new(
        rng.random_range(0..canvas.x.max(1)) as f32,
        rng.random_range(0..canvas.y.max(1)) as f32,
    )
}

/// Uniform point on one of the four canvas edges.
///
/// One axis is pinned to 0 or the full extent, the other is uniform across
/// its whole range, so spawns never land in the interior.
pub fn spawn_point<R: Rng>(rng: &mut R, canvas: UVec2) -> Vec2 {
    let pinned_x = if rng.random_bool(0.5) { 0 } else { canvas.x };
    let pinned_y = if rng.random_bool(0.5) { 0 } else { canvas.y };
    let free = random_point(rng, canvas);
    if rng.random_bool(0.5) {
        Vec2::new(pinned_x as f32, free.y)
    } else {
        Vec2::new(free.x, pinned_y as f32)
    }
}
