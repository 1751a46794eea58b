//! Step-toward-target steering shared by every moving element

use glam::Vec2;

use crate::consts::ARRIVAL_BUCKET;

/// Move `step` units from `pos` straight toward `target`.
///
/// A zero-length (or non-finite) offset leaves `pos` unchanged instead of
/// dividing by zero. The step is not clamped, so a mover may overshoot.
#[inline]
pub fn step_toward(pos: Vec2, target: Vec2, step: f32) -> Vec2 {
    match heading(pos, target) {
        Some(dir) => pos + dir * step,
        None => pos,
    }
}

/// Unit vector from `pos` toward `target`, if the two points differ
#[inline]
pub fn heading(pos: Vec2, target: Vec2) -> Option<Vec2> {
    (target - pos).try_normalize()
}

/// Bucket index of one coordinate for the arrival test
#[inline]
fn bucket(coord: f32, speed: f32) -> f32 {
    (coord / speed / ARRIVAL_BUCKET).floor()
}

/// Coarse, speed-scaled arrival test.
///
/// Both axes must fall in the same `floor(c / speed / 5)` bucket as the
/// target; matching on one axis only is not an arrival.
pub fn arrived(pos: Vec2, target: Vec2, speed: f32) -> bool {
    bucket(pos.x, speed) == bucket(target.x, speed) && bucket(pos.y, speed) == bucket(target.y, speed)
}
