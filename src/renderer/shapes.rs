//! Geometry of element visuals

use glam::Vec2;

use super::canvas::Bounds;

/// Square of side `size` centered on `center`
#[inline]
pub fn square(center: Vec2, size: f32) -> Bounds {
    let half = Vec2::splat(size / 2.0);
    Bounds::new(center - half, center + half)
}

/// The two diagonal strokes of an X mark with arms of length `arm`
pub fn cross(center: Vec2, arm: f32) -> [Bounds; 2] {
    [
        Bounds::new(center + Vec2::new(-arm, -arm), center + Vec2::new(arm, arm)),
        Bounds::new(center + Vec2::new(-arm, arm), center + Vec2::new(arm, -arm)),
    ]
}
