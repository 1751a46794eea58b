//! Axis-aligned box tests for contact and containment
//!
//! Every box is a square centered on an element's position with side
//! `size`. Enemy contact uses the open box, home containment the closed one.

use glam::Vec2;

/// True when `point` lies strictly inside the square of side `size`
/// centered at `center`. Points on an edge do not count.
#[inline]
pub fn hits(center: Vec2, size: f32, point: Vec2) -> bool {
    let half = size / 2.0;
    center.x - half < point.x
        && point.x < center.x + half
        && center.y - half < point.y
        && point.y < center.y + half
}

/// True when `point` lies inside or on the edge of the square of side
/// `size` centered at `center`.
#[inline]
pub fn contains(center: Vec2, size: f32, point: Vec2) -> bool {
    let half = size / 2.0;
    (center.x - half..=center.x + half).contains(&point.x)
        && (center.y - half..=center.y + half).contains(&point.y)
}

/// True when `pos` is outside the `[0, extent]` range on either axis
#[inline]
pub fn out_of_bounds(pos: Vec2, extent: Vec2) -> bool {
    pos.x < 0.0 || pos.x > extent.x || pos.y < 0.0 || pos.y > extent.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_interior() {
        assert!(hits(Vec2::new(100.0, 100.0), 20.0, Vec2::new(105.0, 95.0)));
    }

    #[test]
    fn test_hits_is_open_on_edges() {
        let c = Vec2::new(100.0, 100.0);
        assert!(!hits(c, 20.0, Vec2::new(110.0, 100.0)));
        assert!(!hits(c, 20.0, Vec2::new(90.0, 100.0)));
        assert!(!hits(c, 20.0, Vec2::new(100.0, 110.0)));
        assert!(!hits(c, 20.0, Vec2::new(100.0, 90.0)));
    }

    #[test]
    fn test_hits_uses_callers_box() {
        // Big box reaches the point, small box around the point does not
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(8.0, 0.0);
        assert!(hits(a, 20.0, b));
        assert!(!hits(b, 4.0, a));
    }

    #[test]
    fn test_contains_is_closed() {
        let c = Vec2::new(700.0, 300.0);
        assert!(contains(c, 20.0, Vec2::new(710.0, 290.0)));
        assert!(contains(c, 20.0, c));
        assert!(!contains(c, 20.0, Vec2::new(710.1, 300.0)));
    }

    #[test]
    fn test_out_of_bounds() {
        let extent = Vec2::new(800.0, 600.0);
        assert!(!out_of_bounds(Vec2::new(0.0, 600.0), extent));
        assert!(out_of_bounds(Vec2::new(-0.1, 10.0), extent));
        assert!(out_of_bounds(Vec2::new(10.0, 600.5), extent));
    }
}
