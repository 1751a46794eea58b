//! Drawing surface abstraction

use glam::{UVec2, Vec2};

use crate::sim::Color;

/// Handle to a shape living on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

/// Primitive kinds a canvas can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Straight stroke between the two bound corners
    Line { color: Color },
    /// Outlined rectangle
    Rect { outline: Color },
    /// Filled ellipse inscribed in the bounds
    Oval { fill: Color },
    /// Player glyph
    Turtle { color: Color },
}

/// Axis-aligned bounds of a shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// A retained-mode drawing surface (canvas items that are created once,
/// moved every frame and deleted when no longer needed)
pub trait Canvas {
    /// Surface size in pixels
    fn size(&self) -> UVec2;

    fn create_shape(&mut self, shape: Shape) -> ShapeId;

    fn set_bounds(&mut self, id: ShapeId, bounds: Bounds);

    fn set_visible(&mut self, id: ShapeId, visible: bool);

    fn delete_shape(&mut self, id: ShapeId);

    /// Draw a caption centered at `at`
    fn draw_text(&mut self, at: Vec2, text: &str, color: Color);
}
