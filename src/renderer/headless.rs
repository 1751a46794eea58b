//! In-memory canvas for the headless runner and tests

use std::collections::BTreeMap;

use glam::{UVec2, Vec2};

use super::canvas::{Bounds, Canvas, Shape, ShapeId};
use crate::sim::Color;

/// A shape as currently held by the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub shape: Shape,
    pub bounds: Bounds,
    pub visible: bool,
}

/// Text drawn on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub at: Vec2,
    pub text: String,
    pub color: Color,
}

/// Canvas that only remembers what was drawn
#[derive(Debug, Clone)]
pub struct HeadlessCanvas {
    size: UVec2,
    next_id: u32,
    shapes: BTreeMap<ShapeId, ShapeRecord>,
    captions: Vec<Caption>,
}

impl HeadlessCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
            next_id: 1,
            shapes: BTreeMap::new(),
            captions: Vec::new(),
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(&id)
    }

    /// Number of live shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }
}

impl Canvas for HeadlessCanvas {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn create_shape(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        log::trace!("canvas: create {shape:?} as {id:?}");
        self.shapes.insert(
            id,
            ShapeRecord {
                shape,
                bounds: Bounds::default(),
                visible: true,
            },
        );
        id
    }

    fn set_bounds(&mut self, id: ShapeId, bounds: Bounds) {
        if let Some(record) = self.shapes.get_mut(&id) {
            record.bounds = bounds;
        }
    }

    fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(record) = self.shapes.get_mut(&id) {
            record.visible = visible;
        }
    }

    fn delete_shape(&mut self, id: ShapeId) {
        if self.shapes.remove(&id).is_some() {
            log::trace!("canvas: delete {id:?}");
        }
    }

    fn draw_text(&mut self, at: Vec2, text: &str, color: Color) {
        log::trace!("canvas: text {text:?} at {at}");
        self.captions.push(Caption {
            at,
            text: text.to_owned(),
            color,
        });
    }
}
