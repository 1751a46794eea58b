//! Element lifecycle hooks: create, render and delete
//!
//! The simulation never touches the canvas. This renderer creates a visual
//! for every element when it enters play, moves it each frame and frees it
//! when the element leaves.

use std::collections::BTreeMap;

use super::canvas::{Canvas, Shape, ShapeId};
use super::shapes;
use crate::consts::WAYPOINT_ARM;
use crate::sim::{Color, Enemy, GameEvent, GameState};

/// Canvas handles for everything currently on screen
#[derive(Debug, Default)]
pub struct SceneRenderer {
    waypoint: Option<[ShapeId; 2]>,
    home: Option<ShapeId>,
    player: Option<ShapeId>,
    enemies: BTreeMap<u32, ShapeId>,
    caption_drawn: bool,
}

impl SceneRenderer {
    /// Run the create hook for the waypoint, home, player and any enemy
    /// already in play
    pub fn create<C: Canvas>(state: &GameState, canvas: &mut C) -> Self {
        let mut renderer = Self {
            waypoint: Some([
                canvas.create_shape(Shape::Line { color: Color::Green }),
                canvas.create_shape(Shape::Line { color: Color::Green }),
            ]),
            home: Some(canvas.create_shape(Shape::Rect { outline: Color::Brown })),
            player: Some(canvas.create_shape(Shape::Turtle { color: Color::Green })),
            ..Default::default()
        };
        for enemy in state.enemies.iter() {
            renderer.create_enemy(enemy, canvas);
        }
        renderer.render(state, canvas);
        renderer
    }

    /// Shape backing an enemy, if it is on screen
    pub fn enemy_shape(&self, id: u32) -> Option<ShapeId> {
        self.enemies.get(&id).copied()
    }

    fn create_enemy<C: Canvas>(&mut self, enemy: &Enemy, canvas: &mut C) {
        let id = canvas.create_shape(Shape::Oval { fill: enemy.color });
        canvas.set_bounds(id, shapes::square(enemy.pos, enemy.size));
        self.enemies.insert(enemy.id, id);
    }

    /// React to spawns, despawns and the end of the game
    pub fn apply_events<C: Canvas>(&mut self, state: &GameState, events: &[GameEvent], canvas: &mut C) {
        for event in events {
            match *event {
                GameEvent::Spawned { id, .. } => {
                    if let Some(enemy) = state.enemy(id) {
                        self.create_enemy(enemy, canvas);
                    }
                }
                GameEvent::Despawned { id, .. } => {
                    if let Some(shape) = self.enemies.remove(&id) {
                        canvas.delete_shape(shape);
                    }
                }
                GameEvent::Won { .. } => self.draw_caption("You Win", Color::Green, canvas),
                GameEvent::Lost { .. } => self.draw_caption("Game Over", Color::Red, canvas),
            }
        }
    }

    fn draw_caption<C: Canvas>(&mut self, text: &str, color: Color, canvas: &mut C) {
        if self.caption_drawn {
            return;
        }
        self.caption_drawn = true;
        let center = canvas.size().as_vec2() / 2.0;
        canvas.draw_text(center, text, color);
    }

    /// Run the render hook of every element
    pub fn render<C: Canvas>(&self, state: &GameState, canvas: &mut C) {
        if let Some(strokes) = self.waypoint {
            let active = state.waypoint.is_active();
            let bounds = shapes::cross(state.waypoint.pos, WAYPOINT_ARM);
            for (id, b) in strokes.into_iter().zip(bounds) {
                canvas.set_visible(id, active);
                if active {
                    canvas.set_bounds(id, b);
                }
            }
        }
        if let Some(id) = self.home {
            canvas.set_bounds(id, shapes::square(state.home.pos(), state.home.size()));
        }
        if let Some(id) = self.player {
            canvas.set_bounds(id, shapes::square(state.player.pos, 0.0));
        }
        for enemy in state.enemies.iter() {
            if let Some(&id) = self.enemies.get(&enemy.id) {
                canvas.set_bounds(id, shapes::square(enemy.pos, enemy.size));
            }
        }
    }

    /// Run the delete hook of every element still on screen
    pub fn delete_all<C: Canvas>(&mut self, canvas: &mut C) {
        let statics = self
            .waypoint
            .take()
            .into_iter()
            .flatten()
            .chain(self.home.take())
            .chain(self.player.take());
        for id in statics.chain(std::mem::take(&mut self.enemies).into_values()) {
            canvas.delete_shape(id);
        }
    }
}
