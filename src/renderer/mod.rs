//! Rendering module
//!
//! A retained-mode canvas abstraction plus the hooks that keep it in sync
//! with the simulation.

pub mod canvas;
pub mod headless;
pub mod scene;
pub mod shapes;

pub use canvas::{Bounds, Canvas, Shape, ShapeId};
pub use headless::HeadlessCanvas;
pub use scene::SceneRenderer;
