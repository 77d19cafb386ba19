//! Interaction core for image annotation overlays.
//!
//! Translates raw pointer events into shape creation and completion,
//! maintains the shape being drawn, commits finished shapes to an ordered
//! registry, and hit-tests clicks against committed shapes. Rendering,
//! image loading, and surface sizing live behind the [`CanvasSurface`]
//! capability supplied by the embedding shell.
//!
//! Typical wiring:
//!
//! ```no_run
//! use labelmark::{Config, EventRouter, InputState, ToolMode};
//!
//! # struct Shell;
//! # impl labelmark::CanvasSurface for Shell {
//! #     fn to_surface(&self, p: labelmark::Point) -> labelmark::Point { p }
//! #     fn show_pending(&mut self, _: &labelmark::input::PendingShape) {}
//! #     fn clear_pending(&mut self) {}
//! #     fn show_committed(&mut self, _: labelmark::ShapeId, _: &labelmark::Shape) {}
//! # }
//! # fn surface() -> Shell { Shell }
//! let config = Config::load().unwrap_or_default();
//! let mut router = EventRouter::new(surface(), InputState::from_config(&config));
//! router.set_tool(ToolMode::Rect);
//! // feed router.dispatch(event) from the surface's event loop
//! ```

pub mod config;
pub mod draw;
pub mod geom;
pub mod input;
pub mod surface;

pub use config::Config;
pub use draw::{Shape, ShapeId, ShapeRegistry};
pub use geom::Point;
pub use input::{Dispatch, EventRouter, InputState, PointerButton, PointerEvent, ToolMode};
pub use surface::{CanvasSurface, SurfaceError};
