//! Canvas surface capability injected by the embedding shell.

use crate::draw::{Shape, ShapeId};
use crate::geom::Point;
use crate::input::state::PendingShape;
use thiserror::Error;

/// Errors raised while acquiring or talking to a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The drawing surface could not be acquired. Fatal; reported once at
    /// setup by the embedding shell.
    #[error("drawing surface unavailable: {0}")]
    Unavailable(String),
}

/// Capability the interaction core requires from its drawing surface.
///
/// The surface owns the displayed image, the render objects, and the
/// device-to-surface coordinate transform; the core never reimplements any
/// of those. Implementations are supplied by the embedding shell, which
/// keeps the state machine and hit tester testable without a real
/// rendering stack.
///
/// All calls happen synchronously inside event dispatch, in delivery order.
pub trait CanvasSurface {
    /// Converts a device-space point to surface-local coordinates,
    /// removing any display scaling or pan/zoom transform.
    fn to_surface(&self, device: Point) -> Point;

    /// Displays or refreshes the live preview of the shape under
    /// construction.
    fn show_pending(&mut self, pending: &PendingShape);

    /// Removes the live preview (the pending shape was committed or
    /// discarded).
    fn clear_pending(&mut self);

    /// Displays a committed shape.
    fn show_committed(&mut self, id: ShapeId, shape: &Shape);
}
