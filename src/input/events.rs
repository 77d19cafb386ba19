//! Generic pointer event types for cross-surface compatibility.

use crate::geom::Point;

/// Pointer button identification.
///
/// Surface implementations map their native button codes to these generic
/// values before handing events to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (main drawing button)
    Primary,
    /// Secondary/context button (finalize or hit test)
    Secondary,
}

/// Raw pointer event delivered by the canvas surface.
///
/// Coordinates are in device space; the router converts them to
/// surface-local coordinates before any state machine sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer button was pressed at the given device position.
    ButtonDown {
        button: PointerButton,
        position: Point,
    },
    /// The pointer moved to the given device position.
    Motion { position: Point },
}
