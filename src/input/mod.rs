//! Input handling and the annotation tool state machine.
//!
//! This module translates surface pointer events into drawing actions.
//! It maintains the active tool, manages the state machine for shape
//! construction (idle, drawing), and routes secondary clicks to either
//! rectangle finalization or hit testing.

pub mod events;
pub mod router;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerButton, PointerEvent};
pub use router::{Dispatch, EventRouter};
pub use state::{DrawingState, InputState, PendingShape};
pub use tool::{ToolMode, ToolModeError};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use state::{SecondaryOutcome, Transition};
