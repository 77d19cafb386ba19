mod core;
mod mouse;

pub use core::{DrawingState, InputState, PendingShape};
pub use mouse::{SecondaryOutcome, Transition};
