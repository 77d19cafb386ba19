// Feeds raw surface pointer events into the drawing state to keep the
// canvas reactive, and mirrors the results back onto the surface.

use log::debug;

use crate::draw::{Shape, ShapeId};
use crate::input::events::{PointerButton, PointerEvent};
use crate::input::state::{DrawingState, InputState, SecondaryOutcome, Transition};
use crate::input::tool::{ToolMode, ToolModeError};
use crate::surface::CanvasSurface;

/// What a dispatched pointer event amounted to.
///
/// Returned to the embedding shell so it can react (refresh, report a
/// selection) without inspecting the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The event required no action.
    Nothing,
    /// The pending shape's preview was created or updated on the surface.
    Preview,
    /// A shape was committed and shown on the surface.
    Committed(ShapeId),
    /// The pending shape was discarded and its preview cleared.
    Cancelled,
    /// A secondary click resolved to a hit test; matched shapes topmost
    /// first. The registry was not mutated.
    Hits(Vec<(ShapeId, Shape)>),
}

/// Routes pointer events between the canvas surface and the drawing state.
///
/// Converts device coordinates to surface-local coordinates through the
/// surface's own transform, dispatches to the state machine or the hit
/// tester, and forwards previews and commits back to the surface for
/// display.
///
/// Secondary clicks are always consumed, whether they finalize, cancel, or
/// hit test; the embedding shell must suppress the platform's native
/// context menu so they reach the router at all.
pub struct EventRouter<S: CanvasSurface> {
    surface: S,
    /// Drawing session state; exposed so shells can read the registry and
    /// drive tests.
    pub input: InputState,
}

impl<S: CanvasSurface> EventRouter<S> {
    /// Creates a router over a surface and an input state.
    pub fn new(surface: S, input: InputState) -> Self {
        Self { surface, input }
    }

    /// Processes one raw pointer event from the surface.
    ///
    /// Events must arrive in delivery order; a motion event's preview
    /// depends on the pending shape created by an earlier press.
    pub fn dispatch(&mut self, event: PointerEvent) -> Dispatch {
        match event {
            PointerEvent::ButtonDown {
                button: PointerButton::Primary,
                position,
            } => {
                let p = self.surface.to_surface(position);
                let transition = self.input.on_primary_down(p);
                debug!("Primary down at ({}, {}): {:?}", p.x, p.y, transition);
                self.apply(transition)
            }
            PointerEvent::Motion { position } => {
                let p = self.surface.to_surface(position);
                let transition = self.input.on_motion(p);
                self.apply(transition)
            }
            PointerEvent::ButtonDown {
                button: PointerButton::Secondary,
                position,
            } => {
                let p = self.surface.to_surface(position);
                match self.input.on_secondary_down(p) {
                    SecondaryOutcome::Committed(id) => {
                        self.surface.clear_pending();
                        self.show_committed(id);
                        Dispatch::Committed(id)
                    }
                    SecondaryOutcome::Cancelled => {
                        self.surface.clear_pending();
                        Dispatch::Cancelled
                    }
                    SecondaryOutcome::Hits(hits) => Dispatch::Hits(hits),
                }
            }
        }
    }

    /// Switches the active tool, clearing any discarded preview from the
    /// surface. See [`InputState::set_tool`] for the discard policy.
    pub fn set_tool(&mut self, tool: ToolMode) -> Dispatch {
        if self.input.set_tool(tool) {
            self.surface.clear_pending();
            Dispatch::Cancelled
        } else {
            Dispatch::Nothing
        }
    }

    /// Switches the active tool by name. An unrecognized name leaves the
    /// mode, the pending shape, and the surface untouched.
    pub fn set_tool_by_name(&mut self, name: &str) -> Result<Dispatch, ToolModeError> {
        let tool = name.parse::<ToolMode>()?;
        Ok(self.set_tool(tool))
    }

    /// Read access to the surface, mainly for embedding shells and tests.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn apply(&mut self, transition: Transition) -> Dispatch {
        match transition {
            Transition::None => Dispatch::Nothing,
            Transition::Preview => {
                if let DrawingState::Drawing { pending } = &self.input.state {
                    self.surface.show_pending(pending);
                }
                Dispatch::Preview
            }
            Transition::Committed(id) => {
                self.surface.clear_pending();
                self.show_committed(id);
                Dispatch::Committed(id)
            }
        }
    }

    fn show_committed(&mut self, id: ShapeId) {
        if let Some(shape) = self.input.registry.get(id) {
            self.surface.show_committed(id, shape);
        }
    }
}
