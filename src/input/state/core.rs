//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::ShapeRegistry;
use crate::geom::Point;
use crate::input::tool::{ToolMode, ToolModeError};

/// The single in-progress shape owned by the drawing state machine.
///
/// Exists only between a draw operation's start and its completion or
/// cancellation; committed shapes never pass through here again. Point
/// markers commit instantly and have no pending form.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingShape {
    /// Rectangle being dragged out; `w`/`h` track the cursor and stay
    /// signed (no normalization until containment testing).
    Rect { origin: Point, w: f64, h: f64 },
    /// Polygon being built one vertex per click; `cursor` is the latest
    /// pointer position so the surface can draw a live edge from the last
    /// vertex.
    Polygon { vertices: Vec<Point>, cursor: Point },
    /// Circle with a fixed center and a radius tracking the cursor.
    Circle { center: Point, radius: f64 },
}

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or actively constructing a shape. State
/// transitions occur based on pointer events routed by the event router.
/// The `Drawing` variant holds the pending shape, so at most one exists at
/// any time by construction.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Actively constructing a shape
    Drawing {
        /// The shape under construction
        pending: PendingShape,
    },
}

/// Main input state containing the annotation session.
///
/// Holds the registry of committed shapes, the active tool, the drawing
/// state machine, and the drawing parameters sourced from configuration.
/// All pointer events are processed synchronously; after any event the
/// machine is in a valid state (`Idle` or `Drawing`), never partially
/// updated.
pub struct InputState {
    /// Committed shapes in z-order (first = bottom, last = top)
    pub registry: ShapeRegistry,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Marker radius for committed point shapes, in surface units
    pub point_radius: f64,
    /// Seed extent for a freshly started rectangle, and the fallback extent
    /// when a finalized rectangle would collapse to zero area
    pub min_rect_extent: f64,
    /// Distance from the first polygon vertex within which a click closes
    /// the polygon
    pub polygon_close_radius: f64,
    /// Active tool; mutated only through `set_tool`/`set_tool_by_name` so
    /// the discard-on-switch policy always applies
    tool: ToolMode,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `point_radius` - Marker radius for point shapes
    /// * `min_rect_extent` - Seed/fallback extent for rectangles
    /// * `polygon_close_radius` - Click distance that closes a polygon
    /// * `tool` - Initially active tool
    pub fn with_defaults(
        point_radius: f64,
        min_rect_extent: f64,
        polygon_close_radius: f64,
        tool: ToolMode,
    ) -> Self {
        Self {
            registry: ShapeRegistry::new(),
            state: DrawingState::Idle,
            needs_redraw: true,
            point_radius,
            min_rect_extent,
            polygon_close_radius,
            tool,
        }
    }

    /// Creates an InputState from a validated configuration.
    ///
    /// The configured default tool name has already been validated by
    /// [`Config::load`]; an invalid name still falls back to no tool here
    /// with a warning rather than failing.
    pub fn from_config(config: &Config) -> Self {
        let tool = match config.drawing.default_tool.parse::<ToolMode>() {
            Ok(tool) => tool,
            Err(err) => {
                log::warn!("{err}; starting with no tool active");
                ToolMode::None
            }
        };

        Self::with_defaults(
            config.drawing.point_radius,
            config.drawing.min_rect_extent,
            config.polygon.close_radius,
            tool,
        )
    }

    /// Returns the currently active tool.
    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Returns true while a shape is under construction.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Switches the active tool.
    ///
    /// A pending shape cannot survive a tool switch: completing it with
    /// mixed-mode semantics would be worse than losing it, so the pending
    /// shape is discarded and the machine returns to `Idle`. Setting
    /// [`ToolMode::None`] does the same, since no tool can receive further
    /// events.
    ///
    /// Returns true if a pending shape was discarded.
    pub fn set_tool(&mut self, tool: ToolMode) -> bool {
        let discarded = if let DrawingState::Drawing { pending } = &self.state {
            log::debug!(
                "Tool switched to {} mid-draw; discarding pending {:?}",
                tool,
                pending
            );
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
            true
        } else {
            false
        };

        if self.tool != tool {
            log::debug!("Active tool: {} -> {}", self.tool, tool);
            self.tool = tool;
        }

        discarded
    }

    /// Switches the active tool by name (e.g. from a UI shell or config).
    ///
    /// On an unrecognized name the current tool and any pending shape are
    /// left untouched.
    ///
    /// Returns whether a pending shape was discarded, or
    /// [`ToolModeError`] for an unknown name.
    pub fn set_tool_by_name(&mut self, name: &str) -> Result<bool, ToolModeError> {
        let tool = name.parse::<ToolMode>()?;
        Ok(self.set_tool(tool))
    }
}
