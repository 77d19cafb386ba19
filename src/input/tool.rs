//! Annotation tool selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Annotation tool selection.
///
/// The active tool decides which transition table drives the drawing state
/// machine when the user clicks and moves the pointer. `None` disables
/// drawing entirely; secondary clicks then fall through to hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// No tool active - primary clicks are ignored (default)
    #[default]
    None,
    /// Point marker - committed immediately on click
    Point,
    /// Rectangle - click one corner, click the opposite corner
    Rect,
    /// Polygon - one vertex per click, closed by clicking near the first
    Polygon,
    /// Circle - click the center, click a point on the rim
    Circle,
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolMode::None => "none",
            ToolMode::Point => "point",
            ToolMode::Rect => "rect",
            ToolMode::Polygon => "polygon",
            ToolMode::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// Error returned when a tool name does not match any [`ToolMode`].
///
/// Callers must leave the current mode unchanged when they receive this.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool mode '{0}' (expected none, point, rect, polygon, or circle)")]
pub struct ToolModeError(pub String);

impl FromStr for ToolMode {
    type Err = ToolModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ToolMode::None),
            "point" => Ok(ToolMode::Point),
            "rect" | "rectangle" => Ok(ToolMode::Rect),
            "polygon" => Ok(ToolMode::Polygon),
            "circle" => Ok(ToolMode::Circle),
            other => Err(ToolModeError(other.to_string())),
        }
    }
}
