//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls shape creation parameters and which tool is active when a
/// session starts. Shells can change the active tool at runtime.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Marker radius for point annotations in surface units
    /// (valid range: 0.5 - 16.0)
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,

    /// Seed extent for a freshly started rectangle, also the fallback when
    /// a finalized rectangle would collapse to zero area
    /// (valid range: 1.0 - 64.0)
    #[serde(default = "default_min_rect_extent")]
    pub min_rect_extent: f64,

    /// Tool active when a session starts
    /// (one of: none, point, rect, polygon, circle)
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            point_radius: default_point_radius(),
            min_rect_extent: default_min_rect_extent(),
            default_tool: default_tool(),
        }
    }
}

/// Polygon tool settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct PolygonConfig {
    /// A click within this distance of the first vertex closes the polygon,
    /// once at least three vertices exist (valid range: 1.0 - 64.0)
    #[serde(default = "default_close_radius")]
    pub close_radius: f64,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            close_radius: default_close_radius(),
        }
    }
}

fn default_point_radius() -> f64 {
    2.0
}

fn default_min_rect_extent() -> f64 {
    5.0
}

fn default_tool() -> String {
    "none".to_string()
}

fn default_close_radius() -> f64 {
    8.0
}
