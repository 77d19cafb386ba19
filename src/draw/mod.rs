//! Annotation shape types and the committed-shape registry.
//!
//! This module defines the core annotation types:
//! - [`Shape`]: completed annotations (points, rectangles, polygons, circles)
//! - [`ShapeRegistry`]: ordered committed-shape storage with hit testing
//! - [`ShapeId`]: stable handle assigned at commit time

pub mod registry;
pub mod shape;

// Re-export commonly used types at module level
pub use registry::{ShapeId, ShapeRegistry};
pub use shape::Shape;
