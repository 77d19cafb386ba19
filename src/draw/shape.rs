//! Shape definitions for image annotations.

use crate::geom::{self, Point};

/// A completed annotation shape.
///
/// Each variant carries the minimal geometry needed to test containment and
/// to render. Shapes are immutable once committed to the registry; rectangle
/// extents are stored as-dragged (signed), and containment normalizes them.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Point marker rendered as a small filled disc.
    Point {
        /// Marker center.
        center: Point,
        /// Marker radius in surface units (fixed at creation from config).
        radius: f64,
    },
    /// Axis-aligned rectangle from a click-drag-click gesture.
    Rect {
        /// First-click corner.
        origin: Point,
        /// Signed width (far corner x minus origin x).
        w: f64,
        /// Signed height (far corner y minus origin y).
        h: f64,
    },
    /// Closed polygon built one vertex per click.
    Polygon {
        /// Ordered vertices, at least three; the closing edge back to the
        /// first vertex is implicit.
        vertices: Vec<Point>,
    },
    /// Circle from a center click and a radius click.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius in surface units.
        radius: f64,
    },
}

impl Shape {
    /// Tests whether `p` lies within this shape.
    ///
    /// Point markers use their marker disc; rectangles normalize their
    /// signed extents first. Degenerate shapes contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Point { center, radius } => geom::point_in_circle(p, *center, *radius),
            Shape::Rect { origin, w, h } => geom::point_in_rect(p, *origin, *w, *h),
            Shape::Polygon { vertices } => geom::point_in_polygon(p, vertices),
            Shape::Circle { center, radius } => geom::point_in_circle(p, *center, *radius),
        }
    }

    /// Returns the axis-aligned bounding box as `(min, max)` corners.
    ///
    /// Returns `None` when the shape has no area (degenerate data).
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        match self {
            Shape::Point { center, radius } | Shape::Circle { center, radius } => {
                if *radius <= 0.0 {
                    return None;
                }
                Some((
                    Point::new(center.x - radius, center.y - radius),
                    Point::new(center.x + radius, center.y + radius),
                ))
            }
            Shape::Rect { origin, w, h } => {
                if *w == 0.0 || *h == 0.0 {
                    return None;
                }
                let far = Point::new(origin.x + w, origin.y + h);
                Some((
                    Point::new(origin.x.min(far.x), origin.y.min(far.y)),
                    Point::new(origin.x.max(far.x), origin.y.max(far.y)),
                ))
            }
            Shape::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return None;
                }
                let mut min = vertices[0];
                let mut max = vertices[0];
                for v in &vertices[1..] {
                    min.x = min.x.min(v.x);
                    min.y = min.y.min(v.y);
                    max.x = max.x.max(v.x);
                    max.y = max.y.max(v.y);
                }
                Some((min, max))
            }
        }
    }
}
