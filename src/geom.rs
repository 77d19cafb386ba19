//! Geometry primitives: points and containment predicates.
//!
//! All coordinates are surface-local floating point values (any device
//! scaling or pan/zoom transform already removed). The predicates are pure
//! functions; degenerate inputs (zero-area rectangles, zero-radius circles,
//! polygons with fewer than three vertices) report "not contained" rather
//! than failing.

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Tests whether `p` lies within the rectangle spanned by `origin` and the
/// signed extents `w`/`h`.
///
/// Rectangles are stored as-dragged, so `w` and `h` may be negative; the
/// bounds are normalized before testing. Edges are inclusive. A rectangle
/// whose normalized width or height is zero contains nothing.
pub fn point_in_rect(p: Point, origin: Point, w: f64, h: f64) -> bool {
    let (min_x, max_x) = if w >= 0.0 {
        (origin.x, origin.x + w)
    } else {
        (origin.x + w, origin.x)
    };
    let (min_y, max_y) = if h >= 0.0 {
        (origin.y, origin.y + h)
    } else {
        (origin.y + h, origin.y)
    };

    if max_x - min_x == 0.0 || max_y - min_y == 0.0 {
        return false;
    }

    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Tests whether `p` lies within the circle at `center` with `radius`.
///
/// The boundary is inclusive. Zero or negative radii contain nothing.
pub fn point_in_circle(p: Point, center: Point, radius: f64) -> bool {
    if radius <= 0.0 {
        return false;
    }
    center.distance_to(p) <= radius
}

/// Tests whether `p` lies within the closed polygon described by `vertices`.
///
/// Uses ray casting, so non-convex polygons are handled correctly. The
/// polygon is treated as closed (an implicit edge from the last vertex back
/// to the first). Vertices themselves test as contained; other boundary
/// points follow the half-open crossing rule. Fewer than three vertices
/// contain nothing.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    // Ray casting leaves behavior at vertices rule-dependent; settle it up
    // front so a click exactly on a vertex always selects the polygon.
    if vertices.iter().any(|v| v.x == p.x && v.y == p.y) {
        return true;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > p.y) != (vj.y > p.y))
            && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
