use crate::draw::{Shape, ShapeId};
use crate::geom::Point;
use crate::input::tool::ToolMode;
use log::debug;

use super::{DrawingState, InputState, PendingShape};

/// Outcome of a primary-down or motion event applied to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The event required no state change.
    None,
    /// The pending shape was created or updated; its preview should be
    /// refreshed.
    Preview,
    /// A shape was committed to the registry.
    Committed(ShapeId),
}

/// Outcome of a secondary-click event.
#[derive(Debug, Clone, PartialEq)]
pub enum SecondaryOutcome {
    /// A pending rectangle was finalized at the clicked coordinate.
    Committed(ShapeId),
    /// A pending polygon or circle was discarded.
    Cancelled,
    /// No draw was pending; hit test result, topmost shape first.
    /// Informational only - the registry was not mutated.
    Hits(Vec<(ShapeId, Shape)>),
}

impl InputState {
    /// Processes a primary button press at surface-local `p`.
    ///
    /// # Behavior
    /// - Point tool: commits a point marker immediately, stays `Idle`
    /// - Rect/polygon/circle while `Idle`: starts a pending shape
    /// - Rect while `Drawing`: far corner = `p`, commits
    /// - Polygon while `Drawing`: appends a vertex, or closes and commits
    ///   when `p` falls within the close radius of the first vertex and at
    ///   least three vertices exist
    /// - Circle while `Drawing`: radius = distance to `p`, commits
    /// - No tool: ignored
    pub fn on_primary_down(&mut self, p: Point) -> Transition {
        let tool = self.tool();
        match &mut self.state {
            DrawingState::Idle => match tool {
                ToolMode::None => Transition::None,
                ToolMode::Point => {
                    let id = self.registry.commit(Shape::Point {
                        center: p,
                        radius: self.point_radius,
                    });
                    self.needs_redraw = true;
                    Transition::Committed(id)
                }
                ToolMode::Rect => {
                    // Seed with the minimum visible extent so the preview
                    // is never an invisible zero-area rectangle.
                    self.state = DrawingState::Drawing {
                        pending: PendingShape::Rect {
                            origin: p,
                            w: self.min_rect_extent,
                            h: self.min_rect_extent,
                        },
                    };
                    self.needs_redraw = true;
                    Transition::Preview
                }
                ToolMode::Polygon => {
                    self.state = DrawingState::Drawing {
                        pending: PendingShape::Polygon {
                            vertices: vec![p],
                            cursor: p,
                        },
                    };
                    self.needs_redraw = true;
                    Transition::Preview
                }
                ToolMode::Circle => {
                    self.state = DrawingState::Drawing {
                        pending: PendingShape::Circle {
                            center: p,
                            radius: 0.0,
                        },
                    };
                    self.needs_redraw = true;
                    Transition::Preview
                }
            },
            DrawingState::Drawing { pending } => match pending {
                PendingShape::Rect { origin, .. } => {
                    let origin = *origin;
                    Transition::Committed(self.commit_rect(origin, p))
                }
                PendingShape::Polygon { vertices, cursor } => {
                    let closes = vertices.len() >= 3
                        && vertices[0].distance_to(p) <= self.polygon_close_radius;
                    if closes {
                        let vertices = std::mem::take(vertices);
                        let id = self.registry.commit(Shape::Polygon { vertices });
                        self.state = DrawingState::Idle;
                        self.needs_redraw = true;
                        Transition::Committed(id)
                    } else {
                        vertices.push(p);
                        *cursor = p;
                        self.needs_redraw = true;
                        Transition::Preview
                    }
                }
                PendingShape::Circle { center, .. } => {
                    let center = *center;
                    let id = self.registry.commit(Shape::Circle {
                        center,
                        radius: center.distance_to(p),
                    });
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                    Transition::Committed(id)
                }
            },
        }
    }

    /// Processes pointer motion at surface-local `p`.
    ///
    /// Only meaningful while `Drawing`: live-resizes the pending rectangle
    /// or circle and advances the polygon preview edge. Never commits.
    pub fn on_motion(&mut self, p: Point) -> Transition {
        if let DrawingState::Drawing { pending } = &mut self.state {
            match pending {
                PendingShape::Rect { origin, w, h } => {
                    *w = p.x - origin.x;
                    *h = p.y - origin.y;
                }
                PendingShape::Polygon { cursor, .. } => {
                    *cursor = p;
                }
                PendingShape::Circle { center, radius } => {
                    *radius = center.distance_to(p);
                }
            }
            self.needs_redraw = true;
            Transition::Preview
        } else {
            Transition::None
        }
    }

    /// Processes a secondary (context) button press at surface-local `p`.
    ///
    /// # Behavior
    /// - Pending rectangle: finalized with far corner = `p` (alternate
    ///   commit signal), back to `Idle`
    /// - Pending polygon or circle: discarded, back to `Idle`
    /// - Otherwise: hit test at `p`, no state mutation
    pub fn on_secondary_down(&mut self, p: Point) -> SecondaryOutcome {
        match &self.state {
            DrawingState::Drawing {
                pending: PendingShape::Rect { origin, .. },
            } => {
                let origin = *origin;
                SecondaryOutcome::Committed(self.commit_rect(origin, p))
            }
            DrawingState::Drawing { pending } => {
                debug!("Secondary click cancels pending {:?}", pending);
                self.state = DrawingState::Idle;
                self.needs_redraw = true;
                SecondaryOutcome::Cancelled
            }
            DrawingState::Idle => {
                let hits = self
                    .registry
                    .hits_at(p)
                    .into_iter()
                    .map(|(id, shape)| (id, shape.clone()))
                    .collect::<Vec<_>>();
                debug!("Hit test at ({}, {}): {} match(es)", p.x, p.y, hits.len());
                SecondaryOutcome::Hits(hits)
            }
        }
    }

    /// Finalizes a pending rectangle with far corner `far` and commits it.
    ///
    /// A dimension that would collapse to zero falls back to the minimum
    /// extent, so the registry never holds an invisible rectangle.
    fn commit_rect(&mut self, origin: Point, far: Point) -> ShapeId {
        let mut w = far.x - origin.x;
        let mut h = far.y - origin.y;
        if w == 0.0 {
            w = self.min_rect_extent;
        }
        if h == 0.0 {
            h = self.min_rect_extent;
        }

        let id = self.registry.commit(Shape::Rect { origin, w, h });
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        id
    }
}
