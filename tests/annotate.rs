//! End-to-end annotation scenarios driven through the event router.

use labelmark::input::PendingShape;
use labelmark::{
    CanvasSurface, Dispatch, EventRouter, InputState, Point, PointerButton, PointerEvent, Shape,
    ShapeId, ToolMode,
};

/// Recording surface: applies a uniform device-to-surface scale and keeps a
/// log of every display call so tests can assert on the router's side of
/// the contract.
struct StubSurface {
    scale: f64,
    pending_shown: Vec<PendingShape>,
    pending_cleared: usize,
    committed: Vec<ShapeId>,
}

impl StubSurface {
    fn new(scale: f64) -> Self {
        Self {
            scale,
            pending_shown: Vec::new(),
            pending_cleared: 0,
            committed: Vec::new(),
        }
    }
}

impl CanvasSurface for StubSurface {
    fn to_surface(&self, device: Point) -> Point {
        Point::new(device.x / self.scale, device.y / self.scale)
    }

    fn show_pending(&mut self, pending: &PendingShape) {
        self.pending_shown.push(pending.clone());
    }

    fn clear_pending(&mut self) {
        self.pending_cleared += 1;
    }

    fn show_committed(&mut self, id: ShapeId, _shape: &Shape) {
        self.committed.push(id);
    }
}

fn router(scale: f64, tool: ToolMode) -> EventRouter<StubSurface> {
    let _ = env_logger::builder().is_test(true).try_init();
    EventRouter::new(
        StubSurface::new(scale),
        InputState::with_defaults(2.0, 5.0, 8.0, tool),
    )
}

fn primary(x: f64, y: f64) -> PointerEvent {
    PointerEvent::ButtonDown {
        button: PointerButton::Primary,
        position: Point::new(x, y),
    }
}

fn secondary(x: f64, y: f64) -> PointerEvent {
    PointerEvent::ButtonDown {
        button: PointerButton::Secondary,
        position: Point::new(x, y),
    }
}

fn motion(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Motion {
        position: Point::new(x, y),
    }
}

#[test]
fn rectangle_gesture_flows_through_router_and_surface() {
    // Device coordinates are twice the surface coordinates.
    let mut router = router(2.0, ToolMode::Rect);

    assert_eq!(router.dispatch(primary(20.0, 20.0)), Dispatch::Preview);
    assert_eq!(router.dispatch(motion(40.0, 40.0)), Dispatch::Preview);

    // The surface saw the pending rectangle in surface-local coordinates.
    assert_eq!(
        router.surface().pending_shown.last(),
        Some(&PendingShape::Rect {
            origin: Point::new(10.0, 10.0),
            w: 10.0,
            h: 10.0,
        })
    );

    let dispatch = router.dispatch(primary(60.0, 80.0));
    let id = match dispatch {
        Dispatch::Committed(id) => id,
        other => panic!("expected commit, got {other:?}"),
    };

    assert_eq!(
        router.input.registry.get(id),
        Some(&Shape::Rect {
            origin: Point::new(10.0, 10.0),
            w: 20.0,
            h: 30.0,
        })
    );
    assert_eq!(router.surface().committed, vec![id]);
    assert_eq!(router.surface().pending_cleared, 1);
    assert!(!router.input.is_drawing());
}

#[test]
fn point_tool_commits_one_shape_per_click() {
    let mut router = router(1.0, ToolMode::Point);

    let dispatch = router.dispatch(primary(5.0, 5.0));
    assert!(matches!(dispatch, Dispatch::Committed(_)));
    assert_eq!(router.input.registry.len(), 1);
    assert!(!router.input.is_drawing());
    // Point markers never show a preview.
    assert!(router.surface().pending_shown.is_empty());

    router.dispatch(primary(9.0, 9.0));
    assert_eq!(router.input.registry.len(), 2);
}

#[test]
fn secondary_click_hit_tests_when_nothing_is_pending() {
    let mut router = router(1.0, ToolMode::Rect);
    router.dispatch(primary(0.0, 0.0));
    let committed = router.dispatch(primary(10.0, 10.0));
    let id = match committed {
        Dispatch::Committed(id) => id,
        other => panic!("expected commit, got {other:?}"),
    };

    router.set_tool(ToolMode::None);
    match router.dispatch(secondary(5.0, 5.0)) {
        Dispatch::Hits(hits) => {
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].0, id);
        }
        other => panic!("expected hits, got {other:?}"),
    }
    // Informational only.
    assert_eq!(router.input.registry.len(), 1);

    assert_eq!(router.dispatch(secondary(200.0, 200.0)), Dispatch::Hits(vec![]));
}

#[test]
fn secondary_click_finalizes_pending_rectangle_via_router() {
    let mut router = router(1.0, ToolMode::Rect);
    router.dispatch(primary(0.0, 0.0));

    let dispatch = router.dispatch(secondary(15.0, 15.0));
    let id = match dispatch {
        Dispatch::Committed(id) => id,
        other => panic!("expected commit, got {other:?}"),
    };
    assert_eq!(
        router.input.registry.get(id),
        Some(&Shape::Rect {
            origin: Point::new(0.0, 0.0),
            w: 15.0,
            h: 15.0,
        })
    );
    assert_eq!(router.surface().pending_cleared, 1);
}

#[test]
fn polygon_gesture_closes_near_first_vertex() {
    let mut router = router(1.0, ToolMode::Polygon);

    router.dispatch(primary(0.0, 0.0));
    router.dispatch(primary(20.0, 0.0));
    router.dispatch(motion(15.0, 12.0));
    router.dispatch(primary(10.0, 20.0));
    assert!(router.input.is_drawing());

    let dispatch = router.dispatch(primary(1.0, 1.0));
    let id = match dispatch {
        Dispatch::Committed(id) => id,
        other => panic!("expected commit, got {other:?}"),
    };
    assert_eq!(
        router.input.registry.get(id),
        Some(&Shape::Polygon {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(10.0, 20.0),
            ],
        })
    );
}

#[test]
fn disabling_tool_mid_draw_clears_surface_preview() {
    let mut router = router(1.0, ToolMode::Circle);
    router.dispatch(primary(10.0, 10.0));
    assert!(router.input.is_drawing());

    assert_eq!(router.set_tool(ToolMode::None), Dispatch::Cancelled);
    assert!(!router.input.is_drawing());
    assert_eq!(router.surface().pending_cleared, 1);
    assert!(router.input.registry.is_empty());

    // Without a tool, primary clicks do nothing.
    assert_eq!(router.dispatch(primary(5.0, 5.0)), Dispatch::Nothing);
}

#[test]
fn set_tool_by_name_rejects_unknown_names() {
    let mut router = router(1.0, ToolMode::Rect);
    router.dispatch(primary(0.0, 0.0));

    assert!(router.set_tool_by_name("lasso").is_err());
    // Pending shape survives the rejected switch.
    assert!(router.input.is_drawing());

    assert_eq!(
        router.set_tool_by_name("polygon").unwrap(),
        Dispatch::Cancelled
    );
    assert_eq!(router.input.tool(), ToolMode::Polygon);
}

#[test]
fn overlapping_hits_come_back_topmost_first() {
    let mut router = router(1.0, ToolMode::Rect);
    router.dispatch(primary(0.0, 0.0));
    router.dispatch(primary(20.0, 20.0));
    router.dispatch(primary(5.0, 5.0));
    router.dispatch(primary(15.0, 15.0));

    let ids: Vec<ShapeId> = router.input.registry.iter().map(|(id, _)| id).collect();

    match router.dispatch(secondary(10.0, 10.0)) {
        Dispatch::Hits(hits) => {
            let hit_ids: Vec<ShapeId> = hits.iter().map(|(id, _)| *id).collect();
            assert_eq!(hit_ids, vec![ids[1], ids[0]]);
        }
        other => panic!("expected hits, got {other:?}"),
    }
}

#[test]
fn hidden_shapes_stay_registered_but_unselectable() {
    let mut router = router(1.0, ToolMode::Rect);
    router.dispatch(primary(0.0, 0.0));
    let id = match router.dispatch(primary(10.0, 10.0)) {
        Dispatch::Committed(id) => id,
        other => panic!("expected commit, got {other:?}"),
    };

    router.input.registry.set_visible(id, false);
    assert_eq!(router.dispatch(secondary(5.0, 5.0)), Dispatch::Hits(vec![]));
    assert_eq!(router.input.registry.len(), 1);
}
