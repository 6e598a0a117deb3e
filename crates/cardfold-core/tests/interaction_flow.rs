//! End-to-end engine scenarios
//!
//! Drives a full session through the engine facade: login, browsing,
//! opening, panning and closing, plus persistence across restarts.

use cardfold_core::catalog::{Catalog, OpensFrom};
use cardfold_core::gesture::{wheel_zoom, Direction, DragTracker, PinchTracker};
use cardfold_core::layout::{spread_width, PanelPair};
use cardfold_core::panzoom::{PanZoom, Vec2, MAX_ZOOM};
use cardfold_core::transform::{card_transform, stacking_order, CardTransform, TransformInput, CARD_SPACING};
use cardfold_core::{CardEngine, ClickOutcome, Gate};

const VIEWPORT: Vec2 = Vec2 { x: 1280.0, y: 800.0 };

fn engine(dir: &std::path::Path) -> CardEngine {
    CardEngine::new(dir, Catalog::builtin(), Gate::new("warm-hearth")).unwrap()
}

#[test]
fn login_then_browse_then_reopen_session() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut eng = engine(dir.path());
        assert!(!eng.is_authenticated());
        assert!(!eng.login("wrong guess"));
        assert!(eng.login("warm-hearth"));
        assert!(eng.is_authenticated());

        eng.navigate(Direction::Next);
        eng.navigate(Direction::Next);
    }

    // restart: auth flag and index both survive
    let eng = engine(dir.path());
    assert!(eng.is_authenticated());
    let expected = Catalog::builtin().default_index() + 2;
    assert_eq!(eng.active_index(), expected.min(eng.catalog().len() - 1));
}

#[test]
fn drag_gesture_moves_two_slots() {
    let dir = tempfile::tempdir().unwrap();
    let mut eng = engine(dir.path());
    let start = eng.active_index();

    let mut drag = DragTracker::default();
    drag.begin(600.0);
    drag.update(500.0);
    drag.update(270.0); // total -330px
    assert!(drag.has_dragged());
    let shift = drag.release(CARD_SPACING);
    assert_eq!(shift, 2);
    eng.end_drag(shift);

    let expected = (start + 2).min(eng.catalog().len() - 1);
    assert_eq!(eng.active_index(), expected);

    // the latched drag suppresses the trailing click entirely at the UI
    // layer; after clearing, clicks land again
    drag.clear_just_dragged();
    assert!(!drag.has_dragged());
}

#[test]
fn open_pan_zoom_close_resets() {
    let dir = tempfile::tempdir().unwrap();
    let mut eng = engine(dir.path());

    // walk to the first card, a wide fold
    while eng.active_index() > 0 {
        eng.navigate(Direction::Prev);
    }
    let card = eng.active_card().clone();
    assert!(card.kind.pannable());

    let id = eng.open_active().unwrap();
    assert_eq!(eng.lifecycle().open_card(), Some(id));

    // both inside panels load, in arbitrary order
    let mut pair = PanelPair::default();
    assert!(pair.load_right(1.4).is_none());
    let (left, right) = pair.load_left(1.2).unwrap();
    assert_eq!(left.width, right.width);

    // wide spread: pan starts biased toward the opening edge
    let spread = spread_width(left, right);
    assert!(spread > VIEWPORT.x);
    let mut pz = PanZoom {
        offset: PanZoom::open_bias(spread, VIEWPORT.x, card.opens),
        ..Default::default()
    };
    match card.opens {
        OpensFrom::Left => assert!(pz.offset.x > 0.0),
        OpensFrom::Right => assert!(pz.offset.x < 0.0),
    }

    // pinch in, wheel out, pan around; clamps hold throughout
    let content = Vec2::new(spread, left.height);
    let mut pinch = PinchTracker::default();
    pinch.begin(Vec2::new(500.0, 400.0), Vec2::new(700.0, 400.0));
    let delta = pinch.update(Vec2::new(400.0, 400.0), Vec2::new(800.0, 400.0));
    pz.zoom_by(delta, content, VIEWPORT);
    assert!(pz.zoom > 1.0);

    pz.zoom_by(wheel_zoom(-900.0, true).unwrap(), content, VIEWPORT);
    assert_eq!(pz.zoom, MAX_ZOOM);
    assert_eq!(wheel_zoom(-900.0, false), None);

    pz.pan_to(Vec2::new(1e6, 1e6), content, VIEWPORT);

    // the open transform overlays the pan and zoom
    let transform = card_transform(TransformInput {
        slot_offset: 0.0,
        view: eng.lifecycle().view_state(id),
        kind: card.kind,
        left,
        right,
        pan: pz.offset,
        zoom: pz.zoom,
        drag_offset: 0.0,
    });
    match transform {
        CardTransform::Opened { scale, .. } => assert_eq!(scale, MAX_ZOOM),
        other => panic!("expected opened transform, got {other:?}"),
    }
    assert_eq!(stacking_order(eng.lifecycle().view_state(id), 0.0), 100);

    // close: lifecycle walks Closing -> Closed, pan/zoom resets
    assert!(eng.request_close());
    assert!(eng.lifecycle().is_closing());
    assert!(eng.finish_close());
    pz.reset();
    assert_eq!(pz, PanZoom::default());
}

#[test]
fn hidden_cards_park_offscreen_while_one_is_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut eng = engine(dir.path());
    let id = eng.open_active().unwrap();

    let catalog = eng.catalog().clone();
    for (index, card) in catalog.cards().iter().enumerate() {
        let offset = index as f64 - eng.active_index() as f64;
        let view = eng.lifecycle().view_state(card.id);
        let transform = card_transform(TransformInput {
            slot_offset: offset,
            view,
            kind: card.kind,
            left: Default::default(),
            right: Default::default(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            drag_offset: 0.0,
        });
        if card.id == id {
            assert!(matches!(transform, CardTransform::Opened { .. }));
        } else {
            match transform {
                CardTransform::Parked { shift_vw, .. } => {
                    assert_eq!(shift_vw.signum() as i64, if offset < 0.0 { -1 } else { 1 });
                }
                other => panic!("expected parked transform, got {other:?}"),
            }
            // parked cards always paint under the open card
            assert!(stacking_order(view, offset) < 100);
        }
    }
}

#[test]
fn keyboard_surface_equivalents() {
    let dir = tempfile::tempdir().unwrap();
    let mut eng = engine(dir.path());
    let start = eng.active_index();

    // ArrowRight / ArrowLeft
    assert!(eng.navigate(Direction::Next));
    assert!(eng.navigate(Direction::Prev));
    assert_eq!(eng.active_index(), start);

    // Enter opens the active card; arrows are dead while open
    let id = eng.open_active().unwrap();
    assert!(eng.open_active().is_none());
    assert!(!eng.navigate(Direction::Next));

    // Escape closes
    assert!(eng.request_close());
    assert_eq!(eng.lifecycle().closing_card(), Some(id));
    assert!(eng.finish_close());

    // Enter works again after the transition
    assert!(eng.open_active().is_some());
}

#[test]
fn click_while_open_closes_even_on_other_cards() {
    let dir = tempfile::tempdir().unwrap();
    let mut eng = engine(dir.path());
    let other = eng.catalog().get(0).unwrap().id;

    let id = eng.open_active().unwrap();
    assert_ne!(id, other);

    // clicking a different card routes to close, not select
    assert_eq!(eng.card_clicked(other), ClickOutcome::CloseRequested);
    assert!(eng.lifecycle().is_closing());
    // and the active slot did not move
    assert_eq!(eng.active_card().id, id);
}
