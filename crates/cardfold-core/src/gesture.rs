//! Gesture tracking
//!
//! Converts raw pointer/touch positions into discrete navigation intents,
//! live drag offsets and zoom deltas. Trackers are plain state structs that
//! live for a single gesture; the UI layer feeds them coordinates and acts
//! on what they return.

use std::time::Duration;

use crate::panzoom::Vec2;

/// Movement below this many pixels still counts as a click
pub const DRAG_SLOP: f64 = 5.0;

/// Single continuous move past this distance fires a swipe navigation
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// How long a finished drag keeps suppressing the trailing click
pub const JUST_DRAGGED_WINDOW: Duration = Duration::from_millis(50);

/// Pinch distance delta to zoom delta conversion
pub const PINCH_ZOOM_RATE: f64 = 0.01;

/// Wheel delta-y to zoom delta conversion
pub const WHEEL_ZOOM_RATE: f64 = 0.01;

/// Carousel navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Signed index delta
    pub fn delta(&self) -> i64 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Position-following drag gesture over the carousel.
///
/// While active, `update` reports the live offset used for the elastic
/// carousel translation. On release the accumulated offset converts into a
/// whole-slot shift. `has_dragged` stays latched after release so the
/// trailing click can be suppressed; the owner clears it after
/// [`JUST_DRAGGED_WINDOW`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    origin_x: f64,
    offset: f64,
    dragging: bool,
    has_dragged: bool,
}

impl DragTracker {
    pub fn begin(&mut self, x: f64) {
        self.origin_x = x;
        self.offset = 0.0;
        self.dragging = true;
        self.has_dragged = false;
    }

    /// Feed a move position. Returns the live offset while dragging.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.offset = x - self.origin_x;
        if self.offset.abs() > DRAG_SLOP {
            self.has_dragged = true;
        }
        Some(self.offset)
    }

    /// End the gesture, converting total travel into a slot shift.
    ///
    /// Dragging content to the left (negative offset) moves the carousel
    /// forward: `shift = round(-offset / spacing)`.
    pub fn release(&mut self, spacing: f64) -> i64 {
        if !self.dragging {
            return 0;
        }
        let shift = (-self.offset / spacing).round() as i64;
        self.dragging = false;
        self.offset = 0.0;
        shift
    }

    /// Clear the click-suppression latch after the drag settles
    pub fn clear_just_dragged(&mut self) {
        self.has_dragged = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    pub fn offset(&self) -> f64 {
        if self.dragging {
            self.offset
        } else {
            0.0
        }
    }
}

/// Threshold-triggered swipe gesture.
///
/// Fires exactly one navigation per gesture once travel exceeds
/// [`SWIPE_THRESHOLD`]; the latch holds until `end`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    origin_x: f64,
    active: bool,
    handled: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.origin_x = x;
        self.active = true;
        self.handled = false;
    }

    /// Feed a move position; returns a direction at most once per gesture.
    ///
    /// Positive travel (content pulled right) navigates to the previous
    /// card, negative to the next.
    pub fn update(&mut self, x: f64) -> Option<Direction> {
        if !self.active || self.handled {
            return None;
        }
        let diff = x - self.origin_x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        self.handled = true;
        Some(if diff > 0.0 {
            Direction::Prev
        } else {
            Direction::Next
        })
    }

    pub fn end(&mut self) {
        self.active = false;
        self.handled = false;
    }
}

/// Two-finger pinch distance tracker.
///
/// Distance deltas between consecutive frames convert to zoom deltas at
/// [`PINCH_ZOOM_RATE`]. The reference distance clears on touch end so a new
/// pinch starts fresh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchTracker {
    last_distance: Option<f64>,
}

impl PinchTracker {
    pub fn begin(&mut self, a: Vec2, b: Vec2) {
        self.last_distance = Some(a.distance(b));
    }

    /// Feed the current two touch points; returns the zoom delta for this
    /// frame, or zero when no reference distance exists yet.
    pub fn update(&mut self, a: Vec2, b: Vec2) -> f64 {
        let current = a.distance(b);
        let delta = match self.last_distance {
            Some(last) => (current - last) * PINCH_ZOOM_RATE,
            None => 0.0,
        };
        self.last_distance = Some(current);
        delta
    }

    pub fn end(&mut self) {
        self.last_distance = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }
}

/// Map a wheel event to a zoom delta.
///
/// Only intercepts modified wheel events (ctrl/meta held, which also covers
/// trackpad pinch); a plain wheel scroll passes through untouched.
pub fn wheel_zoom(delta_y: f64, modifier_held: bool) -> Option<f64> {
    if modifier_held {
        Some(-delta_y * WHEEL_ZOOM_RATE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_below_slop_is_a_click() {
        let mut drag = DragTracker::default();
        drag.begin(100.0);
        drag.update(103.0);
        assert!(!drag.has_dragged());
        assert_eq!(drag.release(220.0), 0);
    }

    #[test]
    fn test_drag_release_shift() {
        let mut drag = DragTracker::default();
        drag.begin(500.0);
        drag.update(170.0); // -330px travel
        assert!(drag.has_dragged());
        assert_eq!(drag.release(220.0), 2);
        // latch survives release until explicitly cleared
        assert!(drag.has_dragged());
        drag.clear_just_dragged();
        assert!(!drag.has_dragged());
    }

    #[test]
    fn test_drag_offset_resets_on_release() {
        let mut drag = DragTracker::default();
        drag.begin(0.0);
        drag.update(80.0);
        assert_eq!(drag.offset(), 80.0);
        drag.release(220.0);
        assert_eq!(drag.offset(), 0.0);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_update_without_begin_is_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(300.0), None);
    }

    #[test]
    fn test_swipe_fires_once() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0);
        assert_eq!(swipe.update(230.0), None);
        assert_eq!(swipe.update(260.0), Some(Direction::Prev));
        // keeps moving in the same gesture, no second fire
        assert_eq!(swipe.update(400.0), None);
        swipe.end();
        swipe.begin(200.0);
        assert_eq!(swipe.update(140.0), Some(Direction::Next));
    }

    #[test]
    fn test_swipe_threshold_is_exclusive() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(0.0);
        assert_eq!(swipe.update(50.0), None);
        assert_eq!(swipe.update(50.1), Some(Direction::Prev));
    }

    #[test]
    fn test_pinch_delta() {
        let mut pinch = PinchTracker::default();
        pinch.begin(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        let delta = pinch.update(Vec2::new(0.0, 0.0), Vec2::new(150.0, 0.0));
        assert!((delta - 0.5).abs() < 1e-9);
        pinch.end();
        assert!(!pinch.is_active());
    }

    #[test]
    fn test_wheel_zoom_requires_modifier() {
        assert_eq!(wheel_zoom(120.0, false), None);
        let delta = wheel_zoom(120.0, true).unwrap();
        assert!((delta + 1.2).abs() < 1e-9);
    }
}
