//! Open/close lifecycle state machine
//!
//! Closed -> Open -> Closing -> Closed, with guarded transitions. The
//! Closing state persists for [`CLOSE_ANIMATION`] so the exit transition
//! can render with real panel dimensions before the card fully parks; the
//! UI layer owns the timer and calls `finish_close` when it fires.

use std::time::Duration;

use crate::catalog::CardId;

/// How long the closing transition runs before the card is fully closed
pub const CLOSE_ANIMATION: Duration = Duration::from_millis(800);

/// Lifecycle of the single openable card slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenLifecycle {
    #[default]
    Closed,
    Open(CardId),
    Closing(CardId),
}

/// How a given card participates in the scene, derived from the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Normal fanned carousel slot (also covers the closing card)
    Carousel,
    /// This card is the open one
    Open,
    /// Another card is open; parked off-screen
    Hidden,
}

impl OpenLifecycle {
    pub fn is_closed(&self) -> bool {
        matches!(self, OpenLifecycle::Closed)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OpenLifecycle::Open(_))
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, OpenLifecycle::Closing(_))
    }

    /// Id of the open card, if any
    pub fn open_card(&self) -> Option<CardId> {
        match self {
            OpenLifecycle::Open(id) => Some(*id),
            _ => None,
        }
    }

    /// Id of the card currently running its exit transition, if any
    pub fn closing_card(&self) -> Option<CardId> {
        match self {
            OpenLifecycle::Closing(id) => Some(*id),
            _ => None,
        }
    }

    /// Closed -> Open. Rejected from any other state: only one card can be
    /// open, and a closing card must finish before the next open.
    pub fn open(&mut self, id: CardId) -> bool {
        if !self.is_closed() {
            return false;
        }
        *self = OpenLifecycle::Open(id);
        true
    }

    /// Open -> Closing
    pub fn close(&mut self) -> bool {
        match *self {
            OpenLifecycle::Open(id) => {
                *self = OpenLifecycle::Closing(id);
                true
            }
            _ => false,
        }
    }

    /// Closing -> Closed, called when the exit animation timer fires
    pub fn finish_close(&mut self) -> bool {
        match *self {
            OpenLifecycle::Closing(_) => {
                *self = OpenLifecycle::Closed;
                true
            }
            _ => false,
        }
    }

    /// View state of a particular card under this lifecycle.
    ///
    /// While closing, every card renders in its carousel slot; the closing
    /// card is distinguished only by `closing_card` (it keeps its panel
    /// dimensions populated through the transition).
    pub fn view_state(&self, id: CardId) -> ViewState {
        match self {
            OpenLifecycle::Open(open) if *open == id => ViewState::Open,
            OpenLifecycle::Open(_) => ViewState::Hidden,
            _ => ViewState::Carousel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: CardId = CardId(1);
    const B: CardId = CardId(2);

    #[test]
    fn test_close_animation_window() {
        assert_eq!(CLOSE_ANIMATION.as_millis(), 800);
    }

    #[test]
    fn test_full_cycle() {
        let mut lc = OpenLifecycle::default();
        assert!(lc.open(A));
        assert_eq!(lc.open_card(), Some(A));
        assert!(lc.close());
        assert!(lc.is_closing());
        assert_eq!(lc.closing_card(), Some(A));
        assert!(lc.finish_close());
        assert!(lc.is_closed());
    }

    #[test]
    fn test_only_one_card_open() {
        let mut lc = OpenLifecycle::default();
        assert!(lc.open(A));
        assert!(!lc.open(B));
        assert_eq!(lc.open_card(), Some(A));
    }

    #[test]
    fn test_no_open_while_closing() {
        let mut lc = OpenLifecycle::default();
        lc.open(A);
        lc.close();
        assert!(!lc.open(B));
        assert!(!lc.open(A));
        lc.finish_close();
        assert!(lc.open(B));
    }

    #[test]
    fn test_guards_reject_out_of_order_transitions() {
        let mut lc = OpenLifecycle::default();
        assert!(!lc.close());
        assert!(!lc.finish_close());
        lc.open(A);
        assert!(!lc.finish_close()); // must pass through Closing
    }

    #[test]
    fn test_view_states() {
        let mut lc = OpenLifecycle::default();
        assert_eq!(lc.view_state(A), ViewState::Carousel);
        lc.open(A);
        assert_eq!(lc.view_state(A), ViewState::Open);
        assert_eq!(lc.view_state(B), ViewState::Hidden);
        lc.close();
        assert_eq!(lc.view_state(A), ViewState::Carousel);
        assert_eq!(lc.view_state(B), ViewState::Carousel);
    }
}
