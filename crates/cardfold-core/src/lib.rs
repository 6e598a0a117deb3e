//! Cardfold Core Library
//!
//! Interaction core for a gated greeting-card carousel: gesture tracking,
//! clamped carousel navigation, pan/zoom bounds, card transform math and
//! the open/close lifecycle, plus the durable session store behind them.
//!
//! ## Overview
//!
//! The UI layer feeds raw pointer, touch, wheel and keyboard input into
//! the trackers in [`gesture`], routes the resulting intents through
//! [`CardEngine`], and renders each card from the pure calculator in
//! [`transform`]. Everything here is synchronous and framework-free; the
//! two timed behaviors (drag click-suppression, the 800 ms closing
//! transition) are driven by the caller's timers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cardfold_core::{CardEngine, Catalog, Direction, Gate};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = CardEngine::new(
//!         "/tmp/cardfold".as_ref(),
//!         Catalog::builtin(),
//!         Gate::default(),
//!     )?;
//!
//!     engine.navigate(Direction::Next);
//!     let opened = engine.open_active();
//!     println!("opened {:?} at slot {}", opened, engine.active_index());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod carousel;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod lifecycle;
pub mod panzoom;
pub mod store;
pub mod transform;

// Re-exports
pub use auth::{Gate, DEFAULT_PASSCODE};
pub use carousel::Carousel;
pub use catalog::{Card, CardId, CardKind, Catalog, OpensFrom};
pub use engine::{CardEngine, ClickOutcome};
pub use error::{CardError, CardResult};
pub use gesture::{
    wheel_zoom, Direction, DragTracker, PinchTracker, SwipeTracker, DRAG_SLOP,
    JUST_DRAGGED_WINDOW, SWIPE_THRESHOLD,
};
pub use layout::{spread_width, PanelPair, PanelSize, CARD_HEIGHT};
pub use lifecycle::{OpenLifecycle, ViewState, CLOSE_ANIMATION};
pub use panzoom::{PanBounds, PanZoom, Vec2, MAX_ZOOM, MIN_ZOOM};
pub use store::Store;
pub use transform::{
    card_transform, stacking_order, CardTransform, TransformInput, CARD_GAP, CARD_SPACING,
    CARD_WIDTH, OPEN_Z_INDEX,
};
