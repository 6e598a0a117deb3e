//! Card transform calculator
//!
//! Pure mapping from a card's slot offset, lifecycle view state and
//! pan/zoom overlay to the CSS transform and stacking order the renderer
//! applies. No state lives here.

use crate::catalog::CardKind;
use crate::layout::{spread_width, PanelSize};
use crate::lifecycle::ViewState;
use crate::panzoom::Vec2;

/// Closed-card footprint in the carousel, in CSS pixels
pub const CARD_WIDTH: f64 = 200.0;

/// Gap between neighbouring carousel slots
pub const CARD_GAP: f64 = 20.0;

/// Center-to-center distance between carousel slots
pub const CARD_SPACING: f64 = CARD_WIDTH + CARD_GAP;

/// Stacking order of the open card; always above the fan
pub const OPEN_Z_INDEX: i32 = 100;

/// Per-slot rotation of the 3D fan, degrees
const FAN_ROTATE_DEG: f64 = -45.0;

/// Per-slot scale falloff of the 3D fan
const FAN_SCALE_STEP: f64 = 0.1;

/// Everything the calculator needs to place one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformInput {
    /// Signed distance from the active slot, in card slots
    pub slot_offset: f64,
    pub view: ViewState,
    pub kind: CardKind,
    pub left: PanelSize,
    pub right: PanelSize,
    /// Live pan overlay (fold cards only)
    pub pan: Vec2,
    pub zoom: f64,
    /// Live carousel drag offset in pixels; zero outside a drag
    pub drag_offset: f64,
}

/// Computed placement for one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardTransform {
    /// Opened in place: pixel translation plus uniform scale
    Opened { translate: Vec2, scale: f64 },
    /// Parked off-screen while another card is open; translation is in
    /// viewport widths to clear any window size
    Parked { shift_vw: f64, scale: f64 },
    /// Regular fanned carousel slot
    Slot {
        translate_x: f64,
        rotate_y_deg: f64,
        scale: f64,
    },
}

impl CardTransform {
    /// Render as a CSS transform value
    pub fn to_css(&self) -> String {
        match self {
            CardTransform::Opened { translate, scale } => {
                format!(
                    "translate({:.2}px, {:.2}px) scale({:.4})",
                    translate.x, translate.y, scale
                )
            }
            CardTransform::Parked { shift_vw, scale } => {
                format!("translateX({shift_vw:.0}vw) scale({scale:.4})")
            }
            CardTransform::Slot {
                translate_x,
                rotate_y_deg,
                scale,
            } => {
                format!(
                    "translateX({translate_x:.2}px) rotateY({rotate_y_deg:.2}deg) scale({scale:.4})"
                )
            }
        }
    }
}

/// Map one card's inputs to its transform
pub fn card_transform(input: TransformInput) -> CardTransform {
    match input.view {
        ViewState::Open => opened_transform(input),
        ViewState::Hidden => {
            // Sign of the slot offset picks the side to park on
            let direction = if input.slot_offset < 0.0 { -1.0 } else { 1.0 };
            CardTransform::Parked {
                shift_vw: direction * 150.0,
                scale: 0.8,
            }
        }
        ViewState::Carousel => CardTransform::Slot {
            translate_x: input.slot_offset * CARD_SPACING + input.drag_offset,
            rotate_y_deg: input.slot_offset * FAN_ROTATE_DEG,
            scale: 1.0 - input.slot_offset.abs() * FAN_SCALE_STEP,
        },
    }
}

fn opened_transform(input: TransformInput) -> CardTransform {
    match input.kind {
        CardKind::NoOpen => CardTransform::Opened {
            translate: Vec2::ZERO,
            scale: 1.4,
        },
        CardKind::Popup => CardTransform::Opened {
            translate: Vec2::ZERO,
            scale: 1.0,
        },
        CardKind::FoldDown => CardTransform::Opened {
            translate: Vec2::new(0.0, input.left.height / 2.0),
            scale: 1.0,
        },
        CardKind::Fold => {
            // Recenter the asymmetric spread, then overlay the live pan
            let total = spread_width(input.left, input.right);
            let center = (total - input.right.width) / 2.0;
            CardTransform::Opened {
                translate: Vec2::new(center + input.pan.x, input.pan.y),
                scale: input.zoom,
            }
        }
    }
}

/// Paint order: the open card is always topmost, otherwise cards nearer
/// the active slot paint above farther ones.
pub fn stacking_order(view: ViewState, slot_offset: f64) -> i32 {
    match view {
        ViewState::Open => OPEN_Z_INDEX,
        _ => (50.0 - slot_offset.abs() * 10.0).round() as i32,
    }
}
