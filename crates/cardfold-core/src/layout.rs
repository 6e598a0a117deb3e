//! Panel sizing from image aspect ratios
//!
//! Every panel renders at a fixed height; width follows the natural aspect
//! ratio of its artwork. A fold card with two inside panels commits both
//! sizes only once both images have reported in, so load order never
//! changes the result.

/// Fixed render height of every card panel, in CSS pixels
pub const CARD_HEIGHT: f64 = 500.0;

/// Placeholder width until real artwork dimensions arrive
pub const DEFAULT_PANEL_WIDTH: f64 = 200.0;

/// Rendered dimensions of one card panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: CARD_HEIGHT,
        }
    }
}

impl PanelSize {
    /// Size a panel from an image aspect ratio (width / height)
    pub fn from_aspect(aspect: f64) -> Self {
        Self {
            width: CARD_HEIGHT * aspect,
            height: CARD_HEIGHT,
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Combined width of an opened two-panel spread
pub fn spread_width(left: PanelSize, right: PanelSize) -> f64 {
    left.width + right.width
}

/// Order-independent sizing for a left/right panel pair.
///
/// Image decode callbacks land in any order; `resolve` only returns sizes
/// once both aspects are known, and both panels get the width of the wider
/// one so the spread stays symmetric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelPair {
    left_aspect: Option<f64>,
    right_aspect: Option<f64>,
}

impl PanelPair {
    pub fn load_left(&mut self, aspect: f64) -> Option<(PanelSize, PanelSize)> {
        self.left_aspect = Some(aspect);
        self.resolve()
    }

    pub fn load_right(&mut self, aspect: f64) -> Option<(PanelSize, PanelSize)> {
        self.right_aspect = Some(aspect);
        self.resolve()
    }

    fn resolve(&self) -> Option<(PanelSize, PanelSize)> {
        let (left, right) = (self.left_aspect?, self.right_aspect?);
        let width = CARD_HEIGHT * left.max(right);
        let size = PanelSize {
            width,
            height: CARD_HEIGHT,
        };
        Some((size, size))
    }
}
