// selector/mask.rs - Dimming Bands
//
// The overlay dims everything outside the selection with four bands laid out
// like a 3x3 grid: two columns and two rows around the selected cell.

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaskBands {
    /// Width of the column left of the selection
    pub left: f64,
    /// Width of the column right of the selection
    pub right: f64,
    /// Height of the row above the selection
    pub top: f64,
    /// Height of the row below the selection
    pub bottom: f64,
}

impl MaskBands {
    /// Gaps between `desktop` edges and `region`. `region` must already be
    /// clamped to `desktop`, otherwise bands come out negative.
    pub fn around(region: &Rect, desktop: &Rect) -> Self {
        Self {
            left: region.left() - desktop.left(),
            right: desktop.right() - region.right(),
            top: region.top() - desktop.top(),
            bottom: desktop.bottom() - region.bottom(),
        }
    }
}
