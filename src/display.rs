// display.rs - Monitor Topology
//
// Snapshot of the host's displays taken when the overlay opens. Nothing in
// here changes for the lifetime of a selection session.

use serde::{Deserialize, Serialize};

use crate::geometry::{CaptureRect, Point, Rect};

/// One enumerated display, in absolute screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    pub bounds: CaptureRect,
}

impl Monitor {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            bounds: CaptureRect::new(x, y, width, height),
        }
    }

    /// Half-open containment of an absolute point. Fractional positions
    /// belong to the pixel they fall in.
    pub fn contains(&self, p: Point) -> bool {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return false;
        }
        self.bounds.contains(p.x.floor() as i32, p.y.floor() as i32)
    }
}

/// First monitor (in enumeration order) containing `cursor`
pub fn monitor_at(monitors: &[Monitor], cursor: Point) -> Option<&Monitor> {
    monitors.iter().find(|m| m.contains(cursor))
}

/// Union of all monitor bounds. The origin may be negative when a display
/// sits left of or above the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualDesktop {
    bounds: CaptureRect,
}

impl VirtualDesktop {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            bounds: CaptureRect::new(x, y, width, height),
        }
    }

    /// Bounding box of every monitor. `None` when there are no monitors.
    pub fn from_monitors(monitors: &[Monitor]) -> Option<Self> {
        let min_x = monitors.iter().map(|m| m.bounds.x).min()?;
        let min_y = monitors.iter().map(|m| m.bounds.y).min()?;
        let max_x = monitors
            .iter()
            .map(|m| m.bounds.x as i64 + m.bounds.width as i64)
            .max()?;
        let max_y = monitors
            .iter()
            .map(|m| m.bounds.y as i64 + m.bounds.height as i64)
            .max()?;

        Some(Self::new(
            min_x,
            min_y,
            (max_x - min_x as i64) as u32,
            (max_y - min_y as i64) as u32,
        ))
    }

    pub fn bounds(&self) -> CaptureRect {
        self.bounds
    }

    pub fn origin(&self) -> Point {
        Point::new(self.bounds.x as f64, self.bounds.y as f64)
    }

    pub fn width(&self) -> f64 {
        self.bounds.width as f64
    }

    pub fn height(&self) -> f64 {
        self.bounds.height as f64
    }

    /// The desktop as seen from the overlay: anchored at (0, 0)
    pub fn relative_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }

    pub fn to_relative(&self, absolute: Point) -> Point {
        absolute - self.origin()
    }

    pub fn to_absolute(&self, relative: Point) -> Point {
        relative + self.origin()
    }

    /// Monitor bounds expressed in overlay-relative coordinates
    pub fn relative_monitor_rect(&self, monitor: &Monitor) -> Rect {
        let origin = self.origin();
        monitor
            .bounds
            .to_rect()
            .translate(Point::new(-origin.x, -origin.y))
    }

    /// Overlay-relative rectangle to absolute integer pixels
    pub fn to_capture_rect(&self, relative: &Rect) -> CaptureRect {
        CaptureRect::from_rect(&relative.translate(self.origin()))
    }
}
