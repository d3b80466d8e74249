// window_manager.rs - Overlay Window and Monitor Enumeration
//
// The overlay is a single frameless, always-on-top window covering the whole
// virtual desktop. Because its top-left corner sits on the desktop origin,
// cursor positions reported by winit are already overlay-relative.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use regionframe::{CaptureRect, MaskBands, Monitor, Point, VirtualDesktop};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId, WindowLevel},
};

/// Convert a winit monitor description into the selector's topology type
pub fn monitor_from_parts(position: PhysicalPosition<i32>, size: PhysicalSize<u32>) -> Monitor {
    Monitor::new(position.x, position.y, size.width, size.height)
}

/// Every connected display, in the order the platform reports them
pub fn enumerate_monitors(event_loop: &ActiveEventLoop) -> Vec<Monitor> {
    event_loop
        .available_monitors()
        .map(|handle| monitor_from_parts(handle.position(), handle.size()))
        .collect()
}

/// Best guess for the cursor before the first pointer event: centre of the
/// primary monitor, or of the first one if there is no primary.
pub fn initial_cursor(event_loop: &ActiveEventLoop, monitors: &[Monitor]) -> Option<Point> {
    let primary = event_loop
        .primary_monitor()
        .map(|handle| monitor_from_parts(handle.position(), handle.size()))
        .or_else(|| monitors.first().copied())?;
    Some(monitor_center(&primary))
}

pub fn monitor_center(monitor: &Monitor) -> Point {
    let b = monitor.bounds;
    Point::new(
        b.x as f64 + b.width as f64 / 2.0,
        b.y as f64 + b.height as f64 / 2.0,
    )
}

/// Title line shown while selecting
pub fn overlay_title(
    region: Option<CaptureRect>,
    masks: MaskBands,
    full_screen: bool,
    locked: bool,
) -> String {
    let region = match region {
        Some(r) => format!("{}x{} at ({}, {})", r.width, r.height, r.x, r.y),
        None => "no region".to_string(),
    };
    format!(
        "RegionFrame | {} | mask L{:.0} R{:.0} T{:.0} B{:.0} | [F]ull:{} [L]ock:{} | ENTER=Confirm ESC=Exit",
        region,
        masks.left,
        masks.right,
        masks.top,
        masks.bottom,
        if full_screen { "ON" } else { "OFF" },
        if locked { "ON" } else { "OFF" },
    )
}

/// Wrapper for the overlay (selector) window
pub struct OverlayWindow {
    window: Arc<Window>,
}

impl OverlayWindow {
    /// Create an overlay window covering `desktop`
    pub fn new(event_loop: &ActiveEventLoop, desktop: &VirtualDesktop) -> Result<Self> {
        let bounds = desktop.bounds();
        info!("Creating overlay window over {:?}", bounds);

        let attributes = WindowAttributes::default()
            .with_title("RegionFrame Selection")
            .with_position(PhysicalPosition::new(bounds.x, bounds.y))
            .with_inner_size(PhysicalSize::new(bounds.width, bounds.height))
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop);

        let window = event_loop
            .create_window(attributes)
            .context("Failed to create overlay window")?;

        Ok(Self {
            window: Arc::new(window),
        })
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
