// selector/model.rs - Selection State Machine
//
// All geometry lives here. Every entry point mutates the model and returns
// the events it produced, in order; delivering them is the caller's job.
//
// Coordinates:
// - pointer positions handed to on_press/on_move/on_release are overlay-relative
// - the cursor used for monitor lookups is absolute (relative + desktop origin)

use log::{debug, info, warn};

use crate::config::SelectorSettings;
use crate::display::{monitor_at, Monitor, VirtualDesktop};
use crate::geometry::{CaptureRect, Point, Rect};

use super::hit_test::hit_test;
use super::mask::MaskBands;
use super::state::{Control, InteractionMode, SelectorEvent};

type Events = Vec<SelectorEvent>;

#[derive(Debug, Clone)]
pub struct SelectionModel {
    desktop: VirtualDesktop,
    monitors: Vec<Monitor>,
    grip_size: f64,
    initial_scale: f64,

    /// Anchor corner, free-form
    start: Point,
    /// Corner following the pointer, free-form
    end: Point,
    /// Normalized and clamped; only meaningful once `placed`
    region: Rect,
    masks: MaskBands,
    placed: bool,

    mode: InteractionMode,
    locked: bool,
    full_screen: bool,
    last_mouse: Option<Point>,
    /// Last known cursor position, absolute
    cursor: Point,
}

impl SelectionModel {
    /// Start a session and place the default region on the monitor under `cursor`
    pub fn new(desktop: VirtualDesktop, monitors: Vec<Monitor>, cursor: Point) -> Self {
        Self::with_settings(desktop, monitors, cursor, &SelectorSettings::default())
    }

    pub fn with_settings(
        desktop: VirtualDesktop,
        monitors: Vec<Monitor>,
        cursor: Point,
        settings: &SelectorSettings,
    ) -> Self {
        let settings = settings.clone().sanitized();
        let mut model = Self {
            desktop,
            monitors,
            grip_size: settings.grip_size,
            initial_scale: settings.initial_scale,
            start: Point::default(),
            end: Point::default(),
            region: Rect::default(),
            masks: MaskBands::default(),
            placed: false,
            mode: InteractionMode::Idle,
            locked: false,
            full_screen: false,
            last_mouse: None,
            cursor,
        };
        // No listeners can exist yet, the initial events have nowhere to go
        let _ = model.place_initial();
        model
    }

    /// Centre a region of `initial_scale` x monitor size on the monitor under
    /// the cursor. No-op if the cursor is outside every monitor.
    pub fn place_initial(&mut self) -> Events {
        let mut out = Events::new();
        let Some(monitor) = monitor_at(&self.monitors, self.cursor).copied() else {
            warn!("No monitor under cursor {:?}, region left unplaced", self.cursor);
            return out;
        };

        let bounds = self.desktop.relative_monitor_rect(&monitor);
        let width = bounds.width * self.initial_scale;
        let height = bounds.height * self.initial_scale;
        let x = bounds.x + bounds.width / 2.0 - width / 2.0;
        let y = bounds.y + bounds.height / 2.0 - height / 2.0;

        self.start = Point::new(x, y);
        self.end = Point::new(x + width, y + height);
        info!("Initial region placed on monitor {:?}", monitor.bounds);
        self.publish(&mut out);
        out
    }

    pub fn on_press(&mut self, control: Control, point: Point) -> Events {
        self.track_cursor(point);
        let mut out = Events::new();
        match control {
            Control::Background => self.press_background(point, &mut out),
            Control::ResizeGrip => self.press_grip(point, &mut out),
            Control::Region => self.press_region(point, &mut out),
        }
        out
    }

    /// Hit-test `point` against the current region and press whatever it lands on
    pub fn on_pointer_down(&mut self, point: Point) -> Events {
        let control = self.control_at(point);
        self.on_press(control, point)
    }

    pub fn control_at(&self, point: Point) -> Control {
        if !self.placed {
            return Control::Background;
        }
        hit_test(&self.region, point, self.grip_size)
    }

    pub fn on_move(&mut self, point: Point) -> Events {
        self.track_cursor(point);
        let mut out = Events::new();
        if self.locked {
            return out;
        }

        match self.mode {
            InteractionMode::Resizing => {
                self.end = point;
                self.publish(&mut out);
            }
            InteractionMode::Moving => self.drag_to(point, &mut out),
            InteractionMode::Idle => {}
        }
        out
    }

    pub fn on_release(&mut self, point: Point) -> Events {
        self.track_cursor(point);
        let mut out = Events::new();
        let was_dragging = self.mode != InteractionMode::Idle;
        self.mode = InteractionMode::Idle;
        self.last_mouse = None;

        if was_dragging && !self.locked {
            self.publish(&mut out);
        }
        out
    }

    /// Report an absolute cursor position outside of any drag
    pub fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    pub fn set_full_screen(&mut self, enabled: bool) -> Events {
        let mut out = Events::new();
        if !enabled {
            self.exit_full_screen(&mut out);
            return out;
        }

        let Some(monitor) = monitor_at(&self.monitors, self.cursor).copied() else {
            warn!("No monitor under cursor {:?}, full screen ignored", self.cursor);
            return out;
        };

        let bounds = self.desktop.relative_monitor_rect(&monitor);
        self.start = bounds.top_left();
        self.end = bounds.bottom_right();
        self.full_screen = true;
        // A snap ends any drag, otherwise the next move would reshape it
        self.mode = InteractionMode::Idle;
        self.last_mouse = None;
        info!("Full screen on monitor {:?}", monitor.bounds);
        self.publish(&mut out);
        out.push(SelectorEvent::FullScreenChanged(true));
        out
    }

    pub fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            info!("Selection {}", if locked { "locked" } else { "unlocked" });
        }
        self.locked = locked;
    }

    /// Replace the region with an absolute rectangle. Works while locked.
    pub fn set_region(&mut self, region: CaptureRect) -> Events {
        let mut out = Events::new();
        let origin = self.desktop.origin();
        let relative = region.to_rect().translate(Point::new(-origin.x, -origin.y));
        self.start = relative.top_left();
        self.end = relative.bottom_right();

        let leaving_full_screen = self.full_screen;
        self.full_screen = false;
        self.publish(&mut out);
        if leaving_full_screen {
            out.push(SelectorEvent::FullScreenChanged(false));
        }
        out
    }

    /// Current capture area in absolute pixels, `None` until placed
    pub fn region(&self) -> Option<CaptureRect> {
        self.placed
            .then(|| self.desktop.to_capture_rect(&self.region))
    }

    pub fn relative_region(&self) -> Option<Rect> {
        self.placed.then_some(self.region)
    }

    /// Raw (start, end) corners before normalization and clamping
    pub fn corners(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    pub fn mask_bands(&self) -> MaskBands {
        self.masks
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Last known cursor position in overlay coordinates
    pub fn overlay_cursor(&self) -> Point {
        self.desktop.to_relative(self.cursor)
    }

    pub fn desktop(&self) -> &VirtualDesktop {
        &self.desktop
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    fn track_cursor(&mut self, relative: Point) {
        self.cursor = self.desktop.to_absolute(relative);
    }

    fn press_background(&mut self, point: Point, out: &mut Events) {
        if self.mode != InteractionMode::Idle || self.locked {
            return;
        }

        self.mode = InteractionMode::Resizing;
        if self.full_screen {
            self.exit_full_screen(out);
        }

        self.start = point;
        self.end = point;
        self.publish(out);
    }

    fn press_grip(&mut self, point: Point, out: &mut Events) {
        if self.mode == InteractionMode::Resizing || self.locked {
            return;
        }
        if !self.placed {
            self.press_background(point, out);
            return;
        }

        if self.full_screen {
            self.exit_full_screen(out);
        }

        self.start = farthest_corner(&self.region, point);
        self.end = point;
        self.last_mouse = None;
        self.mode = InteractionMode::Resizing;
        debug!("Resize anchored at {:?}", self.start);
    }

    fn press_region(&mut self, point: Point, out: &mut Events) {
        if self.mode == InteractionMode::Resizing || self.locked {
            return;
        }
        if !self.placed {
            self.press_background(point, out);
            return;
        }
        self.last_mouse = Some(point);
        self.mode = InteractionMode::Moving;
    }

    fn drag_to(&mut self, point: Point, out: &mut Events) {
        let last = *self.last_mouse.get_or_insert(point);

        if self.full_screen {
            // Shrink out of full screen: same size, centred under the cursor
            let half = Point::new(self.region.width / 2.0, self.region.height / 2.0);
            self.start = point - half;
            self.end = point + half;
            self.exit_full_screen(out);
        }

        let delta = point - last;
        self.last_mouse = Some(point);
        self.start += delta;
        self.end += delta;
        self.publish(out);
    }

    fn exit_full_screen(&mut self, out: &mut Events) {
        self.full_screen = false;
        if self.placed {
            self.publish(out);
        }
        info!("Full screen off");
        out.push(SelectorEvent::FullScreenChanged(false));
    }

    /// Normalize, clamp to the desktop, refresh the mask bands and emit the region
    fn publish(&mut self, out: &mut Events) {
        let desktop = self.desktop.relative_bounds();
        self.region = Rect::from_corners(self.start, self.end).clamp_to(&desktop);
        self.masks = MaskBands::around(&self.region, &desktop);
        self.placed = true;

        let absolute = self.desktop.to_capture_rect(&self.region);
        debug!("Region changed: {:?}", absolute);
        out.push(SelectorEvent::RegionChanged(absolute));
    }
}

/// Corner of `rect` with the greatest Manhattan distance from `point`.
/// Ties go to the earliest corner in top-left, top-right, bottom-left,
/// bottom-right order.
fn farthest_corner(rect: &Rect, point: Point) -> Point {
    let corners = rect.corners();
    let mut best = corners[0];
    let mut best_distance = best.manhattan_distance(point);
    for corner in &corners[1..] {
        let distance = corner.manhattan_distance(point);
        if distance > best_distance {
            best = *corner;
            best_distance = distance;
        }
    }
    best
}
