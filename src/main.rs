// main.rs - RegionFrame Application Entry Point
//
// Demo host for the region selector. It manages:
// 1. Monitor enumeration and the overlay window spanning the virtual desktop
// 2. Event loop handling (pointer/keyboard input forwarded to the selector)
// 3. Listening to the selector and reporting the chosen capture region

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use log::{error, info};
use regionframe::{
    CaptureRect, Point, RegionSelector, SelectorEvent, SelectorSettings, VirtualDesktop,
};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

mod window_manager;

use window_manager::OverlayWindow;

/// Main application state
struct RegionFrameApp {
    settings: SelectorSettings,

    /// The transparent overlay window used for region selection
    overlay_window: Option<OverlayWindow>,

    /// Selection session, alive while the overlay is open
    selector: Option<RegionSelector>,

    /// Latest region published by the selector
    region: Rc<Cell<Option<CaptureRect>>>,

    /// Last pointer position in overlay coordinates
    cursor: Option<Point>,
}

impl RegionFrameApp {
    fn new(settings: SelectorSettings) -> Self {
        Self {
            settings,
            overlay_window: None,
            selector: None,
            region: Rc::new(Cell::new(None)),
            cursor: None,
        }
    }

    /// Snapshot the displays and open the selection session
    fn open_session(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let monitors = window_manager::enumerate_monitors(event_loop);
        let desktop = VirtualDesktop::from_monitors(&monitors)
            .ok_or_else(|| anyhow::anyhow!("No monitors reported by the platform"))?;
        info!("Virtual desktop {:?} from {} monitor(s)", desktop.bounds(), monitors.len());

        let cursor = window_manager::initial_cursor(event_loop, &monitors)
            .unwrap_or_else(|| desktop.origin());
        let overlay = OverlayWindow::new(event_loop, &desktop)?;

        let mut selector = RegionSelector::with_settings(desktop, monitors, cursor, &self.settings);
        let region = Rc::clone(&self.region);
        selector.subscribe(move |event| match event {
            SelectorEvent::RegionChanged(rect) => region.set(Some(*rect)),
            SelectorEvent::FullScreenChanged(full) => info!("Full screen: {}", full),
        });
        selector.republish();

        self.overlay_window = Some(overlay);
        self.selector = Some(selector);
        self.update_overlay_title();
        Ok(())
    }

    fn close_session(&mut self) {
        if let Some(mut selector) = self.selector.take() {
            selector.close();
        }
        self.overlay_window = None;
    }

    /// Update overlay title to show the current region and flags
    fn update_overlay_title(&self) {
        if let (Some(overlay), Some(selector)) = (&self.overlay_window, &self.selector) {
            let title = window_manager::overlay_title(
                self.region.get(),
                selector.mask_bands(),
                selector.is_full_screen(),
                selector.is_locked(),
            );
            overlay.set_title(&title);
            overlay.request_redraw();
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        let Some(selector) = &mut self.selector else {
            return;
        };

        match key {
            KeyCode::Escape => {
                info!("ESC pressed, exiting");
                self.close_session();
                event_loop.exit();
                return;
            }
            KeyCode::Enter => {
                match self.region.get() {
                    Some(region) => info!("Region confirmed: {:?}", region),
                    None => info!("No region selected"),
                }
                self.close_session();
                event_loop.exit();
                return;
            }
            KeyCode::KeyF => {
                let enabled = !selector.is_full_screen();
                selector.set_full_screen(enabled);
            }
            KeyCode::KeyL => {
                let locked = !selector.is_locked();
                selector.set_locked(locked);
            }
            _ => return,
        }
        self.update_overlay_title();
    }
}

impl ApplicationHandler for RegionFrameApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        info!("Application resumed");

        if self.selector.is_none() {
            if let Err(e) = self.open_session(event_loop) {
                error!("Failed to open selection overlay: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_overlay = self
            .overlay_window
            .as_ref()
            .is_some_and(|overlay| overlay.window_id() == window_id);
        if !is_overlay {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.close_session();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        self.handle_key(event_loop, key);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let point = Point::new(position.x, position.y);
                self.cursor = Some(point);
                if let Some(selector) = &mut self.selector {
                    selector.on_move(point);
                }
                self.update_overlay_title();
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(selector) = &mut self.selector {
                    // Before the first CursorMoved fall back to the session's cursor
                    let point = self.cursor.unwrap_or_else(|| selector.overlay_cursor());
                    match state {
                        ElementState::Pressed => selector.on_pointer_down(point),
                        ElementState::Released => selector.on_release(point),
                    }
                }
                self.update_overlay_title();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Selection is purely input driven
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn main() -> Result<()> {
    // Settings decide the log filter, so they load before the logger exists
    let loaded = SelectorSettings::load();
    let filter = loaded
        .as_ref()
        .map(|settings| settings.log_filter.clone())
        .unwrap_or_else(|_| regionframe::constants::logging::DEFAULT_FILTER.to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let settings = loaded.unwrap_or_else(|e| {
        error!("Failed to load settings, using defaults: {:#}", e);
        SelectorSettings::default()
    });

    info!("RegionFrame starting...");
    info!("Settings file: {:?}", SelectorSettings::config_path());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = RegionFrameApp::new(settings);
    event_loop.run_app(&mut app)?;

    info!("RegionFrame shutting down");
    Ok(())
}
