// selector/mod.rs - Region Selector
//
// RegionSelector pairs the selection state machine with its listeners. Every
// public operation runs the state transition first, then the publish step
// that hands the produced events to listeners in order.

mod listeners;
mod mask;
mod model;
mod state;

pub use hit_test::hit_test;
pub use listeners::{ListenerId, ListenerRegistry};
pub use mask::MaskBands;
pub use model::SelectionModel;
pub use state::{Control, InteractionMode, SelectorEvent};

use log::info;

use crate::config::SelectorSettings;
use crate::display::{Monitor, VirtualDesktop};
use crate::geometry::{CaptureRect, Point, Rect};

/// One overlay session: created when the overlay opens, closed with it
#[derive(Debug)]
pub struct RegionSelector {
    model: SelectionModel,
    listeners: ListenerRegistry,
    closed: bool,
}

impl RegionSelector {
    pub fn new(desktop: VirtualDesktop, monitors: Vec<Monitor>, cursor: Point) -> Self {
        Self::from_model(SelectionModel::new(desktop, monitors, cursor))
    }

    pub fn with_settings(
        desktop: VirtualDesktop,
        monitors: Vec<Monitor>,
        cursor: Point,
        settings: &SelectorSettings,
    ) -> Self {
        Self::from_model(SelectionModel::with_settings(desktop, monitors, cursor, settings))
    }

    pub fn from_model(model: SelectionModel) -> Self {
        info!(
            "Selector session opened on desktop {:?} with {} monitor(s)",
            model.desktop().bounds(),
            model.monitors().len()
        );
        Self {
            model,
            listeners: ListenerRegistry::new(),
            closed: false,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SelectorEvent) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// End the session. Listeners are dropped; later operations still update
    /// the geometry but notify nobody.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.listeners.clear();
        info!("Selector session closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Re-emit the current region, e.g. right after subscribing
    pub fn republish(&mut self) {
        if let Some(region) = self.model.region() {
            self.publish(vec![SelectorEvent::RegionChanged(region)]);
        }
    }

    pub fn on_press(&mut self, control: Control, point: Point) {
        let events = self.model.on_press(control, point);
        self.publish(events);
    }

    pub fn on_pointer_down(&mut self, point: Point) {
        let events = self.model.on_pointer_down(point);
        self.publish(events);
    }

    pub fn on_move(&mut self, point: Point) {
        let events = self.model.on_move(point);
        self.publish(events);
    }

    pub fn on_release(&mut self, point: Point) {
        let events = self.model.on_release(point);
        self.publish(events);
    }

    pub fn set_cursor(&mut self, cursor: Point) {
        self.model.set_cursor(cursor);
    }

    pub fn set_full_screen(&mut self, enabled: bool) {
        let events = self.model.set_full_screen(enabled);
        self.publish(events);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.model.set_locked(locked);
    }

    pub fn set_region(&mut self, region: CaptureRect) {
        let events = self.model.set_region(region);
        self.publish(events);
    }

    pub fn region(&self) -> Option<CaptureRect> {
        self.model.region()
    }

    pub fn relative_region(&self) -> Option<Rect> {
        self.model.relative_region()
    }

    pub fn corners(&self) -> (Point, Point) {
        self.model.corners()
    }

    pub fn mask_bands(&self) -> MaskBands {
        self.model.mask_bands()
    }

    /// Last known cursor position in overlay coordinates
    pub fn overlay_cursor(&self) -> Point {
        self.model.overlay_cursor()
    }

    pub fn control_at(&self, point: Point) -> Control {
        self.model.control_at(point)
    }

    pub fn mode(&self) -> InteractionMode {
        self.model.mode()
    }

    pub fn is_locked(&self) -> bool {
        self.model.is_locked()
    }

    pub fn is_full_screen(&self) -> bool {
        self.model.is_full_screen()
    }

    pub fn desktop(&self) -> &VirtualDesktop {
        self.model.desktop()
    }

    pub fn monitors(&self) -> &[Monitor] {
        self.model.monitors()
    }

    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    fn publish(&mut self, events: Vec<SelectorEvent>) {
        for event in &events {
            self.listeners.dispatch(event);
        }
    }
}

impl Drop for RegionSelector {
    fn drop(&mut self) {
        self.close();
    }
}
