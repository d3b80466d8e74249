//! RegionFrame - Capture Region Selector
//!
//! Geometry engine behind the region selection overlay: it owns the selected
//! rectangle on a multi-monitor virtual desktop, reacts to pointer input
//! (drag to resize, drag to move, snap to full screen) and reports the
//! resulting capture area to whoever listens.
//!
//! Nothing in the library talks to a windowing system; the host feeds it
//! pointer events and monitor bounds.

pub mod config;
pub mod constants;
pub mod display;
pub mod geometry;
pub mod selector;

// Re-export commonly used types
pub use config::SelectorSettings;
pub use display::{Monitor, VirtualDesktop};
pub use geometry::{CaptureRect, Point, Rect};
pub use selector::{
    Control, InteractionMode, ListenerId, MaskBands, RegionSelector, SelectionModel,
    SelectorEvent,
};
