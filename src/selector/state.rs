// selector/state.rs - Interaction State and Events

use crate::geometry::CaptureRect;

/// What the pointer is currently doing to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// One corner follows the pointer, the opposite corner is anchored
    Resizing,
    /// The whole rectangle follows the pointer
    Moving,
}

/// The overlay element a pointer press originated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Dimmed area outside the selection
    Background,
    /// One of the four corner handles
    ResizeGrip,
    /// Interior of the selection
    Region,
}

/// Notifications raised towards the application shell and capture pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Clamped capture area in absolute screen coordinates
    RegionChanged(CaptureRect),
    FullScreenChanged(bool),
}
