// constants.rs - Application-wide Constants
//
// Centralized defaults for the selector and the demo host.

/// Region selector defaults
pub mod selector {
    /// Side length of the square resize grip centred on each corner, in pixels
    pub const GRIP_SIZE: f64 = 12.0;
    /// Initial region side as a fraction of the monitor side (0.5 = quarter area)
    pub const INITIAL_SCALE: f64 = 0.5;
}

/// Settings file location
pub mod config {
    /// Directory created under the platform config dir
    pub const DIR_NAME: &str = "RegionFrame";
    /// Settings file inside `DIR_NAME`
    pub const FILE_NAME: &str = "selector.json";
}

/// Logging
pub mod logging {
    /// Filter used when neither RUST_LOG nor the settings file provide one
    pub const DEFAULT_FILTER: &str = "info";
}
