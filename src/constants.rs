//! Global constants for usbblock
//!
//! Centralized location for application-wide constants

/// Default seconds between monitor ticks
pub const DEFAULT_TICK_INTERVAL_SECS: f64 = 3.0;

/// Minimum accepted tick interval in seconds
pub const TICK_INTERVAL_MIN: f64 = 0.1;

/// Maximum accepted tick interval in seconds
pub const TICK_INTERVAL_MAX: f64 = 300.0;

/// Default period, in seconds, between simulated device connections
pub const DEFAULT_DEVICE_PERIOD_SECS: u64 = 10;

/// Default period, in seconds, between simulated write attempts
pub const DEFAULT_WRITE_PERIOD_SECS: u64 = 5;

/// Per-device blocked-attempt count at which repeat warnings fire
pub const REPEAT_WARNING_THRESHOLD: u64 = 3;

/// Identifiers reported by device enumeration once any device has registered
pub const KNOWN_DEVICE_IDS: &[&str] = &["USB_Drive_123", "USB_Drive_456"];

/// Directory name for the per-user configuration file
pub const CONFIG_DIR_NAME: &str = "usbblock";

/// File name of the per-user configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";
