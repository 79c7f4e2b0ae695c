//! Data models module
//!
//! Defines core data structures:
//! - MonitorEvent: the structured event stream handed to the presentation layer
//! - WriteBlockReport: final per-device summary produced on stop
//! - MonitorConfig: runtime settings assembled by the CLI layer

use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

/// Classification of a monitor event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Success,
    Error,
    Warning,
    Info,
    Blocked,
}

/// One structured event emitted by the monitor.
///
/// This tuple of kind, timestamp, and message is the entire contract with
/// the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorEvent {
    /// ISO 8601 timestamp of when the event was emitted
    pub timestamp: String,
    /// Event classification
    pub kind: EventKind,
    /// Human-readable event text
    pub message: String,
}

impl MonitorEvent {
    /// Create an event stamped with the current UTC time
    pub fn now(kind: EventKind, message: impl Into<String>) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown"));
        Self {
            timestamp,
            kind,
            message: message.into(),
        }
    }
}

/// Blocked-attempt count for a single device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAttempts {
    /// Device identifier
    pub device: String,
    /// Number of blocked write attempts for this device
    pub attempts: u64,
}

/// Final summary produced when monitoring stops
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteBlockReport {
    /// Process-wide count of blocked write attempts
    pub blocked_total: u64,
    /// Per-device counts, in the order devices first received a blocked attempt
    pub devices: Vec<DeviceAttempts>,
    /// Whether monitoring was stopped by an interrupt signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<bool>,
}

/// Runtime configuration for the monitor loop
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Suspend time between ticks
    pub interval: Duration,
    /// Seconds between simulated device connections
    pub device_period_secs: u64,
    /// Seconds between simulated write attempts
    pub write_period_secs: u64,
    /// Stop after this many ticks; None runs until interrupted
    pub max_ticks: Option<u64>,
    /// Whether to output JSON format
    pub output_json: bool,
    /// Whether to suppress the startup banner
    pub quiet_mode: bool,
}

/// Custom error types for monitoring operations
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// Note: bounds must match TICK_INTERVAL_MIN/MAX in constants.rs
    #[error("Invalid tick interval: {0}. Must be between 0.1 and 300.0 seconds")]
    InvalidInterval(f64),
    #[error("Invalid event period: {0}. Must be at least 1 second")]
    InvalidPeriod(u64),
}

#[cfg(test)]
mod tests;
