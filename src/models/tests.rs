//! Unit tests for data models module
//!
//! Validates serialization rules for the event stream and the final
//! report, and the configuration error messages.

use super::*;

#[test]
fn test_event_kind_serializes_lowercase() {
    let json = serde_json::to_string(&EventKind::Blocked).unwrap();
    assert_eq!(json, "\"blocked\"");

    let json = serde_json::to_string(&EventKind::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
}

#[test]
fn test_event_kind_round_trips() {
    for kind in [
        EventKind::Success,
        EventKind::Error,
        EventKind::Warning,
        EventKind::Info,
        EventKind::Blocked,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        let back: EventKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn test_monitor_event_now_stamps_timestamp() {
    let event = MonitorEvent::now(EventKind::Info, "New device connected: USB_Drive_42");

    assert_eq!(event.kind, EventKind::Info);
    assert_eq!(event.message, "New device connected: USB_Drive_42");
    assert!(!event.timestamp.is_empty());
    // ISO 8601 timestamps carry a date-time separator
    assert!(event.timestamp.contains('T'));
}

#[test]
fn test_report_interrupted_flag_serialization() {
    // interrupted = None is omitted in JSON
    let report = WriteBlockReport {
        blocked_total: 2,
        devices: vec![],
        interrupted: None,
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("interrupted"));

    // interrupted = Some(true) is included
    let report = WriteBlockReport {
        blocked_total: 2,
        devices: vec![],
        interrupted: Some(true),
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"interrupted\":true"));
}

#[test]
fn test_report_preserves_device_order() {
    let report = WriteBlockReport {
        blocked_total: 3,
        devices: vec![
            DeviceAttempts {
                device: "D1".to_string(),
                attempts: 2,
            },
            DeviceAttempts {
                device: "D2".to_string(),
                attempts: 1,
            },
        ],
        interrupted: None,
    };

    let json = serde_json::to_string(&report).unwrap();
    let d1 = json.find("D1").unwrap();
    let d2 = json.find("D2").unwrap();
    assert!(d1 < d2, "serialized report must keep first-blocked order");
}

#[test]
fn test_invalid_interval_error_message() {
    let error = MonitorError::InvalidInterval(500.0);
    let error_msg = error.to_string();

    assert!(error_msg.contains("Invalid tick interval: 500"));
    assert!(error_msg.contains("Must be between"));
    assert!(error_msg.contains("0.1"));
    assert!(error_msg.contains("300"));
}

#[test]
fn test_invalid_period_error_message() {
    let error = MonitorError::InvalidPeriod(0);
    let error_msg = error.to_string();

    assert!(error_msg.contains("Invalid event period: 0"));
    assert!(error_msg.contains("at least 1 second"));
}
