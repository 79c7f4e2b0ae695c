use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::events::{DeviceActivity, EventSink, EventSource};
use crate::models::{EventKind, MonitorConfig, MonitorEvent, WriteBlockReport};
use crate::monitor::{AttemptLedger, DeviceRegistry};
use crate::report;

/// All monitor state, passed explicitly into the control functions.
///
/// Holding the registry and ledger here rather than in a process-wide
/// singleton keeps the loop testable without process lifetime coupling.
#[derive(Debug, Default)]
pub struct MonitorState {
    pub running: bool,
    pub registry: DeviceRegistry,
    pub ledger: AttemptLedger,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Run the monitor until interrupted or the configured tick budget is spent.
///
/// Starting an already-running monitor emits a single warning event and
/// returns `None` without touching state. Every other exit path goes
/// through [`stop`], so a final report is always produced.
pub fn run(
    config: &MonitorConfig,
    state: &mut MonitorState,
    source: &mut dyn EventSource,
    sink: &mut dyn EventSink,
    interrupted: &Arc<AtomicBool>,
) -> Option<WriteBlockReport> {
    if state.running {
        sink.emit(MonitorEvent::now(
            EventKind::Warning,
            "Monitor is already running",
        ));
        return None;
    }

    state.running = true;
    sink.emit(MonitorEvent::now(
        EventKind::Success,
        "Starting USB device monitoring",
    ));

    let mut ticks: u64 = 0;
    let mut was_interrupted = false;

    while state.running {
        // The flag is only ever set asynchronously by the signal handler;
        // checking it between ticks guarantees a tick in progress always
        // completes before stop is honored.
        if interrupted.load(Ordering::SeqCst) {
            was_interrupted = true;
            break;
        }

        if config.max_ticks.map_or(false, |max| ticks >= max) {
            break;
        }

        let cycle_start = Instant::now();
        tick(state, source, sink, unix_now());
        ticks += 1;

        if let Some(sleep_duration) = config.interval.checked_sub(cycle_start.elapsed()) {
            std::thread::sleep(sleep_duration);
        }
    }

    Some(stop(state, sink, was_interrupted))
}

/// One polling cycle: enumerate devices, then fold the source's activity
/// into the registry and the blocking policy.
pub fn tick(
    state: &mut MonitorState,
    source: &mut dyn EventSource,
    sink: &mut dyn EventSink,
    now: u64,
) {
    let known = state.registry.detect_devices();
    debug!(devices = known.len(), now, "tick");

    for activity in source.next_events(now) {
        match activity {
            DeviceActivity::Connected(device) => {
                sink.emit(MonitorEvent::now(
                    EventKind::Info,
                    format!("New device connected: {device}"),
                ));
                state.registry.record_connection(device);
            }
            DeviceActivity::WriteAttempt { filename } => {
                // Write attempts land on the most recently seen device;
                // before any device has connected there is nothing to block
                if let Some(device) = state.registry.last_device().map(str::to_owned) {
                    block_write_attempt(state, &device, &filename, sink);
                }
            }
        }
    }
}

/// Count one blocked attempt and emit the block event, escalating to a
/// warning when the device crosses a repeat threshold.
pub fn block_write_attempt(
    state: &mut MonitorState,
    device: &str,
    filename: &str,
    sink: &mut dyn EventSink,
) {
    let outcome = state.ledger.record(device);

    sink.emit(MonitorEvent::now(
        EventKind::Blocked,
        format!(
            "Blocked write attempt to {device}: {filename} (Total blocks: {})",
            outcome.total
        ),
    ));

    if outcome.escalated {
        sink.emit(MonitorEvent::now(
            EventKind::Warning,
            format!(
                "Multiple write attempts detected from {device} (Count: {})",
                outcome.device_count
            ),
        ));
    }
}

/// Stop the monitor and produce the final report.
///
/// Idempotent: safe to call when already stopped; the report then reflects
/// whatever the counters currently hold.
pub fn stop(
    state: &mut MonitorState,
    sink: &mut dyn EventSink,
    interrupted: bool,
) -> WriteBlockReport {
    state.running = false;
    sink.emit(MonitorEvent::now(
        EventKind::Info,
        "Stopping USB Write Blocker",
    ));
    report::generate(&state.ledger, interrupted)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
