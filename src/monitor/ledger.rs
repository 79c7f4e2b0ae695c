use indexmap::IndexMap;

use crate::constants::REPEAT_WARNING_THRESHOLD;

/// Result of recording one blocked write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockOutcome {
    /// Post-increment count for the device
    pub device_count: u64,
    /// Post-increment process-wide total
    pub total: u64,
    /// Whether the device just crossed a repeat-warning threshold
    pub escalated: bool,
}

/// Per-device blocked-write counts plus the process-wide total.
///
/// Devices are kept in the order they first received a blocked attempt;
/// entries are never removed or reset within a run.
#[derive(Debug, Default)]
pub struct AttemptLedger {
    attempts: IndexMap<String, u64>,
    blocked_total: u64,
}

impl AttemptLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one blocked attempt for `device`.
    ///
    /// The per-device count and the total are incremented in lockstep, so
    /// `blocked_total` always equals the sum of the per-device counts.
    pub fn record(&mut self, device: &str) -> BlockOutcome {
        let count = self.attempts.entry(device.to_string()).or_insert(0);
        *count += 1;
        let device_count = *count;
        self.blocked_total += 1;

        BlockOutcome {
            device_count,
            total: self.blocked_total,
            escalated: device_count % REPEAT_WARNING_THRESHOLD == 0,
        }
    }

    /// Process-wide count of blocked attempts
    pub fn blocked_total(&self) -> u64 {
        self.blocked_total
    }

    /// Per-device counts in the order devices first received a blocked attempt
    pub fn per_device(&self) -> impl Iterator<Item = (&str, u64)> {
        self.attempts
            .iter()
            .map(|(device, count)| (device.as_str(), *count))
    }
}
