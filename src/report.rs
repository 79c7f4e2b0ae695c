//! Final report generation
//!
//! A pure read of the ledger; rendering is left to the output module.

use crate::models::{DeviceAttempts, WriteBlockReport};
use crate::monitor::AttemptLedger;

/// Build the final report: the process-wide total plus per-device counts
/// in the order devices first received a blocked attempt.
pub fn generate(ledger: &AttemptLedger, interrupted: bool) -> WriteBlockReport {
    WriteBlockReport {
        blocked_total: ledger.blocked_total(),
        devices: ledger
            .per_device()
            .map(|(device, attempts)| DeviceAttempts {
                device: device.to_string(),
                attempts,
            })
            .collect(),
        interrupted: if interrupted { Some(true) } else { None },
    }
}
