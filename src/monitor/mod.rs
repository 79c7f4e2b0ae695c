pub mod engine;
pub mod ledger;
pub mod registry;

pub use engine::MonitorState;
pub use ledger::{AttemptLedger, BlockOutcome};
pub use registry::DeviceRegistry;
