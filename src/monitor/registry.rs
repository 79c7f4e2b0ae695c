use crate::constants::KNOWN_DEVICE_IDS;

/// Tracks the most recently connected device between ticks
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    last_device: Option<String>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self { last_device: None }
    }

    /// Record a newly connected device, replacing any previous one
    pub fn record_connection(&mut self, device: String) {
        self.last_device = Some(device);
    }

    /// Most recently connected device identifier, if any
    pub fn last_device(&self) -> Option<&str> {
        self.last_device.as_deref()
    }

    /// Enumerate currently known device identifiers.
    ///
    /// Read-only: reports the fixed known set once any device has ever
    /// registered, and nothing before that.
    pub fn detect_devices(&self) -> Vec<String> {
        if self.last_device.is_some() {
            KNOWN_DEVICE_IDS.iter().map(|id| (*id).to_string()).collect()
        } else {
            Vec::new()
        }
    }
}
