//! Output formatting module
//!
//! The presentation side of the event contract: startup banner,
//! color-coded event lines, the human-readable final report, and the
//! JSON variants of both. Nothing here feeds back into monitor state.

use colored::{ColoredString, Colorize};
use sysinfo::{System, SystemExt};

use crate::events::EventSink;
use crate::models::{EventKind, MonitorEvent, WriteBlockReport};

/// Width of the framed banner and report sections
const FRAME_WIDTH: usize = 50;

/// Print the startup banner
pub fn print_banner() {
    let frame = "=".repeat(FRAME_WIDTH);
    println!("\n{frame}");
    println!("{:^width$}", "=== USB WRITE BLOCKER ===", width = FRAME_WIDTH);
    println!("{frame}\n");
}

/// Operating-system description for the init output
pub fn os_description() -> String {
    let system = System::new();
    let name = system.name().unwrap_or_else(|| "Unknown".to_string());
    let version = system.os_version().unwrap_or_default();
    format!("{name} {version}").trim().to_string()
}

/// Renders monitor events to stdout, one line per event.
///
/// In JSON mode each event becomes one serialized object per line;
/// otherwise lines are colored by event kind.
pub struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: MonitorEvent) {
        if self.json {
            if let Ok(line) = serde_json::to_string(&event) {
                println!("{line}");
            }
            return;
        }

        let line = format!("{} {} {}", event.timestamp, prefix(event.kind), event.message);
        println!("{}", colorize(&line, event.kind));
    }
}

fn prefix(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Success => "[SUCCESS]",
        EventKind::Error => "[ERROR]",
        EventKind::Warning => "[WARNING]",
        EventKind::Info => "[INFO]",
        EventKind::Blocked => "[BLOCKED]",
    }
}

fn colorize(line: &str, kind: EventKind) -> ColoredString {
    match kind {
        EventKind::Success => line.green(),
        EventKind::Error => line.red(),
        EventKind::Warning => line.yellow(),
        EventKind::Info => line.blue(),
        EventKind::Blocked => line.magenta(),
    }
}

/// Format the final report in human-readable format
pub fn format_human(report: &WriteBlockReport) {
    let frame = "=".repeat(FRAME_WIDTH);
    println!("\n{frame}");
    println!("{:^width$}", "=== FINAL REPORT ===", width = FRAME_WIDTH);
    println!("{frame}");

    println!("\nTotal blocked attempts: {}", report.blocked_total);
    println!("Blocked attempts per device:");

    for entry in &report.devices {
        println!("  - {}: {} attempts", entry.device, entry.attempts);
    }

    if report.interrupted == Some(true) {
        println!("\nStatus: Interrupted by user");
    }

    println!("\n{frame}\n");
}
