#![forbid(unsafe_code)]

mod cli;
mod config;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use usbblock::events::{EventSink, SimulatedSource};
use usbblock::models::{EventKind, MonitorEvent};
use usbblock::monitor::engine;
use usbblock::monitor::MonitorState;
use usbblock::output::{self, ConsoleSink};

fn main() -> Result<()> {
    let config = cli::parse_args()?;

    // Internal diagnostics go to stderr; stdout carries the event stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Set up interrupt handling
    let interrupted = Arc::new(AtomicBool::new(false));
    let _ = signal_hook::flag::register(signal_hook::consts::SIGINT, interrupted.clone());
    let _ = signal_hook::flag::register(signal_hook::consts::SIGTERM, interrupted.clone());

    let mut sink = ConsoleSink::new(config.output_json);

    if !config.quiet_mode {
        output::print_banner();
    }
    sink.emit(MonitorEvent::now(
        EventKind::Success,
        "USB Write Blocker Initialized",
    ));
    sink.emit(MonitorEvent::now(
        EventKind::Info,
        format!("Operating System: {}", output::os_description()),
    ));

    let mut state = MonitorState::new();
    let mut source = SimulatedSource::new(config.device_period_secs, config.write_period_secs);

    if let Some(report) = engine::run(&config, &mut state, &mut source, &mut sink, &interrupted) {
        if config.output_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            output::format_human(&report);
        }
    }

    Ok(())
}
