//! CLI argument parsing and validation module
//!
//! Assembles the monitor configuration from command-line flags layered
//! over an optional TOML configuration file. The monitor core itself
//! consumes none of these; everything here feeds a `MonitorConfig`.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};

use crate::config::FileConfig;
use usbblock::constants::{
    DEFAULT_DEVICE_PERIOD_SECS, DEFAULT_TICK_INTERVAL_SECS, DEFAULT_WRITE_PERIOD_SECS,
    TICK_INTERVAL_MAX, TICK_INTERVAL_MIN,
};
use usbblock::models::{MonitorConfig, MonitorError};

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<MonitorConfig> {
    let matches = Command::new("usbblock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write-blocking monitor for removable storage devices")
        .long_about(
            "Monitors removable storage activity, blocks simulated write attempts, \
             and reports per-device totals when monitoring stops.",
        )
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("SECS")
                .help("Polling interval between monitor ticks in seconds"),
        )
        .arg(
            Arg::new("device-period")
                .long("device-period")
                .value_name("SECS")
                .help("Seconds between simulated device connections"),
        )
        .arg(
            Arg::new("write-period")
                .long("write-period")
                .value_name("SECS")
                .help("Seconds between simulated write attempts"),
        )
        .arg(
            Arg::new("ticks")
                .short('t')
                .long("ticks")
                .value_name("COUNT")
                .help("Stop after this many monitor ticks instead of running until interrupted"),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Output events and the final report in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress the startup banner")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to a TOML configuration file"),
        )
        .get_matches();

    let file = match matches.get_one::<String>("config") {
        Some(path) => FileConfig::load(Path::new(path))?,
        None => FileConfig::load_default()?,
    };

    let interval_secs = match matches.get_one::<String>("interval") {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| anyhow!("Invalid interval value: {raw}"))?,
        None => file.monitor.interval.unwrap_or(DEFAULT_TICK_INTERVAL_SECS),
    };
    if !(TICK_INTERVAL_MIN..=TICK_INTERVAL_MAX).contains(&interval_secs) {
        return Err(MonitorError::InvalidInterval(interval_secs).into());
    }

    let device_period_secs = parse_period(&matches, "device-period")?
        .or(file.monitor.device_period_secs)
        .unwrap_or(DEFAULT_DEVICE_PERIOD_SECS);
    let write_period_secs = parse_period(&matches, "write-period")?
        .or(file.monitor.write_period_secs)
        .unwrap_or(DEFAULT_WRITE_PERIOD_SECS);

    for period in [device_period_secs, write_period_secs] {
        if period == 0 {
            return Err(MonitorError::InvalidPeriod(period).into());
        }
    }

    let max_ticks = match matches.get_one::<String>("ticks") {
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|_| anyhow!("Invalid tick count: {raw}"))?,
        ),
        None => None,
    };

    Ok(MonitorConfig {
        interval: Duration::from_secs_f64(interval_secs),
        device_period_secs,
        write_period_secs,
        max_ticks,
        output_json: matches.get_flag("json") || file.output.json.unwrap_or(false),
        quiet_mode: matches.get_flag("quiet") || file.output.quiet.unwrap_or(false),
    })
}

fn parse_period(matches: &clap::ArgMatches, name: &str) -> Result<Option<u64>> {
    match matches.get_one::<String>(name) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {name} value: {raw}")),
        None => Ok(None),
    }
}
