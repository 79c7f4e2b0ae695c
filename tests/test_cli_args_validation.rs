use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_interval_below_minimum_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.args(["--interval", "0.05", "--ticks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tick interval"))
        .stderr(predicate::str::contains("Must be between 0.1 and 300"));
}

#[test]
fn test_interval_above_maximum_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.args(["--interval", "500.0", "--ticks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tick interval"))
        .stderr(predicate::str::contains("Must be between 0.1 and 300"));
}

#[test]
fn test_non_numeric_interval_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.args(["--interval", "fast", "--ticks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interval value"));
}

#[test]
fn test_zero_write_period_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.args(["--write-period", "0", "--ticks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event period"))
        .stderr(predicate::str::contains("at least 1 second"));
}

#[test]
fn test_zero_device_period_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.args(["--device-period", "0", "--ticks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event period"));
}

#[test]
fn test_non_numeric_tick_count_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.args(["--ticks", "forever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tick count"));
}

#[test]
fn test_unknown_flag_rejected() {
    let mut cmd = Command::cargo_bin("usbblock").unwrap();
    cmd.arg("--block-harder")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
