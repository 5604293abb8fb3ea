//! Integration test: scenario files on disk.
//!
//! Loads the bundled demo scenario and ad-hoc files written to a temp dir,
//! then runs them through `RecallCycle`.

use std::fs;
use std::path::{Path, PathBuf};

use msm_common::config::ConfigError;
use msm_common::recall::motor::{MotorCommand, MotorId, MotorOrder};
use msm_recall::config::load_scenario;
use msm_recall::cycle::RecallCycle;
use tempfile::TempDir;

fn demo_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/recall.toml")
}

#[test]
fn bundled_demo_scenario_runs() {
    let scenario = load_scenario(&demo_path()).expect("demo scenario should load");
    assert_eq!(scenario.signals.len(), 13);
    assert_eq!(scenario.motors.tilt.order, MotorOrder::FailSafeStop);

    let report = RecallCycle::new(scenario.debounce).evaluate(&scenario.snapshot());
    assert!(report.decision.allowed());
    assert!(!report.confirmed.contains("ReclineRecallOrder"));
    assert_eq!(report.command_for(MotorId::Track), Some(MotorCommand::ClockwiseRotate));
    assert_eq!(report.command_for(MotorId::Tilt), Some(MotorCommand::Stop));
    let seq = report.command_arm.expect("command-arm sequence");
    assert_eq!(seq.first().motor, MotorId::CommandArmForeAft);
}

#[test]
fn missing_file_reports_not_found() {
    let result = load_scenario(Path::new("/nonexistent/recall.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn malformed_order_token_becomes_stop() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("recall.toml");
    fs::write(
        &path,
        r#"
[shared]
service_name = "malformed"

[[signals]]
timestamp_ms = 0
signal_id = "ReclineRecallOrder"

[[signals]]
timestamp_ms = 5
signal_id = "ReclineRecallOrder"

[[signals]]
timestamp_ms = 10
signal_id = "ReclineRecallOrder"

[motors.recline]
order = "forward"
position = 12
"#,
    )
    .unwrap();

    let scenario = load_scenario(&path).unwrap();
    assert_eq!(scenario.motors.recline.order, MotorOrder::FailSafeStop);

    let report = RecallCycle::new(scenario.debounce).evaluate(&scenario.snapshot());
    assert_eq!(report.command_for(MotorId::Recline), Some(MotorCommand::Stop));
}

#[test]
fn invalid_debounce_rejected_on_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("recall.toml");
    fs::write(
        &path,
        r#"
[shared]
service_name = "bad"

[debounce]
min_confirmations = 0
"#,
    )
    .unwrap();

    assert!(matches!(
        load_scenario(&path),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn future_event_policy_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("recall.toml");
    let body = |count_future: bool| {
        format!(
            r#"
[shared]
service_name = "future"

[debounce]
count_future_events = {count_future}

[[signals]]
timestamp_ms = 120
signal_id = "TrackRecallOrder"

[[signals]]
timestamp_ms = 110
signal_id = "TrackRecallOrder"

[[signals]]
timestamp_ms = 100
signal_id = "TrackRecallOrder"
"#
        )
    };

    fs::write(&path, body(false)).unwrap();
    let scenario = load_scenario(&path).unwrap();
    let report = RecallCycle::new(scenario.debounce).evaluate(&scenario.snapshot());
    assert!(report.confirmed.is_empty());

    fs::write(&path, body(true)).unwrap();
    let scenario = load_scenario(&path).unwrap();
    let report = RecallCycle::new(scenario.debounce).evaluate(&scenario.snapshot());
    assert!(report.confirmed.contains("TrackRecallOrder"));
}
