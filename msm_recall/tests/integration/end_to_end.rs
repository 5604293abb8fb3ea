//! Integration test: full recall cycle over the demo buffer.
//!
//! Validates the pipeline end to end:
//! 1. Debounced signals → confirmed set
//! 2. All-clear safety state → allowed
//! 3. Per-motor commands and command-arm ordering

use msm_common::consts::DEFAULT_DEBOUNCE_THRESHOLD_MS;
use msm_common::recall::motor::{MotorCommand, MotorId, MotorOrder, MotorSetpoint, SeatSetpoints};
use msm_common::recall::safety::SafetyState;
use msm_common::recall::signal::SignalEvent;

use msm_recall::acquisition::acquire_recall_requests;
use msm_recall::config::DebounceConfig;
use msm_recall::cycle::{RecallCycle, RecallSnapshot};
use msm_recall::safety::gate::is_recall_allowed;
use msm_recall::motor::generate_command;

// ── Helpers ─────────────────────────────────────────────────────────

const NOW: i64 = 100_000;

fn ev(age_ms: i64, id: &str) -> SignalEvent {
    SignalEvent::new(NOW - age_ms, id)
}

/// Buffer captured by the signal-ingestion side during a typical recall.
fn demo_buffer() -> Vec<SignalEvent> {
    vec![
        ev(180, "TrackRecallOrder"),
        ev(160, "TrackRecallOrder"),
        ev(130, "TrackRecallOrder"),
        ev(300, "ReclineRecallOrder"),
        ev(120, "TiltRecallOrder"),
        ev(110, "TiltRecallOrder"),
        ev(100, "TiltRecallOrder"),
        ev(90, "CommandArmHeightRecallOrder"),
        ev(80, "CommandArmHeightRecallOrder"),
        ev(70, "CommandArmHeightRecallOrder"),
        ev(85, "CommandArmForeAftRecallOrder"),
        ev(75, "CommandArmForeAftRecallOrder"),
        ev(65, "CommandArmForeAftRecallOrder"),
    ]
}

fn demo_setpoints() -> SeatSetpoints {
    let mut sp = SeatSetpoints::default();
    sp.set(MotorId::Track, MotorSetpoint::new(MotorOrder::Target(70), 60));
    sp.set(MotorId::Recline, MotorSetpoint::new(MotorOrder::Target(30), 30));
    sp.set(MotorId::Tilt, MotorSetpoint::new(MotorOrder::FailSafeStop, 45));
    sp.set(MotorId::CommandArmHeight, MotorSetpoint::new(MotorOrder::Target(55), 60));
    sp.set(MotorId::CommandArmForeAft, MotorSetpoint::new(MotorOrder::Target(40), 20));
    sp
}

// ── Tests ───────────────────────────────────────────────────────────

#[test]
fn tilt_burst_with_fail_safe_order_stops_tilt() {
    let buffer = [
        ev(120, "TiltRecallOrder"),
        ev(110, "TiltRecallOrder"),
        ev(100, "TiltRecallOrder"),
    ];

    let confirmed = acquire_recall_requests(&buffer, DEFAULT_DEBOUNCE_THRESHOLD_MS);
    assert!(confirmed.contains("TiltRecallOrder"));

    let decision = is_recall_allowed(false, "No Command", true);
    assert!(decision.allowed());

    assert_eq!(
        generate_command(MotorId::Tilt, MotorOrder::FailSafeStop, 45),
        MotorCommand::Stop
    );
}

#[test]
fn demo_cycle_produces_expected_commands() {
    let report = RecallCycle::default().evaluate(&RecallSnapshot {
        signals: demo_buffer(),
        safety: SafetyState::default(),
        setpoints: demo_setpoints(),
    });

    // Recline was seen once, 235 ms before the anchor.
    let confirmed: Vec<_> = report.confirmed.iter().map(String::as_str).collect();
    assert_eq!(
        confirmed,
        [
            "CommandArmForeAftRecallOrder",
            "CommandArmHeightRecallOrder",
            "TiltRecallOrder",
            "TrackRecallOrder",
        ]
    );
    assert!(report.decision.allowed());

    assert_eq!(report.command_for(MotorId::Track), Some(MotorCommand::ClockwiseRotate));
    assert_eq!(report.command_for(MotorId::Recline), None);
    assert_eq!(report.command_for(MotorId::Tilt), Some(MotorCommand::Stop));

    let seq = report.command_arm.expect("command-arm sequence");
    let steps: Vec<_> = seq.steps().iter().map(|s| (s.label(), s.command)).collect();
    assert_eq!(
        steps,
        [
            ("ForeAft", MotorCommand::ClockwiseRotate),
            ("Height", MotorCommand::CounterClockwiseRotate),
        ]
    );
}

#[test]
fn raising_arm_moves_height_first() {
    let mut setpoints = demo_setpoints();
    setpoints.set(MotorId::CommandArmHeight, MotorSetpoint::new(MotorOrder::Target(70), 60));

    let report = RecallCycle::default().evaluate(&RecallSnapshot {
        signals: demo_buffer(),
        safety: SafetyState::default(),
        setpoints,
    });

    let seq = report.command_arm.expect("command-arm sequence");
    assert_eq!(seq.first().motor, MotorId::CommandArmHeight);
    assert_eq!(seq.first().command, MotorCommand::ClockwiseRotate);
    assert_eq!(seq.second().motor, MotorId::CommandArmForeAft);
}

#[test]
fn narrow_window_drops_early_requests() {
    // With a 30 ms window only the command-arm bursts fit.
    let cycle = RecallCycle::new(DebounceConfig::with_threshold(30));
    let report = cycle.evaluate(&RecallSnapshot {
        signals: demo_buffer(),
        safety: SafetyState::default(),
        setpoints: demo_setpoints(),
    });

    assert!(!report.confirmed.contains("TrackRecallOrder"));
    assert!(!report.confirmed.contains("TiltRecallOrder"));
    assert!(report.command_arm.is_some());
    assert!(report.directives.is_empty());
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let cycle = RecallCycle::default();
    let snapshot = RecallSnapshot {
        signals: demo_buffer(),
        safety: SafetyState::default(),
        setpoints: demo_setpoints(),
    };
    assert_eq!(cycle.evaluate(&snapshot), cycle.evaluate(&snapshot));
}
