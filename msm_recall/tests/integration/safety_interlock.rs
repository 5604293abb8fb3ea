//! Integration test: safety interlocks block recall.
//!
//! Confirmed requests must never produce motor commands while any interlock
//! is tripped, and the reported reason must name the tripped interlock.

use msm_common::consts::NO_COMMAND;
use msm_common::recall::motor::{MotorId, MotorOrder, MotorSetpoint, SeatSetpoints};
use msm_common::recall::safety::{RecallVerdict, SafetyState};
use msm_common::recall::signal::SignalEvent;

use msm_recall::cycle::{RecallCycle, RecallSnapshot};

fn requests_everything() -> Vec<SignalEvent> {
    let ids = [
        "TrackRecallOrder",
        "ReclineRecallOrder",
        "TiltRecallOrder",
        "CommandArmHeightRecallOrder",
        "CommandArmForeAftRecallOrder",
    ];
    (0..3i64)
        .flat_map(|round| {
            ids.iter()
                .enumerate()
                .map(move |(i, id)| SignalEvent::new(round * 20 + i as i64, *id))
        })
        .collect()
}

fn moving_setpoints() -> SeatSetpoints {
    let mut sp = SeatSetpoints::default();
    for motor in MotorId::ALL {
        sp.set(motor, MotorSetpoint::new(MotorOrder::Target(100), 0));
    }
    sp
}

fn run(safety: SafetyState) -> msm_recall::cycle::RecallReport {
    RecallCycle::default().evaluate(&RecallSnapshot {
        signals: requests_everything(),
        safety,
        setpoints: moving_setpoints(),
    })
}

#[test]
fn all_clear_moves_every_motor() {
    let report = run(SafetyState::default());
    assert!(report.decision.allowed());
    assert_eq!(report.directives.len(), 3);
    assert!(report.command_arm.is_some());
    for motor in MotorId::ALL {
        assert!(report.command_for(motor).is_some_and(|c| c.is_motion()));
    }
}

#[test]
fn physical_switch_denies_regardless_of_other_inputs() {
    for can_command in [NO_COMMAND, "SeatForward"] {
        for motor_position_available in [false, true] {
            let report = run(SafetyState {
                physical_switch_active: true,
                can_command: can_command.to_string(),
                motor_position_available,
            });
            assert!(!report.decision.allowed());
            assert!(report.decision.reason().contains("physical switch"));
            assert!(!report.executed());
            // Debouncing still reports what was requested.
            assert_eq!(report.confirmed.len(), 5);
        }
    }
}

#[test]
fn active_bus_command_denies_with_command_in_reason() {
    let report = run(SafetyState {
        can_command: "MassageOn".to_string(),
        ..SafetyState::default()
    });
    assert_eq!(
        report.decision.verdict(),
        &RecallVerdict::BusCommandActive {
            command: "MassageOn".to_string()
        }
    );
    assert!(report.decision.reason().contains("MassageOn"));
    assert!(!report.executed());
}

#[test]
fn unknown_position_denies() {
    let report = run(SafetyState {
        motor_position_available: false,
        ..SafetyState::default()
    });
    assert_eq!(report.decision.verdict(), &RecallVerdict::MotorPositionUnknown);
    assert!(!report.executed());
}
