//! Recall interlock gate.
//!
//! Ordered, mutually exclusive checks; the first that trips decides:
//!
//! 1. Physical switch engaged → deny
//! 2. Bus command active (anything but `"No Command"`) → deny
//! 3. Motor position unknown → deny
//! 4. Otherwise → permit

use msm_common::recall::safety::{RecallVerdict, SafetyDecision, SafetyState, is_idle_command};

/// Decide whether a recall may run.
pub fn is_recall_allowed(
    physical_switch_active: bool,
    can_command: &str,
    motor_position_available: bool,
) -> SafetyDecision {
    let verdict = if physical_switch_active {
        RecallVerdict::PhysicalSwitchEngaged
    } else if !is_idle_command(can_command) {
        RecallVerdict::BusCommandActive {
            command: can_command.to_string(),
        }
    } else if !motor_position_available {
        RecallVerdict::MotorPositionUnknown
    } else {
        RecallVerdict::Permitted
    };
    SafetyDecision::new(verdict)
}

/// Evaluate a full safety snapshot.
#[inline]
pub fn evaluate(state: &SafetyState) -> SafetyDecision {
    is_recall_allowed(
        state.physical_switch_active,
        &state.can_command,
        state.motor_position_available,
    )
}
