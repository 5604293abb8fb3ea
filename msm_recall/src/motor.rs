//! Motor command generation.
//!
//! `derive_command` maps an order and the sensed position to an open-loop
//! direction intent. It is pure: the same pair always yields the same
//! command. `generate_command` is the labelled entry point used for every
//! seat motor; it records a diagnostic event and delegates.

use msm_common::recall::motor::{MotorCommand, MotorId, MotorOrder, MotorPosition, MotorSetpoint};
use serde::Serialize;
use tracing::debug;

/// Derive the direction command for one motor.
///
/// - `FailSafeStop` → `Stop`, whatever the position
/// - target above position → `ClockwiseRotate`
/// - target below position → `CounterClockwiseRotate`
/// - target reached → `Stop`
#[inline]
pub const fn derive_command(order: MotorOrder, position: MotorPosition) -> MotorCommand {
    match order {
        MotorOrder::FailSafeStop => MotorCommand::Stop,
        MotorOrder::Target(target) if target > position => MotorCommand::ClockwiseRotate,
        MotorOrder::Target(target) if target < position => MotorCommand::CounterClockwiseRotate,
        MotorOrder::Target(_) => MotorCommand::Stop,
    }
}

/// Generate the command for `motor`, with a diagnostic record.
pub fn generate_command(motor: MotorId, order: MotorOrder, position: MotorPosition) -> MotorCommand {
    let command = derive_command(order, position);
    debug!(
        motor = motor.label(),
        %order,
        position,
        %command,
        "Motor command derived"
    );
    command
}

/// A command addressed to one motor, with the inputs it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MotorDirective {
    pub motor: MotorId,
    pub order: MotorOrder,
    pub position: MotorPosition,
    pub command: MotorCommand,
}

impl MotorDirective {
    /// Generate the directive for `motor` from its setpoint.
    pub fn generate(motor: MotorId, setpoint: MotorSetpoint) -> Self {
        Self {
            motor,
            order: setpoint.order,
            position: setpoint.position,
            command: generate_command(motor, setpoint.order, setpoint.position),
        }
    }
}
