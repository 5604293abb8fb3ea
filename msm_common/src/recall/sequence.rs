//! Command-arm sequence types.
//!
//! The command-arm has two dependent axes (height, fore/aft). A recall that
//! moves both emits them as an ordered pair; the order is the actuation order.

use serde::{Deserialize, Serialize};

use super::motor::{MotorCommand, MotorId};

/// One step of a motion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub motor: MotorId,
    pub command: MotorCommand,
}

impl SequenceStep {
    pub const fn new(motor: MotorId, command: MotorCommand) -> Self {
        Self { motor, command }
    }

    /// Step label within the command-arm sequence.
    pub const fn label(&self) -> &'static str {
        match self.motor {
            MotorId::CommandArmHeight => "Height",
            MotorId::CommandArmForeAft => "ForeAft",
            other => other.label(),
        }
    }
}

/// Ordered command-arm steps: exactly two, first is actuated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArmSequence {
    steps: [SequenceStep; 2],
}

impl CommandArmSequence {
    pub const fn new(first: SequenceStep, second: SequenceStep) -> Self {
        Self {
            steps: [first, second],
        }
    }

    #[inline]
    pub const fn steps(&self) -> &[SequenceStep; 2] {
        &self.steps
    }

    #[inline]
    pub const fn first(&self) -> SequenceStep {
        self.steps[0]
    }

    #[inline]
    pub const fn second(&self) -> SequenceStep {
        self.steps[1]
    }

    /// Command emitted for `motor`, if it is part of the sequence.
    pub fn command_for(&self, motor: MotorId) -> Option<MotorCommand> {
        self.steps
            .iter()
            .find(|s| s.motor == motor)
            .map(|s| s.command)
    }
}
