//! Motor types for recall.
//!
//! Defines `MotorId`, the two-case `MotorOrder`, `MotorCommand`, and the
//! per-motor `MotorSetpoint` / `SeatSetpoints` read from preset storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{FAIL_SAFE_STOP_TOKEN, MOTOR_COUNT};

use super::signal::RecallSignal;

/// Motor position in preset units.
pub type MotorPosition = i32;

/// Seat motor identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MotorId {
    Track = 0,
    Recline = 1,
    Tilt = 2,
    CommandArmHeight = 3,
    CommandArmForeAft = 4,
}

impl MotorId {
    /// All seat motors.
    pub const ALL: [Self; MOTOR_COUNT] = [
        Self::Track,
        Self::Recline,
        Self::Tilt,
        Self::CommandArmHeight,
        Self::CommandArmForeAft,
    ];

    /// Diagnostic label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Track => "Track",
            Self::Recline => "Recline",
            Self::Tilt => "Tilt",
            Self::CommandArmHeight => "CommandArm Height",
            Self::CommandArmForeAft => "CommandArm ForeAft",
        }
    }

    /// Recall signal that requests this motor.
    pub const fn recall_signal(&self) -> RecallSignal {
        match self {
            Self::Track => RecallSignal::Track,
            Self::Recline => RecallSignal::Recline,
            Self::Tilt => RecallSignal::Tilt,
            Self::CommandArmHeight => RecallSignal::CommandArmHeight,
            Self::CommandArmForeAft => RecallSignal::CommandArmForeAft,
        }
    }

    /// Returns true for the two command-arm axes.
    #[inline]
    pub const fn is_command_arm(&self) -> bool {
        matches!(self, Self::CommandArmHeight | Self::CommandArmForeAft)
    }
}

impl fmt::Display for MotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Untyped order as it arrives from preset storage or configuration:
/// an integer, or a text token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMotorOrder {
    Number(i64),
    Token(String),
}

/// Recall order for one motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMotorOrder", into = "RawMotorOrder")]
pub enum MotorOrder {
    /// Drive towards the stored position.
    Target(MotorPosition),
    /// Halt immediately, regardless of position.
    FailSafeStop,
}

impl MotorOrder {
    #[inline]
    pub const fn is_target(&self) -> bool {
        matches!(self, Self::Target(_))
    }
}

impl Default for MotorOrder {
    fn default() -> Self {
        Self::FailSafeStop
    }
}

impl From<RawMotorOrder> for MotorOrder {
    /// Malformed orders collapse to `FailSafeStop`.
    fn from(raw: RawMotorOrder) -> Self {
        match raw {
            RawMotorOrder::Number(n) => match MotorPosition::try_from(n) {
                Ok(t) => Self::Target(t),
                Err(_) => {
                    warn!(order = n, "Order out of position range, using fail-safe stop");
                    Self::FailSafeStop
                }
            },
            RawMotorOrder::Token(t) if t == FAIL_SAFE_STOP_TOKEN => Self::FailSafeStop,
            RawMotorOrder::Token(t) => {
                warn!(order = %t, "Unrecognized order token, using fail-safe stop");
                Self::FailSafeStop
            }
        }
    }
}

impl From<MotorOrder> for RawMotorOrder {
    fn from(order: MotorOrder) -> Self {
        match order {
            MotorOrder::Target(t) => Self::Number(i64::from(t)),
            MotorOrder::FailSafeStop => Self::Token(FAIL_SAFE_STOP_TOKEN.to_string()),
        }
    }
}

impl fmt::Display for MotorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(t) => write!(f, "{t}"),
            Self::FailSafeStop => f.write_str(FAIL_SAFE_STOP_TOKEN),
        }
    }
}

/// Directional motor command (open-loop intent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MotorCommand {
    Stop = 0,
    ClockwiseRotate = 1,
    CounterClockwiseRotate = 2,
}

impl MotorCommand {
    /// Short actuator code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::ClockwiseRotate => "CW",
            Self::CounterClockwiseRotate => "CCW",
        }
    }

    #[inline]
    pub const fn is_motion(&self) -> bool {
        !matches!(self, Self::Stop)
    }
}

impl Default for MotorCommand {
    fn default() -> Self {
        Self::Stop
    }
}

impl fmt::Display for MotorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Stored order and sensed position for one motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MotorSetpoint {
    /// Order from preset storage.
    #[serde(default)]
    pub order: MotorOrder,
    /// Current position from the position sensor. Required whenever the
    /// motor is listed.
    pub position: MotorPosition,
}

impl MotorSetpoint {
    pub const fn new(order: MotorOrder, position: MotorPosition) -> Self {
        Self { order, position }
    }
}

/// Setpoints for every seat motor. Missing motors default to fail-safe stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeatSetpoints {
    #[serde(default)]
    pub track: MotorSetpoint,
    #[serde(default)]
    pub recline: MotorSetpoint,
    #[serde(default)]
    pub tilt: MotorSetpoint,
    #[serde(default)]
    pub command_arm_height: MotorSetpoint,
    #[serde(default)]
    pub command_arm_fore_aft: MotorSetpoint,
}

impl SeatSetpoints {
    pub const fn get(&self, motor: MotorId) -> MotorSetpoint {
        match motor {
            MotorId::Track => self.track,
            MotorId::Recline => self.recline,
            MotorId::Tilt => self.tilt,
            MotorId::CommandArmHeight => self.command_arm_height,
            MotorId::CommandArmForeAft => self.command_arm_fore_aft,
        }
    }

    pub fn set(&mut self, motor: MotorId, setpoint: MotorSetpoint) {
        let slot = match motor {
            MotorId::Track => &mut self.track,
            MotorId::Recline => &mut self.recline,
            MotorId::Tilt => &mut self.tilt,
            MotorId::CommandArmHeight => &mut self.command_arm_height,
            MotorId::CommandArmForeAft => &mut self.command_arm_fore_aft,
        };
        *slot = setpoint;
    }
}
