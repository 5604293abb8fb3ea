//! Safety interlock types for recall.
//!
//! Defines `SafetyState` (the vehicle/system snapshot read before a recall),
//! `RecallVerdict` (which interlock decided) and `SafetyDecision`.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::consts::NO_COMMAND;

/// System state snapshot evaluated by the safety gate.
///
/// Supplied per evaluation; nothing is retained between cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyState {
    /// Operator is pressing a physical seat switch.
    #[serde(default)]
    pub physical_switch_active: bool,
    /// Command currently active on the vehicle bus (`"No Command"` when idle).
    #[serde(default = "default_can_command")]
    pub can_command: String,
    /// Motor positions are known (sensors valid).
    #[serde(default = "default_motor_position_available")]
    pub motor_position_available: bool,
}

fn default_can_command() -> String {
    NO_COMMAND.to_string()
}
fn default_motor_position_available() -> bool {
    true
}

impl Default for SafetyState {
    /// All-clear state: no switch, idle bus, positions known.
    fn default() -> Self {
        Self {
            physical_switch_active: false,
            can_command: NO_COMMAND.to_string(),
            motor_position_available: true,
        }
    }
}

/// Returns true if `can_command` is the idle sentinel. The match is exact.
#[inline]
pub fn is_idle_command(can_command: &str) -> bool {
    can_command == NO_COMMAND
}

/// Which interlock produced the decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecallVerdict {
    /// Operator switch has priority over recall.
    PhysicalSwitchEngaged,
    /// Another bus command is in progress.
    BusCommandActive {
        /// The active command, kept for diagnostics.
        command: String,
    },
    /// Motor positions are unknown; a recall target cannot be reached.
    MotorPositionUnknown,
    /// All interlocks clear.
    Permitted,
}

impl RecallVerdict {
    #[inline]
    pub const fn is_permitted(&self) -> bool {
        matches!(self, Self::Permitted)
    }
}

impl fmt::Display for RecallVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhysicalSwitchEngaged => {
                f.write_str("physical switch engaged, recall forbidden")
            }
            Self::BusCommandActive { command } => {
                write!(f, "active bus command ({command}) present, recall forbidden")
            }
            Self::MotorPositionUnknown => f.write_str("motor position unknown, recall forbidden"),
            Self::Permitted => f.write_str("recall permitted"),
        }
    }
}

/// Allow/deny outcome of the safety gate.
///
/// `allowed` and `reason` are both derived from the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SafetyDecision {
    verdict: RecallVerdict,
}

impl SafetyDecision {
    pub const fn new(verdict: RecallVerdict) -> Self {
        Self { verdict }
    }

    /// Whether the recall may proceed.
    #[inline]
    pub const fn allowed(&self) -> bool {
        self.verdict.is_permitted()
    }

    /// Human-readable explanation tied to the deciding interlock.
    pub fn reason(&self) -> String {
        self.verdict.to_string()
    }

    #[inline]
    pub const fn verdict(&self) -> &RecallVerdict {
        &self.verdict
    }
}

impl From<RecallVerdict> for SafetyDecision {
    fn from(verdict: RecallVerdict) -> Self {
        Self::new(verdict)
    }
}

impl Serialize for SafetyDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("SafetyDecision", 3)?;
        st.serialize_field("allowed", &self.allowed())?;
        st.serialize_field("reason", &self.reason())?;
        st.serialize_field("verdict", &self.verdict)?;
        st.end()
    }
}

impl fmt::Display for SafetyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.verdict, f)
    }
}
