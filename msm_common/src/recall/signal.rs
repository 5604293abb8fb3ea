//! Recall signal types.
//!
//! Defines `SignalEvent` (one time-stamped sample from the shared signal
//! channel), `ConfirmedSignalSet` (debounce output), `RecallSignal` (the
//! well-known recall request ids) and the `RecallRequests` bitflag view.

use std::collections::BTreeSet;
use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::consts::MOTOR_COUNT;

/// One sample received on the recall signal channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalEvent {
    /// Sample timestamp [ms]. Caller-supplied, not wall-clock.
    pub timestamp_ms: i64,
    /// Signal identifier, e.g. `"TiltRecallOrder"`.
    pub signal_id: String,
}

impl SignalEvent {
    pub fn new(timestamp_ms: i64, signal_id: impl Into<String>) -> Self {
        Self {
            timestamp_ms,
            signal_id: signal_id.into(),
        }
    }
}

/// Signal ids that survived debouncing in one evaluation cycle.
pub type ConfirmedSignalSet = BTreeSet<String>;

/// Well-known recall request signals, one per seat motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RecallSignal {
    Track = 0,
    Recline = 1,
    Tilt = 2,
    CommandArmHeight = 3,
    CommandArmForeAft = 4,
}

impl RecallSignal {
    /// All well-known signals.
    pub const ALL: [Self; MOTOR_COUNT] = [
        Self::Track,
        Self::Recline,
        Self::Tilt,
        Self::CommandArmHeight,
        Self::CommandArmForeAft,
    ];

    /// Identifier as it appears on the signal channel.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Track => "TrackRecallOrder",
            Self::Recline => "ReclineRecallOrder",
            Self::Tilt => "TiltRecallOrder",
            Self::CommandArmHeight => "CommandArmHeightRecallOrder",
            Self::CommandArmForeAft => "CommandArmForeAftRecallOrder",
        }
    }

    /// Look up a well-known signal by channel id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Corresponding request flag.
    pub const fn flag(&self) -> RecallRequests {
        match self {
            Self::Track => RecallRequests::TRACK,
            Self::Recline => RecallRequests::RECLINE,
            Self::Tilt => RecallRequests::TILT,
            Self::CommandArmHeight => RecallRequests::COMMAND_ARM_HEIGHT,
            Self::CommandArmForeAft => RecallRequests::COMMAND_ARM_FORE_AFT,
        }
    }
}

impl fmt::Display for RecallSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

bitflags! {
    /// Confirmed recall requests, one bit per seat motor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RecallRequests: u8 {
        const TRACK                = 0x01;
        const RECLINE              = 0x02;
        const TILT                 = 0x04;
        const COMMAND_ARM_HEIGHT   = 0x08;
        const COMMAND_ARM_FORE_AFT = 0x10;
    }
}

impl Default for RecallRequests {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecallRequests {
    /// Both command-arm axes. The arm only moves when both are requested.
    pub const COMMAND_ARM: Self = Self::from_bits_truncate(
        Self::COMMAND_ARM_HEIGHT.bits() | Self::COMMAND_ARM_FORE_AFT.bits(),
    );

    /// Build the request mask from a confirmed set. Unknown ids are ignored.
    pub fn from_confirmed(confirmed: &ConfirmedSignalSet) -> Self {
        confirmed
            .iter()
            .filter_map(|id| RecallSignal::from_id(id))
            .fold(Self::empty(), |acc, s| acc | s.flag())
    }

    /// Returns true if the full command-arm pair was requested.
    #[inline]
    pub const fn command_arm_requested(&self) -> bool {
        self.contains(Self::COMMAND_ARM)
    }
}
