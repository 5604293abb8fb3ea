//! Prelude module for common re-exports.
//!
//! ```rust
//! use msm_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{
    DEFAULT_DEBOUNCE_THRESHOLD_MS, FAIL_SAFE_STOP_TOKEN, MIN_CONFIRMATIONS, NO_COMMAND,
};

// ─── Recall Data Model ──────────────────────────────────────────────
pub use crate::recall::motor::{
    MotorCommand, MotorId, MotorOrder, MotorPosition, MotorSetpoint, RawMotorOrder,
    SeatSetpoints,
};
pub use crate::recall::safety::{RecallVerdict, SafetyDecision, SafetyState};
pub use crate::recall::sequence::{CommandArmSequence, SequenceStep};
pub use crate::recall::signal::{
    ConfirmedSignalSet, RecallRequests, RecallSignal, SignalEvent,
};
