//! Recall evaluation cycle.
//!
//! One cycle is a single atomic decision over a snapshot of inputs:
//!
//! 1. Debounce the signal buffer → confirmed signal set
//! 2. Evaluate the safety gate; stop here if denied
//! 3. Track, recline, tilt: one directive per confirmed request, in that order
//! 4. Command-arm: sequenced pair, only when both axes are requested
//!
//! Nothing is retained between cycles. The caller owns the signal buffer and
//! may evaluate as often as it likes (per tick or per new signal).

use msm_common::recall::motor::{MotorCommand, MotorId, SeatSetpoints};
use msm_common::recall::safety::{SafetyDecision, SafetyState};
use msm_common::recall::sequence::CommandArmSequence;
use msm_common::recall::signal::{ConfirmedSignalSet, RecallRequests, SignalEvent};
use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::acquisition::SignalDebouncer;
use crate::config::DebounceConfig;
use crate::motor::MotorDirective;
use crate::safety::gate;
use crate::sequence::sequence_from_setpoints;

/// Motors driven individually, in emission order.
const INDEPENDENT_MOTORS: [MotorId; 3] = [MotorId::Track, MotorId::Recline, MotorId::Tilt];

/// Inputs for one recall cycle.
#[derive(Debug, Clone, Default)]
pub struct RecallSnapshot {
    /// Signal buffer, owned by the ingestion collaborator.
    pub signals: Vec<SignalEvent>,
    /// Vehicle/system state.
    pub safety: SafetyState,
    /// Stored orders and sensed positions.
    pub setpoints: SeatSetpoints,
}

/// Outcome of one recall cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecallReport {
    /// Signals confirmed by the debouncer.
    pub confirmed: ConfirmedSignalSet,
    /// Well-known requests among the confirmed signals.
    #[serde(serialize_with = "serialize_requests")]
    pub requests: RecallRequests,
    /// Safety gate decision.
    pub decision: SafetyDecision,
    /// Individually driven motors, in emission order. Empty when denied.
    pub directives: Vec<MotorDirective>,
    /// Command-arm sequence, when both arm axes were requested and allowed.
    pub command_arm: Option<CommandArmSequence>,
}

impl RecallReport {
    /// Returns true if any motor command was produced.
    pub fn executed(&self) -> bool {
        !self.directives.is_empty() || self.command_arm.is_some()
    }

    /// Command emitted for `motor` in this cycle, if any.
    pub fn command_for(&self, motor: MotorId) -> Option<MotorCommand> {
        if motor.is_command_arm() {
            return self.command_arm.and_then(|seq| seq.command_for(motor));
        }
        self.directives
            .iter()
            .find(|d| d.motor == motor)
            .map(|d| d.command)
    }
}

fn serialize_requests<S: Serializer>(requests: &RecallRequests, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(requests.bits())
}

/// Recall cycle runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecallCycle {
    debouncer: SignalDebouncer,
}

impl RecallCycle {
    pub const fn new(debounce: DebounceConfig) -> Self {
        Self {
            debouncer: SignalDebouncer::new(debounce),
        }
    }

    /// Run one cycle over `snapshot`.
    pub fn evaluate(&self, snapshot: &RecallSnapshot) -> RecallReport {
        let confirmed = self.debouncer.acquire(&snapshot.signals);
        let requests = RecallRequests::from_confirmed(&confirmed);
        debug!(
            buffered = snapshot.signals.len(),
            in_window = self.debouncer.window_len(&snapshot.signals),
            confirmed = ?confirmed,
            "Recall signals acquired"
        );

        let decision = gate::evaluate(&snapshot.safety);
        let mut report = RecallReport {
            confirmed,
            requests,
            decision,
            directives: Vec::new(),
            command_arm: None,
        };

        if !report.decision.allowed() {
            warn!(reason = %report.decision, "Recall blocked");
            return report;
        }
        info!(reason = %report.decision, "Safety check passed");

        report.directives = INDEPENDENT_MOTORS
            .into_iter()
            .filter(|m| requests.contains(m.recall_signal().flag()))
            .map(|m| MotorDirective::generate(m, snapshot.setpoints.get(m)))
            .collect();

        if requests.command_arm_requested() {
            report.command_arm = Some(sequence_from_setpoints(
                snapshot.setpoints.command_arm_height,
                snapshot.setpoints.command_arm_fore_aft,
            ));
        } else if requests.intersects(RecallRequests::COMMAND_ARM) {
            debug!(requests = ?requests, "Command-arm recall needs both axes, skipped");
        }

        info!(
            directives = report.directives.len(),
            command_arm = report.command_arm.is_some(),
            "Recall cycle complete"
        );
        report
    }
}
