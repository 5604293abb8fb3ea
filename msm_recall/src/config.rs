//! Recall configuration.
//!
//! Two layers:
//! - `DebounceConfig`: tuning for signal acquisition (window, count,
//!   future-event policy).
//! - `ScenarioConfig`: one harness input file: shared settings, debounce
//!   tuning, and the snapshot (signal buffer, safety state, motor setpoints)
//!   supplied to a recall cycle.
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! service_name = "msm-recall-demo"
//!
//! [debounce]
//! threshold_ms = 200
//!
//! [safety]
//! physical_switch_active = false
//! can_command = "No Command"
//! motor_position_available = true
//!
//! [[signals]]
//! timestamp_ms = 1000
//! signal_id = "TiltRecallOrder"
//!
//! [motors.tilt]
//! order = "FF"
//! position = 45
//! ```

use std::path::Path;

use msm_common::config::{ConfigError, ConfigLoader, SharedConfig};
use msm_common::consts::{DEFAULT_DEBOUNCE_THRESHOLD_MS, MIN_CONFIRMATIONS};
use msm_common::recall::motor::SeatSetpoints;
use msm_common::recall::safety::SafetyState;
use msm_common::recall::signal::SignalEvent;
use serde::{Deserialize, Serialize};

use crate::cycle::RecallSnapshot;

/// Signal acquisition tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebounceConfig {
    /// Window length behind the anchor event [ms], inclusive.
    #[serde(default = "default_threshold_ms")]
    pub threshold_ms: u32,
    /// In-window occurrences required to confirm a signal.
    #[serde(default = "default_min_confirmations")]
    pub min_confirmations: usize,
    /// Count events stamped after the anchor as in-window.
    #[serde(default)]
    pub count_future_events: bool,
}

fn default_threshold_ms() -> u32 {
    DEFAULT_DEBOUNCE_THRESHOLD_MS
}
fn default_min_confirmations() -> usize {
    MIN_CONFIRMATIONS
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            threshold_ms: DEFAULT_DEBOUNCE_THRESHOLD_MS,
            min_confirmations: MIN_CONFIRMATIONS,
            count_future_events: false,
        }
    }
}

impl DebounceConfig {
    /// Default tuning with a custom window.
    pub fn with_threshold(threshold_ms: u32) -> Self {
        Self {
            threshold_ms,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// `ConfigError::ValidationError` if `min_confirmations` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_confirmations == 0 {
            return Err(ConfigError::ValidationError(
                "debounce.min_confirmations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One harness scenario file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub shared: SharedConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
    #[serde(default)]
    pub safety: SafetyState,
    /// Recall signal buffer, in arrival order.
    #[serde(default)]
    pub signals: Vec<SignalEvent>,
    #[serde(default)]
    pub motors: SeatSetpoints,
}

impl ScenarioConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `shared.service_name` is empty
    /// - `debounce.min_confirmations` is zero
    /// - any signal has an empty id
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.debounce.validate()?;

        if let Some(idx) = self.signals.iter().position(|s| s.signal_id.is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "signals[{idx}].signal_id cannot be empty"
            )));
        }
        Ok(())
    }

    /// Build the cycle input from this scenario.
    pub fn snapshot(&self) -> RecallSnapshot {
        RecallSnapshot {
            signals: self.signals.clone(),
            safety: self.safety.clone(),
            setpoints: self.motors,
        }
    }
}

/// Load and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let scenario = ScenarioConfig::load(path)?;
    scenario.validate()?;
    Ok(scenario)
}
