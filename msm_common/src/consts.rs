//! System-wide constants for the MSM recall workspace.
//!
//! Single source of truth for debounce limits, sentinels and default paths.

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_THRESHOLD_MS: u32 = 200;

/// Number of in-window occurrences needed to confirm a recall signal.
///
/// Also the minimum buffer length below which nothing is confirmed.
pub const MIN_CONFIRMATIONS: usize = 3;

/// Bus command value meaning "no command in progress".
pub const NO_COMMAND: &str = "No Command";

/// Wire token for the fail-safe stop order.
pub const FAIL_SAFE_STOP_TOKEN: &str = "FF";

/// Number of seat motors handled by a recall.
pub const MOTOR_COUNT: usize = 5;

/// Default scenario configuration path for the harness.
pub const DEFAULT_CONFIG_PATH: &str = "config/recall.toml";
