//! Recall signal acquisition (debouncing).
//!
//! Reduces a time-stamped signal buffer into the set of recall requests
//! confirmed for this cycle. The anchor ("now") is the timestamp of the last
//! buffered event, never wall-clock time. A signal is confirmed when it
//! occurs at least `min_confirmations` times within `threshold_ms` of the
//! anchor; a buffer shorter than `min_confirmations` confirms nothing.
//!
//! The buffer is borrowed. Pruning it is the caller's job.

use std::collections::HashMap;

use msm_common::recall::signal::{ConfirmedSignalSet, SignalEvent};

use crate::config::DebounceConfig;

/// Debounce the buffer with the default policy and a custom window.
///
/// Events stamped after the anchor are not counted.
pub fn acquire_recall_requests(buffer: &[SignalEvent], threshold_ms: u32) -> ConfirmedSignalSet {
    SignalDebouncer::new(DebounceConfig::with_threshold(threshold_ms)).acquire(buffer)
}

/// Configured signal debouncer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalDebouncer {
    config: DebounceConfig,
}

impl SignalDebouncer {
    pub const fn new(config: DebounceConfig) -> Self {
        Self { config }
    }

    /// Confirmed signal ids for this buffer. Never fails.
    pub fn acquire(&self, buffer: &[SignalEvent]) -> ConfirmedSignalSet {
        let Some(anchor) = buffer.last() else {
            return ConfirmedSignalSet::new();
        };
        if buffer.len() < self.config.min_confirmations {
            return ConfirmedSignalSet::new();
        }

        let now = anchor.timestamp_ms;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for event in buffer.iter().filter(|e| self.in_window(now, e.timestamp_ms)) {
            *counts.entry(event.signal_id.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .filter(|&(_, n)| n >= self.config.min_confirmations)
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// Number of buffered events inside the window of the last event.
    pub fn window_len(&self, buffer: &[SignalEvent]) -> usize {
        buffer.last().map_or(0, |anchor| {
            buffer
                .iter()
                .filter(|e| self.in_window(anchor.timestamp_ms, e.timestamp_ms))
                .count()
        })
    }

    fn in_window(&self, now: i64, timestamp: i64) -> bool {
        match now.checked_sub(timestamp) {
            Some(age) if age < 0 => self.config.count_future_events,
            Some(age) => age <= i64::from(self.config.threshold_ms),
            // Unrepresentable age: treat as stale.
            None => false,
        }
    }
}
