//! Wizard tuning knobs.
//!
//! Every delay the wizard schedules goes through here so hosts and tests
//! can shrink them. Defaults match the production dialog.

use serde::{Deserialize, Serialize};

/// Milliseconds between dialog close and the confirm/already-checked-in
/// handoff. Keeps overlapping close/open transitions from flickering.
pub const DEFAULT_HANDOFF_DELAY_MS: u64 = 150;

/// Milliseconds of input silence before a live lookup fires.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Delay applied to handoffs that follow a dialog close.
    pub handoff_delay_ms: u64,
    /// Delay before a debounced live lookup fires.
    pub debounce_delay_ms: u64,
    /// When true, qualifying phone input schedules a debounced lookup
    /// instead of waiting for an explicit submit.
    pub live_lookup: bool,
    /// When true, the year of birth is collected on its own step between
    /// phone input and the lookup.
    pub collect_year: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            handoff_delay_ms: DEFAULT_HANDOFF_DELAY_MS,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            live_lookup: false,
            collect_year: false,
        }
    }
}
