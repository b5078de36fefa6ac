//! Events fed into the wizard and effects it hands back to the host.
//!
//! The host owns all timers and I/O: it runs `IssueLookup` against a
//! `VisitorDirectory` and feeds the interpreted outcome back as
//! `LookupCompleted`, and it fires `DebounceFired` when a scheduled
//! debounce elapses. Stale sequence numbers and tokens are the wizard's
//! problem, not the host's.

use directory_protocol::{LookupRequest, Visit, Visitor};
use serde::Serialize;

use crate::lookup::LookupOutcome;

/// Everything the host can tell the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Dialog opened; state starts from scratch.
    Open,
    /// "Returning visitor" chosen on the selection step.
    SelectReturning,
    /// "New visitor" chosen on the selection step.
    SelectNew,
    PhoneChanged { value: String },
    YearChanged { value: Option<u16> },
    /// Explicit submit of the current input step.
    Submit,
    /// Result of a previously issued lookup, tagged with its sequence.
    LookupCompleted { seq: u64, outcome: LookupOutcome },
    Back,
    /// Confirm on the review step.
    Confirm,
    /// Escape hatch after a failed lookup: register as a new visitor.
    ContinueAsNew,
    /// Dialog dismissed from any step.
    Close,
    /// A scheduled debounce elapsed.
    DebounceFired { token: u64 },
}

/// Commands the host must execute, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEffect {
    /// Run the lookup and feed back `LookupCompleted` with the same seq.
    IssueLookup { seq: u64, request: LookupRequest },
    /// Start (or restart) the live-lookup debounce timer.
    ScheduleDebounce { token: u64, delay_ms: u64 },
    CloseDialog,
    /// Invoke the caller's continuation after `delay_ms`. Always emitted
    /// after `CloseDialog`, never before.
    Handoff {
        outcome: HandoffOutcome,
        delay_ms: u64,
    },
}

/// Partial data carried from a failed lookup into new-visitor
/// registration so the phone number needs no re-entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prefill {
    pub phone_number: String,
    pub year_of_birth: Option<u16>,
}

/// Terminal outcome delivered to the caller's continuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandoffOutcome {
    /// Proceed to new-visitor registration, optionally prefilled.
    NewVisitor { prefill: Option<Prefill> },
    /// Returning visitor confirmed on review; snapshot taken at lookup time.
    ReturningConfirmed { visitor: Visitor },
    /// The visitor already has an open visit; render the
    /// already-checked-in screen instead of a duplicate check-in.
    AlreadyCheckedIn { visitor: Visitor, visit: Visit },
}
