//! Check-in wizard state machine.
//!
//! A pure event/effect reducer: the host feeds `WizardEvent`s in and
//! executes the `WizardEffect`s that come back, in order. Conservative
//! rules apply when events arrive out of step (wrong step, stale sequence,
//! stale debounce token): the event is ignored rather than guessed at.

mod events;
mod state;

pub use events::{HandoffOutcome, Prefill, WizardEffect, WizardEvent};
pub use state::{WizardError, WizardState, WizardStep};

use directory_protocol::LookupRequest;
use tracing::{debug, warn};

use crate::config::WizardConfig;
use crate::lookup::LookupOutcome;
use crate::phone;

/// One check-in dialog instance. Create it when the dialog opens, drop it
/// when the dialog is destroyed; there is no cross-instance state.
#[derive(Debug, Default)]
pub struct CheckInWizard {
    config: WizardConfig,
    state: WizardState,
}

impl CheckInWizard {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            state: WizardState::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// True when the current input step may issue a lookup. Gates the
    /// "Next" control; there is no further client-side format validation.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state.step,
            WizardStep::PhoneInput | WizardStep::YearInput
        ) && !self.state.is_loading
            && phone::is_submittable(&self.state.phone_number)
    }

    /// True once the "check in as new visitor" escape hatch is offered,
    /// i.e. after the first failed lookup.
    pub fn can_continue_as_new(&self) -> bool {
        self.state.retry_count > 0
            && matches!(
                self.state.step,
                WizardStep::PhoneInput | WizardStep::YearInput
            )
    }

    /// Applies one event and returns the effects the host must run, in
    /// order. Never blocks and never performs I/O.
    pub fn handle(&mut self, event: WizardEvent) -> Vec<WizardEffect> {
        match event {
            WizardEvent::Open => {
                self.state.reset();
                Vec::new()
            }
            WizardEvent::SelectReturning => {
                if self.state.step == WizardStep::Selection {
                    self.state.step = WizardStep::PhoneInput;
                }
                Vec::new()
            }
            WizardEvent::SelectNew => {
                if self.state.step != WizardStep::Selection {
                    return Vec::new();
                }
                self.state.reset();
                self.close_and_hand_off(HandoffOutcome::NewVisitor { prefill: None })
            }
            WizardEvent::PhoneChanged { value } => self.on_phone_changed(value),
            WizardEvent::YearChanged { value } => {
                if matches!(
                    self.state.step,
                    WizardStep::PhoneInput | WizardStep::YearInput
                ) {
                    self.state.year_of_birth = value;
                }
                Vec::new()
            }
            WizardEvent::Submit => self.on_submit(),
            WizardEvent::LookupCompleted { seq, outcome } => self.on_lookup_completed(seq, outcome),
            WizardEvent::Back => self.on_back(),
            WizardEvent::Confirm => self.on_confirm(),
            WizardEvent::ContinueAsNew => self.on_continue_as_new(),
            WizardEvent::Close => {
                self.state.reset();
                vec![WizardEffect::CloseDialog]
            }
            WizardEvent::DebounceFired { token } => self.on_debounce_fired(token),
        }
    }

    fn on_phone_changed(&mut self, value: String) -> Vec<WizardEffect> {
        if self.state.step != WizardStep::PhoneInput {
            return Vec::new();
        }

        self.state.phone_number = value;
        // Any edit invalidates a previously confirmed match.
        self.state.is_found = false;
        self.state.visitor = None;

        if self.config.live_lookup
            && !self.state.is_loading
            && phone::is_submittable(&self.state.phone_number)
        {
            self.state.debounce_token = self.state.debounce_token.wrapping_add(1);
            return vec![WizardEffect::ScheduleDebounce {
                token: self.state.debounce_token,
                delay_ms: self.config.debounce_delay_ms,
            }];
        }

        Vec::new()
    }

    fn on_submit(&mut self) -> Vec<WizardEffect> {
        match self.state.step {
            WizardStep::PhoneInput if self.config.collect_year => {
                if phone::is_submittable(&self.state.phone_number) {
                    self.state.step = WizardStep::YearInput;
                }
                Vec::new()
            }
            WizardStep::PhoneInput | WizardStep::YearInput => self.begin_lookup(),
            _ => Vec::new(),
        }
    }

    fn begin_lookup(&mut self) -> Vec<WizardEffect> {
        if self.state.is_loading || !phone::is_submittable(&self.state.phone_number) {
            return Vec::new();
        }

        self.state.is_loading = true;
        self.state.error = None;
        self.state.lookup_seq += 1;
        self.state.in_flight = Some(self.state.lookup_seq);

        let request = LookupRequest {
            phone_number: phone::normalize(&self.state.phone_number),
            year_of_birth: self.state.year_of_birth,
        };
        debug!(seq = self.state.lookup_seq, phone = %request.phone_number, "Issuing visitor lookup");

        vec![WizardEffect::IssueLookup {
            seq: self.state.lookup_seq,
            request,
        }]
    }

    fn on_lookup_completed(&mut self, seq: u64, outcome: LookupOutcome) -> Vec<WizardEffect> {
        if self.state.in_flight != Some(seq) {
            warn!(
                seq,
                current = ?self.state.in_flight,
                "Discarding stale lookup response"
            );
            return Vec::new();
        }

        self.state.in_flight = None;
        self.state.is_loading = false;

        match outcome {
            LookupOutcome::Found { visitor } => {
                self.state.is_found = true;
                self.state.visitor = Some(visitor);
                self.state.error = None;
                self.state.step = WizardStep::Review;
                Vec::new()
            }
            LookupOutcome::FoundWithActiveVisit { visitor, visit } => {
                // The guard: never reach review for a visitor who is
                // already on premises.
                self.state.reset();
                self.close_and_hand_off(HandoffOutcome::AlreadyCheckedIn { visitor, visit })
            }
            LookupOutcome::NotFound => {
                let escalated = self.state.retry_count > 0;
                self.state.retry_count = 1;
                self.state.is_found = false;
                self.state.error = Some(WizardError::NotFound { escalated });
                Vec::new()
            }
            LookupOutcome::Failed { reason } => {
                debug!(%reason, "Lookup failed, keeping user on the input step");
                self.state.retry_count = 1;
                self.state.is_found = false;
                self.state.error = Some(WizardError::LookupFailed);
                Vec::new()
            }
        }
    }

    fn on_back(&mut self) -> Vec<WizardEffect> {
        match self.state.step {
            WizardStep::Review | WizardStep::YearInput => {
                self.state.step = WizardStep::PhoneInput;
            }
            WizardStep::PhoneInput => {
                self.state.step = WizardStep::Selection;
                self.state.retry_count = 0;
                self.state.error = None;
                self.state.is_found = false;
                self.state.visitor = None;
                // Abandon any lookup still in flight.
                self.state.in_flight = None;
                self.state.is_loading = false;
            }
            WizardStep::Selection => {}
        }
        Vec::new()
    }

    fn on_confirm(&mut self) -> Vec<WizardEffect> {
        if self.state.step != WizardStep::Review {
            return Vec::new();
        }
        // Snapshot before reset so the continuation sees the visitor as
        // fetched at lookup time, whatever happens to shared state later.
        let visitor = match self.state.visitor.clone() {
            Some(visitor) if self.state.is_found => visitor,
            _ => return Vec::new(),
        };

        self.state.reset();
        self.close_and_hand_off(HandoffOutcome::ReturningConfirmed { visitor })
    }

    fn on_continue_as_new(&mut self) -> Vec<WizardEffect> {
        if !self.can_continue_as_new() {
            return Vec::new();
        }

        let prefill = Prefill {
            phone_number: phone::normalize(&self.state.phone_number),
            year_of_birth: self.state.year_of_birth,
        };
        self.state.reset();
        self.close_and_hand_off(HandoffOutcome::NewVisitor {
            prefill: Some(prefill),
        })
    }

    fn on_debounce_fired(&mut self, token: u64) -> Vec<WizardEffect> {
        if !self.config.live_lookup
            || self.state.step != WizardStep::PhoneInput
            || token != self.state.debounce_token
        {
            return Vec::new();
        }
        self.begin_lookup()
    }

    /// Close first, hand off second. Reversing this order would let a
    /// continuation that synchronously reopens the dialog observe stale
    /// wizard state.
    fn close_and_hand_off(&self, outcome: HandoffOutcome) -> Vec<WizardEffect> {
        vec![
            WizardEffect::CloseDialog,
            WizardEffect::Handoff {
                outcome,
                delay_ms: self.config.handoff_delay_ms,
            },
        ]
    }
}
