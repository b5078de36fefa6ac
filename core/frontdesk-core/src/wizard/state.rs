//! Wizard state owned exclusively by one dialog instance.
//!
//! Created reset when the dialog opens and fully reset on close, on
//! "continue as new", and on a confirmed check-in. Nothing here survives
//! the dialog.

use directory_protocol::Visitor;
use serde::Serialize;

/// Steps of the check-in dialog. `Selection` is both the initial step and
/// the backstop the dialog returns to on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Selection,
    PhoneInput,
    YearInput,
    Review,
}

/// User-facing lookup failure kept in wizard state. The distinction
/// between "no match" and "transport error" is part of the contract; the
/// copy differs and only `NotFound` escalates its wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardError {
    NotFound { escalated: bool },
    LookupFailed,
}

impl WizardError {
    pub fn message(&self) -> &'static str {
        match self {
            WizardError::NotFound { escalated: false } => {
                "No visitor found for this phone number."
            }
            WizardError::NotFound { escalated: true } => {
                "Still no match. You can check in as a new visitor instead."
            }
            WizardError::LookupFailed => {
                "An error occurred while contacting the visitor directory. Please try again."
            }
        }
    }
}

/// In-memory state of one wizard instance.
///
/// `lookup_seq` is monotonic across resets so a response issued before a
/// reset can never match a sequence issued after one.
#[derive(Debug, Clone, Serialize)]
pub struct WizardState {
    pub step: WizardStep,
    /// Phone digits as typed; normalized only at submit time.
    pub phone_number: String,
    pub year_of_birth: Option<u16>,
    pub is_loading: bool,
    /// Server-confirmed match flag; gates the advance to review.
    pub is_found: bool,
    pub error: Option<WizardError>,
    /// Only two tracked levels: 0 (no failure yet) and 1 (failed at least once).
    pub retry_count: u8,
    pub visitor: Option<Visitor>,
    #[serde(skip)]
    pub(crate) lookup_seq: u64,
    #[serde(skip)]
    pub(crate) in_flight: Option<u64>,
    #[serde(skip)]
    pub(crate) debounce_token: u64,
}

impl WizardState {
    pub(crate) fn new() -> Self {
        Self {
            step: WizardStep::Selection,
            phone_number: String::new(),
            year_of_birth: None,
            is_loading: false,
            is_found: false,
            error: None,
            retry_count: 0,
            visitor: None,
            lookup_seq: 0,
            in_flight: None,
            debounce_token: 0,
        }
    }

    /// Full reset. Invalidates any in-flight lookup and any pending
    /// debounce timer while keeping `lookup_seq` monotonic.
    pub(crate) fn reset(&mut self) {
        self.step = WizardStep::Selection;
        self.phone_number.clear();
        self.year_of_birth = None;
        self.is_loading = false;
        self.is_found = false;
        self.error = None;
        self.retry_count = 0;
        self.visitor = None;
        self.in_flight = None;
        self.debounce_token = self.debounce_token.wrapping_add(1);
    }

    /// True when every user-visible field is back at its initial value.
    pub fn is_pristine(&self) -> bool {
        self.step == WizardStep::Selection
            && self.phone_number.is_empty()
            && self.year_of_birth.is_none()
            && !self.is_loading
            && !self.is_found
            && self.error.is_none()
            && self.retry_count == 0
            && self.visitor.is_none()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
