//! # frontdesk-core
//!
//! Core library for Frontdesk, providing the returning-visitor lookup and
//! check-in wizard logic shared by all clients (desktop shell, kiosk, web).
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Clients wrap with async
//!   if needed and execute the emitted effects themselves.
//! - **Not thread-safe**: One wizard instance per open dialog; clients
//!   provide their own synchronization if they need it.
//! - **No hidden I/O**: The wizard never talks to the network. It emits
//!   `WizardEffect::IssueLookup` and the host feeds the result back as a
//!   `WizardEvent::LookupCompleted`.
//! - **Failures stay in-state**: Lookup problems become user-facing wizard
//!   messages, never errors propagated to the host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use frontdesk_core::{CheckInWizard, WizardConfig, WizardEvent};
//!
//! let mut wizard = CheckInWizard::new(WizardConfig::default());
//! wizard.handle(WizardEvent::Open);
//! wizard.handle(WizardEvent::SelectReturning);
//! wizard.handle(WizardEvent::PhoneChanged { value: "808 12 34 56".into() });
//! let effects = wizard.handle(WizardEvent::Submit);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod lookup;
pub mod phone;
pub mod wizard;

// Re-export commonly used items at crate root
pub use config::WizardConfig;
pub use error::{DirectoryError, Result};
pub use lookup::{interpret_lookup, LookupOutcome, VisitorDirectory};
pub use wizard::{
    CheckInWizard, HandoffOutcome, Prefill, WizardEffect, WizardError, WizardEvent, WizardState,
    WizardStep,
};

// The wire types travel with the core API.
pub use directory_protocol::{LookupRequest, LookupResponse, Visit, Visitor};
