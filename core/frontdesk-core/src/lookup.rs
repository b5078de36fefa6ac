//! Lookup outcome model and directory response interpretation.
//!
//! The directory answers with a loose `found`/`hasActiveVisit` shape;
//! interpretation folds it into one tagged outcome so the wizard has a
//! single value to branch on. An active visit always takes precedence over
//! a plain match.

use directory_protocol::{LookupRequest, LookupResponse, Visit, Visitor};
use serde::Serialize;

use crate::error::Result;

/// The single seam between the wizard core and a concrete transport.
/// Implementations perform exactly one lookup call; no caching, no retry.
pub trait VisitorDirectory {
    fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse>;
}

/// Interpreted result of a directory lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// A match with no open visit; the wizard may proceed to review.
    Found { visitor: Visitor },
    /// A match that is already checked in. Takes precedence over `Found`.
    FoundWithActiveVisit { visitor: Visitor, visit: Visit },
    /// The directory answered and knows no such visitor.
    NotFound,
    /// Transport or server failure, distinct from `NotFound`.
    Failed { reason: String },
}

/// Folds a transport result into a `LookupOutcome`. This is the
/// result-wrapping boundary: every `DirectoryError` becomes a value here
/// and nothing propagates past the call site.
pub fn interpret_lookup(result: Result<LookupResponse>) -> LookupOutcome {
    match result {
        Ok(response) => interpret_response(response),
        Err(err) => {
            tracing::warn!(error = %err, "Visitor lookup failed");
            LookupOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

fn interpret_response(response: LookupResponse) -> LookupOutcome {
    if !response.found {
        return LookupOutcome::NotFound;
    }

    let has_active_visit = response.has_active_visit();
    let visitor = match response.visitor {
        Some(visitor) => visitor,
        None => {
            // validate() rejects this shape; kept as a guard for
            // implementations that skip validation.
            return LookupOutcome::Failed {
                reason: "directory reported a match without a visitor".to_string(),
            };
        }
    };

    if has_active_visit {
        let visit = match response.active_visit.and_then(|payload| payload.visit) {
            Some(visit) => visit,
            None => {
                tracing::warn!(
                    visitor_id = visitor.id,
                    "Active-visit response missing nested visit, synthesizing placeholder"
                );
                Visit::placeholder(visitor.id)
            }
        };
        return LookupOutcome::FoundWithActiveVisit { visitor, visit };
    }

    LookupOutcome::Found { visitor }
}
