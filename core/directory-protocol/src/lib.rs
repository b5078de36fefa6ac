//! Wire types for the Visitor Directory REST surface.
//!
//! This crate is shared by the check-in core and its transport clients to
//! prevent schema drift. The directory remains the authority on the data;
//! clients reuse these types to construct valid requests and to interpret
//! responses tolerantly (unknown fields are ignored, optional fields default).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Path of the lookup endpoint, relative to the directory base URL.
pub const LOOKUP_PATH: &str = "/api/visitors/lookup";

/// Upper bound accepted for a lookup response body.
pub const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Structured failure raised while validating a directory payload.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed directory response: {details}")]
    MalformedResponse { details: String },

    #[error("directory response is not valid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// A visitor record as the directory returns it.
///
/// `phone_number` is the primary lookup key and is stored in the
/// directory's canonical (normalized) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: u64,
    pub full_name: String,
    pub year_of_birth: u16,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
}

/// A visit record. A visitor has at most one active visit at any time;
/// that invariant is enforced server-side, clients only observe it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: u64,
    pub visitor_id: u64,
    pub check_in_time: DateTime<Utc>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Visit {
    /// Synthesizes a minimal stand-in visit for a visitor the directory
    /// reported as currently checked in but whose nested visit payload was
    /// missing or malformed. Callers always receive a well-formed record;
    /// this is a display fallback, not a data-integrity guarantee.
    pub fn placeholder(visitor_id: u64) -> Self {
        Self {
            id: 0,
            visitor_id,
            check_in_time: Utc::now(),
            check_out_time: None,
            active: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.active || self.check_out_time.is_none()
    }
}

/// Body of `POST /api/visitors/lookup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_birth: Option<u16>,
}

/// Nested active-visit payload. The inner visit is optional on the wire;
/// interpretation recovers a placeholder when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveVisitPayload {
    #[serde(default)]
    pub visit: Option<Visit>,
}

/// Response of `POST /api/visitors/lookup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub found: bool,
    #[serde(default)]
    pub visitor: Option<Visitor>,
    #[serde(default)]
    pub has_active_visit: Option<bool>,
    #[serde(default)]
    pub active_visit: Option<ActiveVisitPayload>,
}

impl LookupResponse {
    /// Rejects responses that claim a match without carrying the visitor.
    /// A missing nested visit on an active-visit response is deliberately
    /// allowed here; the core synthesizes a placeholder during
    /// interpretation instead of failing the whole lookup.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.found && self.visitor.is_none() {
            return Err(ProtocolError::MalformedResponse {
                details: "found=true without a visitor payload".to_string(),
            });
        }
        Ok(())
    }

    pub fn has_active_visit(&self) -> bool {
        self.found && self.has_active_visit.unwrap_or(false)
    }
}

/// Parses and validates a lookup response body.
pub fn parse_lookup_response(body: &[u8]) -> Result<LookupResponse, ProtocolError> {
    let response: LookupResponse =
        serde_json::from_slice(body).map_err(|source| ProtocolError::Json { source })?;
    response.validate()?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor() -> Visitor {
        Visitor {
            id: 7,
            full_name: "Alima Diallo".to_string(),
            year_of_birth: 1987,
            phone_number: "0808123456".to_string(),
            email: None,
            municipality: Some("Ratoma".to_string()),
        }
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = LookupRequest {
            phone_number: "0808123456".to_string(),
            year_of_birth: Some(1987),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["phoneNumber"], "0808123456");
        assert_eq!(json["yearOfBirth"], 1987);
    }

    #[test]
    fn request_omits_missing_year() {
        let request = LookupRequest {
            phone_number: "0808123456".to_string(),
            year_of_birth: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("yearOfBirth").is_none());
    }

    #[test]
    fn parses_found_response() {
        let body = br#"{"found":true,"visitor":{"id":7,"fullName":"Alima Diallo","yearOfBirth":1987,"phoneNumber":"0808123456"}}"#;
        let response = parse_lookup_response(body).unwrap();
        assert!(response.found);
        assert_eq!(response.visitor.as_ref().unwrap().id, 7);
        assert!(!response.has_active_visit());
    }

    #[test]
    fn parses_active_visit_response() {
        let body = br#"{"found":true,"visitor":{"id":7,"fullName":"Alima Diallo","yearOfBirth":1987,"phoneNumber":"0808123456"},"hasActiveVisit":true,"activeVisit":{"visit":{"id":31,"visitorId":7,"checkInTime":"2026-08-30T09:12:00Z","active":true}}}"#;
        let response = parse_lookup_response(body).unwrap();
        assert!(response.has_active_visit());
        let visit = response.active_visit.unwrap().visit.unwrap();
        assert_eq!(visit.visitor_id, 7);
        assert!(visit.is_open());
    }

    #[test]
    fn tolerates_unknown_fields() {
        let body = br#"{"found":false,"matchStrategy":"phone","elapsedMs":12}"#;
        let response = parse_lookup_response(body).unwrap();
        assert!(!response.found);
    }

    #[test]
    fn rejects_found_without_visitor() {
        let body = br#"{"found":true}"#;
        let err = parse_lookup_response(body).unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedResponse { .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_lookup_response(b"{not json").unwrap_err();
        assert!(matches!(err, ProtocolError::Json { .. }));
    }

    #[test]
    fn placeholder_visit_is_open() {
        let visit = Visit::placeholder(visitor().id);
        assert_eq!(visit.visitor_id, 7);
        assert!(visit.is_open());
        assert!(visit.check_out_time.is_none());
    }

    #[test]
    fn closed_visit_is_not_open() {
        let visit = Visit {
            id: 31,
            visitor_id: 7,
            check_in_time: Utc::now(),
            check_out_time: Some(Utc::now()),
            active: false,
        };
        assert!(!visit.is_open());
    }
}
