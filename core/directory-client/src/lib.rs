//! HTTP client for the Visitor Directory lookup endpoint.
//!
//! One blocking request per call, no caching and no automatic retry; the
//! wizard's retry policy is the only retry loop. Failures are surfaced as
//! `DirectoryError` and folded into a lookup outcome at the call site.

use std::io::Read;
use std::time::Duration;

use directory_protocol::{
    parse_lookup_response, LookupRequest, LookupResponse, LOOKUP_PATH, MAX_RESPONSE_BYTES,
};
use frontdesk_core::{DirectoryError, VisitorDirectory};
use rand::RngCore;
use tracing::debug;

const CONNECT_TIMEOUT_MS_DEFAULT: u64 = 2_000;
const REQUEST_TIMEOUT_MS_DEFAULT: u64 = 8_000;

/// Transport configuration for one directory endpoint.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the directory, e.g. `https://vms.example.net`.
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    /// Optional bearer token forwarded on every request.
    pub bearer_token: Option<String>,
}

impl DirectoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout_ms: CONNECT_TIMEOUT_MS_DEFAULT,
            request_timeout_ms: REQUEST_TIMEOUT_MS_DEFAULT,
            bearer_token: None,
        }
    }
}

/// Blocking directory client backed by a shared `ureq` agent.
pub struct DirectoryClient {
    agent: ureq::Agent,
    config: DirectoryConfig,
}

impl DirectoryClient {
    pub fn new(config: DirectoryConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_millis(config.connect_timeout_ms))
            .timeout_read(Duration::from_millis(config.request_timeout_ms))
            .timeout_write(Duration::from_millis(config.request_timeout_ms))
            .build();
        Self { agent, config }
    }

    fn lookup_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            LOOKUP_PATH
        )
    }
}

impl VisitorDirectory for DirectoryClient {
    fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, DirectoryError> {
        let payload =
            serde_json::to_string(request).map_err(|err| DirectoryError::Transport {
                details: format!("lookup payload encode failed: {}", err),
            })?;

        let request_id = make_request_id();
        debug!(request_id = %request_id, phone = %request.phone_number, "Directory lookup");

        let mut http = self
            .agent
            .post(&self.lookup_url())
            .set("content-type", "application/json")
            .set("accept", "application/json")
            .set("x-request-id", &request_id);
        if let Some(token) = self.config.bearer_token.as_ref() {
            http = http.set("authorization", &format!("Bearer {}", token));
        }

        match http.send_string(&payload) {
            Ok(response) => {
                let status = response.status();
                if !(200..=299).contains(&status) {
                    return Err(DirectoryError::Status { status });
                }
                let body = read_capped(response)?;
                Ok(parse_lookup_response(&body)?)
            }
            Err(ureq::Error::Status(status, _)) => Err(DirectoryError::Status { status }),
            Err(ureq::Error::Transport(transport)) => Err(DirectoryError::Transport {
                details: transport.to_string(),
            }),
        }
    }
}

fn read_capped(response: ureq::Response) -> Result<Vec<u8>, DirectoryError> {
    let mut body = Vec::new();
    response
        .into_reader()
        .take(MAX_RESPONSE_BYTES as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|err| DirectoryError::Transport {
            details: format!("failed to read lookup response: {}", err),
        })?;
    if body.len() > MAX_RESPONSE_BYTES {
        return Err(DirectoryError::Transport {
            details: "lookup response exceeded maximum size".to_string(),
        });
    }
    Ok(body)
}

/// Correlation id stamped on each request so directory logs can be matched
/// to client traces.
fn make_request_id() -> String {
    let mut random = rand::thread_rng();
    format!(
        "lkp-{}-{:x}",
        chrono::Utc::now().timestamp_millis(),
        random.next_u64()
    )
}
