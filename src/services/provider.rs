//! Upstream geolocation provider
//!
//! Queries an external HTTP API (ip-api.com compatible) for information
//! about a public IP address. The provider sits behind the `IpInfoLookup`
//! trait so the handler layer can be exercised against a mock.

use std::sync::OnceLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use ureq::Agent;

use crate::errors::{IpinfodError, Result};

/// Shared HTTP Agent (ureq's Agent is Send + Sync).
///
/// No timeout override; the transport default applies.
static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn http_agent() -> &'static Agent {
    HTTP_AGENT.get_or_init(|| Agent::config_builder().build().into())
}

/// Geolocation record for a single IP address.
///
/// All fields except `status` and `query` are optional: the provider omits
/// or nulls them when it has no data, and both cases decode to `None` here
/// (and serialize back as `null`). The upstream `as` field collides with the
/// Rust keyword, so it is aliased at the serde boundary only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpInfo {
    pub status: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    /// Autonomous-system descriptor, `as` on the wire
    #[serde(rename = "as")]
    pub autonomous_system: Option<String>,
    /// The address the upstream actually looked up, echoed back
    pub query: String,
}

/// IP information lookup trait
#[async_trait]
pub trait IpInfoLookup: Send + Sync {
    /// Look up geolocation info for a public IP address or hostname.
    async fn lookup(&self, ip: &str) -> Result<IpInfo>;

    /// Provider name, for logs.
    fn name(&self) -> &'static str;
}

/// External API provider
///
/// Issues a single GET to `{endpoint}/{ip}` per lookup. No caching, no
/// retries; every request maps to exactly one upstream call.
pub struct ExternalApiProvider {
    endpoint: String,
}

impl ExternalApiProvider {
    /// `endpoint` is the upstream base URL, e.g. `http://ip-api.com/json`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and validate one upstream response (sync, runs in spawn_blocking).
    fn fetch_sync(url: String) -> Result<IpInfo> {
        let agent = http_agent();

        let resp = match agent.get(&url).call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(code)) => {
                warn!("Upstream request to \"{}\" returned status {}", url, code);
                return Err(IpinfodError::upstream_unavailable(format!(
                    "upstream service returned status {code}"
                )));
            }
            Err(e) => {
                warn!("Upstream request to \"{}\" failed: {}", url, e);
                return Err(IpinfodError::upstream_unavailable(format!(
                    "upstream service unreachable: {e}"
                )));
            }
        };

        let json: serde_json::Value = resp.into_body().read_json().map_err(|e| {
            warn!("Upstream response from \"{}\" parse failed: {}", url, e);
            IpinfodError::serialization(format!("invalid upstream payload: {e}"))
        })?;

        // ip-api sets "status": "fail" on bad queries
        if json["status"].as_str() != Some("success") {
            let msg = json["message"].as_str().unwrap_or("unknown error");
            trace!("Upstream rejected query: {}", msg);
            return Err(IpinfodError::upstream_rejected(format!(
                "IP lookup failed: {msg}"
            )));
        }

        Ok(serde_json::from_value(json)?)
    }
}

#[async_trait]
impl IpInfoLookup for ExternalApiProvider {
    async fn lookup(&self, ip: &str) -> Result<IpInfo> {
        let url = format!("{}/{}", self.endpoint, ip);
        trace!("Fetching IP info from {}", url);

        // ureq is synchronous; run the request on the blocking pool
        tokio::task::spawn_blocking(move || Self::fetch_sync(url))
            .await
            .map_err(|e| {
                IpinfodError::upstream_unavailable(format!("lookup task failed: {e}"))
            })?
    }

    fn name(&self) -> &'static str {
        "ExternalAPI"
    }
}
