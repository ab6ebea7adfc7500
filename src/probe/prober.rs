//! Active endpoint probing.
//!
//! # Responsibilities
//! - Probe every endpoint once per cycle
//! - Bound each probe with a fixed timeout
//! - Classify responses and record a failure reason

use std::time::{Duration, Instant};

use reqwest::StatusCode;

use crate::config::schema::Endpoint;
use crate::probe::outcome::{ProbeOutcome, ProbeReport, ProbeStatus};

/// Issues one bounded GET per endpoint, all concurrently.
pub struct Prober {
    client: reqwest::Client,
    timeout: Duration,
}

impl Prober {
    /// Create a prober with a per-probe timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("server-watchdog")
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe every endpoint concurrently and wait for all of them.
    ///
    /// Each probe runs as its own task, so a slow or dead endpoint never
    /// holds up the others and the cycle's wall clock stays around one
    /// timeout period rather than N of them. The call returns only once
    /// every probe has resolved.
    pub async fn probe_all(&self, endpoints: &[Endpoint]) -> ProbeReport {
        let mut handles = Vec::with_capacity(endpoints.len());

        for endpoint in endpoints {
            let client = self.client.clone();
            let target = endpoint.clone();
            let handle = tokio::spawn(async move { probe_one(client, target).await });
            handles.push((endpoint, handle));
        }

        // Join in spawn order: every task owns its own result slot and the
        // report keeps configuration order.
        let mut outcomes = Vec::with_capacity(handles.len());
        for (endpoint, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => ProbeOutcome {
                    name: endpoint.name.clone(),
                    address: endpoint.address.clone(),
                    status: ProbeStatus::Unreachable(format!("probe task failed: {}", e)),
                    elapsed: Duration::ZERO,
                },
            };
            outcomes.push(outcome);
        }

        ProbeReport::new(outcomes)
    }
}

/// Run a single probe to completion. Never panics and never returns early;
/// every path produces an outcome.
async fn probe_one(client: reqwest::Client, endpoint: Endpoint) -> ProbeOutcome {
    tracing::debug!(
        name = %endpoint.name,
        address = %endpoint.address,
        "Probing server"
    );

    let start = Instant::now();
    let result = client.get(endpoint.url.clone()).send().await;
    let elapsed = start.elapsed();

    let status = match result {
        Ok(response) if response.status() == StatusCode::OK => ProbeStatus::Healthy,
        Ok(response) => ProbeStatus::BadStatus(response.status().as_u16()),
        Err(e) if e.is_timeout() => {
            ProbeStatus::Unreachable(format!("request timed out after {:?}", elapsed))
        }
        Err(e) => ProbeStatus::Unreachable(e.to_string()),
    };

    match &status {
        ProbeStatus::Healthy => {
            tracing::debug!(
                name = %endpoint.name,
                elapsed_ms = elapsed.as_millis() as u64,
                "Server healthy"
            );
        }
        ProbeStatus::BadStatus(code) => {
            tracing::warn!(
                name = %endpoint.name,
                address = %endpoint.address,
                status = code,
                "Server responded with non 200 status code"
            );
        }
        ProbeStatus::Unreachable(reason) => {
            tracing::warn!(
                name = %endpoint.name,
                address = %endpoint.address,
                reason = %reason,
                "Server could not be reached"
            );
        }
    }

    ProbeOutcome {
        name: endpoint.name,
        address: endpoint.address,
        status,
        elapsed,
    }
}
