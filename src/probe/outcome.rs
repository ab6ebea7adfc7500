//! Per-endpoint probe results.

use std::time::Duration;

/// How a single probe ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Responded 200 within the timeout.
    Healthy,

    /// Responded, but with a status other than 200.
    BadStatus(u16),

    /// No usable response: connect failure, DNS, TLS, or timeout.
    Unreachable(String),
}

impl ProbeStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeStatus::Healthy)
    }

    /// Human-readable failure reason; `None` when healthy.
    pub fn reason(&self) -> Option<String> {
        match self {
            ProbeStatus::Healthy => None,
            ProbeStatus::BadStatus(code) => Some(format!("non 200 status code: {}", code)),
            ProbeStatus::Unreachable(reason) => Some(reason.clone()),
        }
    }
}

/// Result of one probe against one endpoint. Ephemeral: lives for the
/// duration of a cycle.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub name: String,
    pub address: String,
    pub status: ProbeStatus,
    pub elapsed: Duration,
}

/// All outcomes of one cycle, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    outcomes: Vec<ProbeOutcome>,
}

impl ProbeReport {
    pub fn new(outcomes: Vec<ProbeOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes for endpoints that failed this cycle, in report order.
    pub fn failed(&self) -> impl Iterator<Item = &ProbeOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_healthy())
    }

    /// Names of endpoints that failed this cycle.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed().map(|o| o.name.as_str()).collect()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.status.is_healthy())
    }
}
