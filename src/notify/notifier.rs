//! Alert delivery orchestration.
//!
//! # Responsibilities
//! - Short-circuit when nothing failed
//! - Send exactly one alert per unhealthy cycle
//! - Keep delivery failures from escaping the notify boundary

use async_trait::async_trait;
use thiserror::Error;

use crate::notify::message::{build_alert, Alert};
use crate::probe::outcome::ProbeReport;

/// Errors surfaced by alert transports.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The configured account is not a valid mailbox address.
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message itself could not be built.
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connect, STARTTLS, auth, or send failed.
    #[error("smtp failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// How the notification step of a cycle ended.
///
/// Terminal states of the cycle's notify phase; `Failed` has already been
/// logged and is carried as data, never propagated as an error.
#[derive(Debug)]
pub enum NotifyOutcome {
    /// Nothing failed; the transport was never contacted.
    Skipped,

    /// The alert went out.
    Sent,

    /// Delivery failed somewhere between connect and send.
    Failed(NotifyError),
}

impl std::fmt::Display for NotifyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyOutcome::Skipped => write!(f, "skipped"),
            NotifyOutcome::Sent => write!(f, "sent"),
            NotifyOutcome::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

/// Delivery seam. Production uses the SMTP transport; tests use counting
/// stubs.
#[async_trait]
pub trait AlertTransport: Send + Sync {
    async fn deliver(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// Sends at most one consolidated alert per cycle.
pub struct Notifier<T: AlertTransport> {
    transport: T,
}

impl<T: AlertTransport> Notifier<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one alert when the report has failures, otherwise no-op.
    ///
    /// Best effort: a delivery failure is logged and returned as data.
    /// The probe results are already final by the time this runs, so
    /// nothing here can affect the cycle's outcome.
    pub async fn notify(&self, report: &ProbeReport) -> NotifyOutcome {
        if !report.has_failures() {
            tracing::debug!("All servers healthy, no notification needed");
            return NotifyOutcome::Skipped;
        }

        let alert = build_alert(report);
        match self.transport.deliver(&alert).await {
            Ok(()) => {
                tracing::info!(
                    failed = report.failed_names().len(),
                    "Down alert sent"
                );
                NotifyOutcome::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to send warning email");
                NotifyOutcome::Failed(e)
            }
        }
    }
}
