//! The check-and-notify cycle.
//!
//! # Data Flow
//! ```text
//! Vec<Endpoint>
//!     → Prober::probe_all (concurrent, bounded by the probe timeout)
//!     → ProbeReport (join barrier: every probe resolved)
//!     → Notifier::notify (single alert, or no-op when all healthy)
//!     → CycleSummary
//! ```
//!
//! # Design Decisions
//! - Notification runs strictly after the last probe resolves
//! - A failed notification never fails the cycle
//! - One cycle per process; scheduling is external

use crate::config::schema::Endpoint;
use crate::notify::notifier::{AlertTransport, Notifier, NotifyOutcome};
use crate::probe::prober::Prober;

/// What one cycle did, for the entry point to log.
#[derive(Debug)]
pub struct CycleSummary {
    /// Number of endpoints probed.
    pub probed: usize,

    /// Names of endpoints that failed, in configuration order.
    pub failed: Vec<String>,

    /// How the notification step ended.
    pub notification: NotifyOutcome,
}

/// Run one full probe-all-then-maybe-notify cycle.
pub async fn run_cycle<T: AlertTransport>(
    endpoints: &[Endpoint],
    prober: &Prober,
    notifier: &Notifier<T>,
) -> CycleSummary {
    let report = prober.probe_all(endpoints).await;

    let failed: Vec<String> = report
        .failed_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    if !failed.is_empty() {
        tracing::warn!(
            failed = failed.len(),
            probed = report.len(),
            "Cycle found unhealthy servers"
        );
    }

    let notification = notifier.notify(&report).await;

    CycleSummary {
        probed: report.len(),
        failed,
        notification,
    }
}
