//! Single-shot server watchdog library.
//!
//! Probes a configured set of named endpoints concurrently and, when any
//! of them fail, sends one consolidated alert email.

pub mod config;
pub mod cycle;
pub mod notify;
pub mod observability;
pub mod probe;

pub use config::schema::{Endpoint, WatchdogConfig};
pub use cycle::{run_cycle, CycleSummary};
pub use notify::{Notifier, SmtpAlertTransport};
pub use probe::Prober;
