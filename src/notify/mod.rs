//! Alert notification subsystem.
//!
//! # Data Flow
//! ```text
//! ProbeReport (failures present?)
//!     ├─ no  → Skipped (transport never contacted)
//!     └─ yes → message.rs (one consolidated Alert)
//!              → AlertTransport::deliver (single SMTP send)
//!              → Sent | Failed (logged, swallowed)
//! ```
//!
//! # Design Decisions
//! - One connection, one message per unhealthy cycle
//! - Sender and recipient are the same configured account
//! - Delivery failures never escape the notifier

pub mod message;
pub mod notifier;
pub mod smtp;

pub use message::{build_alert, Alert};
pub use notifier::{AlertTransport, Notifier, NotifyError, NotifyOutcome};
pub use smtp::SmtpAlertTransport;
