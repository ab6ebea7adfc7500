//! Endpoint probing subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<Endpoint> (validated config)
//!     → prober.rs (one GET per endpoint, all concurrent)
//!     → outcome.rs (typed per-endpoint result with failure reason)
//!     → ProbeReport (configuration order, failure set derived)
//! ```
//!
//! # Design Decisions
//! - Exactly HTTP 200 counts as healthy
//! - One attempt per endpoint per cycle, no retries
//! - The per-probe timeout bounds the whole cycle's wall clock

pub mod outcome;
pub mod prober;

pub use outcome::{ProbeOutcome, ProbeReport, ProbeStatus};
pub use prober::Prober;
