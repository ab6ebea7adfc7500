//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured events via tracing at every decision point
//!   (per-probe outcome, notify result, config failure)
//! - One init at process start; the entry point owns the flush guard
//! - Log level configurable via RUST_LOG

pub mod logging;
