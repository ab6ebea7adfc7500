//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON, legacy parallel-array format)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks, all errors collected)
//!     → WatchdogConfig (validated, strongly typed, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; one config per cycle
//! - Validation separates syntactic (serde) from semantic checks
//! - Any config problem is fatal before the cycle starts

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Endpoint, ProbeConfig, SmtpConfig, WatchdogConfig};
pub use validation::{validate_config, ValidationError};
