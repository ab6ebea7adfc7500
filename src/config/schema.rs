//! Configuration schema definitions.
//!
//! The on-disk format is the legacy parallel-array JSON layout; the
//! runtime types are the strongly typed form produced by validation.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// On-disk configuration, exactly as deployed installations write it.
///
/// `ips`, `ports`, `names` and `https` are parallel arrays describing one
/// server per index. `smtp_port` is a string in the legacy format and is
/// parsed during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub ips: OneOrMany<String>,
    pub ports: OneOrMany<u16>,
    pub names: OneOrMany<String>,
    pub https: OneOrMany<bool>,

    pub smtp_server: String,
    pub smtp_port: String,
    pub username: String,
    pub password: String,
    pub timezone: String,

    /// Per-probe timeout in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

fn default_probe_timeout_secs() -> u64 {
    60
}

/// Accepts either a bare scalar or a list.
///
/// Legacy configs describing a single server use bare scalars for the
/// server fields; the coercion to a list is explicit here rather than
/// implicit downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct WatchdogConfig {
    /// Endpoints to probe, in configuration order.
    pub endpoints: Vec<Endpoint>,

    /// Probe settings.
    pub probe: ProbeConfig,

    /// SMTP account used for alert delivery.
    pub smtp: SmtpConfig,
}

/// A named, addressable target to health-check.
///
/// Immutable for the duration of a cycle. Names are unique; validation
/// rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Unique endpoint name, used as the key in reports and alerts.
    pub name: String,

    /// Address exactly as configured, used in alerts and logs.
    pub address: String,

    /// Parsed form of `address`, used for probing.
    pub url: Url,
}

impl Endpoint {
    /// Build an endpoint from a name and an address string.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let address = address.into();
        let url = Url::parse(&address)?;
        Ok(Self {
            name: name.into(),
            address,
            url,
        })
    }
}

/// Probe settings.
#[derive(Debug, Clone, Copy)]
pub struct ProbeConfig {
    /// Per-probe timeout. Also bounds the wall clock of a whole cycle.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(default_probe_timeout_secs()),
        }
    }
}

/// SMTP account used for alert delivery. The account is both sender and
/// sole recipient.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,

    /// Carried from the legacy format; nothing in the watchdog consumes it.
    pub timezone: String,
}
