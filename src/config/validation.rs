//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the parallel server lists line up
//! - Reject duplicate and empty endpoint names
//! - Produce the strongly typed runtime config
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Duplicate names are rejected rather than last-one-wins
//! - Runs before the config is accepted into the system

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::config::schema::{Endpoint, ProbeConfig, RawConfig, SmtpConfig, WatchdogConfig};

/// A single semantic problem found in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "server lists not the same size: {ips} ips, {ports} ports, {names} names, {https} https flags"
    )]
    MismatchedLists {
        ips: usize,
        ports: usize,
        names: usize,
        https: usize,
    },

    #[error("no servers configured")]
    NoServers,

    #[error("server at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate server name '{0}'")]
    DuplicateName(String),

    #[error("server '{name}' address '{address}' is not a valid URL: {reason}")]
    InvalidAddress {
        name: String,
        address: String,
        reason: String,
    },

    #[error("smtp_port '{0}' is not a valid port number")]
    InvalidSmtpPort(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("probe_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a raw config and convert it into the runtime form.
///
/// Collects every problem before reporting, so one fix round covers the
/// whole file.
pub fn validate_config(raw: RawConfig) -> Result<WatchdogConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let ips = raw.ips.into_vec();
    let ports = raw.ports.into_vec();
    let names = raw.names.into_vec();
    let https = raw.https.into_vec();

    let lists_align =
        ips.len() == ports.len() && ports.len() == names.len() && names.len() == https.len();
    if !lists_align {
        errors.push(ValidationError::MismatchedLists {
            ips: ips.len(),
            ports: ports.len(),
            names: names.len(),
            https: https.len(),
        });
    } else if names.is_empty() {
        errors.push(ValidationError::NoServers);
    }

    let mut endpoints = Vec::with_capacity(names.len());
    if lists_align {
        let mut seen = HashSet::new();
        for index in 0..names.len() {
            let name = &names[index];
            if name.is_empty() {
                errors.push(ValidationError::EmptyName { index });
                continue;
            }
            if !seen.insert(name.clone()) {
                errors.push(ValidationError::DuplicateName(name.clone()));
                continue;
            }

            let scheme = if https[index] { "https" } else { "http" };
            let address = format!("{}://{}:{}", scheme, ips[index], ports[index]);
            match Endpoint::new(name.clone(), address.clone()) {
                Ok(endpoint) => endpoints.push(endpoint),
                Err(e) => errors.push(ValidationError::InvalidAddress {
                    name: name.clone(),
                    address,
                    reason: e.to_string(),
                }),
            }
        }
    }

    let smtp_port = match raw.smtp_port.trim().parse::<u16>() {
        Ok(port) if port != 0 => Some(port),
        _ => {
            errors.push(ValidationError::InvalidSmtpPort(raw.smtp_port.clone()));
            None
        }
    };

    for (field, value) in [
        ("smtp_server", &raw.smtp_server),
        ("username", &raw.username),
        ("password", &raw.password),
    ] {
        if value.is_empty() {
            errors.push(ValidationError::EmptyField(field));
        }
    }

    if raw.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    match (errors.is_empty(), smtp_port) {
        (true, Some(port)) => Ok(WatchdogConfig {
            endpoints,
            probe: ProbeConfig {
                timeout: Duration::from_secs(raw.probe_timeout_secs),
            },
            smtp: SmtpConfig {
                server: raw.smtp_server,
                port,
                username: raw.username,
                password: raw.password,
                timezone: raw.timezone,
            },
        }),
        _ => Err(errors),
    }
}
