//! Server watchdog (single-shot).
//!
//! One invocation runs exactly one check-and-notify cycle:
//!
//! ```text
//! config file (JSON)
//!     → config (parse & validate)
//!     → probe (concurrent GETs, bounded timeout)
//!     → notify (single SMTP alert, best effort)
//!     → exit
//! ```
//!
//! Recurring runs come from an external scheduler such as cron or a
//! systemd timer; the process itself never loops.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use server_watchdog::config::loader::load_config;
use server_watchdog::cycle::run_cycle;
use server_watchdog::notify::{Notifier, SmtpAlertTransport};
use server_watchdog::observability::logging;
use server_watchdog::probe::Prober;

#[derive(Parser)]
#[command(name = "server-watchdog")]
#[command(about = "Probes configured servers and emails one consolidated down alert", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, default_value = "server_watchdog.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    tracing::info!("server-watchdog v0.1.0 starting");

    // Fail fast: a config problem aborts before any probe is issued.
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                path = %cli.config.display(),
                error = %e,
                "Config file not OK, aborting"
            );
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        endpoints = config.endpoints.len(),
        probe_timeout_secs = config.probe.timeout.as_secs(),
        smtp_server = %config.smtp.server,
        "Configuration loaded"
    );

    let prober = match Prober::new(config.probe.timeout) {
        Ok(prober) => prober,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build probe client");
            return ExitCode::FAILURE;
        }
    };
    let notifier = Notifier::new(SmtpAlertTransport::new(config.smtp.clone()));

    let summary = run_cycle(&config.endpoints, &prober, &notifier).await;

    tracing::info!(
        probed = summary.probed,
        failed = summary.failed.len(),
        notification = %summary.notification,
        "Cycle complete"
    );

    ExitCode::SUCCESS
}
