//! Integration tests for the probe side of the cycle: classification and
//! the bounded wall-clock property.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use server_watchdog::config::schema::Endpoint;
use server_watchdog::probe::{ProbeStatus, Prober};

mod common;

fn endpoint(name: &str, addr: SocketAddr) -> Endpoint {
    Endpoint::new(name, format!("http://{}", addr)).expect("mock address should parse")
}

#[tokio::test]
async fn test_http_200_is_healthy() {
    let addr = common::start_status_backend(200).await;
    let prober = Prober::new(Duration::from_secs(5)).unwrap();

    let report = prober.probe_all(&[endpoint("web", addr)]).await;

    assert!(!report.has_failures());
    assert_eq!(report.outcomes()[0].status, ProbeStatus::Healthy);
}

#[tokio::test]
async fn test_non_200_status_is_a_failure() {
    let addr = common::start_status_backend(503).await;
    let prober = Prober::new(Duration::from_secs(5)).unwrap();

    let report = prober.probe_all(&[endpoint("web", addr)]).await;

    assert_eq!(report.failed_names(), vec!["web"]);
    assert_eq!(report.outcomes()[0].status, ProbeStatus::BadStatus(503));
}

#[tokio::test]
async fn test_connection_refused_is_a_failure() {
    let addr = common::unused_addr().await;
    let prober = Prober::new(Duration::from_secs(5)).unwrap();

    let report = prober.probe_all(&[endpoint("db", addr)]).await;

    assert_eq!(report.failed_names(), vec!["db"]);
    assert!(matches!(
        report.outcomes()[0].status,
        ProbeStatus::Unreachable(_)
    ));
}

#[tokio::test]
async fn test_stalled_server_fails_via_timeout() {
    let addr = common::start_stalling_backend().await;
    let prober = Prober::new(Duration::from_secs(1)).unwrap();

    let report = prober.probe_all(&[endpoint("db", addr)]).await;

    assert_eq!(report.failed_names(), vec!["db"]);
    match &report.outcomes()[0].status {
        ProbeStatus::Unreachable(reason) => {
            assert!(reason.contains("timed out"), "reason was: {}", reason)
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

/// Wall clock for a cycle stays around one timeout period regardless of
/// how many endpoints are stalled.
#[tokio::test]
async fn test_probes_run_concurrently_not_sequentially() {
    let timeout = Duration::from_secs(1);
    let mut endpoints = Vec::new();
    for i in 0..4 {
        let addr = common::start_stalling_backend().await;
        endpoints.push(endpoint(&format!("slow-{}", i), addr));
    }

    let prober = Prober::new(timeout).unwrap();
    let start = Instant::now();
    let report = prober.probe_all(&endpoints).await;
    let elapsed = start.elapsed();

    assert_eq!(report.failed_names().len(), 4);
    // Sequential probing would take >= 4s here.
    assert!(
        elapsed < Duration::from_secs(3),
        "cycle took {:?}, probes must not serialize",
        elapsed
    );
}

#[tokio::test]
async fn test_one_dead_server_never_blocks_a_healthy_one() {
    let healthy = common::start_status_backend(200).await;
    let stalled = common::start_stalling_backend().await;

    let prober = Prober::new(Duration::from_secs(1)).unwrap();
    let report = prober
        .probe_all(&[endpoint("web", healthy), endpoint("db", stalled)])
        .await;

    assert_eq!(report.failed_names(), vec!["db"]);
    assert_eq!(report.outcomes()[0].status, ProbeStatus::Healthy);
    // The healthy probe resolved quickly even though its neighbor stalled.
    assert!(report.outcomes()[0].elapsed < Duration::from_millis(500));
}

#[tokio::test]
async fn test_report_keeps_configuration_order() {
    let a = common::start_status_backend(500).await;
    let b = common::start_status_backend(200).await;
    let c = common::start_status_backend(404).await;

    let prober = Prober::new(Duration::from_secs(5)).unwrap();
    let report = prober
        .probe_all(&[endpoint("a", a), endpoint("b", b), endpoint("c", c)])
        .await;

    let names: Vec<&str> = report.outcomes().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(report.failed_names(), vec!["a", "c"]);
}
