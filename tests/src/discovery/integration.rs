#![cfg(test)]
use std::time::Duration;

use sonr_common::retry::RetryPolicy;
use sonr_common::scan::ScanError;
use sonr_core::discovery::{DiscoveryOutcome, DiscoveryService};

use crate::doubles::{
    BrokenTopology, RecordingObserver, ScriptedProbe, ScriptedScanner, StaticTopology, report_with,
};

const DEFAULT_ADDR: &str = "192.168.2.95";

fn quick_retry() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(1))
}

fn broken(reason: &str) -> Result<sonr_common::scan::ScanReport, ScanError> {
    Err(ScanError::Execution(reason.to_string()))
}

#[tokio::test]
async fn default_address_short_circuits_the_sweep() {
    let probe = ScriptedProbe::new(true, &[]);
    let scanner = ScriptedScanner::new(vec![]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(StaticTopology::new(&["10.0.0.5"])),
        Box::new(scanner.clone()),
    );

    let outcome = service.discover().await;

    assert_eq!(
        outcome,
        DiscoveryOutcome::DefaultAddress(DEFAULT_ADDR.to_string())
    );
    assert_eq!(
        scanner.sweep_count(),
        0,
        "scanner must not run when the default address answers"
    );
}

#[tokio::test]
async fn sweep_finds_the_device_behind_one_subnet() {
    let probe = ScriptedProbe::new(false, &["10.0.0.9"]);
    let scanner = ScriptedScanner::new(vec![Ok(report_with(&[
        "10.0.0.5", "10.0.0.9", "runtime",
    ]))]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(StaticTopology::new(&["10.0.0.5"])),
        Box::new(scanner.clone()),
    );

    let outcome = service.discover().await;

    assert_eq!(outcome, DiscoveryOutcome::ScanHit("10.0.0.9".to_string()));
    assert_eq!(scanner.swept(), ["10.0.0.*"]);
    // The machine's own address was filtered out before verification.
    assert_eq!(probe.checked(), ["10.0.0.9"]);
}

#[tokio::test]
async fn candidates_from_two_masks_verify_in_scan_order() {
    let probe = ScriptedProbe::new(false, &["192.168.3.9"]);
    let scanner = ScriptedScanner::new(vec![
        Ok(report_with(&["10.0.0.8", "stats"])),
        Ok(report_with(&["192.168.3.9"])),
    ]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(StaticTopology::new(&["10.0.0.5", "192.168.3.7"])),
        Box::new(scanner.clone()),
    );

    let outcome = service.discover().await;

    assert_eq!(
        outcome,
        DiscoveryOutcome::ScanHit("192.168.3.9".to_string())
    );
    assert_eq!(scanner.swept(), ["10.0.0.*", "192.168.3.*"]);
    assert_eq!(probe.checked(), ["10.0.0.8", "192.168.3.9"]);
}

#[tokio::test]
async fn execution_errors_retry_until_the_tool_recovers() {
    let probe = ScriptedProbe::new(false, &["10.0.0.9"]);
    let scanner = ScriptedScanner::new(vec![
        broken("dns failure"),
        broken("dns failure"),
        Ok(report_with(&["10.0.0.9"])),
    ]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(StaticTopology::new(&["10.0.0.5"])),
        Box::new(scanner.clone()),
    )
    .with_retry(quick_retry());

    let outcome = service.discover().await;

    assert_eq!(outcome, DiscoveryOutcome::ScanHit("10.0.0.9".to_string()));
    assert_eq!(scanner.sweep_count(), 3);
}

#[tokio::test]
async fn exhausted_retries_degrade_to_not_found() {
    let probe = ScriptedProbe::new(false, &[]);
    let scanner = ScriptedScanner::new(vec![
        broken("no such file"),
        broken("no such file"),
        broken("no such file"),
    ]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(StaticTopology::new(&["10.0.0.5"])),
        Box::new(scanner.clone()),
    )
    .with_retry(quick_retry());

    let outcome = service.discover().await;

    assert_eq!(outcome, DiscoveryOutcome::NotFound);
    assert_eq!(
        scanner.sweep_count(),
        3,
        "the bounded policy must stop the retry loop"
    );
}

#[tokio::test]
async fn no_matching_candidate_means_not_found() {
    let probe = ScriptedProbe::new(false, &[]);
    let scanner = ScriptedScanner::new(vec![Ok(report_with(&["10.0.0.8", "10.0.0.9"]))]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(StaticTopology::new(&["10.0.0.5"])),
        Box::new(scanner.clone()),
    );

    let outcome = service.discover().await;

    assert_eq!(outcome, DiscoveryOutcome::NotFound);
    // Every candidate was still given its chance, in order.
    assert_eq!(probe.checked(), ["10.0.0.8", "10.0.0.9"]);
}

#[tokio::test]
async fn topology_failure_degrades_to_not_found() {
    let probe = ScriptedProbe::new(false, &[]);
    let scanner = ScriptedScanner::new(vec![]);
    let service = DiscoveryService::new(
        Box::new(probe.clone()),
        Box::new(BrokenTopology),
        Box::new(scanner.clone()),
    );

    let outcome = service.discover().await;

    assert_eq!(outcome, DiscoveryOutcome::NotFound);
    assert_eq!(scanner.sweep_count(), 0, "no addresses means no masks to sweep");
}

#[tokio::test]
async fn observer_sees_the_probe_and_candidate_sequence() {
    let probe = ScriptedProbe::new(false, &["10.0.0.9"]);
    let scanner = ScriptedScanner::new(vec![Ok(report_with(&["10.0.0.9"]))]);
    let observer = RecordingObserver::default();
    let service = DiscoveryService::new(
        Box::new(probe),
        Box::new(StaticTopology::new(&["10.0.0.5"])),
        Box::new(scanner),
    )
    .with_observer(Box::new(observer.clone()));

    let outcome = service.discover().await;

    assert_eq!(outcome, DiscoveryOutcome::ScanHit("10.0.0.9".to_string()));
    assert_eq!(
        observer.events(),
        [
            format!("probe-attempt {DEFAULT_ADDR}"),
            format!("probe-result {DEFAULT_ADDR} false"),
            "sweep-started 10.0.0.*".to_string(),
            "sweep-finished 10.0.0.* 1".to_string(),
            "candidate 10.0.0.9".to_string(),
            "probe-attempt 10.0.0.9".to_string(),
            "probe-result 10.0.0.9 true".to_string(),
        ]
    );
}

#[tokio::test]
async fn custom_default_address_is_probed_and_reported() {
    let probe = ScriptedProbe::new(true, &[]);
    let service = DiscoveryService::new(
        Box::new(probe),
        Box::new(StaticTopology::new(&[])),
        Box::new(ScriptedScanner::new(vec![])),
    )
    .with_default_addr("10.1.1.1");

    let outcome = service.discover().await;

    assert_eq!(
        outcome,
        DiscoveryOutcome::DefaultAddress("10.1.1.1".to_string())
    );
    assert_eq!(outcome.address(), Some("10.1.1.1"));
}
