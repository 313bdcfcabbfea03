#![cfg(test)]
//! Hand-rolled collaborator doubles for driving the discovery service.
//!
//! Each double is `Clone` and shares its recorded state, so a test can
//! hand a clone to the service and keep the original for assertions.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sonr_common::scan::{ScanError, ScanReport};
use sonr_core::discovery::DiscoveryObserver;
use sonr_core::probe::DeviceProbe;
use sonr_core::scanner::SubnetScanner;
use sonr_core::topology::TopologyProvider;

/// Probe with scripted answers and call accounting.
#[derive(Clone)]
pub struct ScriptedProbe {
    alive: bool,
    dvl_addrs: Vec<String>,
    checked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProbe {
    pub fn new(alive: bool, dvl_addrs: &[&str]) -> Self {
        Self {
            alive,
            dvl_addrs: dvl_addrs.iter().map(|s| s.to_string()).collect(),
            checked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Addresses the signature check was run against, in order.
    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceProbe for ScriptedProbe {
    async fn is_alive(&self, _addr: &str) -> bool {
        self.alive
    }

    async fn is_dvl(&self, addr: &str) -> bool {
        self.checked.lock().unwrap().push(addr.to_string());
        self.dvl_addrs.iter().any(|a| a == addr)
    }
}

/// Topology provider returning a fixed address list.
pub struct StaticTopology(Vec<String>);

impl StaticTopology {
    pub fn new(addrs: &[&str]) -> Self {
        Self(addrs.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl TopologyProvider for StaticTopology {
    async fn local_addresses(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// Topology provider whose fetch always fails.
pub struct BrokenTopology;

#[async_trait]
impl TopologyProvider for BrokenTopology {
    async fn local_addresses(&self) -> anyhow::Result<Vec<String>> {
        anyhow::bail!("management API unreachable")
    }
}

/// Scanner replaying scripted sweep outcomes, recording each call.
///
/// Once the script runs out, further sweeps return empty reports.
#[derive(Clone)]
pub struct ScriptedScanner {
    outcomes: Arc<Mutex<VecDeque<Result<ScanReport, ScanError>>>>,
    swept: Arc<Mutex<Vec<String>>>,
}

impl ScriptedScanner {
    pub fn new(outcomes: Vec<Result<ScanReport, ScanError>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            swept: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Masks passed to `sweep`, in call order.
    pub fn swept(&self) -> Vec<String> {
        self.swept.lock().unwrap().clone()
    }

    pub fn sweep_count(&self) -> usize {
        self.swept.lock().unwrap().len()
    }
}

#[async_trait]
impl SubnetScanner for ScriptedScanner {
    async fn sweep(&self, mask: &str) -> Result<ScanReport, ScanError> {
        self.swept.lock().unwrap().push(mask.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ScanReport::new()))
    }
}

/// Observer collecting every event in order.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl DiscoveryObserver for RecordingObserver {
    fn probe_attempt(&self, addr: &str) {
        self.record(format!("probe-attempt {addr}"));
    }

    fn probe_result(&self, addr: &str, hit: bool) {
        self.record(format!("probe-result {addr} {hit}"));
    }

    fn sweep_started(&self, mask: &str) {
        self.record(format!("sweep-started {mask}"));
    }

    fn sweep_finished(&self, mask: &str, candidates: usize) {
        self.record(format!("sweep-finished {mask} {candidates}"));
    }

    fn candidate_found(&self, addr: &str) {
        self.record(format!("candidate {addr}"));
    }
}

/// Report with empty payloads under the given keys.
pub fn report_with(keys: &[&str]) -> ScanReport {
    let mut report = ScanReport::new();
    for key in keys {
        report.insert(*key, serde_json::json!({}));
    }
    report
}
