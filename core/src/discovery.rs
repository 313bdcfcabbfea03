//! # Device Discovery Service
//!
//! Implements the core "find the DVL" use case.
//!
//! The service owns no I/O of its own: probing, topology, and sweeping
//! are injected collaborators, and progress is reported through a
//! structured observer rather than print calls inside the logic.

use tracing::{debug, info};

use sonr_common::config::DEFAULT_DEVICE_ADDR;
use sonr_common::network::mask::wildcard_masks;
use sonr_common::retry::RetryPolicy;

use crate::probe::DeviceProbe;
use crate::scanner::{self, SubnetScanner};
use crate::topology::TopologyProvider;

/// How a discovery run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// The device answered on the factory-default address.
    DefaultAddress(String),
    /// The device was found by sweeping the local subnets.
    ScanHit(String),
    NotFound,
}

impl DiscoveryOutcome {
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::DefaultAddress(addr) | Self::ScanHit(addr) => Some(addr),
            Self::NotFound => None,
        }
    }
}

/// Observation points the orchestration reports through.
///
/// Implementations drive spinners or logs; every point defaults to a
/// no-op so observers implement only what they care about.
pub trait DiscoveryObserver: Send + Sync {
    fn probe_attempt(&self, _addr: &str) {}
    fn probe_result(&self, _addr: &str, _hit: bool) {}
    fn sweep_started(&self, _mask: &str) {}
    fn sweep_finished(&self, _mask: &str, _candidates: usize) {}
    fn candidate_found(&self, _addr: &str) {}
}

/// Observer that ignores every event.
pub struct NullObserver;

impl DiscoveryObserver for NullObserver {}

/// Application service for locating the device.
///
/// Orchestrates discovery by:
/// 1. probing the factory-default address,
/// 2. deriving scan masks from the machine's own addresses,
/// 3. delegating each sweep to the [`SubnetScanner`],
/// 4. verifying candidates through the [`DeviceProbe`].
pub struct DiscoveryService {
    probe: Box<dyn DeviceProbe>,
    topology: Box<dyn TopologyProvider>,
    scanner: Box<dyn SubnetScanner>,
    observer: Box<dyn DiscoveryObserver>,
    retry: RetryPolicy,
    default_addr: String,
}

impl DiscoveryService {
    pub fn new(
        probe: Box<dyn DeviceProbe>,
        topology: Box<dyn TopologyProvider>,
        scanner: Box<dyn SubnetScanner>,
    ) -> Self {
        Self {
            probe,
            topology,
            scanner,
            observer: Box::new(NullObserver),
            retry: RetryPolicy::default(),
            default_addr: DEFAULT_DEVICE_ADDR.to_string(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn DiscoveryObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_default_addr(mut self, addr: impl Into<String>) -> Self {
        self.default_addr = addr.into();
        self
    }

    /// Runs the full discovery flow.
    ///
    /// Collaborator failures degrade to "keep going"; the returned
    /// outcome is the only outward signal.
    pub async fn discover(&self) -> DiscoveryOutcome {
        info!("trying default DVL address {}", self.default_addr);
        self.observer.probe_attempt(&self.default_addr);
        if self.probe.is_alive(&self.default_addr).await {
            self.observer.probe_result(&self.default_addr, true);
            info!("DVL found at default address {}", self.default_addr);
            return DiscoveryOutcome::DefaultAddress(self.default_addr.clone());
        }
        self.observer.probe_result(&self.default_addr, false);

        let known = match self.topology.local_addresses().await {
            Ok(addrs) => addrs,
            Err(err) => {
                debug!("topology fetch failed: {err}");
                Vec::new()
            }
        };

        let masks = wildcard_masks(&known);
        info!("sweeping {} subnet mask(s) for DVLs", masks.len());

        let candidates = self.collect_candidates(&masks, &known).await;
        info!("{} candidate(s) for being a DVL", candidates.len());

        for candidate in &candidates {
            self.observer.probe_attempt(candidate);
            let hit = self.probe.is_dvl(candidate).await;
            self.observer.probe_result(candidate, hit);
            if hit {
                info!("DVL found at {candidate}");
                return DiscoveryOutcome::ScanHit(candidate.clone());
            }
        }

        DiscoveryOutcome::NotFound
    }

    /// Sweeps every mask in order, strictly one at a time.
    async fn collect_candidates(&self, masks: &[String], known: &[String]) -> Vec<String> {
        let mut candidates = Vec::new();

        for mask in masks {
            self.observer.sweep_started(mask);
            let report =
                match scanner::sweep_with_retry(self.scanner.as_ref(), mask, self.retry).await {
                    Ok(report) => report,
                    Err(err) => {
                        // A mask the scanner cannot cover is skipped, not fatal.
                        debug!("abandoning sweep of {mask}: {err}");
                        self.observer.sweep_finished(mask, 0);
                        continue;
                    }
                };

            let found = report.candidates(known);
            self.observer.sweep_finished(mask, found.len());
            for addr in &found {
                self.observer.candidate_found(addr);
            }
            candidates.extend(found);
        }

        candidates
    }
}
