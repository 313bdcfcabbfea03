//! The central **abstraction** for subnet sweeps.
//!
//! This module defines the interface sweep strategies implement and the
//! bounded retry loop that wraps a flaky scanner invocation. High-level
//! code depends on [`SubnetScanner`], never on the concrete nmap
//! runner.

use async_trait::async_trait;
use tracing::debug;

use sonr_common::retry::RetryPolicy;
use sonr_common::scan::{ScanError, ScanReport};

mod nmap;

pub use nmap::NmapScanner;

/// Sweep strategy: find the hosts in `mask` answering on the probe port.
#[async_trait]
pub trait SubnetScanner: Send + Sync {
    async fn sweep(&self, mask: &str) -> Result<ScanReport, ScanError>;
}

/// Re-runs `sweep` while the scanner invocation itself keeps failing.
///
/// An empty report is a result, not a failure; only
/// [`ScanError::Execution`] is retried, and the policy caps how long a
/// broken scanner can stall the sweep.
pub async fn sweep_with_retry(
    scanner: &dyn SubnetScanner,
    mask: &str,
    policy: RetryPolicy,
) -> Result<ScanReport, ScanError> {
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match scanner.sweep(mask).await {
            Ok(report) => return Ok(report),
            Err(ScanError::Execution(reason)) => {
                if attempts >= policy.max_attempts {
                    return Err(ScanError::AttemptsExhausted {
                        attempts,
                        last: reason,
                    });
                }
                debug!(
                    "error running scanner on {mask}: {reason}, trying again in {:?}",
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(other) => return Err(other),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
