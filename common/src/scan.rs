//! # Sweep Result Model
//!
//! The external scanner hands back a mapping-like report: one entry per
//! discovered address, plus bookkeeping entries keyed `runtime` and
//! `stats`. Downstream code cares about the keys; the payloads are kept
//! as raw JSON for logging and debugging.

use serde_json::Value;
use thiserror::Error;

/// Bookkeeping keys the scanner emits alongside host records.
pub const METADATA_KEYS: [&str; 2] = ["runtime", "stats"];

/// Failure modes of a subnet sweep.
///
/// `Execution` means the scanner invocation itself went wrong; an empty
/// report is a result, not an error.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scanner execution failed: {0}")]
    Execution(String),
    #[error("scanner gave up after {attempts} attempts: {last}")]
    AttemptsExhausted { attempts: u32, last: String },
}

/// Sweep result, in the order the scanner reported it.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    entries: Vec<(String, Value)>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry; re-inserting a key overwrites its payload in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Result keys that could be the device, in scan order.
    ///
    /// Addresses already assigned to this machine cannot be the device,
    /// and the scanner's bookkeeping keys are not addresses at all.
    pub fn candidates(&self, known: &[String]) -> Vec<String> {
        let mut candidates = Vec::new();
        for (key, _) in &self.entries {
            if known.iter().any(|addr| addr == key) {
                continue;
            }
            if METADATA_KEYS.contains(&key.as_str()) {
                continue;
            }
            candidates.push(key.clone());
        }
        candidates
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
