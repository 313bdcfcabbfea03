//! Shells out to nmap for the actual sweep.
//!
//! `-oG -` keeps the output line-oriented: one `Host:` line per
//! answering address and a `# Nmap done` trailer with run statistics.
//! The trailer is folded into the report under the scanner's
//! bookkeeping keys, so downstream filtering sees the same mapping
//! shape the tool emits.

use async_trait::async_trait;
use serde_json::json;
use tokio::process::Command;

use sonr_common::scan::{ScanError, ScanReport};

use super::SubnetScanner;

/// Port the device's HTTP API answers on.
const DEFAULT_PORT: u16 = 80;

pub struct NmapScanner {
    port: u16,
}

impl NmapScanner {
    pub fn new() -> Self {
        Self { port: DEFAULT_PORT }
    }

    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

impl Default for NmapScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubnetScanner for NmapScanner {
    async fn sweep(&self, mask: &str) -> Result<ScanReport, ScanError> {
        let output = Command::new("nmap")
            .arg("-p")
            .arg(self.port.to_string())
            .arg("--open")
            .arg("-oG")
            .arg("-")
            .arg(mask)
            .output()
            .await
            .map_err(|err| ScanError::Execution(format!("failed to launch nmap: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::Execution(format!(
                "nmap exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(parse_greppable(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parses `-oG` output into the mapping-like report shape.
fn parse_greppable(text: &str) -> ScanReport {
    let mut report = ScanReport::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("Host: ") {
            parse_host_line(rest, &mut report);
        } else if let Some(rest) = line.strip_prefix("# Nmap done at ") {
            parse_trailer(rest, &mut report);
        }
    }

    report
}

/// `10.0.0.9 ()\tPorts: 80/open/tcp//http///`
fn parse_host_line(rest: &str, report: &mut ScanReport) {
    let Some(addr) = rest.split_whitespace().next() else {
        return;
    };
    let Some((_, ports)) = rest.split_once("Ports: ") else {
        // Status-only lines carry no port table. `--open` already drops
        // portless hosts, but stay strict about what becomes a candidate.
        return;
    };

    let open_ports: Vec<u16> = ports
        .split(',')
        .filter_map(|entry| {
            let mut fields = entry.trim().split('/');
            let port = fields.next()?.parse().ok()?;
            match fields.next() {
                Some("open") => Some(port),
                _ => None,
            }
        })
        .collect();

    if !open_ports.is_empty() && report.get(addr).is_none() {
        report.insert(addr, json!({ "ports": open_ports }));
    }
}

/// `Fri Aug  7 10:00:04 2026 -- 256 IP addresses (2 hosts up) scanned in 2.57 seconds`
fn parse_trailer(rest: &str, report: &mut ScanReport) {
    let Some((finished_at, summary)) = rest.split_once(" -- ") else {
        return;
    };

    let elapsed = summary
        .split_once(" scanned in ")
        .map(|(_, tail)| tail.trim_end_matches(" seconds").to_string());

    report.insert(
        "runtime",
        json!({ "finished_at": finished_at, "elapsed": elapsed }),
    );
    report.insert("stats", json!({ "summary": summary }));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
