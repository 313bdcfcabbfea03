//! Where the list of known local addresses comes from.
//!
//! These addresses do double duty: each one seeds a scan mask, and they
//! are excluded from the candidate list afterwards (the machine cannot
//! be its own DVL).

use async_trait::async_trait;
use serde::Deserialize;

use sonr_common::network::interface;

/// Topology capability: every IPv4 address currently assigned to this
/// machine.
#[async_trait]
pub trait TopologyProvider: Send + Sync {
    async fn local_addresses(&self) -> anyhow::Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct InterfaceRecord {
    addresses: Vec<AddressRecord>,
}

#[derive(Debug, Deserialize)]
struct AddressRecord {
    ip: String,
}

fn flatten(records: Vec<InterfaceRecord>) -> Vec<String> {
    records
        .into_iter()
        .flat_map(|record| record.addresses)
        .map(|address| address.ip)
        .collect()
}

/// Asks the vehicle's management API which addresses are configured.
pub struct ManagementApi {
    client: reqwest::Client,
    endpoint: String,
}

impl ManagementApi {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl TopologyProvider for ManagementApi {
    async fn local_addresses(&self) -> anyhow::Result<Vec<String>> {
        let records: Vec<InterfaceRecord> = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(flatten(records))
    }
}

/// Enumerates interfaces directly when no management API is around.
pub struct LocalInterfaces;

#[async_trait]
impl TopologyProvider for LocalInterfaces {
    async fn local_addresses(&self) -> anyhow::Result<Vec<String>> {
        Ok(interface::local_ipv4_addresses())
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
