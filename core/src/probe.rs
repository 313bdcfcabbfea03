//! HTTP probing of device candidates.
//!
//! Two checks share the device's `/api/v1/about` endpoint: a cheap
//! liveness probe for the factory-default address and the full identity
//! check run against every sweep candidate. Both swallow their
//! failures; "could not reach it" and "it is not a DVL" are the same
//! answer here.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Product token the about endpoint must report.
const PRODUCT_TOKEN: &str = "DVL";

/// The default address gets two seconds to answer before the sweep starts.
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(2);

/// HTTP-fetch capability the orchestration talks to.
#[async_trait]
pub trait DeviceProbe: Send + Sync {
    /// Whether anything answers 200 on the status endpoint at `addr`.
    async fn is_alive(&self, addr: &str) -> bool;

    /// Whether the device at `addr` identifies itself as a DVL.
    async fn is_dvl(&self, addr: &str) -> bool;
}

#[derive(Debug, Deserialize)]
struct About {
    product_name: String,
}

pub struct HttpDeviceProbe {
    client: reqwest::Client,
}

impl HttpDeviceProbe {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    fn about_url(addr: &str) -> String {
        format!("http://{addr}/api/v1/about")
    }
}

#[async_trait]
impl DeviceProbe for HttpDeviceProbe {
    async fn is_alive(&self, addr: &str) -> bool {
        let request = self
            .client
            .get(Self::about_url(addr))
            .timeout(LIVENESS_TIMEOUT);

        match request.send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(err) => {
                debug!("{addr} not responding: {err}");
                false
            }
        }
    }

    async fn is_dvl(&self, addr: &str) -> bool {
        // The identity check inherits the client's default timeout.
        let response = match self.client.get(Self::about_url(addr)).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("{addr} is not a dvl: {err}");
                return false;
            }
        };

        match response.json::<About>().await {
            Ok(about) => about.product_name.contains(PRODUCT_TOKEN),
            Err(err) => {
                debug!("{addr} is not a dvl: {err}");
                false
            }
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
