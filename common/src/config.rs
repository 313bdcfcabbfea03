/// Address the device ships with. Probed before any subnet sweep.
pub const DEFAULT_DEVICE_ADDR: &str = "192.168.2.95";

/// Management endpoint that lists the configured ethernet interfaces.
pub const DEFAULT_TOPOLOGY_URL: &str = "http://host.docker.internal/cable-guy/v1.0/ethernet";

pub struct Config {
    /// Probed before any subnet sweep.
    pub default_addr: String,
    /// Management endpoint queried for the machine's own addresses.
    pub topology_url: String,
    /// Enumerate interfaces locally instead of asking the management API.
    pub local_topology: bool,
    /// 0 = full output, 1 = compact, 2 = result only.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_addr: DEFAULT_DEVICE_ADDR.to_string(),
            topology_url: DEFAULT_TOPOLOGY_URL.to_string(),
            local_topology: false,
            quiet: 0,
            no_banner: false,
        }
    }
}
