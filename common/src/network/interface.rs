use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

/// Name plus IPv4 addresses of one usable interface.
#[derive(Debug, Clone)]
pub struct InterfaceSummary {
    pub name: String,
    pub addrs: Vec<String>,
}

pub trait NetworkInterfaceExt {
    fn ipv4_addrs(&self) -> Vec<String>;
}

impl NetworkInterfaceExt for NetworkInterface {
    fn ipv4_addrs(&self) -> Vec<String> {
        self.ips
            .iter()
            .filter_map(|net| match net {
                IpNetwork::V4(v4) => Some(v4.ip().to_string()),
                _ => None,
            })
            .collect()
    }
}

fn is_usable(interface: &NetworkInterface) -> bool {
    interface.is_up() && !interface.is_loopback() && !interface.ips.is_empty()
}

/// Interfaces a sweep could be derived from, wired first.
pub fn usable_interfaces() -> Vec<NetworkInterface> {
    let mut interfaces: Vec<NetworkInterface> = datalink::interfaces()
        .into_iter()
        .filter(is_usable)
        .collect();

    // Wired links answer before wireless ones; "e"-named interfaces
    // (eth0, enp3s0, en0) approximate wired without platform probing.
    interfaces.sort_by_key(|i| if i.name.starts_with('e') { 0 } else { 1 });
    interfaces
}

/// Names and IPv4 addresses of every usable interface.
pub fn interface_summaries() -> Vec<InterfaceSummary> {
    usable_interfaces()
        .iter()
        .map(|iface| InterfaceSummary {
            name: iface.name.clone(),
            addrs: iface.ipv4_addrs(),
        })
        .filter(|summary| !summary.addrs.is_empty())
        .collect()
}

/// Every IPv4 address assigned to a usable interface, flattened.
pub fn local_ipv4_addresses() -> Vec<String> {
    usable_interfaces()
        .iter()
        .flat_map(|iface| iface.ipv4_addrs())
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
