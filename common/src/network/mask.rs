//! # Scan Mask Derivation
//!
//! The sweep does not guess subnets; it wildcards the machine's own
//! addresses. `10.0.0.5` becomes `10.0.0.*`, which tells the scanner
//! to cover that whole /24.

/// Wildcard token the scanner understands as "every last octet".
pub const WILDCARD: &str = "*";

/// Replaces the final dotted segment of `addr` with the wildcard.
///
/// The input is assumed to already be in dotted form; a segment-free
/// string collapses to the bare wildcard.
pub fn wildcard_mask(addr: &str) -> String {
    let mut segments: Vec<&str> = addr.split('.').collect();
    if let Some(last) = segments.last_mut() {
        *last = WILDCARD;
    }
    segments.join(".")
}

/// One mask per input address, in input order.
///
/// Two addresses on the same /24 produce the same mask twice and the
/// sweep runs twice; the duplication is tolerated rather than deduped.
pub fn wildcard_masks(addrs: &[String]) -> Vec<String> {
    addrs.iter().map(|addr| wildcard_mask(addr)).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
