use colored::*;

use crate::terminal::{colors, print};
use sonr_common::network::interface;
use sonr_common::network::mask::wildcard_mask;
use sonr_common::success;

/// Shows what a sweep would cover without running one.
pub fn info() -> anyhow::Result<()> {
    let summaries = interface::interface_summaries();

    if summaries.is_empty() {
        print::print_status("No usable interfaces detected");
        return Ok(());
    }

    for (idx, summary) in summaries.iter().enumerate() {
        print::tree_head(idx, &summary.name);

        let mut details: Vec<(String, ColoredString)> = Vec::new();
        for addr in &summary.addrs {
            details.push(("IPv4".to_string(), addr.color(colors::IPV4_ADDR)));
            details.push(("Mask".to_string(), wildcard_mask(addr).color(colors::ACCENT)));
        }
        print::as_tree_one_level(details);

        if idx + 1 != summaries.len() {
            print::print("");
        }
    }

    let total: usize = summaries.iter().map(|summary| summary.addrs.len()).sum();
    success!("{total} address(es) would seed the sweep");
    Ok(())
}
