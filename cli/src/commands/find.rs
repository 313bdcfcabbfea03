use std::time::{Duration, Instant};

use colored::*;

use crate::observer::SpinnerObserver;
use crate::terminal::{colors, print, spinner};
use sonr_common::config::Config;
use sonr_common::success;
use sonr_core::discovery::{DiscoveryOutcome, DiscoveryService};
use sonr_core::probe::HttpDeviceProbe;
use sonr_core::scanner::NmapScanner;
use sonr_core::topology::{LocalInterfaces, ManagementApi, TopologyProvider};

pub async fn find(cfg: &Config) -> anyhow::Result<()> {
    let topology: Box<dyn TopologyProvider> = if cfg.local_topology {
        Box::new(LocalInterfaces)
    } else {
        Box::new(ManagementApi::new(&cfg.topology_url)?)
    };

    let service = DiscoveryService::new(
        Box::new(HttpDeviceProbe::new()?),
        topology,
        Box::new(NmapScanner::new()),
    )
    .with_default_addr(cfg.default_addr.clone())
    .with_observer(Box::new(SpinnerObserver));

    let start_time: Instant = Instant::now();
    let outcome = service.discover().await;
    spinner::finish();

    report(&outcome, start_time.elapsed(), cfg);

    if outcome.address().is_none() {
        std::process::exit(1);
    }
    Ok(())
}

fn report(outcome: &DiscoveryOutcome, total_time: Duration, cfg: &Config) {
    match outcome {
        DiscoveryOutcome::DefaultAddress(addr) => found(addr, "default address", total_time, cfg),
        DiscoveryOutcome::ScanHit(addr) => found(addr, "subnet sweep", total_time, cfg),
        DiscoveryOutcome::NotFound => not_found(cfg),
    }
}

fn found(addr: &str, how: &str, total_time: Duration, cfg: &Config) {
    let addr_out: ColoredString = addr.bold().green();
    let time_out: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let line: ColoredString =
        format!("DVL at {addr_out} via {how} in {time_out}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::header("dvl located", cfg.quiet);
            print::fat_separator();
            print::centerln(&line.to_string());
        }
        _ => success!("{line}"),
    }
}

fn not_found(cfg: &Config) {
    print::header("no dvl detected", cfg.quiet);
    print::no_results();
}
