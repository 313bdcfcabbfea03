use sonr_core::discovery::DiscoveryObserver;

use crate::terminal::spinner;

/// Streams discovery progress onto the spinner line.
pub struct SpinnerObserver;

impl DiscoveryObserver for SpinnerObserver {
    fn probe_attempt(&self, addr: &str) {
        spinner::message(format!("Probing {addr}..."));
    }

    fn probe_result(&self, addr: &str, hit: bool) {
        if hit {
            spinner::message(format!("{addr} identified itself as a DVL"));
        }
    }

    fn sweep_started(&self, mask: &str) {
        spinner::message(format!("Sweeping {mask} for answering hosts..."));
    }

    fn sweep_finished(&self, mask: &str, candidates: usize) {
        spinner::message(format!("{mask}: {candidates} new candidate(s)"));
    }

    fn candidate_found(&self, addr: &str) {
        spinner::message(format!("Candidate for being a DVL: {addr}"));
    }
}
