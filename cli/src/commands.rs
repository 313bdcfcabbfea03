pub mod find;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sonr")]
#[command(about = "Finds a Water Linked DVL on the local network.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Cut decorative output; repeat for result-only mode
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate the DVL, sweeping the local subnets if the default address
    /// does not answer
    #[command(alias = "f")]
    Find {
        /// Probe this address before any subnet sweep
        #[arg(long)]
        default_addr: Option<String>,
        /// Management endpoint listing the configured interfaces
        #[arg(long)]
        topology_url: Option<String>,
        /// Enumerate interfaces locally instead of asking the management API
        #[arg(long)]
        local: bool,
    },
    /// Show the interfaces and subnet masks a sweep would cover
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
