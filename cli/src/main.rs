mod commands;
mod observer;
mod terminal;

use commands::{CommandLine, Commands, find, info};
use sonr_common::config::{Config, DEFAULT_DEVICE_ADDR, DEFAULT_TOPOLOGY_URL};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner(commands.no_banner, commands.quiet);

    match commands.command {
        Commands::Find {
            default_addr,
            topology_url,
            local,
        } => {
            let cfg = Config {
                default_addr: default_addr.unwrap_or_else(|| DEFAULT_DEVICE_ADDR.to_string()),
                topology_url: topology_url.unwrap_or_else(|| DEFAULT_TOPOLOGY_URL.to_string()),
                local_topology: local,
                quiet: commands.quiet,
                no_banner: commands.no_banner,
            };
            print::header("searching for the dvl", cfg.quiet);
            find::find(&cfg).await
        }
        Commands::Info => {
            print::header("local network overview", commands.quiet);
            info::info()
        }
    }
}
