use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::awesome_miner::{find_by_host, find_by_name};
use crate::core::Config;
use crate::ui::miner_summary;

pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let ip = matches.get_one::<String>("ip");
    let name = matches.get_one::<String>("name");
    if ip.is_none() && name.is_none() {
        println!("Use 'rigmon find --help' for more information.");
        return Ok(());
    }

    let client = config.client()?;
    let response = client
        .miners()
        .context("Failed to retrieve miners from Awesome Miner")?;

    let (miner, query) = match (ip, name) {
        (Some(ip), _) => (find_by_host(&response, ip)?, format!("IP address {}", ip)),
        (None, Some(name)) => (find_by_name(&response, name)?, format!("name {}", name)),
        (None, None) => return Ok(()),
    };

    match miner {
        Some(miner) if matches.get_flag("json") => {
            println!("{}", serde_json::to_string_pretty(&miner)?);
        }
        Some(miner) => {
            for (label, value) in miner_summary(&miner) {
                println!("{:<14} {}", format!("{}:", label).dimmed(), value);
            }
            let running = if miner.is_running() {
                "yes".green()
            } else {
                "no".red()
            };
            println!("{:<14} {}", "Running:".dimmed(), running);
        }
        None => {
            log::warn!("Failed to find miner with {}", query);
            println!("{}", format!("No miner with {} is registered", query).yellow());
        }
    }

    Ok(())
}
