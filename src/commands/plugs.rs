use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::awesome_miner::find_by_host;
use crate::core::{Config, PlugMap};

pub fn handle_plugs(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => list(sub_matches),
        Some(("resolve", sub_matches)) => resolve(sub_matches, config),
        _ => {
            println!("Use 'rigmon plugs --help' for more information.");
            Ok(())
        }
    }
}

fn load_map(matches: &clap::ArgMatches) -> Result<PlugMap> {
    let path = matches
        .get_one::<PathBuf>("map")
        .context("Plug map argument is required")?;
    Ok(PlugMap::load(path)?)
}

fn list(matches: &clap::ArgMatches) -> Result<()> {
    let map = load_map(matches)?;
    if map.is_empty() {
        println!("{}", "No plugs mapped.".yellow());
        return Ok(());
    }

    for entry in map.entries() {
        println!("{:<24} {}", entry.miner_name, entry.plug_ip.to_string().cyan());
    }
    Ok(())
}

/// Show which plug powers the miner at `--ip`
fn resolve(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let ip = matches
        .get_one::<String>("ip")
        .context("IP address argument is required")?;
    let map = load_map(matches)?;

    let response = config
        .client()?
        .miners()
        .context("Failed to retrieve miners from Awesome Miner")?;
    let Some(miner) = find_by_host(&response, ip)? else {
        log::error!("No miner with IP address {} is registered", ip);
        bail!("No miner with IP address {} is registered", ip);
    };

    match map.plug_for(&miner.name) {
        Some(plug_ip) => {
            println!("{} -> {}", miner.name, plug_ip.to_string().cyan().bold());
            Ok(())
        }
        None => {
            log::error!("Plug for {} seems not be installed", miner.name);
            bail!("No plug mapped for {}", miner.name)
        }
    }
}
