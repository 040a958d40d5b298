use anyhow::{bail, Result};
use colored::Colorize;

use crate::core::awesome_miner::FleetRegistry;
use crate::core::Config;

pub fn handle_config(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(config),
        Some(("init", sub_matches)) => init(sub_matches.get_flag("force")),
        _ => {
            println!("Use 'rigmon config --help' for more information.");
            Ok(())
        }
    }
}

/// Print the effective configuration and the fleet profiles in use
fn show(config: &Config) -> Result<()> {
    println!("{}", "Effective configuration:".white());
    println!("{}", config.to_toml()?);

    println!("{}", "Fleet profiles:".white());
    for profile in config.fleet_registry().profiles() {
        println!(
            "  {:<8} {} GPUs, default memory clock {} MHz",
            profile.group.cyan().bold(),
            profile.expected_devices,
            profile.default_memory_clock
        );
    }
    Ok(())
}

/// Write a default config listing the built-in fleet profiles
fn init(force: bool) -> Result<()> {
    let path = Config::get_config_path()?;
    if path.exists() && !force {
        bail!(
            "Configuration already exists at {:?} (use --force to overwrite)",
            path
        );
    }

    let config = Config {
        fleets: FleetRegistry::default().profiles().to_vec(),
        ..Default::default()
    };
    let path = config.save()?;
    println!("{} {}", "✓ Configuration written to:".green(), path.display());
    Ok(())
}
