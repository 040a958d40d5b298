use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::awesome_miner::{find_by_host, Miner};
use crate::core::{Config, OfflineLog, OfflineOutcome, RestartLog};
use crate::ui::format_timestamp;

fn log_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
    matches
        .get_one::<PathBuf>("log")
        .cloned()
        .context("Log file argument is required")
}

fn resolve_miner(matches: &clap::ArgMatches, config: &Config) -> Result<Miner> {
    let ip = matches
        .get_one::<String>("ip")
        .context("IP address argument is required")?;

    let response = config
        .client()?
        .miners()
        .context("Failed to retrieve miners from Awesome Miner")?;

    match find_by_host(&response, ip)? {
        Some(miner) => {
            log::debug!("Retrieved miner {} using IP {}", miner.name, ip);
            Ok(miner)
        }
        None => {
            log::error!("No miner with IP address {} is registered", ip);
            bail!("No miner with IP address {} is registered", ip)
        }
    }
}

/// Record that the miner at `--ip` went offline
pub fn log_offline(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let path = log_path(matches)?;
    let delay = *matches
        .get_one::<u64>("delay")
        .context("Delay argument is required")?;
    log::debug!("Log file: {:?}, Delay: {}", path, delay);

    let miner = resolve_miner(matches, config)?;

    let mut offline_log = OfflineLog::load(&path)
        .with_context(|| format!("Failed to read offline log {:?}", path))?;
    let outcome = offline_log.record(&miner.name, delay, Utc::now().timestamp());
    offline_log
        .save(&path)
        .with_context(|| format!("Failed to write offline log {:?}", path))?;

    match outcome {
        OfflineOutcome::FirstOffline => log::info!("{} went offline for the first time", miner.name),
        OfflineOutcome::StillOffline => log::info!("{} is still offline", miner.name),
        OfflineOutcome::WentOffline(count) => {
            log::info!("{} went offline ({} times so far)", miner.name, count)
        }
    }

    Ok(())
}

/// Record a restart of the miner at `--ip`
pub fn log_restart(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let path = log_path(matches)?;
    let miner = resolve_miner(matches, config)?;

    let mut restart_log = RestartLog::load(&path)
        .with_context(|| format!("Failed to read restart log {:?}", path))?;
    let restarts = restart_log.record(&miner.name);
    restart_log
        .save(&path)
        .with_context(|| format!("Failed to write restart log {:?}", path))?;

    log::info!("{} restarted ({} times so far)", miner.name, restarts);
    Ok(())
}

/// Print an offline log, or a restart log with `--restarts`
pub fn show(matches: &clap::ArgMatches) -> Result<()> {
    let path = log_path(matches)?;
    if !path.is_file() {
        bail!("Log file not found: {:?}", path);
    }

    if matches.get_flag("restarts") {
        let restart_log = RestartLog::load(&path)?;
        println!("{:<24} {}", "MINER".bold(), "RESTARTS".bold());
        for record in restart_log.records() {
            println!("{:<24} {}", record.miner_name, record.restarts);
        }
    } else {
        let offline_log = OfflineLog::load(&path)?;
        println!(
            "{:<24} {:<8} {}",
            "MINER".bold(),
            "OFFLINE".bold(),
            "LAST INVOKED".bold()
        );
        for record in offline_log.records() {
            println!(
                "{:<24} {:<8} {}",
                record.miner_name,
                record.offline,
                format_timestamp(record.last_invoked)
            );
        }
    }

    Ok(())
}
