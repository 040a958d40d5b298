use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::awesome_miner::NotificationCollection;
use crate::core::Config;
use crate::ui::format_notification;

pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let client = config.client()?;
    let response = client
        .notifications()
        .context("Failed to retrieve information about notifications from Awesome Miner")?;
    let collection = NotificationCollection::from_response(&response)?;

    let notifications: Vec<_> = match matches.get_one::<String>("prefix") {
        Some(prefix) => collection.filter_by_prefix(prefix),
        None => collection.iter().collect(),
    };

    if notifications.is_empty() {
        println!("{}", "No notifications.".dimmed());
        return Ok(());
    }

    for notification in notifications {
        println!(
            "{} {}",
            format_notification(notification),
            format!("[{}]", notification.source).dimmed()
        );
    }

    Ok(())
}
