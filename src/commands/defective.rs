use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::awesome_miner::{collect_from_groups, group_names, NotificationCollection};
use crate::core::Config;
use crate::ui::{defective_miner_lines, format_notification};

/// Report GPU miners with missing or reset GPUs, followed by their notifications
pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let registry = config.fleet_registry();
    let groups: Vec<String> = match matches.get_many::<String>("groups") {
        Some(values) => values.cloned().collect(),
        None => registry.groups(),
    };

    let client = config.client()?;
    let response = client
        .miners()
        .context("Failed to retrieve miners from Awesome Miner")?;
    let miners = collect_from_groups(&response, &groups, &registry)?;
    log::debug!("Collected {} miners from groups {:?}", miners.len(), groups);

    let present = group_names(&response)?;
    if !groups.iter().any(|group| present.contains(group)) {
        log::error!("No miner groups named \"{}\"", groups.join(","));
    } else {
        println!("{}", "********** FAULTY GPU MINERS **********".red().bold());
        for miner in &miners {
            for line in defective_miner_lines(miner) {
                println!("{}", line);
            }
        }
    }

    let response = client
        .notifications()
        .context("Failed to retrieve information about notifications from Awesome Miner")?;
    let notifications = NotificationCollection::from_response(&response)?;
    let matching: Vec<_> = groups
        .iter()
        .flat_map(|group| notifications.filter_by_prefix(group))
        .collect();

    if !matching.is_empty() {
        println!("{}", "********** NOTIFICATIONS **********".yellow().bold());
        for notification in matching {
            println!("{}", format_notification(notification));
        }
    }
    println!("{}", "**********               **********".dimmed());

    Ok(())
}
