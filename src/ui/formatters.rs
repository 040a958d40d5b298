use chrono::{DateTime, Local};

use crate::core::awesome_miner::{ClassifiedMiner, Miner, Notification};

/// Format a unix timestamp in human-readable local time (DD/MM/YYYY HH:MM:SS)
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string(),
        None => secs.to_string(),
    }
}

/// Problems found on one miner, one line each. Empty when the miner is healthy.
///
/// Stopped miners report their status only. Running miners report missing
/// devices and devices stuck at the default memory clock, when the variant
/// supports those checks.
pub fn defective_miner_lines(miner: &ClassifiedMiner) -> Vec<String> {
    let mut lines = Vec::new();

    if !miner.is_running() {
        lines.push(format!(
            "{} - {}",
            miner.name(),
            miner.miner().status_info.status_display
        ));
        return lines;
    }

    let Some(checks) = miner.fault_checks() else {
        return lines;
    };

    if !checks.all_devices_running() {
        lines.push(format!(
            "{} has only {} of {} GPUs running",
            miner.name(),
            checks.devices().len(),
            checks.expected_device_count()
        ));
    }

    let faulty = checks.get_faulty_devices();
    if !faulty.is_empty() {
        let names: Vec<&str> = faulty.iter().map(|d| d.name.as_str()).collect();
        let noun = if names.len() > 1 { "GPUs" } else { "GPU" };
        lines.push(format!(
            "{} has {} {} running on default memory clock",
            miner.name(),
            noun,
            names.join(",")
        ));
    }

    lines
}

pub fn format_notification(notification: &Notification) -> String {
    format!("{}: {}", notification.miner_name, notification.message)
}

/// Key/value summary of a miner for display
pub fn miner_summary(miner: &Miner) -> Vec<(&'static str, String)> {
    vec![
        ("Name", miner.name.clone()),
        ("Host", miner.host.clone()),
        ("Status", miner.status_info.status_display.clone()),
        ("Pool", miner.pool.clone()),
        ("Coin", miner.coin_info.name.clone()),
        ("Hashrate", miner.speed_info.hashrate.clone()),
        ("Avg hashrate", miner.speed_info.avg_hashrate.clone()),
        ("Revenue/day", miner.coin_info.daily_revenue.clone()),
        ("Temperature", miner.temperature.clone()),
    ]
}
