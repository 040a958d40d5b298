//! CSV logs of miner offline and restart events.
//!
//! Both logs are small enough to be read whole, updated in memory and
//! rewritten on every event.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::error::{RigmonError, Result};

/// Delay Awesome Miner adds on top of the user-defined "Wait" action, in seconds.
///
/// A 90 second wait re-runs the action after 90 + 96 = 186 seconds.
pub const AM_DELAY_SECS: i64 = 96;

/// Longest 'Wait' action `log-offline` accepts, one day
pub const MAX_USER_DELAY_SECS: u64 = 86_400;

trait LogRecord: Serialize + Sized {
    const HEADER: &'static [&'static str];

    fn parse(record: &StringRecord) -> std::result::Result<Self, String>;
}

fn parse_count(record: &StringRecord, index: usize, column: &str) -> std::result::Result<i64, String> {
    let raw = record
        .get(index)
        .ok_or_else(|| format!("missing '{}' column", column))?;
    raw.trim()
        .parse()
        .map_err(|_| format!("failed to convert '{}' to int in '{}' column", raw, column))
}

fn read_records<R: LogRecord>(path: &Path) -> Result<Vec<R>> {
    if !path.exists() {
        log::debug!("Creating log file {:?}...", path);
        OpenOptions::new().create(true).append(true).open(path)?;
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record = R::parse(&row).map_err(|reason| RigmonError::InvalidLogRecord {
            path: path.to_path_buf(),
            line,
            reason,
        })?;
        records.push(record);
    }
    log::debug!("Read {} records from {:?}", records.len(), path);
    Ok(records)
}

fn write_records<R: LogRecord>(path: &Path, records: &[R]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(R::HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    log::debug!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

/// Row of the offline log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfflineRecord {
    pub miner_name: String,
    pub offline: i64,
    /// Unix timestamp of the last time the offline action ran for this miner
    pub last_invoked: i64,
}

impl LogRecord for OfflineRecord {
    const HEADER: &'static [&'static str] = &["miner_name", "offline", "last_invoked"];

    fn parse(record: &StringRecord) -> std::result::Result<Self, String> {
        let miner_name = record.get(0).ok_or("missing 'miner_name' column")?.to_string();
        Ok(Self {
            miner_name,
            offline: parse_count(record, 1, "offline")?,
            last_invoked: parse_count(record, 2, "last_invoked")?,
        })
    }
}

/// What [`OfflineLog::record`] did with an offline event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineOutcome {
    /// Miner was not in the log yet
    FirstOffline,
    /// Repeated trigger while the miner stays offline. Only the timestamp changed.
    StillOffline,
    /// New offline episode, carrying the updated count
    WentOffline(i64),
}

/// How often each miner goes offline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfflineLog {
    records: Vec<OfflineRecord>,
}

impl OfflineLog {
    /// Read the log, creating an empty file if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            records: read_records(path)?,
        })
    }

    /// Rewrite the whole log including the header
    pub fn save(&self, path: &Path) -> Result<()> {
        write_records(path, &self.records)
    }

    pub fn records(&self) -> &[OfflineRecord] {
        &self.records
    }

    pub fn get(&self, miner_name: &str) -> Option<&OfflineRecord> {
        self.records.iter().find(|r| r.miner_name == miner_name)
    }

    /// Register an offline trigger for `miner_name` at `now` (unix seconds).
    ///
    /// Awesome Miner keeps re-running the offline action every
    /// `user_delay + AM_DELAY_SECS` seconds while a miner stays down, so a
    /// trigger within that window of the previous one is the same episode.
    /// Window and elapsed time saturate instead of overflowing.
    pub fn record(&mut self, miner_name: &str, user_delay_secs: u64, now: i64) -> OfflineOutcome {
        match self.records.iter_mut().find(|r| r.miner_name == miner_name) {
            Some(record) => {
                let window = i64::try_from(user_delay_secs)
                    .unwrap_or(i64::MAX)
                    .saturating_add(AM_DELAY_SECS + 1);
                let elapsed = now.saturating_sub(record.last_invoked);
                let outcome = if elapsed <= window {
                    OfflineOutcome::StillOffline
                } else {
                    record.offline += 1;
                    OfflineOutcome::WentOffline(record.offline)
                };
                record.last_invoked = now;
                outcome
            }
            None => {
                self.records.push(OfflineRecord {
                    miner_name: miner_name.to_string(),
                    offline: 1,
                    last_invoked: now,
                });
                OfflineOutcome::FirstOffline
            }
        }
    }
}

/// Row of the restart log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestartRecord {
    pub miner_name: String,
    pub restarts: i64,
}

impl LogRecord for RestartRecord {
    const HEADER: &'static [&'static str] = &["miner_name", "restarts"];

    fn parse(record: &StringRecord) -> std::result::Result<Self, String> {
        let miner_name = record.get(0).ok_or("missing 'miner_name' column")?.to_string();
        Ok(Self {
            miner_name,
            restarts: parse_count(record, 1, "restarts")?,
        })
    }
}

/// How often each miner has been restarted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestartLog {
    records: Vec<RestartRecord>,
}

impl RestartLog {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            records: read_records(path)?,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_records(path, &self.records)
    }

    pub fn records(&self) -> &[RestartRecord] {
        &self.records
    }

    pub fn get(&self, miner_name: &str) -> Option<&RestartRecord> {
        self.records.iter().find(|r| r.miner_name == miner_name)
    }

    /// Count one restart, returning the new total for the miner
    pub fn record(&mut self, miner_name: &str) -> i64 {
        match self.records.iter_mut().find(|r| r.miner_name == miner_name) {
            Some(record) => {
                record.restarts += 1;
                record.restarts
            }
            None => {
                self.records.push(RestartRecord {
                    miner_name: miner_name.to_string(),
                    restarts: 1,
                });
                1
            }
        }
    }
}
