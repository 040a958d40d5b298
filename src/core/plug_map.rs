//! Mapping of miners to the smart plugs that power them.
//!
//! File format, one entry per line:
//!
//! ```text
//! Pang01 : 192.168.0.21
//! Ferm03 : 192.168.0.37
//! ```

use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;

use crate::error::{RigmonError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlugEntry {
    pub miner_name: String,
    pub plug_ip: Ipv4Addr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlugMap {
    entries: Vec<PlugEntry>,
}

impl PlugMap {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RigmonError::invalid_plug_map(format!(
                "miner to plug map not found at {:?}",
                path
            )));
        }
        log::debug!("Loading miner to smart plug mapping from {:?}...", path);
        let content = fs::read_to_string(path)?;
        let map = Self::parse(&content);
        log::debug!("Loaded miner to smart plug mapping has {} elements", map.len());
        Ok(map)
    }

    /// Parse map content. Malformed lines are logged and skipped.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parts: Vec<&str> = trimmed.split(':').collect();
            if parts.len() != 2 {
                log::error!("Failed to parse line {}", line);
                continue;
            }

            let miner_name = parts[0].trim();
            let plug_ip = parts[1].trim();
            match plug_ip.parse::<Ipv4Addr>() {
                Ok(plug_ip) => entries.push(PlugEntry {
                    miner_name: miner_name.to_string(),
                    plug_ip,
                }),
                Err(_) => log::error!("Incorrect IP address format: {}", plug_ip),
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[PlugEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plug powering `miner_name`. A later line for the same miner wins.
    pub fn plug_for(&self, miner_name: &str) -> Option<Ipv4Addr> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.miner_name == miner_name)
            .map(|e| e.plug_ip)
    }

    pub fn plug_addresses(&self) -> Vec<Ipv4Addr> {
        self.entries.iter().map(|e| e.plug_ip).collect()
    }
}
