//! GPU fleet profiles and the group-name registry used to classify miners.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::miner::{AsicMiner, ClassifiedMiner, GpuMiner};
use crate::error::Result;

/// Fixed topology and reset-clock expectations of one GPU rig design
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetProfile {
    /// Awesome Miner group name, also the miner-name prefix used in notifications
    pub group: String,
    pub expected_devices: usize,
    /// Factory memory clock in MHz. A GPU reporting it never left its reset state.
    pub default_memory_clock: i64,
}

impl FleetProfile {
    pub fn new(group: impl Into<String>, expected_devices: usize, default_memory_clock: i64) -> Self {
        Self {
            group: group.into(),
            expected_devices,
            default_memory_clock,
        }
    }

    /// Pangolin rigs: 8 GPUs
    pub fn pangolin() -> Self {
        Self::new(PANGOLIN_GROUP, PANGOLIN_GPUS, PANGOLIN_DEFAULT_MEMORY_CLOCK)
    }

    /// Ferm rigs: custom-built, 6 GPUs
    pub fn ferm() -> Self {
        Self::new(FERM_GROUP, FERM_GPUS, FERM_DEFAULT_MEMORY_CLOCK)
    }
}

pub const PANGOLIN_GROUP: &str = "Pang";
pub const PANGOLIN_GPUS: usize = 8;
pub const PANGOLIN_DEFAULT_MEMORY_CLOCK: i64 = 4007;

pub const FERM_GROUP: &str = "Ferm";
pub const FERM_GPUS: usize = 6;
pub const FERM_DEFAULT_MEMORY_CLOCK: i64 = 3802;

/// Maps group names to GPU fleet profiles.
///
/// Groups without a profile are treated as ASIC miners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetRegistry {
    profiles: Vec<FleetProfile>,
}

impl Default for FleetRegistry {
    fn default() -> Self {
        Self {
            profiles: vec![FleetProfile::pangolin(), FleetProfile::ferm()],
        }
    }
}

impl FleetRegistry {
    /// Registry with no GPU fleets at all
    pub fn empty() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// Add a profile, replacing any existing profile for the same group
    pub fn register(&mut self, profile: FleetProfile) {
        match self.profiles.iter_mut().find(|p| p.group == profile.group) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn lookup(&self, group: &str) -> Option<&FleetProfile> {
        self.profiles.iter().find(|p| p.group == group)
    }

    /// Profiles in registration order
    pub fn profiles(&self) -> &[FleetProfile] {
        &self.profiles
    }

    pub fn groups(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.group.clone()).collect()
    }

    /// Build the miner variant for a miner listed under `group`
    pub fn classify(&self, group: &str, miner_json: &Value) -> Result<ClassifiedMiner> {
        match self.lookup(group) {
            Some(profile) => Ok(ClassifiedMiner::Gpu(GpuMiner::from_json(
                miner_json,
                profile.clone(),
            )?)),
            None => Ok(ClassifiedMiner::Asic(AsicMiner::from_json(miner_json)?)),
        }
    }
}
