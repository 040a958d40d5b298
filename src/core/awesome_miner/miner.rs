//! Miner entities and their fault predicates.

use serde::Serialize;
use serde_json::Value;

use super::entities::{CoinInfo, Device, DeviceList, SpeedInfo, StatusInfo};
use super::fields::Fields;
use super::fleet::FleetProfile;
use crate::error::{RigmonError, Result};

/// A mining rig of any type as reported by Awesome Miner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Miner {
    pub name: String,
    pub host: String,
    pub pool: String,
    /// Display text, e.g. "65 ºC"
    pub temperature: String,
    pub status_info: StatusInfo,
    pub speed_info: SpeedInfo,
    pub coin_info: CoinInfo,
}

impl Miner {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("Miner", value)?;
        Ok(Self {
            name: fields.string("name")?,
            host: fields.string("hostname")?,
            pool: fields.string("pool")?,
            temperature: fields.string("temperature")?,
            status_info: StatusInfo::from_json(fields.value("statusInfo")?)?,
            speed_info: SpeedInfo::from_json(fields.value("speedInfo")?)?,
            coin_info: CoinInfo::from_json(fields.value("coinInfo")?)?,
        })
    }

    pub fn is_running(&self) -> bool {
        self.status_info.is_mining()
    }
}

/// Fixed-topology fault checks, available only on miners with a known device layout
pub trait FaultCheckable {
    fn devices(&self) -> &DeviceList;

    fn expected_device_count(&self) -> usize;

    fn default_memory_clock(&self) -> i64;

    /// True iff the miner reports exactly the expected number of devices
    fn all_devices_running(&self) -> bool {
        self.devices().len() == self.expected_device_count()
    }

    /// Devices whose memory clock equals the reset clock exactly, in API order
    fn get_faulty_devices(&self) -> Vec<&Device> {
        let reset_clock = self.default_memory_clock();
        self.devices()
            .iter()
            .filter(|device| device.device_info.memory_clock == reset_clock)
            .collect()
    }
}

/// GPU rig belonging to a registered fleet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpuMiner {
    pub miner: Miner,
    pub device_list: DeviceList,
    pub fleet: FleetProfile,
}

impl GpuMiner {
    pub fn from_json(value: &Value, fleet: FleetProfile) -> Result<Self> {
        let miner = Miner::from_json(value)?;
        let fields = Fields::of("GpuMiner", value)?;
        let device_list = DeviceList::from_json(fields.array("gpuList")?)?;
        Ok(Self {
            miner,
            device_list,
            fleet,
        })
    }
}

impl FaultCheckable for GpuMiner {
    fn devices(&self) -> &DeviceList {
        &self.device_list
    }

    fn expected_device_count(&self) -> usize {
        self.fleet.expected_devices
    }

    fn default_memory_clock(&self) -> i64 {
        self.fleet.default_memory_clock
    }
}

/// ASIC miner, also the fallback for unregistered groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsicMiner {
    pub miner: Miner,
    pub device_list: DeviceList,
}

impl AsicMiner {
    pub fn from_json(value: &Value) -> Result<Self> {
        let miner = Miner::from_json(value)?;
        let fields = Fields::of("AsicMiner", value)?;
        let device_list = DeviceList::from_json(fields.array("asicList")?)?;
        Ok(Self { miner, device_list })
    }
}

/// A miner after group-based classification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassifiedMiner {
    Asic(AsicMiner),
    Gpu(GpuMiner),
}

impl ClassifiedMiner {
    pub fn miner(&self) -> &Miner {
        match self {
            ClassifiedMiner::Asic(asic) => &asic.miner,
            ClassifiedMiner::Gpu(gpu) => &gpu.miner,
        }
    }

    pub fn device_list(&self) -> &DeviceList {
        match self {
            ClassifiedMiner::Asic(asic) => &asic.device_list,
            ClassifiedMiner::Gpu(gpu) => &gpu.device_list,
        }
    }

    pub fn name(&self) -> &str {
        &self.miner().name
    }

    pub fn is_running(&self) -> bool {
        self.miner().is_running()
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            ClassifiedMiner::Asic(_) => "ASIC",
            ClassifiedMiner::Gpu(_) => "GPU",
        }
    }

    /// Fault checks for this miner, if its variant supports them
    pub fn fault_checks(&self) -> Option<&dyn FaultCheckable> {
        match self {
            ClassifiedMiner::Gpu(gpu) => Some(gpu),
            ClassifiedMiner::Asic(_) => None,
        }
    }

    pub fn all_devices_running(&self) -> Result<bool> {
        self.fault_checks()
            .map(|checks| checks.all_devices_running())
            .ok_or_else(|| RigmonError::unsupported("all_devices_running", self.variant_name()))
    }

    pub fn get_faulty_devices(&self) -> Result<Vec<&Device>> {
        self.fault_checks()
            .map(|checks| checks.get_faulty_devices())
            .ok_or_else(|| RigmonError::unsupported("get_faulty_devices", self.variant_name()))
    }
}
