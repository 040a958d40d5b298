//! Status, speed, coin and device entities of the Awesome Miner web API.

use serde::Serialize;
use serde_json::Value;

use super::fields::Fields;
use crate::error::Result;

/// Status display value reported while a miner or device is hashing
pub const MINING_STATUS: &str = "Mining";

/// Awesome Miner `statusInfo` object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusInfo {
    pub status_display: String,
    /// Extra diagnostic line (`statusLine3`)
    pub extra_info: String,
}

impl StatusInfo {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("StatusInfo", value)?;
        Ok(Self {
            status_display: fields.string("statusDisplay")?,
            extra_info: fields.string("statusLine3")?,
        })
    }

    pub fn is_mining(&self) -> bool {
        self.status_display == MINING_STATUS
    }
}

/// Awesome Miner `speedInfo` object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedInfo {
    pub hashrate: String,
    pub hashrate_value: f64,
    pub avg_hashrate: String,
}

impl SpeedInfo {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("SpeedInfo", value)?;
        Ok(Self {
            hashrate: fields.string("hashrate")?,
            hashrate_value: fields.float("hashrateValue")?,
            avg_hashrate: fields.string("avgHashrate")?,
        })
    }
}

/// Awesome Miner `deviceInfo` object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub device_type: String,
    /// Core clock in MHz
    pub clock: i64,
    /// Memory clock in MHz
    pub memory_clock: i64,
    pub fan_percent: i64,
    pub temperature: f64,
}

impl DeviceInfo {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("DeviceInfo", value)?;
        Ok(Self {
            device_type: fields.string("deviceType")?,
            clock: fields.integer("gpuClock")?,
            memory_clock: fields.integer("gpuMemoryClock")?,
            fan_percent: fields.integer("fanPercent")?,
            temperature: fields.float("temperature")?,
        })
    }
}

/// Awesome Miner `coinInfo` object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinInfo {
    pub name: String,
    pub daily_revenue: String,
    pub daily_revenue_value: f64,
}

impl CoinInfo {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("CoinInfo", value)?;
        Ok(Self {
            name: fields.string("displayName")?,
            daily_revenue: fields.string("revenuePerDay")?,
            daily_revenue_value: fields.float("revenuePerDayValue")?,
        })
    }
}

/// One GPU or ASIC unit of a miner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub name: String,
    pub status_info: StatusInfo,
    pub device_info: DeviceInfo,
    pub speed_info: SpeedInfo,
}

impl Device {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("Device", value)?;
        Ok(Self {
            name: fields.string("name")?,
            status_info: StatusInfo::from_json(fields.value("statusInfo")?)?,
            device_info: DeviceInfo::from_json(fields.value("deviceInfo")?)?,
            speed_info: SpeedInfo::from_json(fields.value("speedInfo")?)?,
        })
    }
}

/// Devices of a miner in API order.
///
/// The list has no mutating methods, so its length is fixed once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceList {
    devices: Vec<Device>,
}

impl DeviceList {
    /// Build from a `gpuList` / `asicList` array. Fails on the first malformed device.
    pub fn from_json(values: &[Value]) -> Result<Self> {
        let devices = values
            .iter()
            .map(Device::from_json)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { devices })
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }
}

impl<'a> IntoIterator for &'a DeviceList {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
