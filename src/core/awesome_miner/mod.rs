//! Typed model of the Awesome Miner web API.
//!
//! Responses are decoded into [`serde_json::Value`] by [`AwesomeMinerClient`]
//! and turned into immutable entities here. Nothing in this module logs
//! except the client.

pub mod client;
pub mod entities;
mod fields;
pub mod fleet;
pub mod miner;
pub mod notification;
pub mod queries;

pub use client::{AwesomeMinerClient, DEFAULT_PORT};
pub use entities::{CoinInfo, Device, DeviceInfo, DeviceList, SpeedInfo, StatusInfo};
pub use fleet::{FleetProfile, FleetRegistry};
pub use miner::{AsicMiner, ClassifiedMiner, FaultCheckable, GpuMiner, Miner};
pub use notification::{Notification, NotificationCollection};
pub use queries::{
    collect_all, collect_by_groups, collect_from_groups, find_by_host, find_by_name, group_names,
};
