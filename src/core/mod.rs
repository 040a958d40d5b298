// Core business logic module

pub mod awesome_miner;
pub mod config;
pub mod event_log;
pub mod plug_map;

// Re-export commonly used items
pub use config::Config;
pub use event_log::{OfflineLog, OfflineOutcome, RestartLog};
pub use plug_map::PlugMap;
