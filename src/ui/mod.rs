// UI and formatting module

pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{
    defective_miner_lines, format_notification, format_timestamp, miner_summary,
};
