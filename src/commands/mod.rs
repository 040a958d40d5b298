// Command handlers module
pub mod config;
pub mod defective;
pub mod event_log;
pub mod find;
pub mod notifications;
pub mod plugs;
pub mod version;

// Re-exports for cleaner imports
pub use defective::execute as defective;
pub use find::execute as find;
pub use notifications::execute as notifications;
pub use version::execute as version;
