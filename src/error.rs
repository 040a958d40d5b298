use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for rigmon
#[derive(Error, Debug)]
pub enum RigmonError {
    /// A required key is missing from an API response or has the wrong shape
    #[error("Malformed response: {entity} is missing field '{field}' or it has the wrong type")]
    MalformedResponse {
        entity: &'static str,
        field: &'static str,
    },

    /// A variant-specific query was invoked on a variant that does not define it
    #[error("Unsupported operation: '{operation}' is not available for {variant} miners")]
    UnsupportedOperation {
        operation: &'static str,
        variant: &'static str,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Awesome Miner at {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record in {path:?} at line {line}: {reason}")]
    InvalidLogRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid plug map: {0}")]
    InvalidPlugMap(String),
}

/// Result type alias for rigmon
pub type Result<T> = std::result::Result<T, RigmonError>;

impl RigmonError {
    /// Create a malformed response error
    pub fn malformed(entity: &'static str, field: &'static str) -> Self {
        RigmonError::MalformedResponse { entity, field }
    }

    /// Create an unsupported operation error
    pub fn unsupported(operation: &'static str, variant: &'static str) -> Self {
        RigmonError::UnsupportedOperation { operation, variant }
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RigmonError::Config(msg.into())
    }

    pub fn invalid_plug_map<S: Into<String>>(msg: S) -> Self {
        RigmonError::InvalidPlugMap(msg.into())
    }
}
