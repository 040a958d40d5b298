use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::{RigmonError, Result};

/// Default Awesome Miner web API port
pub const DEFAULT_PORT: u16 = 17790;

/// Blocking client for the Awesome Miner web API
pub struct AwesomeMinerClient {
    base_url: Url,
    http: reqwest::blocking::Client,
}

impl AwesomeMinerClient {
    /// Client for the API at `http://<pc_name>:<port>/api/`
    pub fn new(pc_name: &str, port: u16, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(&format!("http://{}:{}/api/", pc_name, port))
            .map_err(|e| RigmonError::InvalidEndpoint(format!("{}:{} ({})", pc_name, port, e)))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rigmon/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Decoded body of `GET /api/miners`
    pub fn miners(&self) -> Result<Value> {
        self.get_json("miners")
    }

    /// Decoded body of `GET /api/notifications`
    pub fn notifications(&self) -> Result<Value> {
        self.get_json("notifications")
    }

    fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| RigmonError::InvalidEndpoint(format!("{} ({})", endpoint, e)))?;

        log::debug!("Requesting {}", url);
        let response = self.http.get(url.clone()).send().map_err(|e| {
            log::error!("Failed to connect to Awesome Miner at {}: {}", url, e);
            RigmonError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Awesome Miner at {} returned status {}", url, status);
            return Err(RigmonError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>()?)
    }
}
