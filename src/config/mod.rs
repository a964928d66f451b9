//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// pageSize applied when the query parameter is absent
    pub default_page_size: u64,

    /// Hard cap on pageSize
    pub max_page_size: u64,

    /// Static bearer token guarding write routes; `None` leaves writes open
    pub api_token: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            api_token: None,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
