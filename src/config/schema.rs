//! Configuration schema for fitsfetch
//!
//! Configuration is stored at `~/.config/fitsfetch/config.toml`

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Local cache settings
    pub cache: CacheConfig,

    /// Remote object store settings
    pub remote: RemoteConfig,

    /// Retry policy for remote fetches
    pub retry: RetryPolicy,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Local cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root directory (default: platform cache dir + "fitsfetch")
    pub root: Option<PathBuf>,
}

/// Remote object store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Bucket holding the data files
    pub bucket: String,

    /// Endpoint override for S3-compatible stores
    /// (default: https://{bucket}.s3.amazonaws.com)
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            endpoint: None,
            timeout_secs: 300,
        }
    }
}
