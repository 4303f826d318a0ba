// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the author API load test.
//!
//! Every field has a default, so an absent config file yields the stock
//! profile: one `index_page` task hitting `/api/v1/author` with weight 1.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "LOADTEST_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Task registry
    #[serde(default)]
    pub profile: ProfileConfig,

    /// HTTP client settings for direct task invocation
    #[serde(default)]
    pub client: ClientConfig,

    /// Defaults handed to the load driver
    #[serde(default)]
    pub attack: AttackConfig,
}

/// Declared tasks and the name of the simulated user type.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Scenario name reported by the driver (default: AuthorReader)
    #[serde(default = "default_profile_name")]
    pub name: String,

    /// Tasks (default: index_page -> /api/v1/author, weight 1)
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskConfig>,
}

/// One task entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskConfig {
    pub name: String,
    pub path: String,
    /// Relative scheduling weight (default: 1)
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Per-request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Load driver defaults. Command-line flags always win over these.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttackConfig {
    /// Host used when `--host` is not given
    #[serde(default)]
    pub default_host: Option<String>,

    /// Driver test plan, `users,duration;users,duration;...`
    #[serde(default)]
    pub test_plan: Option<String>,

    /// Number of simulated users when `-u` is not given
    #[serde(default)]
    pub users: Option<usize>,

    /// Attack length in seconds when `-t` is not given
    #[serde(default)]
    pub run_time_secs: Option<usize>,
}

// Default value functions
fn default_profile_name() -> String {
    "AuthorReader".to_string()
}

fn default_tasks() -> Vec<TaskConfig> {
    vec![TaskConfig {
        name: "index_page".to_string(),
        path: "/api/v1/author".to_string(),
        weight: default_weight(),
    }]
}

fn default_weight() -> u32 {
    1
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            tasks: default_tasks(),
        }
    }
}

impl ClientConfig {
    /// Get the request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AttackConfig {
    /// Ramp to 2 users, then 4, then down to 1, one minute per stage.
    pub const K6_RAMP: &'static str = "2,1m;4,1m;1,1m";
}

impl Config {
    /// Load from the file named by `LOADTEST_CONFIG`, or defaults if unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                debug!("No {} set, using default config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Load from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
