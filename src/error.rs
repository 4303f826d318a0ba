// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the load-test profile.

use std::path::PathBuf;
use thiserror::Error;

/// Profile construction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Task {name} has weight 0, weights must be at least 1")]
    ZeroWeight { name: String },

    #[error("Task name must not be empty")]
    EmptyName,

    #[error("Task {name} path must start with '/': {path:?}")]
    InvalidPath { name: String, path: String },

    #[error("Duplicate task name: {0}")]
    DuplicateTask(String),

    #[error("Profile {0} has no tasks")]
    NoTasks(String),
}

/// Target host errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Invalid host URL {host:?}: {source}")]
    Parse {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported scheme {scheme:?} in host URL, expected http or https")]
    UnsupportedScheme { scheme: String },

    #[error("Host URL has no host component: {0}")]
    MissingHost(String),

    #[error("Host URL must not carry a query or fragment: {0}")]
    QueryOrFragment(String),
}

/// Failure of a single task invocation.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Connection to {url} failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl TaskError {
    /// Classify a transport error raised while requesting `url`.
    pub fn from_transport(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            Self::Timeout { url, source }
        } else if source.is_connect() {
            Self::Connect { url, source }
        } else {
            Self::Request { url, source }
        }
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the host could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect { .. })
    }

    /// Whether the configured client timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
