// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Base URL of the system under load.

use crate::error::HostError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Validated base URL that task paths are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetHost {
    base: Url,
}

impl TargetHost {
    /// Parse a base URL. Only absolute http/https URLs with a host and no
    /// query or fragment are accepted.
    pub fn parse(host: &str) -> Result<Self, HostError> {
        let trimmed = host.trim();
        let base = Url::parse(trimmed).map_err(|source| HostError::Parse {
            host: trimmed.to_string(),
            source,
        })?;

        match base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(HostError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }

        if base.host_str().map_or(true, str::is_empty) {
            return Err(HostError::MissingHost(trimmed.to_string()));
        }

        // Task paths are appended verbatim, so the base must end at its path.
        if base.query().is_some() || base.fragment().is_some() {
            return Err(HostError::QueryOrFragment(trimmed.to_string()));
        }

        Ok(Self { base })
    }

    /// Full request URL for `path`: the host with any trailing slash
    /// removed, followed by the path.
    pub fn url_for(&self, path: &str) -> Result<Url, HostError> {
        let joined = format!("{}{}", self.base.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|source| HostError::Parse {
            host: joined.clone(),
            source,
        })
    }

    pub fn as_url(&self) -> &Url {
        &self.base
    }
}

impl FromStr for TargetHost {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base.as_str().trim_end_matches('/'))
    }
}
