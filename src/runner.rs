// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Direct task invocation.
//!
//! Runs one task once against a target host with its own HTTP client and
//! reports the outcome to the caller. Nothing is retried: a failed request
//! is returned as a [`TaskError`] and the caller decides what to count.

use crate::config::ClientConfig;
use crate::error::TaskError;
use crate::profile::Task;
use crate::target::TargetHost;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Successful (2xx) task invocation.
#[derive(Debug, Clone)]
pub struct TaskSuccess {
    pub url: String,
    pub status: u16,
    pub elapsed: Duration,
}

/// Invokes tasks for one simulated client.
pub struct TaskRunner {
    client: reqwest::Client,
    host: TargetHost,
}

impl TaskRunner {
    /// Create a runner with a dedicated HTTP client.
    pub fn new(host: TargetHost, config: &ClientConfig) -> Result<Self, TaskError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TaskError::Client)?;
        Ok(Self { client, host })
    }

    pub fn host(&self) -> &TargetHost {
        &self.host
    }

    /// Issue exactly one GET for `task`.
    pub async fn invoke(&self, task: &Task) -> Result<TaskSuccess, TaskError> {
        let url = self.host.url_for(task.path())?;
        let started = Instant::now();

        debug!(task = task.name(), url = %url, "Invoking task");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => {
                let err = TaskError::from_transport(url.as_str(), source);
                warn!(task = task.name(), error = %err, "Task failed");
                return Err(err);
            }
        };

        let status = response.status();
        let elapsed = started.elapsed();

        if !status.is_success() {
            warn!(
                task = task.name(),
                url = %url,
                status = status.as_u16(),
                "Task returned non-success status"
            );
            return Err(TaskError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        debug!(
            task = task.name(),
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Task succeeded"
        );

        Ok(TaskSuccess {
            url: url.to_string(),
            status: status.as_u16(),
            elapsed,
        })
    }
}
