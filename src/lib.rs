// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Author API load-test profile
//!
//! Declares weighted request tasks against the author API and hands them to
//! the goose load driver:
//!
//! - `index_page`: `GET {host}/api/v1/author`, weight 1 (default profile)
//! - Task weights are positive integers used by the driver's scheduler
//! - Failures are reported to the caller, never retried

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod profile;
pub mod runner;
pub mod target;

pub use config::Config;
pub use error::{ConfigError, HostError, ProfileError, TaskError};
pub use logging::init_tracing;
pub use profile::{RequestProfile, Task};
pub use runner::{TaskRunner, TaskSuccess};
pub use target::TargetHost;
