// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Weighted task registry.
//!
//! A profile is built once at startup and only read afterwards. The load
//! driver consults the weights on every scheduling decision.

use crate::config::ProfileConfig;
use crate::error::ProfileError;
use std::collections::HashSet;

/// Path fetched by the default task.
pub const AUTHOR_PATH: &str = "/api/v1/author";

/// A repeatable GET against a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    path: String,
    weight: u32,
}

impl Task {
    /// Create a task. Weight must be at least 1 and the path absolute.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        weight: u32,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        let path = path.into();

        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if weight == 0 {
            return Err(ProfileError::ZeroWeight { name });
        }
        if !path.starts_with('/') {
            return Err(ProfileError::InvalidPath { name, path });
        }

        Ok(Self { name, path, weight })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Named, ordered set of tasks for one kind of simulated user.
#[derive(Debug, Clone)]
pub struct RequestProfile {
    name: String,
    tasks: Vec<Task>,
}

impl RequestProfile {
    /// Create an empty profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// The stock profile: `index_page` fetching the author list, weight 1.
    pub fn author() -> Self {
        Self {
            name: "AuthorReader".to_string(),
            tasks: vec![Task {
                name: "index_page".to_string(),
                path: AUTHOR_PATH.to_string(),
                weight: 1,
            }],
        }
    }

    /// Build and validate a profile from configuration.
    pub fn from_config(config: &ProfileConfig) -> Result<Self, ProfileError> {
        let mut profile = Self::new(config.name.clone());
        for task in &config.tasks {
            profile.register(Task::new(&task.name, &task.path, task.weight)?)?;
        }
        if profile.tasks.is_empty() {
            return Err(ProfileError::NoTasks(profile.name));
        }
        Ok(profile)
    }

    /// Add a task. Names must be unique within the profile.
    pub fn register(&mut self, task: Task) -> Result<(), ProfileError> {
        if self.tasks.iter().any(|t| t.name == task.name) {
            return Err(ProfileError::DuplicateTask(task.name));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Sum of all task weights.
    pub fn total_weight(&self) -> u64 {
        self.tasks.iter().map(|t| u64::from(t.weight)).sum()
    }

    /// Distinct paths hit by this profile, in registration order.
    pub fn paths(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .map(Task::path)
            .filter(|p| seen.insert(*p))
            .collect()
    }
}
