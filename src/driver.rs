// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Goose load driver integration.
//!
//! Each profile becomes one goose scenario and each task one weighted
//! transaction. Goose owns user spawning, scheduling, timeouts and
//! statistics; the transaction body only issues the request.

use crate::config::AttackConfig;
use crate::profile::{RequestProfile, Task};
use goose::config::{GooseConfiguration, GooseDefault, GooseDefaultType};
use goose::goose::{Scenario, Transaction, TransactionFunction};
use goose::metrics::GooseMetrics;
use goose::{GooseAttack, GooseError};
use std::sync::Arc;
use tracing::info;

/// Build a weighted goose transaction that GETs the task's path once.
pub fn build_transaction(task: &Task) -> Result<Transaction, GooseError> {
    let path = task.path().to_string();
    let function: TransactionFunction = Arc::new(move |user| {
        let path = path.clone();
        Box::pin(async move {
            // Goose records the status; transport errors propagate to it.
            let _goose = user.get(&path).await?;
            Ok(())
        })
    });

    Transaction::new(function)
        .set_name(task.name())
        .set_weight(task.weight() as usize)
}

/// Build the goose scenario for a profile.
pub fn build_scenario(profile: &RequestProfile) -> Result<Scenario, GooseError> {
    let mut scenario = Scenario::new(profile.name());
    for task in profile.tasks() {
        scenario = scenario.register_transaction(build_transaction(task)?);
    }
    Ok(scenario)
}

/// Run a load test for `profile`.
///
/// Goose reads its own flags (`--host`, `-u`, `-r`, `-t`, `--test-plan`,
/// ...) from the process command line; config values only fill in defaults.
pub async fn run(
    profile: &RequestProfile,
    config: &AttackConfig,
) -> Result<GooseMetrics, GooseError> {
    execute(profile, GooseAttack::initialize()?, config).await
}

/// Run a load test for `profile` with an explicit goose configuration
/// instead of the process command line.
pub async fn run_with(
    profile: &RequestProfile,
    configuration: GooseConfiguration,
    config: &AttackConfig,
) -> Result<GooseMetrics, GooseError> {
    execute(
        profile,
        GooseAttack::initialize_with_config(configuration)?,
        config,
    )
    .await
}

async fn execute(
    profile: &RequestProfile,
    attack: GooseAttack,
    config: &AttackConfig,
) -> Result<GooseMetrics, GooseError> {
    let scenario = build_scenario(profile)?;

    info!(
        scenario = profile.name(),
        tasks = profile.tasks().len(),
        total_weight = profile.total_weight(),
        "Registering load profile"
    );

    let mut attack = Box::new(attack.register_scenario(scenario));

    if let Some(host) = config.default_host.as_deref() {
        attack = attack.set_default(GooseDefault::Host, host)?;
    }
    if let Some(plan) = config.test_plan.as_deref() {
        attack = attack.set_default(GooseDefault::TestPlan, plan)?;
    }
    if let Some(users) = config.users {
        attack = attack.set_default(GooseDefault::Users, users)?;
    }
    if let Some(secs) = config.run_time_secs {
        attack = attack.set_default(GooseDefault::RunTime, secs)?;
    }

    attack.execute().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_mirrors_profile() {
        let mut profile = RequestProfile::new("mixed");
        profile
            .register(Task::new("authors", "/api/v1/author", 3).unwrap())
            .unwrap();
        profile
            .register(Task::new("books", "/api/v1/book", 1).unwrap())
            .unwrap();

        let scenario = build_scenario(&profile).unwrap();
        assert_eq!(scenario.name, "mixed");
        assert_eq!(scenario.transactions.len(), 2);
        assert_eq!(scenario.transactions[0].name, "authors");
        assert_eq!(scenario.transactions[0].weight, 3);
        assert_eq!(scenario.transactions[1].weight, 1);
    }

    #[test]
    fn test_author_scenario() {
        let scenario = build_scenario(&RequestProfile::author()).unwrap();
        assert_eq!(scenario.transactions.len(), 1);
        assert_eq!(scenario.transactions[0].name, "index_page");
        assert_eq!(scenario.transactions[0].weight, 1);
    }
}
