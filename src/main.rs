// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Author API Load Test
//!
//! Simulated users repeatedly fetch `/api/v1/author` from the target host.
//!
//! ## Usage
//!
//! ```text
//! author-loadtest --host http://localhost:3080 -u 4 -r 1 -t 3m
//! author-loadtest --host http://localhost:3080 --test-plan "2,1m;4,1m;1,1m"
//! ```
//!
//! All flags are the load driver's own. The profile itself can be changed
//! with a JSON file named by `LOADTEST_CONFIG`:
//!
//! - `profile.tasks`: `[{ "name", "path", "weight" }]` (default: index_page)
//! - `attack.default_host`: host used when `--host` is absent
//! - `attack.test_plan`: test plan used when none is given on the command line

use author_loadtest::{driver, init_tracing, Config, RequestProfile};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load()?;
    let profile = RequestProfile::from_config(&config.profile)?;

    info!(
        scenario = profile.name(),
        paths = ?profile.paths(),
        default_host = ?config.attack.default_host,
        test_plan = ?config.attack.test_plan,
        "Starting author API load test"
    );

    driver::run(&profile, &config.attack)
        .await
        .map_err(|err| anyhow::anyhow!("load test failed: {err}"))?;

    info!("Load test finished");
    Ok(())
}
