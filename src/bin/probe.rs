// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Preflight probe: invokes every task in the profile once against the
//! target host and exits non-zero if any of them failed.

use author_loadtest::{init_tracing, Config, RequestProfile, TargetHost, TaskRunner};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "probe", about = "Run each load-test task once against a host")]
struct Args {
    /// Base URL of the system under test, e.g. http://localhost:3080
    #[arg(long)]
    host: TargetHost,

    /// JSON config file (overrides LOADTEST_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    let profile = RequestProfile::from_config(&config.profile)?;
    let runner = TaskRunner::new(args.host, &config.client)?;

    let mut failed = 0usize;
    for task in profile.tasks() {
        match runner.invoke(task).await {
            Ok(success) => info!(
                task = task.name(),
                url = %success.url,
                status = success.status,
                elapsed_ms = success.elapsed.as_millis() as u64,
                "Task ok"
            ),
            Err(err) => {
                failed += 1;
                error!(task = task.name(), error = %err, "Task failed");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} tasks failed against {}",
            profile.tasks().len(),
            runner.host()
        );
    }

    info!(host = %runner.host(), tasks = profile.tasks().len(), "All tasks ok");
    Ok(())
}
