// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests running the author profile through the goose driver.

mod harness;

use author_loadtest::{config::AttackConfig, driver, RequestProfile};
use axum::http::{Method, StatusCode};
use goose::config::GooseConfiguration;
use goose::metrics::GooseMetrics;
use harness::mock_host::MockHost;

/// Short single-user attack against `host`, without goose's controllers.
async fn run_attack(host: &MockHost) -> GooseMetrics {
    let mut configuration = GooseConfiguration::default();
    configuration.no_telnet = true;
    configuration.no_websocket = true;
    configuration.no_reset_metrics = true;

    let attack = AttackConfig {
        default_host: Some(host.url()),
        users: Some(1),
        run_time_secs: Some(2),
        ..Default::default()
    };

    driver::run_with(&RequestProfile::author(), configuration, &attack)
        .await
        .unwrap()
}

/// Total (success, fail) counts across all requests goose recorded.
fn outcome_counts(metrics: &GooseMetrics) -> (usize, usize) {
    metrics.requests.values().fold((0, 0), |(ok, fail), aggregate| {
        (ok + aggregate.success_count, fail + aggregate.fail_count)
    })
}

fn assert_only_author_gets(host: &MockHost) -> usize {
    let requests = host.requests();
    assert!(!requests.is_empty(), "mock host saw no requests");
    assert!(requests
        .iter()
        .all(|r| r.method == Method::GET && r.path == "/api/v1/author"));
    requests.len()
}

// Both attacks run in one test so goose instances never overlap.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_goose_counts_match_host_status() {
    let ok_host = MockHost::start(StatusCode::OK).await;
    let metrics = run_attack(&ok_host).await;
    let seen = assert_only_author_gets(&ok_host);
    let (ok, fail) = outcome_counts(&metrics);
    assert!(ok > 0, "no successful requests recorded");
    assert_eq!(fail, 0);
    assert!(ok <= seen, "goose counted {ok} requests, host saw {seen}");

    let failing_host = MockHost::start(StatusCode::INTERNAL_SERVER_ERROR).await;
    let metrics = run_attack(&failing_host).await;
    let seen = assert_only_author_gets(&failing_host);
    let (ok, fail) = outcome_counts(&metrics);
    assert_eq!(ok, 0);
    assert!(fail > 0, "no failed requests recorded");
    assert!(fail <= seen, "goose counted {fail} requests, host saw {seen}");
}
