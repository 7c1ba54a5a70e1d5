mod common;

use std::time::Duration;

use common::{accounts, Script, ScriptedSource};
use valcount::{build_report, Cell, FetchResult, ReportRow, RetryPolicy};
use valcount_networks::EndpointSpec;
use valcount_rpc::ValidatorCounts;

fn immediate(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::ZERO)
}

#[tokio::test(start_paused = true)]
async fn test_failed_endpoint_does_not_stop_report() {
    let source = ScriptedSource::new()
        .with("http://a", Script::Ok(accounts(5, 0, 1)))
        .with("http://b", Script::Fail);
    let endpoints = vec![
        EndpointSpec::new("A", "http://a"),
        EndpointSpec::new("B", "http://b"),
    ];

    let rows = build_report(&source, &endpoints, &immediate(3)).await;

    assert_eq!(
        rows,
        vec![
            ReportRow::new("A", Cell::Count(5), Cell::Count(1)),
            ReportRow::new("B", Cell::Error, Cell::Error),
        ]
    );
    assert_eq!(rows[0].total, Cell::Count(6));
    assert_eq!(rows[1].total, Cell::Error);
    assert_eq!(source.calls_to("http://a"), 1);
    assert_eq!(source.calls_to("http://b"), 3);
}

#[tokio::test(start_paused = true)]
async fn test_rows_follow_configured_order() {
    let source = ScriptedSource::new()
        .with("http://z", Script::Fail)
        .with("http://m", Script::Ok(accounts(2, 1, 0)))
        .with("http://a", Script::FailThen(1, accounts(7, 0, 3)));
    // "http://missing" has no script and always fails
    let endpoints = vec![
        EndpointSpec::new("Zeta", "http://z"),
        EndpointSpec::new("Mu", "http://m"),
        EndpointSpec::new("Missing", "http://missing"),
        EndpointSpec::new("Alpha", "http://a"),
    ];

    let rows = build_report(&source, &endpoints, &immediate(2)).await;

    let names: Vec<&str> = rows.iter().map(|r| r.network.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Mu", "Missing", "Alpha"]);
    assert!(rows[0].is_error());
    assert_eq!(rows[1].total, Cell::Count(2));
    assert!(rows[2].is_error());
    assert_eq!(rows[3].total, Cell::Count(10));

    // sequential: each endpoint's attempts finish before the next starts
    assert_eq!(
        source.call_log(),
        vec![
            "http://z",
            "http://z",
            "http://m",
            "http://missing",
            "http://missing",
            "http://a",
            "http://a",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_retry_delay_applies_per_endpoint() {
    let source = ScriptedSource::new()
        .with("http://a", Script::Fail)
        .with("http://b", Script::Fail);
    let endpoints = vec![
        EndpointSpec::new("A", "http://a"),
        EndpointSpec::new("B", "http://b"),
    ];
    let start = tokio::time::Instant::now();

    let rows = build_report(&source, &endpoints, &RetryPolicy::new(3, Duration::from_secs(2))).await;

    assert!(rows.iter().all(ReportRow::is_error));
    // 2 waits per endpoint, none between endpoints
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(8), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(9), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_empty_endpoint_list() {
    let source = ScriptedSource::new();

    let rows = build_report(&source, &[], &RetryPolicy::default()).await;

    assert!(rows.is_empty());
    assert!(source.call_log().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_endpoints_are_kept() {
    let source = ScriptedSource::new().with("http://a", Script::Ok(accounts(1, 0, 0)));
    let endpoints = vec![
        EndpointSpec::new("A", "http://a"),
        EndpointSpec::new("A", "http://a"),
    ];

    let rows = build_report(&source, &endpoints, &immediate(3)).await;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
    assert_eq!(source.calls_to("http://a"), 2);
}

#[test]
fn test_total_never_partial() {
    assert_eq!(Cell::Count(3).sum(Cell::Count(4)), Cell::Count(7));
    assert_eq!(Cell::Count(3).sum(Cell::Error), Cell::Error);
    assert_eq!(Cell::Error.sum(Cell::Count(4)), Cell::Error);
    assert_eq!(Cell::Error.sum(Cell::Error), Cell::Error);

    let half = ReportRow::new("Half", Cell::Count(3), Cell::Error);
    assert_eq!(half.total, Cell::Error);
}

#[test]
fn test_row_from_fetch_result() {
    let ok = ReportRow::from_fetch(
        "Ok",
        &FetchResult::Counts(ValidatorCounts { active: 0, inactive: 0 }),
    );
    assert_eq!(ok.total, Cell::Count(0));
    assert!(!ok.is_error());

    let failed = ReportRow::from_fetch(
        "Failed",
        &FetchResult::Failure { reason: "Timeout".to_string() },
    );
    assert_eq!(
        (failed.active, failed.inactive, failed.total),
        (Cell::Error, Cell::Error, Cell::Error)
    );
    assert_eq!(failed.total.to_string(), "Error");
}
