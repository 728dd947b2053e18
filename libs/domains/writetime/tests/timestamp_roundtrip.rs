//! Live-cluster integration tests for the write-timestamp harness
//!
//! Point `CASSANDRA_CONTACT_POINTS` at a running cluster (default
//! 127.0.0.1:9042) and run with `cargo test -- --ignored`. Each test
//! gets its own table and id band, so the suite can run in parallel
//! against a shared keyspace.

use database::cassandra::{self, CassandraConfig};
use domain_writetime::{
    BatchKind, HarnessError, TableConfig, WriteMode, WritetimeHarness, micros_now,
    verify_write_times,
};
use test_utils::IdRange;

const KEYSPACE: &str = "test_lab";

async fn harness(test_name: &str) -> WritetimeHarness {
    let contact_points = std::env::var("CASSANDRA_CONTACT_POINTS")
        .unwrap_or_else(|_| "127.0.0.1:9042".to_string());
    let points: Vec<String> = contact_points
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();

    let session = cassandra::connect(&CassandraConfig::new(points))
        .await
        .expect("Failed to connect to Cassandra");
    cassandra::create_keyspace_if_not_exists(&session, KEYSPACE, 1)
        .await
        .expect("Failed to create keyspace");
    cassandra::use_keyspace(&session, KEYSPACE)
        .await
        .expect("Failed to use keyspace");

    let harness = WritetimeHarness::new(session, TableConfig::named(format!("wt_{test_name}")));
    harness.reset().await.expect("Failed to reset table");
    harness
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn single_writes_with_statement_timestamp() {
    let harness = harness("single_statement_ts").await;
    let (id1, id2) = IdRange::from_test_name("single_statement_ts").pair();

    harness
        .run_single(WriteMode::QueryTimestamp, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn single_writes_with_using_timestamp() {
    let harness = harness("single_using_ts").await;
    let (id1, id2) = IdRange::from_test_name("single_using_ts").pair();

    harness
        .run_single(WriteMode::UsingTimestamp, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn logged_batch_with_batch_timestamp() {
    let harness = harness("logged_batch_ts").await;
    let (id1, id2) = IdRange::from_test_name("logged_batch_ts").pair();

    harness
        .run_batch(WriteMode::QueryTimestamp, BatchKind::Logged, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn unlogged_batch_with_batch_timestamp() {
    let harness = harness("unlogged_batch_ts").await;
    let (id1, id2) = IdRange::from_test_name("unlogged_batch_ts").pair();

    harness
        .run_batch(WriteMode::QueryTimestamp, BatchKind::Unlogged, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn logged_batch_with_using_timestamp() {
    let harness = harness("logged_batch_using_ts").await;
    let (id1, id2) = IdRange::from_test_name("logged_batch_using_ts").pair();

    harness
        .run_batch(WriteMode::UsingTimestamp, BatchKind::Logged, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn unlogged_batch_with_using_timestamp() {
    let harness = harness("unlogged_batch_using_ts").await;
    let (id1, id2) = IdRange::from_test_name("unlogged_batch_using_ts").pair();

    harness
        .run_batch(WriteMode::UsingTimestamp, BatchKind::Unlogged, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn reset_and_rerun_verifies_again() {
    let harness = harness("reset_rerun").await;
    let (id1, id2) = IdRange::from_test_name("reset_rerun").pair();

    harness
        .run_single(WriteMode::QueryTimestamp, id1, id2, micros_now())
        .await
        .unwrap();

    // Same write sequence after a reset must verify the same way
    harness.reset().await.unwrap();
    harness
        .run_single(WriteMode::QueryTimestamp, id1, id2, micros_now())
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn verifier_rejects_mismatched_timestamp() {
    let harness = harness("verifier_mismatch").await;
    let (id1, id2) = IdRange::from_test_name("verifier_mismatch").pair();
    let ts = micros_now();

    harness
        .run_single(WriteMode::QueryTimestamp, id1, id2, ts)
        .await
        .unwrap();

    let err = verify_write_times(harness.session(), harness.table(), ts + 1, id1, id2)
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::Consistency { .. }));
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn verifier_errors_on_empty_result() {
    let harness = harness("verifier_empty").await;
    let (id1, id2) = IdRange::from_test_name("verifier_empty").pair();

    let err = verify_write_times(harness.session(), harness.table(), micros_now(), id1, id2)
        .await
        .unwrap_err();
    assert!(matches!(err, HarnessError::NoRows { .. }));
}
