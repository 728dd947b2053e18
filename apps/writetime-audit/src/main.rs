//! Write-timestamp audit binary
//!
//! Connects to a Cassandra cluster, resets the verification table and
//! runs every write/verify scenario once: single statements and
//! logged/unlogged batches, each with the timestamp carried both as a
//! driver-level directive and as in-statement `USING TIMESTAMP`.
//!
//! Configuration comes from `CASSANDRA_*` environment variables; see
//! `database::cassandra::CassandraConfig`.

use core_config::{Environment, FromEnv};
use database::cassandra::{self, CassandraConfig};
use domain_writetime::{BatchKind, TableConfig, WriteMode, WritetimeHarness, micros_now};
use eyre::{Result, WrapErr, eyre};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    core_config::tracing::install_color_eyre();
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let mut config =
        CassandraConfig::from_env().wrap_err("Failed to load Cassandra configuration")?;

    // The keyspace is bootstrapped after connecting, so it must not be
    // bound at session build time (it may not exist yet).
    let keyspace = config
        .keyspace
        .take()
        .unwrap_or_else(|| "writetime_lab".to_string());

    info!("Connecting to Cassandra at {:?}", config.contact_points);
    let session = cassandra::connect_with_retry(&config, None)
        .await
        .wrap_err("Failed to connect to Cassandra")?;

    let health = cassandra::check_health_detailed(&session).await;
    if !health.healthy {
        return Err(eyre!(
            "Cassandra unhealthy: {}",
            health.message.unwrap_or_default()
        ));
    }
    info!(
        version = ?health.version,
        latency_ms = health.response_time_ms,
        "Cassandra healthy"
    );

    cassandra::create_keyspace_if_not_exists(&session, &keyspace, config.replication_factor)
        .await
        .wrap_err("Failed to create keyspace")?;
    cassandra::use_keyspace(&session, &keyspace)
        .await
        .wrap_err("Failed to use keyspace")?;

    let harness = WritetimeHarness::new(session, TableConfig::default());
    harness.reset().await.wrap_err("Failed to reset table")?;

    let ts = micros_now();

    harness
        .run_single(WriteMode::QueryTimestamp, 1, 2, ts)
        .await
        .wrap_err("Single write with statement timestamp failed")?;
    harness
        .run_single(WriteMode::UsingTimestamp, 3, 4, ts)
        .await
        .wrap_err("Single write with USING TIMESTAMP failed")?;
    harness
        .run_batch(WriteMode::QueryTimestamp, BatchKind::Logged, 5, 6, ts)
        .await
        .wrap_err("Logged batch with batch timestamp failed")?;
    harness
        .run_batch(WriteMode::QueryTimestamp, BatchKind::Unlogged, 7, 8, ts)
        .await
        .wrap_err("Unlogged batch with batch timestamp failed")?;
    harness
        .run_batch(WriteMode::UsingTimestamp, BatchKind::Logged, 9, 10, ts)
        .await
        .wrap_err("Logged batch with USING TIMESTAMP failed")?;
    harness
        .run_batch(WriteMode::UsingTimestamp, BatchKind::Unlogged, 11, 12, ts)
        .await
        .wrap_err("Unlogged batch with USING TIMESTAMP failed")?;

    info!(ts, "All write-timestamp scenarios verified");
    Ok(())
}
