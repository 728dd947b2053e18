//! Scenario orchestration: write a pair of probe records through a
//! chosen timestamp channel, then read the timestamps back and check
//! every channel agrees.

use database::cassandra::CassandraSession;
use scylla::client::session::Session;
use tracing::info;

use crate::error::HarnessResult;
use crate::models::{BatchKind, TableConfig, TimestampedRecord, WriteMode};
use crate::{schema, verifier, writer};

/// Timestamp-consistency verification harness
///
/// Owns a session and a table config; each scenario writes a disjoint
/// id pair and verifies it. The session is a capability passed in by
/// the caller, never global state.
pub struct WritetimeHarness {
    session: CassandraSession,
    table: TableConfig,
}

impl WritetimeHarness {
    pub fn new(session: CassandraSession, table: TableConfig) -> Self {
        Self { session, table }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    /// Drop and recreate the verification table
    pub async fn reset(&self) -> HarnessResult<()> {
        schema::reset_table(&self.session, &self.table).await
    }

    /// Two single-statement writes at `declared_ts`, then verification
    pub async fn run_single(
        &self,
        mode: WriteMode,
        id1: i64,
        id2: i64,
        declared_ts: i64,
    ) -> HarnessResult<()> {
        let first = TimestampedRecord::probe(id1, declared_ts);
        let second = TimestampedRecord::probe(id2, declared_ts);

        match mode {
            WriteMode::QueryTimestamp => {
                writer::insert_with_timestamp(&self.session, &self.table, &first).await?;
                writer::insert_with_timestamp(&self.session, &self.table, &second).await?;
            }
            WriteMode::UsingTimestamp => {
                writer::insert_using_timestamp(&self.session, &self.table, &first).await?;
                writer::insert_using_timestamp(&self.session, &self.table, &second).await?;
            }
        }

        verifier::verify_write_times(&self.session, &self.table, declared_ts, id1, id2).await?;
        info!(?mode, ids = ?(id1, id2), ts = declared_ts, "Single-write scenario verified");
        Ok(())
    }

    /// One two-statement batch at `declared_ts`, then verification
    pub async fn run_batch(
        &self,
        mode: WriteMode,
        kind: BatchKind,
        id1: i64,
        id2: i64,
        declared_ts: i64,
    ) -> HarnessResult<()> {
        let first = TimestampedRecord::probe(id1, declared_ts);
        let second = TimestampedRecord::probe(id2, declared_ts);

        match mode {
            WriteMode::QueryTimestamp => {
                writer::batch_with_timestamp(&self.session, &self.table, kind, &first, &second)
                    .await?;
            }
            WriteMode::UsingTimestamp => {
                writer::batch_using_timestamp(&self.session, &self.table, kind, &first, &second)
                    .await?;
            }
        }

        verifier::verify_write_times(&self.session, &self.table, declared_ts, id1, id2).await?;
        info!(?mode, ?kind, ids = ?(id1, id2), ts = declared_ts, "Batch scenario verified");
        Ok(())
    }
}
