//! Write executor: single and batched inserts carrying a declared
//! timestamp through either the driver-level timestamp field or an
//! in-statement `USING TIMESTAMP ?` directive.
//!
//! No operation here retries; a failed write surfaces immediately as
//! `HarnessError::Write` and the caller decides what to do.

use scylla::client::session::Session;
use scylla::statement::batch::Batch;
use scylla::statement::unprepared::Statement;
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};
use crate::models::{BatchKind, TableConfig, TimestampedRecord};

pub(crate) fn insert_cql(config: &TableConfig) -> String {
    format!(
        "INSERT INTO {} (id, a, b, declared_ts) VALUES (?, ?, ?, ?)",
        config.table
    )
}

pub(crate) fn insert_using_timestamp_cql(config: &TableConfig) -> String {
    format!(
        "INSERT INTO {} (id, a, b, declared_ts) VALUES (?, ?, ?, ?) USING TIMESTAMP ?",
        config.table
    )
}

/// Insert one record with the declared timestamp set on the statement
///
/// The timestamp is bound as the `declared_ts` column value and also
/// installed as the statement's write timestamp, so the server records
/// the mutation at exactly that time.
pub async fn insert_with_timestamp(
    session: &Session,
    config: &TableConfig,
    record: &TimestampedRecord,
) -> HarnessResult<()> {
    let mut statement = Statement::new(insert_cql(config));
    statement.set_timestamp(Some(record.declared_ts));

    session
        .query_unpaged(
            statement,
            (
                record.id,
                record.column_a.as_str(),
                record.column_b.as_str(),
                record.declared_ts,
            ),
        )
        .await
        .map_err(|e| HarnessError::Write(e.to_string()))?;

    debug!(id = record.id, ts = record.declared_ts, "Inserted (statement timestamp)");
    Ok(())
}

/// Insert one record with `USING TIMESTAMP ?` embedded in the CQL
///
/// The timestamp is bound twice: once as the `declared_ts` column value
/// and once as the trailing directive parameter.
pub async fn insert_using_timestamp(
    session: &Session,
    config: &TableConfig,
    record: &TimestampedRecord,
) -> HarnessResult<()> {
    session
        .query_unpaged(
            insert_using_timestamp_cql(config),
            (
                record.id,
                record.column_a.as_str(),
                record.column_b.as_str(),
                record.declared_ts,
                record.declared_ts,
            ),
        )
        .await
        .map_err(|e| HarnessError::Write(e.to_string()))?;

    debug!(id = record.id, ts = record.declared_ts, "Inserted (USING TIMESTAMP)");
    Ok(())
}

/// Insert two records in one batch, timestamp set at the batch level
pub async fn batch_with_timestamp(
    session: &Session,
    config: &TableConfig,
    kind: BatchKind,
    first: &TimestampedRecord,
    second: &TimestampedRecord,
) -> HarnessResult<()> {
    let cql = insert_cql(config);
    let mut batch = Batch::new(kind.batch_type());
    batch.append_statement(Statement::new(cql.clone()));
    batch.append_statement(Statement::new(cql));
    batch.set_timestamp(Some(first.declared_ts));

    session
        .batch(
            &batch,
            (
                (
                    first.id,
                    first.column_a.as_str(),
                    first.column_b.as_str(),
                    first.declared_ts,
                ),
                (
                    second.id,
                    second.column_a.as_str(),
                    second.column_b.as_str(),
                    second.declared_ts,
                ),
            ),
        )
        .await
        .map_err(|e| HarnessError::Write(e.to_string()))?;

    debug!(
        ids = ?(first.id, second.id),
        ts = first.declared_ts,
        ?kind,
        "Batch inserted (batch timestamp)"
    );
    Ok(())
}

/// Insert two records in one batch, each statement carrying its own
/// `USING TIMESTAMP ?` directive
///
/// No batch-level timestamp is set: the per-statement directive takes
/// precedence over any batch default, so setting both would be
/// redundant.
pub async fn batch_using_timestamp(
    session: &Session,
    config: &TableConfig,
    kind: BatchKind,
    first: &TimestampedRecord,
    second: &TimestampedRecord,
) -> HarnessResult<()> {
    let cql = insert_using_timestamp_cql(config);
    let mut batch = Batch::new(kind.batch_type());
    batch.append_statement(Statement::new(cql.clone()));
    batch.append_statement(Statement::new(cql));

    session
        .batch(
            &batch,
            (
                (
                    first.id,
                    first.column_a.as_str(),
                    first.column_b.as_str(),
                    first.declared_ts,
                    first.declared_ts,
                ),
                (
                    second.id,
                    second.column_a.as_str(),
                    second.column_b.as_str(),
                    second.declared_ts,
                    second.declared_ts,
                ),
            ),
        )
        .await
        .map_err(|e| HarnessError::Write(e.to_string()))?;

    debug!(
        ids = ?(first.id, second.id),
        ts = first.declared_ts,
        ?kind,
        "Batch inserted (USING TIMESTAMP)"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_cql_binds_all_columns() {
        let config = TableConfig::named("probe");
        assert_eq!(
            insert_cql(&config),
            "INSERT INTO probe (id, a, b, declared_ts) VALUES (?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_insert_using_timestamp_cql_has_trailing_directive() {
        let config = TableConfig::named("probe");
        let cql = insert_using_timestamp_cql(&config);
        assert!(cql.ends_with("USING TIMESTAMP ?"));
        assert_eq!(cql.matches('?').count(), 5);
    }
}
