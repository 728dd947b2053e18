//! Consistency verifier: reads the stored timestamp column and the
//! storage engine's `WRITETIME()` metadata for both payload columns,
//! and checks all three against the declared timestamp.

use scylla::client::session::Session;
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};
use crate::models::TableConfig;

pub(crate) fn select_write_times_cql(config: &TableConfig) -> String {
    format!(
        "SELECT id, declared_ts, WRITETIME(a), WRITETIME(b) FROM {} WHERE id IN (?, ?)",
        config.table
    )
}

fn check_channel(id: i64, channel: &'static str, expected: i64, actual: i64) -> HarnessResult<()> {
    if actual != expected {
        return Err(HarnessError::Consistency {
            id,
            channel,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Verify that both rows carry the expected write timestamp on every
/// channel
///
/// Issues one query for both ids. For each returned row the stored
/// `declared_ts` and the `WRITETIME()` of columns `a` and `b` must all
/// equal `expected`; the first mismatch fails the verification. Errors
/// while draining the result stream are surfaced, not swallowed, and an
/// empty row set is a failure in its own right.
pub async fn verify_write_times(
    session: &Session,
    config: &TableConfig,
    expected: i64,
    id1: i64,
    id2: i64,
) -> HarnessResult<()> {
    let result = session
        .query_unpaged(select_write_times_cql(config), (id1, id2))
        .await
        .map_err(|e| HarnessError::Read(e.to_string()))?;

    let rows_result = result
        .into_rows_result()
        .map_err(|e| HarnessError::Cursor(e.to_string()))?;

    let rows = rows_result
        .rows::<(i64, i64, i64, i64)>()
        .map_err(|e| HarnessError::Cursor(e.to_string()))?;

    let mut seen = 0usize;
    for row in rows {
        let (id, declared_ts, writetime_a, writetime_b) =
            row.map_err(|e| HarnessError::Cursor(e.to_string()))?;

        check_channel(id, "declared_ts", expected, declared_ts)?;
        check_channel(id, "writetime(a)", expected, writetime_a)?;
        check_channel(id, "writetime(b)", expected, writetime_b)?;
        seen += 1;
    }

    if seen == 0 {
        return Err(HarnessError::NoRows { id1, id2 });
    }

    debug!(rows = seen, expected, "Write timestamps verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_cql_reads_all_three_channels() {
        let config = TableConfig::named("probe");
        assert_eq!(
            select_write_times_cql(&config),
            "SELECT id, declared_ts, WRITETIME(a), WRITETIME(b) FROM probe WHERE id IN (?, ?)"
        );
    }

    #[test]
    fn test_check_channel_match() {
        assert!(check_channel(1, "declared_ts", 42, 42).is_ok());
    }

    #[test]
    fn test_check_channel_mismatch() {
        let err = check_channel(1, "writetime(b)", 42, 41).unwrap_err();
        match err {
            HarnessError::Consistency {
                id,
                channel,
                expected,
                actual,
            } => {
                assert_eq!(id, 1);
                assert_eq!(channel, "writetime(b)");
                assert_eq!(expected, 42);
                assert_eq!(actual, 41);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
