use scylla::client::session::Session;
use tracing::info;

use crate::error::{HarnessError, HarnessResult};
use crate::models::TableConfig;

pub(crate) fn drop_table_cql(config: &TableConfig) -> String {
    format!("DROP TABLE IF EXISTS {}", config.table)
}

pub(crate) fn create_table_cql(config: &TableConfig) -> String {
    format!(
        "CREATE TABLE {} (\
         id bigint, \
         a text, \
         b text, \
         declared_ts bigint, \
         PRIMARY KEY (id)) \
         WITH COMPACTION = {{'class': '{}'}}",
        config.table, config.compaction
    )
}

/// Drop and recreate the verification table
///
/// Idempotent: repeated calls leave the same empty table. The create is
/// not attempted if the drop fails.
pub async fn reset_table(session: &Session, config: &TableConfig) -> HarnessResult<()> {
    session
        .query_unpaged(drop_table_cql(config), &[])
        .await
        .map_err(|e| HarnessError::Schema(e.to_string()))?;

    session
        .query_unpaged(create_table_cql(config), &[])
        .await
        .map_err(|e| HarnessError::Schema(e.to_string()))?;

    info!(table = %config.table, "Verification table reset");
    Ok(())
}
