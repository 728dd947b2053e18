use scylla::client::session::Session;
use scylla::response::query_result::QueryResult;
use std::time::Instant;

/// Health check status for Cassandra
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Cassandra release version (if available)
    pub version: Option<String>,
}

/// Check Cassandra health with a simple query
pub async fn check_health(session: &Session) -> bool {
    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .is_ok()
}

/// Check Cassandra health with detailed status
///
/// Returns timing information, the server release version, and any
/// error message.
///
/// # Example
/// ```ignore
/// let status = check_health_detailed(&session).await;
/// if status.healthy {
///     println!("version: {:?}, latency: {}ms", status.version, status.response_time_ms);
/// }
/// ```
pub async fn check_health_detailed(session: &Session) -> HealthStatus {
    let start = Instant::now();

    match session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
    {
        Ok(result) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: start.elapsed().as_millis() as u64,
            version: extract_version(result),
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms: start.elapsed().as_millis() as u64,
            version: None,
        },
    }
}

fn extract_version(result: QueryResult) -> Option<String> {
    let rows_result = result.into_rows_result().ok()?;
    let mut rows = rows_result.rows::<(String,)>().ok()?;
    let row: Result<(String,), _> = rows.next()?;
    row.ok().map(|(v,)| v)
}
