use scylla::client::execution_profile::ExecutionProfile;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::errors::{ExecutionError, NewSessionError};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::CassandraConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for Cassandra operations
#[derive(Debug, thiserror::Error)]
pub enum CassandraError {
    #[error("Session error: {0}")]
    Scylla(#[from] NewSessionError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Keyspace error: {0}")]
    KeyspaceError(String),
}

/// Shared Cassandra session handle
pub type CassandraSession = Arc<Session>;

/// Connect to Cassandra/ScyllaDB and return a session
///
/// The configured consistency level and request timeout are installed
/// as the session's default execution profile, so every statement and
/// batch run on this session inherits them. If a keyspace is set in
/// the config it must already exist; the session is bound to it.
///
/// The connection is verified with a `system.local` probe before the
/// session is handed out.
///
/// # Example
/// ```ignore
/// use database::cassandra::{self, CassandraConfig};
///
/// let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "test_lab");
/// let session = cassandra::connect(&config).await?;
/// ```
pub async fn connect(config: &CassandraConfig) -> Result<CassandraSession, CassandraError> {
    info!(
        "Attempting to connect to Cassandra at {:?}",
        config.contact_points
    );

    let profile = ExecutionProfile::builder()
        .consistency(config.consistency)
        .request_timeout(Some(Duration::from_secs(config.request_timeout_secs)))
        .build();

    let points: Vec<&str> = config.contact_points.iter().map(|s| s.as_str()).collect();

    let mut builder = SessionBuilder::new()
        .known_nodes(&points)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs))
        .default_execution_profile_handle(profile.into_handle());

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.user(username, password);
    }

    if let Some(ref keyspace) = config.keyspace {
        builder = builder.use_keyspace(keyspace, true);
    }

    let session: Session = builder.build().await?;

    // Verify the connection before handing the session out
    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .map_err(|e| CassandraError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Connect with automatic retry on failure
///
/// Uses exponential backoff with jitter, which covers transient network
/// issues during startup. Note this retries session bootstrap only;
/// statement execution is never retried here.
///
/// # Example
/// ```ignore
/// use database::cassandra::{self, CassandraConfig};
/// use database::common::RetryConfig;
///
/// // Default retry: 3 attempts, 100ms initial delay
/// let session = cassandra::connect_with_retry(&config, None).await?;
///
/// // Custom retry
/// let retry = RetryConfig::new().with_max_retries(5).with_initial_delay(500);
/// let session = cassandra::connect_with_retry(&config, Some(retry)).await?;
/// ```
pub async fn connect_with_retry(
    config: &CassandraConfig,
    retry_config: Option<RetryConfig>,
) -> Result<CassandraSession, CassandraError> {
    match retry_config {
        Some(rc) => retry_with_backoff(|| connect(config), rc).await,
        None => retry(|| connect(config)).await,
    }
}

/// Create a keyspace if it doesn't exist
///
/// Uses `SimpleStrategy` with the given replication factor.
pub async fn create_keyspace_if_not_exists(
    session: &Session,
    keyspace: &str,
    replication_factor: u32,
) -> Result<(), CassandraError> {
    let query = format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {{'class': 'SimpleStrategy', 'replication_factor': {}}}",
        keyspace, replication_factor
    );

    session
        .query_unpaged(query, &[])
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Keyspace '{}' ready", keyspace);
    Ok(())
}

/// Bind the session to a specific keyspace
pub async fn use_keyspace(session: &Session, keyspace: &str) -> Result<(), CassandraError> {
    session
        .use_keyspace(keyspace, true)
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Using keyspace '{}'", keyspace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_connect() {
        let contact_points = std::env::var("CASSANDRA_CONTACT_POINTS")
            .unwrap_or_else(|_| "127.0.0.1:9042".to_string());
        let points: Vec<&str> = contact_points.split(',').collect();

        let config = CassandraConfig::new(points);
        let result = connect(&config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_create_keyspace() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        let session = connect(&config).await.unwrap();
        let result = create_keyspace_if_not_exists(&session, "test_keyspace", 1).await;
        assert!(result.is_ok());
    }
}
