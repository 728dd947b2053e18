//! Cassandra test infrastructure
//!
//! Provides a `TestCassandra` helper that starts a Cassandra container,
//! waits for the CQL listener, and bootstraps a test keyspace through
//! the `database` connector.

use database::cassandra::{self, CassandraConfig, CassandraSession};
use database::common::RetryConfig;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

const KEYSPACE: &str = "test_lab";

/// Disposable Cassandra instance for integration tests
///
/// The container is stopped and removed when this struct is dropped.
/// There is no Cassandra module in `testcontainers-modules`, so the
/// generic image API is used directly.
pub struct TestCassandra {
    #[allow(dead_code)]
    container: ContainerAsync<GenericImage>,
    session: CassandraSession,
    pub contact_point: String,
}

impl TestCassandra {
    /// Start a Cassandra container and return a session bound to the
    /// `test_lab` keyspace
    ///
    /// Cassandra takes a while to come up even after the CQL listener
    /// log line, so the first connection goes through the connector's
    /// retry path.
    pub async fn new() -> Self {
        let image = GenericImage::new("cassandra", "5.0")
            .with_exposed_port(9042.tcp())
            .with_wait_for(WaitFor::message_on_stdout(
                "Starting listening for CQL clients",
            ));

        let container = image
            .start()
            .await
            .expect("Failed to start Cassandra container");

        let host_port = container
            .get_host_port_ipv4(9042)
            .await
            .expect("Failed to get host port");

        let contact_point = format!("127.0.0.1:{}", host_port);

        let config = CassandraConfig::new(vec![contact_point.clone()]);
        let retry = RetryConfig::new()
            .with_max_retries(10)
            .with_initial_delay(1000)
            .with_max_delay(10000);

        let session = cassandra::connect_with_retry(&config, Some(retry))
            .await
            .expect("Failed to connect to test Cassandra");

        cassandra::create_keyspace_if_not_exists(&session, KEYSPACE, 1)
            .await
            .expect("Failed to create test keyspace");
        cassandra::use_keyspace(&session, KEYSPACE)
            .await
            .expect("Failed to use test keyspace");

        tracing::info!(port = host_port, "Test Cassandra ready");

        Self {
            container,
            session,
            contact_point,
        }
    }

    /// The bootstrapped session (cloned handle, cheap)
    pub fn session(&self) -> CassandraSession {
        self.session.clone()
    }

    /// The keyspace the session is bound to
    pub fn keyspace(&self) -> &str {
        KEYSPACE
    }
}
