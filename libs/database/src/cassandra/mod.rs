//! Cassandra/ScyllaDB database connector and utilities
//!
//! Provides connection management and Cassandra-specific helpers.
//! Uses the `scylla` driver which is compatible with both Apache
//! Cassandra and ScyllaDB. Pooling, load balancing and the wire
//! protocol are the driver's concern; this module only configures them.
//!
//! # Example
//!
//! ```ignore
//! use database::cassandra::{self, CassandraConfig};
//!
//! let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "test_lab");
//! let session = cassandra::connect(&config).await?;
//!
//! session.query_unpaged("SELECT * FROM users", &[]).await?;
//! ```

mod config;
mod connector;
mod health;

pub use config::{CassandraConfig, parse_consistency};
pub use connector::{
    CassandraError, CassandraSession, connect, connect_with_retry, create_keyspace_if_not_exists,
    use_keyspace,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export scylla types for convenience
pub use scylla::client::session::Session;
pub use scylla::client::session_builder::SessionBuilder;
pub use scylla::statement::Consistency;
