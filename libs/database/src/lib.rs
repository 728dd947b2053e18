//! Database library providing a Cassandra/ScyllaDB connector
//!
//! This library provides connection management, health checks and retry
//! utilities on top of the `scylla` driver, which speaks the CQL wire
//! protocol to both Apache Cassandra and ScyllaDB.
//!
//! # Features
//!
//! - `cassandra` (default) - Cassandra/ScyllaDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - Everything
//!
//! # Example
//!
//! ```ignore
//! use database::cassandra::{self, CassandraConfig};
//!
//! let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "mykeyspace");
//! let session = cassandra::connect(&config).await?;
//! session.query_unpaged("SELECT * FROM users", &[]).await?;
//! ```

pub mod common;

#[cfg(feature = "cassandra")]
pub mod cassandra;

pub use common::RetryConfig;
