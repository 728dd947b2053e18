//! Write-Timestamp Verification Domain
//!
//! Verifies that a Cassandra cluster records exactly the write
//! timestamp a client declares, across every channel the timestamp can
//! travel: a driver-level statement/batch timestamp, an in-statement
//! `USING TIMESTAMP ?` directive, and the stored column value itself.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Harness   │  ← scenario orchestration (write then verify)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Schema /    │  ← table lifecycle, single + batched inserts
//! │ Writer      │
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Verifier   │  ← WRITETIME() read-back and equality checks
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::cassandra::{self, CassandraConfig};
//! use domain_writetime::{micros_now, TableConfig, WriteMode, WritetimeHarness};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "test_lab");
//! let session = cassandra::connect(&config).await?;
//!
//! let harness = WritetimeHarness::new(session, TableConfig::default());
//! harness.reset().await?;
//! harness.run_single(WriteMode::QueryTimestamp, 1, 2, micros_now()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod harness;
pub mod models;
pub mod schema;
pub mod verifier;
pub mod writer;

// Re-export commonly used types
pub use error::{HarnessError, HarnessResult};
pub use harness::WritetimeHarness;
pub use models::{BatchKind, TableConfig, TimestampedRecord, WriteMode, micros_now};
pub use schema::reset_table;
pub use verifier::verify_write_times;
