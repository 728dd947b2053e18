use std::time::{SystemTime, UNIX_EPOCH};

use scylla::statement::batch::BatchType;

/// A row in the verification table
///
/// `declared_ts` is the microsecond-resolution logical write time the
/// caller intends; after a successful write it must equal the
/// `WRITETIME()` of both payload columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampedRecord {
    pub id: i64,
    pub column_a: String,
    pub column_b: String,
    pub declared_ts: i64,
}

impl TimestampedRecord {
    pub fn new(
        id: i64,
        column_a: impl Into<String>,
        column_b: impl Into<String>,
        declared_ts: i64,
    ) -> Self {
        Self {
            id,
            column_a: column_a.into(),
            column_b: column_b.into(),
            declared_ts,
        }
    }

    /// A probe record with the conventional `foo N` / `bar N` payloads
    pub fn probe(id: i64, declared_ts: i64) -> Self {
        Self::new(id, format!("foo {id}"), format!("bar {id}"), declared_ts)
    }
}

/// Current wall-clock time in microseconds since the epoch
///
/// Cassandra write timestamps are microseconds, so this is the value to
/// declare when deriving a timestamp from "now".
pub fn micros_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as i64)
        .unwrap_or(0)
}

/// How the declared timestamp reaches the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Driver-level timestamp on the statement/batch (the wire
    /// protocol's default-timestamp field)
    QueryTimestamp,
    /// `USING TIMESTAMP ?` embedded in the CQL text, timestamp bound
    /// as a trailing parameter
    UsingTimestamp,
}

/// Batch atomicity class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// Written through the batchlog; all statements eventually apply
    /// once any of them does
    Logged,
    /// Dispatched together for efficiency, no cross-statement guarantee
    Unlogged,
}

impl BatchKind {
    pub fn batch_type(self) -> BatchType {
        match self {
            BatchKind::Logged => BatchType::Logged,
            BatchKind::Unlogged => BatchType::Unlogged,
        }
    }
}

/// Table-level configuration for the harness
///
/// Explicit config instead of process-wide constants, so suites can run
/// against disjoint tables in the same keyspace.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Table name (within the session's keyspace)
    pub table: String,
    /// Compaction strategy class for the CREATE TABLE
    pub compaction: String,
}

impl TableConfig {
    pub fn named(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn with_compaction(mut self, compaction: impl Into<String>) -> Self {
        self.compaction = compaction.into();
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table: "writetime_probe".to_string(),
            compaction: "LeveledCompactionStrategy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_payloads() {
        let record = TimestampedRecord::probe(7, 1234);
        assert_eq!(record.id, 7);
        assert_eq!(record.column_a, "foo 7");
        assert_eq!(record.column_b, "bar 7");
        assert_eq!(record.declared_ts, 1234);
    }

    #[test]
    fn test_micros_now_is_microseconds() {
        let ts = micros_now();
        // Past 2020-01-01 in micros, well before year 3000
        assert!(ts > 1_577_836_800_000_000);
        assert!(ts < 32_503_680_000_000_000);
    }

    #[test]
    fn test_micros_now_monotonic_enough() {
        let a = micros_now();
        let b = micros_now();
        assert!(b >= a);
    }

    #[test]
    fn test_batch_kind_mapping() {
        assert!(matches!(BatchKind::Logged.batch_type(), BatchType::Logged));
        assert!(matches!(
            BatchKind::Unlogged.batch_type(),
            BatchType::Unlogged
        ));
    }

    #[test]
    fn test_table_config_named() {
        let config = TableConfig::named("probe_42").with_compaction("SizeTieredCompactionStrategy");
        assert_eq!(config.table, "probe_42");
        assert_eq!(config.compaction, "SizeTieredCompactionStrategy");
    }

    #[test]
    fn test_table_config_default_compaction() {
        assert_eq!(TableConfig::default().compaction, "LeveledCompactionStrategy");
    }
}
