use database::cassandra::CassandraError;

/// Error taxonomy for the harness
///
/// Every variant is fatal to the operation that produced it; the
/// harness never retries. Consistency and NoRows are the assertion
/// failures, everything else is infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Connection(#[from] CassandraError),

    #[error("Schema change failed: {0}")]
    Schema(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error(
        "Timestamp mismatch for id {id} on {channel}: expected {expected}, got {actual}"
    )]
    Consistency {
        id: i64,
        channel: &'static str,
        expected: i64,
        actual: i64,
    },

    #[error("Verification query returned no rows for ids ({id1}, {id2})")]
    NoRows { id1: i64, id2: i64 },

    #[error("Result stream error: {0}")]
    Cursor(String),
}

/// Result type alias for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
