//! Shared test utilities
//!
//! - `TestCassandra`: disposable Cassandra container with keyspace
//!   bootstrap (feature: "cassandra")
//! - `IdRange`: deterministic, per-test disjoint id allocation
//!   (always available)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{IdRange, TestCassandra};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let cassandra = TestCassandra::new().await;
//!     let ids = IdRange::from_test_name("my_test");
//!     let (id1, id2) = ids.pair();
//! }
//! ```

#[cfg(feature = "cassandra")]
mod cassandra;

#[cfg(feature = "cassandra")]
pub use cassandra::TestCassandra;

/// Deterministic id-range allocator for test isolation
///
/// Tests sharing a table must write disjoint ids to avoid interfering
/// with each other. Hashing the test name gives every test its own
/// stable 1000-id band, so reruns hit the same rows and distinct tests
/// never collide.
pub struct IdRange {
    base: i64,
}

impl IdRange {
    /// Create a range starting at an explicit base id
    pub fn new(base: i64) -> Self {
        Self { base }
    }

    /// Derive a stable range from the test name
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        // 1000-id bands keep distinct test names disjoint
        Self::new(((hasher.finish() % 1_000_000) as i64) * 1000)
    }

    /// The id at `offset` within this range
    pub fn id(&self, offset: i64) -> i64 {
        self.base + offset
    }

    /// The first two ids of the range, the shape most scenarios need
    pub fn pair(&self) -> (i64, i64) {
        (self.base, self.base + 1)
    }
}
