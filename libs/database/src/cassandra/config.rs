use scylla::statement::Consistency;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// Cassandra/ScyllaDB connection configuration
///
/// Holds everything needed to open a session: contact points, the
/// keyspace to bind, the default consistency level, credentials and
/// timeouts. Construct it manually or load it from environment
/// variables (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::cassandra::CassandraConfig;
/// use scylla::statement::Consistency;
///
/// let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "test_lab")
///     .with_consistency(Consistency::LocalQuorum);
/// ```
#[derive(Clone, Debug)]
pub struct CassandraConfig {
    /// Contact points (host:port pairs)
    pub contact_points: Vec<String>,

    /// Keyspace to bind the session to (similar to a database in SQL)
    pub keyspace: Option<String>,

    /// Default consistency level for all requests on the session
    pub consistency: Consistency,

    /// Optional username for authentication
    pub username: Option<String>,

    /// Optional password for authentication
    pub password: Option<String>,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Replication factor used when bootstrapping a keyspace
    pub replication_factor: u32,
}

impl CassandraConfig {
    /// Create a new config from contact points, everything else defaulted
    pub fn new<S: Into<String>>(contact_points: Vec<S>) -> Self {
        Self {
            contact_points: contact_points.into_iter().map(|s| s.into()).collect(),
            ..Self::default()
        }
    }

    /// Create a config bound to a specific keyspace
    pub fn with_keyspace<S: Into<String>>(
        contact_points: Vec<S>,
        keyspace: impl Into<String>,
    ) -> Self {
        Self {
            keyspace: Some(keyspace.into()),
            ..Self::new(contact_points)
        }
    }

    /// Set the default consistency level
    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }

    /// Set authentication credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the keyspace replication factor
    pub fn with_replication_factor(mut self, rf: u32) -> Self {
        self.replication_factor = rf;
        self
    }

    pub fn contact_points(&self) -> &[String] {
        &self.contact_points
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }
}

impl Default for CassandraConfig {
    fn default() -> Self {
        Self {
            contact_points: vec!["127.0.0.1:9042".to_string()],
            keyspace: None,
            consistency: Consistency::LocalQuorum,
            username: None,
            password: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            replication_factor: 1,
        }
    }
}

/// Parse a consistency level name as accepted in `CASSANDRA_CONSISTENCY`
pub fn parse_consistency(value: &str) -> Result<Consistency, String> {
    match value.to_ascii_lowercase().as_str() {
        "any" => Ok(Consistency::Any),
        "one" => Ok(Consistency::One),
        "two" => Ok(Consistency::Two),
        "three" => Ok(Consistency::Three),
        "quorum" => Ok(Consistency::Quorum),
        "all" => Ok(Consistency::All),
        "local_quorum" => Ok(Consistency::LocalQuorum),
        "each_quorum" => Ok(Consistency::EachQuorum),
        "local_one" => Ok(Consistency::LocalOne),
        other => Err(format!("unknown consistency level '{other}'")),
    }
}

/// Load CassandraConfig from environment variables
///
/// - `CASSANDRA_CONTACT_POINTS` (required) - comma-separated host:port list
/// - `CASSANDRA_KEYSPACE` (optional)
/// - `CASSANDRA_CONSISTENCY` (optional, default: local_quorum)
/// - `CASSANDRA_USERNAME` / `CASSANDRA_PASSWORD` (optional)
/// - `CASSANDRA_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `CASSANDRA_REQUEST_TIMEOUT_SECS` (optional, default: 30)
/// - `CASSANDRA_REPLICATION_FACTOR` (optional, default: 1)
#[cfg(feature = "config")]
impl FromEnv for CassandraConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let contact_points_str = std::env::var("CASSANDRA_CONTACT_POINTS")
            .map_err(|_| ConfigError::MissingEnvVar("CASSANDRA_CONTACT_POINTS".to_string()))?;

        let contact_points: Vec<String> = contact_points_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if contact_points.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CASSANDRA_CONTACT_POINTS".to_string(),
                details: "No valid contact points provided".to_string(),
            });
        }

        let keyspace = std::env::var("CASSANDRA_KEYSPACE").ok();
        let username = std::env::var("CASSANDRA_USERNAME").ok();
        let password = std::env::var("CASSANDRA_PASSWORD").ok();

        let consistency = parse_consistency(
            &std::env::var("CASSANDRA_CONSISTENCY").unwrap_or_else(|_| "local_quorum".to_string()),
        )
        .map_err(|details| ConfigError::ParseError {
            key: "CASSANDRA_CONSISTENCY".to_string(),
            details,
        })?;

        let connect_timeout_secs = std::env::var("CASSANDRA_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        let request_timeout_secs = std::env::var("CASSANDRA_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_REQUEST_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        let replication_factor = std::env::var("CASSANDRA_REPLICATION_FACTOR")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_REPLICATION_FACTOR".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            contact_points,
            keyspace,
            consistency,
            username,
            password,
            connect_timeout_secs,
            request_timeout_secs,
            replication_factor,
        })
    }
}
