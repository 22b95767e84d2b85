//! Redis cache implementation

use std::fmt;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ErrorKind, RedisError, RedisResult};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKey};
use crate::infrastructure::observability::record_cache_error;

/// Configuration for Redis cache
#[derive(Debug, Clone)]
pub struct RedisCacheConfig {
    pub host: String,
    pub port: u16,
    /// Logical database index
    pub db: i64,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Connect over TLS (`rediss://`)
    pub tls: bool,
    /// Skip certificate verification when TLS is on
    pub tls_insecure: bool,
    /// Key prefix for namespacing
    pub key_prefix: Option<String>,
    /// Bound on establishing a connection
    pub connection_timeout: Duration,
    /// Bound on a single command round-trip
    pub operation_timeout: Duration,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            username: None,
            password: None,
            tls: false,
            tls_insecure: false,
            key_prefix: None,
            connection_timeout: Duration::from_secs(5),
            operation_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisCacheConfig {
    /// Creates a new configuration for the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_db(mut self, db: i64) -> Self {
        self.db = db;
        self
    }

    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    /// Enables TLS; `insecure` disables certificate verification
    pub fn with_tls(mut self, insecure: bool) -> Self {
        self.tls = true;
        self.tls_insecure = insecure;
        self
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Sets the connection timeout
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Sets the per-command timeout
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// `host:port/db`, safe to log
    pub fn endpoint(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.db)
    }

    /// Connection URL understood by the redis client
    pub fn url(&self) -> String {
        let scheme = if self.tls { "rediss" } else { "redis" };

        let auth = match (&self.username, &self.password) {
            (Some(user), Some(pass)) => format!(
                "{}:{}@",
                urlencoding::encode(user),
                urlencoding::encode(pass)
            ),
            (None, Some(pass)) => format!(":{}@", urlencoding::encode(pass)),
            (Some(user), None) => format!("{}@", urlencoding::encode(user)),
            (None, None) => String::new(),
        };

        let mut url = format!("{}://{}{}:{}/{}", scheme, auth, self.host, self.port, self.db);

        if self.tls && self.tls_insecure {
            url.push_str("#insecure");
        }

        url
    }
}

/// Redis cache implementation
///
/// The connection is established lazily on first use, so a store that is
/// down at startup does not stop the process from serving. If a command
/// fails because the connection is gone, the connection is dropped,
/// re-established once and the command retried once.
pub struct RedisCache {
    client: Client,
    connection: RwLock<Option<ConnectionManager>>,
    config: RedisCacheConfig,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache")
            .field("endpoint", &self.config.endpoint())
            .field("tls", &self.config.tls)
            .field("key_prefix", &self.config.key_prefix)
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl RedisCache {
    /// Creates the client without connecting
    pub fn new(config: RedisCacheConfig) -> Result<Self, DomainError> {
        let client = Client::open(config.url().as_str()).map_err(|e| {
            DomainError::configuration(format!("Invalid Redis connection settings: {}", e))
        })?;

        Ok(Self {
            client,
            connection: RwLock::new(None),
            config,
        })
    }

    fn prefix_key(&self, key: &str) -> String {
        CacheKey::namespaced(self.config.key_prefix.as_deref(), key)
    }

    async fn connect(&self) -> Result<ConnectionManager, DomainError> {
        let endpoint = self.config.endpoint();
        let pending = ConnectionManager::new(self.client.clone());

        match tokio::time::timeout(self.config.connection_timeout, pending).await {
            Ok(Ok(connection)) => {
                info!(endpoint = %endpoint, tls = self.config.tls, "Connected to Redis");
                Ok(connection)
            }
            Ok(Err(e)) => {
                error!(endpoint = %endpoint, error = %e, "Failed to connect to Redis");
                Err(DomainError::cache_connection(format!(
                    "Failed to connect to Redis at {}: {}",
                    endpoint, e
                )))
            }
            Err(_) => {
                error!(endpoint = %endpoint, "Timed out connecting to Redis");
                Err(DomainError::cache_connection(format!(
                    "Timed out after {:?} connecting to Redis at {}",
                    self.config.connection_timeout, endpoint
                )))
            }
        }
    }

    /// Returns the live connection, establishing it on first use
    async fn connection(&self) -> Result<ConnectionManager, DomainError> {
        if let Some(connection) = self.connection.read().await.as_ref() {
            return Ok(connection.clone());
        }

        let mut slot = self.connection.write().await;

        // another task may have connected while we waited for the lock
        if let Some(connection) = slot.as_ref() {
            return Ok(connection.clone());
        }

        let connection = self.connect().await?;
        *slot = Some(connection.clone());

        Ok(connection)
    }

    async fn reset_connection(&self) {
        *self.connection.write().await = None;
    }

    /// Runs a command under the operation timeout, reconnecting once if the
    /// connection turns out to be dead
    async fn execute<T, F, Fut>(
        &self,
        operation: &'static str,
        key: &str,
        command: F,
    ) -> Result<T, DomainError>
    where
        T: Send,
        F: Fn(ConnectionManager) -> Fut + Send + Sync,
        Fut: Future<Output = RedisResult<T>> + Send,
    {
        let result = self.attempt(operation, key, &command).await;

        let err = match result {
            Err(Failure::Redis(err)) if is_connection_error(&err) => err,
            other => return other.map_err(|failure| self.fail(operation, key, failure)),
        };

        warn!(operation, key, error = %err, "Redis connection lost, reconnecting");
        self.reset_connection().await;

        self.attempt(operation, key, &command)
            .await
            .map_err(|failure| self.fail(operation, key, failure))
    }

    async fn attempt<T, F, Fut>(
        &self,
        operation: &'static str,
        key: &str,
        command: &F,
    ) -> Result<T, Failure>
    where
        F: Fn(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let connection = self.connection().await.map_err(Failure::Connect)?;

        debug!(operation, key, "Redis command");

        match tokio::time::timeout(self.config.operation_timeout, command(connection)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Failure::Redis(e)),
            Err(_) => Err(Failure::Timeout(self.config.operation_timeout)),
        }
    }

    fn fail(&self, operation: &'static str, key: &str, failure: Failure) -> DomainError {
        let err = match failure {
            Failure::Connect(err) => err,
            Failure::Timeout(after) => DomainError::cache_connection(format!(
                "Redis {} for key '{}' timed out after {:?}",
                operation, key, after
            )),
            Failure::Redis(e) => {
                error!(operation, key, error = %e, "Cache {} error", operation);
                redis_error(operation, key, &e)
            }
        };

        record_cache_error(operation, &err);
        err
    }
}

/// Why a single attempt did not produce a value
enum Failure {
    Connect(DomainError),
    Timeout(Duration),
    Redis(RedisError),
}

/// Errors meaning the connection itself is unusable rather than the command
/// being rejected
fn is_connection_error(e: &RedisError) -> bool {
    e.is_io_error()
        || e.kind() == ErrorKind::IoError
        || e.is_connection_dropped()
        || e.is_connection_refusal()
        || e.is_timeout()
}

fn redis_error(operation: &str, key: &str, e: &RedisError) -> DomainError {
    let message = format!("Failed to {} key '{}': {}", operation, key, e);

    if is_connection_error(e) || e.kind() == ErrorKind::AuthenticationFailed {
        DomainError::cache_connection(message)
    } else {
        DomainError::cache_operation(message)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let prefixed_key = self.prefix_key(key);

        let raw = self
            .execute("get", key, |mut conn| {
                let prefixed_key = prefixed_key.clone();
                async move {
                    let value: Option<Vec<u8>> = conn.get(&prefixed_key).await?;
                    Ok(value)
                }
            })
            .await?;

        // a payload that is not text can never decode, so it reads as absent
        // and the caller regenerates over it
        Ok(raw.and_then(|bytes| match String::from_utf8(bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding non-UTF-8 cache value");
                None
            }
        }))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let prefixed_key = self.prefix_key(key);
        let ttl_secs = ttl.as_secs().max(1);

        self.execute("set", key, |mut conn| {
            let prefixed_key = prefixed_key.clone();
            let value = value.to_string();
            async move {
                let _: () = conn.set_ex(&prefixed_key, value, ttl_secs).await?;
                Ok(())
            }
        })
        .await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.execute("ping", "", |mut conn| async move {
            let _: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok(())
        })
        .await
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
