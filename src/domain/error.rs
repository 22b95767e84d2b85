use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The store is unreachable, the handshake failed, or an operation timed out
    #[error("Cache connection error: {message}")]
    CacheConnection { message: String },

    /// A reachable store rejected a read/write, or a value could not be encoded
    #[error("Cache operation error: {message}")]
    CacheOperation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn cache_connection(message: impl Into<String>) -> Self {
        Self::CacheConnection {
            message: message.into(),
        }
    }

    pub fn cache_operation(message: impl Into<String>) -> Self {
        Self::CacheOperation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
