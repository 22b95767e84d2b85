//! Cache domain - key-value store abstraction with TTL

mod key;
mod repository;

pub use key::CacheKey;
pub use repository::{Cache, CacheExt, CacheLookup};

#[cfg(test)]
pub use repository::MockCache;
#[cfg(test)]
pub use repository::recording::{Failure, RecordedWrite, RecordingCache};
