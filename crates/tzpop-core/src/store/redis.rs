// crates/tzpop-core/src/store/redis.rs
#![cfg(feature = "redis")]

use crate::error::{Result, TzError};
use crate::traits::PopularityStore;
use redis::Commands;
use std::sync::Mutex;
use tracing::debug;

pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";

/// Counter store backed by a Redis server.
///
/// `INCR` is atomic on the server, so increments from any number of clients
/// are never lost. `GET` of a missing key is `nil`, read as 0.
pub struct RedisStore {
    conn: Mutex<redis::Connection>,
}

impl RedisStore {
    pub fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(unavailable)?;
        let conn = client.get_connection().map_err(|e| {
            TzError::StoreUnavailable(format!(
                "is the redis backend started and reachable at {url}? {e}"
            ))
        })?;
        debug!(url, "connected to redis");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>,
    ) -> Result<T> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| TzError::StoreUnavailable("redis connection lock poisoned".into()))?;
        f(&mut *conn).map_err(unavailable)
    }
}

fn unavailable(e: redis::RedisError) -> TzError {
    TzError::StoreUnavailable(e.to_string())
}

impl PopularityStore for RedisStore {
    fn increment(&self, key: &str) -> Result<u64> {
        let count: u64 = self.with_conn(|conn| conn.incr(key, 1u64))?;
        debug!(key, count, "redis increment");
        Ok(count)
    }

    fn get(&self, key: &str) -> Result<u64> {
        let count: Option<u64> = self.with_conn(|conn| conn.get(key))?;
        Ok(count.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_server_is_store_unavailable() {
        // Port 9 (discard) on localhost is closed in test environments.
        assert!(matches!(
            RedisStore::connect("redis://127.0.0.1:9/"),
            Err(TzError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn bad_url_is_store_unavailable() {
        assert!(matches!(
            RedisStore::connect("not-a-redis-url"),
            Err(TzError::StoreUnavailable(_))
        ));
    }
}
