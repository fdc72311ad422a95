use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("View counter lock poisoned")]
    Poisoned,
}

/// Key under which a project's page views are counted.
pub fn view_key(slug: &str) -> String {
    ["pageviews", "projects", slug].join(":")
}

/// Read-increment page view counter.
#[async_trait]
pub trait ViewCounter: Send + Sync {
    /// Current count; a key never incremented reads as 0.
    async fn get(&self, slug: &str) -> Result<u64, ViewError>;

    /// Adds one view and returns the new count.
    async fn incr(&self, slug: &str) -> Result<u64, ViewError>;
}

#[derive(Clone)]
pub struct RedisViewCounter {
    conn: MultiplexedConnection,
}

impl RedisViewCounter {
    pub async fn connect(redis_url: &str) -> Result<Self, ViewError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        info!("Redis view counter connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl ViewCounter for RedisViewCounter {
    async fn get(&self, slug: &str) -> Result<u64, ViewError> {
        let mut conn = self.conn.clone();
        let views: Option<u64> = conn.get(view_key(slug)).await?;
        Ok(views.unwrap_or(0))
    }

    async fn incr(&self, slug: &str) -> Result<u64, ViewError> {
        let mut conn = self.conn.clone();
        let views: u64 = conn.incr(view_key(slug), 1u64).await?;
        Ok(views)
    }
}

/// Process-local counter used when no Redis is configured. Counts reset on restart.
#[derive(Default)]
pub struct MemoryViewCounter {
    counts: Mutex<HashMap<String, u64>>,
}

#[async_trait]
impl ViewCounter for MemoryViewCounter {
    async fn get(&self, slug: &str) -> Result<u64, ViewError> {
        let counts = self.counts.lock().map_err(|_| ViewError::Poisoned)?;
        Ok(counts.get(&view_key(slug)).copied().unwrap_or(0))
    }

    async fn incr(&self, slug: &str) -> Result<u64, ViewError> {
        let mut counts = self.counts.lock().map_err(|_| ViewError::Poisoned)?;
        let entry = counts.entry(view_key(slug)).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}
