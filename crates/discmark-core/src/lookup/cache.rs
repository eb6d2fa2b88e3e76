//! Memoizing lookup wrapper.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::UserLookup;
use crate::Result;

/// Caches successful lookups of an inner provider.
///
/// The cache is owned by this value and lives exactly as long as it does;
/// share it across renders with `Arc<CachedLookup<_>>`. Failures are not
/// cached. The lock is not held while the inner lookup runs, so two
/// concurrent misses for the same id may both reach the inner provider.
pub struct CachedLookup<L> {
    inner: L,
    names: Mutex<HashMap<String, String>>,
}

impl<L: UserLookup> CachedLookup<L> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            names: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached names.
    pub async fn len(&self) -> usize {
        self.names.lock().await.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.names.lock().await.is_empty()
    }

    /// Drops every cached name.
    pub async fn clear(&self) {
        self.names.lock().await.clear();
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: UserLookup> UserLookup for CachedLookup<L> {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        if let Some(name) = self.names.lock().await.get(id) {
            log::trace!("user lookup cache hit for {id}");
            return Ok(name.clone());
        }

        let name = self.inner.lookup_user_name(id).await?;
        self.names
            .lock()
            .await
            .insert(id.to_string(), name.clone());
        Ok(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lookup::MockLookup;

    #[tokio::test]
    async fn test_cache_hit_skips_inner() {
        let mock = MockLookup::new().with_user("1", "ada");
        let cached = CachedLookup::new(mock.clone());

        assert_eq!(cached.lookup_user_name("1").await.unwrap(), "ada");
        assert_eq!(cached.lookup_user_name("1").await.unwrap(), "ada");

        assert_eq!(mock.call_count().await, 1);
        assert_eq!(cached.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_does_not_store_failures() {
        let mock = MockLookup::new().with_failure("bad");
        let cached = CachedLookup::new(mock.clone());

        assert!(cached.lookup_user_name("bad").await.is_err());
        assert!(cached.lookup_user_name("bad").await.is_err());

        assert_eq!(mock.call_count().await, 2);
        assert!(cached.is_empty().await);
    }

    #[tokio::test]
    async fn test_cache_clear() {
        let mock = MockLookup::new().with_user("1", "ada");
        let cached = CachedLookup::new(mock.clone());

        cached.lookup_user_name("1").await.unwrap();
        cached.clear().await;
        cached.lookup_user_name("1").await.unwrap();

        assert_eq!(cached.inner().call_count().await, 2);
    }
}
