//! Fallback-name lookup wrapper.

use async_trait::async_trait;

use super::UserLookup;
use crate::Result;

/// Name used by [`FallbackLookup::new`].
pub const DEFAULT_FALLBACK_NAME: &str = "Unknown User";

/// Turns every failure of the inner provider into a fixed name.
///
/// Renders through this wrapper never fail on mentions.
pub struct FallbackLookup<L> {
    inner: L,
    fallback: String,
}

impl<L: UserLookup> FallbackLookup<L> {
    /// Wraps `inner`, substituting `"Unknown User"` on failure.
    pub fn new(inner: L) -> Self {
        Self::with_name(inner, DEFAULT_FALLBACK_NAME)
    }

    /// Wraps `inner`, substituting `fallback` on failure.
    pub fn with_name(inner: L, fallback: impl Into<String>) -> Self {
        Self {
            inner,
            fallback: fallback.into(),
        }
    }

    /// The substituted name.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[async_trait]
impl<L: UserLookup> UserLookup for FallbackLookup<L> {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        match self.inner.lookup_user_name(id).await {
            Ok(name) => Ok(name),
            Err(e) => {
                log::warn!("user lookup for {id} failed, using fallback: {e}");
                Ok(self.fallback.clone())
            }
        }
    }
}
