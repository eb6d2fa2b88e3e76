//! User lookup capability and reusable providers.
//!
//! The renderer resolves mentions through [`UserLookup`], an injected
//! capability. Resilience (caching, retry, fallback names) lives in wrapper
//! providers here, never in the renderer.

mod cache;
mod directory;
mod fallback;
mod mock;
mod retry;

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

pub use cache::CachedLookup;
pub use directory::{UserDirectory, UserProfile};
pub use fallback::{DEFAULT_FALLBACK_NAME, FallbackLookup};
pub use mock::MockLookup;
pub use retry::RetryLookup;

/// Resolves a mention id to the name displayed after `@`.
///
/// Implementations may be shared across concurrent renders and must
/// synchronise any internal state themselves.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Looks up the display name for `id`.
    ///
    /// A failure here fails the whole render that requested it.
    async fn lookup_user_name(&self, id: &str) -> Result<String>;
}

#[async_trait]
impl<L: UserLookup + ?Sized> UserLookup for Arc<L> {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        (**self).lookup_user_name(id).await
    }
}

#[async_trait]
impl<L: UserLookup + ?Sized> UserLookup for Box<L> {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        (**self).lookup_user_name(id).await
    }
}
