//! Mock lookup provider for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::UserLookup;
use crate::{Error, Result};

/// Lookup provider with canned names, artificial latency and scripted
/// failures.
///
/// Clones share call history and remaining failure counts.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use discmark_core::lookup::MockLookup;
///
/// let lookup = MockLookup::new()
///     .with_user("1", "ada")
///     .with_delay("1", Duration::from_millis(50))
///     .with_failure("2");
/// ```
#[derive(Clone, Default)]
pub struct MockLookup {
    names: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    calls: Vec<String>,
    /// Remaining failures per id; `None` fails forever.
    failures: HashMap<String, Option<usize>>,
}

impl MockLookup {
    /// Creates a mock that knows no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `id` to `name`.
    pub fn with_user(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(id.into(), name.into());
        self
    }

    /// Delays every lookup of `id` by `delay`.
    pub fn with_delay(mut self, id: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(id.into(), delay);
        self
    }

    /// Makes every lookup of `id` fail permanently.
    pub fn with_failure(self, id: impl Into<String>) -> Self {
        self.script_failure(id.into(), None)
    }

    /// Makes the first `times` lookups of `id` fail with a transient error.
    pub fn with_transient_failures(self, id: impl Into<String>, times: usize) -> Self {
        self.script_failure(id.into(), Some(times))
    }

    fn script_failure(self, id: String, times: Option<usize>) -> Self {
        // Builders run before the mock is shared, so the lock is uncontended.
        if let Ok(mut state) = self.state.try_lock() {
            state.failures.insert(id, times);
        }
        self
    }

    /// Ids looked up so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }

    /// Number of lookups performed so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.calls.len()
    }
}

#[async_trait]
impl UserLookup for MockLookup {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        self.state.lock().await.calls.push(id.to_string());

        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }

        {
            let mut state = self.state.lock().await;
            match state.failures.get_mut(id) {
                Some(None) => return Err(Error::lookup(id, "mock failure")),
                Some(Some(remaining)) if *remaining > 0 => {
                    *remaining -= 1;
                    return Err(Error::transient_lookup(id, "mock transient failure"));
                }
                _ => {}
            }
        }

        self.names
            .get(id)
            .cloned()
            .ok_or_else(|| Error::user_not_found(id))
    }
}
