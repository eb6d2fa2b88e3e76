//! In-memory user directory.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::UserLookup;
use crate::{Error, Result};

/// A user as shown in rendered mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account name.
    pub username: String,

    /// Optional human-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserProfile {
    /// Creates a profile with only a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Formats the profile as `username (Display Name)`, or just the
    /// username when no display name is set.
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(display) => format!("{} ({})", self.username, display),
            None => self.username.clone(),
        }
    }
}

/// Resolves mentions from a fixed map of user ids to profiles.
///
/// Unknown ids fail with [`Error::UserNotFound`]; wrap in
/// [`FallbackLookup`](super::FallbackLookup) to degrade instead.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserProfile>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user, replacing any previous profile for `id`.
    pub fn with_user(mut self, id: impl Into<String>, profile: UserProfile) -> Self {
        self.insert(id, profile);
        self
    }

    /// Adds a user in place.
    pub fn insert(&mut self, id: impl Into<String>, profile: UserProfile) {
        self.users.insert(id.into(), profile);
    }

    /// Returns the profile for `id`, if present.
    pub fn get(&self, id: &str) -> Option<&UserProfile> {
        self.users.get(id)
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the directory has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, UserProfile)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (K, UserProfile)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[async_trait]
impl UserLookup for UserDirectory {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        self.get(id)
            .map(UserProfile::label)
            .ok_or_else(|| Error::user_not_found(id))
    }
}
