//! Session management over the local key-value store
//!
//! Holds at most one opaque bearer token plus the cached display name and
//! phone shown on the profile screen. The token is written on OTP validation
//! and on every rotated token the executor observes; everything is removed
//! together on logout or when the backend invalidates the session.

use std::sync::Arc;

use common::error::StorageResult;
use common::storage::{KeyValueStore, MemoryStore};
use tracing::{error, info};

/// Fixed key of the persisted bearer token
pub const TOKEN_KEY: &str = "liveCustomerToken";

const NAME_KEY: &str = "customerName";
const PHONE_KEY: &str = "customerPhone";

/// Session state shared by every executor call
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create a session store over any key-value backend
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Create a session store with no persistence, for tests and ephemeral use
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Read the persisted token; never errors, a logged-out state reads as `None`
    pub async fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                error!("Failed to read session token: {}", e);
                None
            }
        }
    }

    /// Overwrite the persisted token
    ///
    /// Concurrent in-flight calls that both carry a rotated token race here;
    /// the last write wins, there is no versioning.
    pub async fn set_token(&self, token: &str) -> StorageResult<()> {
        self.store.set(TOKEN_KEY, token).await?;
        info!("Session token updated");
        Ok(())
    }

    /// Remove the token and any cached profile fields; idempotent
    pub async fn clear(&self) -> StorageResult<()> {
        self.store.delete(TOKEN_KEY).await?;
        self.store.delete(NAME_KEY).await?;
        self.store.delete(PHONE_KEY).await?;
        info!("Session cleared");
        Ok(())
    }

    /// Cache the customer's display name and phone for the profile screen
    pub async fn cache_profile(
        &self,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> StorageResult<()> {
        if let Some(name) = name {
            self.store.set(NAME_KEY, name).await?;
        }
        if let Some(phone) = phone {
            self.store.set(PHONE_KEY, phone).await?;
        }
        Ok(())
    }

    /// Cached display name, if the client record has been fetched this session
    pub async fn cached_name(&self) -> Option<String> {
        self.store.get(NAME_KEY).await.ok().flatten()
    }

    /// Cached phone number, if the client record has been fetched this session
    pub async fn cached_phone(&self) -> Option<String> {
        self.store.get(PHONE_KEY).await.ok().flatten()
    }
}
