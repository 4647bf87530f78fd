//! Session-expiry notification
//!
//! The request executor has no reference to whatever owns the screen flow, so
//! forced logout goes through this indirection: the front-end registers a
//! redirect handle once at startup, and the executor asks the notifier to
//! send the user back to the login screen when the backend invalidates the
//! session. The notifier holds only a weak reference; notification with no
//! live handle is a silent no-op and the session is cleared regardless.

use std::sync::{Arc, RwLock, Weak};

use tracing::debug;

/// Capability of returning the user to the login screen
pub trait LoginRedirect: Send + Sync {
    /// Drop any in-progress flow and show the login screen as the sole entry
    fn reset_to_login(&self);
}

/// Registration point connecting the executor to the active front-end
#[derive(Clone, Default)]
pub struct ExpiryNotifier {
    handle: Arc<RwLock<Option<Weak<dyn LoginRedirect>>>>,
}

impl ExpiryNotifier {
    /// Create a notifier with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the live redirect handle; called once when the front-end mounts
    pub fn register(&self, handle: &Arc<dyn LoginRedirect>) {
        let mut slot = self
            .handle
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(Arc::downgrade(handle));
    }

    /// Ask the registered handle to reset to the login screen; best-effort
    pub fn notify(&self) {
        let slot = self
            .handle
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match slot.as_ref().and_then(Weak::upgrade) {
            Some(handle) => handle.reset_to_login(),
            None => debug!("Session expired with no redirect handle registered"),
        }
    }
}
