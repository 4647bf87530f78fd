//! Reveal-once guard for scratch cards
//!
//! A reveal tap fires a network call, and users tap fast. The guard keeps at
//! most one reveal in flight per coupon: repeat attempts for the same id are
//! discarded before any I/O, and the slot is released when the in-flight
//! handle drops, whatever the outcome of the request.

use std::sync::{Arc, Mutex};

/// In-flight reveal state shared by clones of the coupon API
#[derive(Clone, Default)]
pub struct RevealGuard {
    in_flight: Arc<Mutex<Option<String>>>,
}

impl RevealGuard {
    /// Create a guard with nothing in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the slot for `id`; returns `None` while a reveal for the same id
    /// is still outstanding
    pub fn try_begin(&self, id: &str) -> Option<RevealInFlight> {
        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if slot.as_deref() == Some(id) {
            return None;
        }
        *slot = Some(id.to_string());

        Some(RevealInFlight {
            in_flight: Arc::clone(&self.in_flight),
            id: id.to_string(),
        })
    }
}

/// Releases the guard slot on drop, so success, business failure, and
/// transport error all unlatch it
pub struct RevealInFlight {
    in_flight: Arc<Mutex<Option<String>>>,
    id: String,
}

impl Drop for RevealInFlight {
    fn drop(&mut self) {
        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if slot.as_deref() == Some(self.id.as_str()) {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_reveal_is_discarded_while_in_flight() {
        let guard = RevealGuard::new();

        let first = guard.try_begin("c1");
        assert!(first.is_some());
        assert!(guard.try_begin("c1").is_none());

        // Settling the first attempt permits a retry
        drop(first);
        assert!(guard.try_begin("c1").is_some());
    }

    #[test]
    fn test_different_coupon_is_not_blocked() {
        let guard = RevealGuard::new();

        let _first = guard.try_begin("c1");
        assert!(guard.try_begin("c2").is_some());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let guard = RevealGuard::new();
        let other = guard.clone();

        let _first = guard.try_begin("c1");
        assert!(other.try_begin("c1").is_none());
    }
}
