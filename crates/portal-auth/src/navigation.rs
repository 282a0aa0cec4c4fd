//! Navigation generations.
//!
//! Requests are never cancelled when the user moves on, so an operation that
//! wants to navigate after an await first takes a [`NavigationTicket`]. Any
//! navigation in between bumps the generation and the late operation's
//! navigation is dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use portal_core::traits::Navigator;

/// Generation observed when an operation started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Wraps a [`Navigator`] with a generation counter.
#[derive(Debug, Clone)]
pub struct Navigation {
    navigator: Arc<dyn Navigator>,
    generation: Arc<AtomicU64>,
}

impl Navigation {
    /// Creates a navigation handle around `navigator`.
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Takes a ticket for the current generation.
    pub fn ticket(&self) -> NavigationTicket {
        NavigationTicket(self.generation.load(Ordering::SeqCst))
    }

    /// Whether no navigation happened since `ticket` was taken.
    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Navigates to `path` only if `ticket` is still current.
    ///
    /// Returns `false` when the navigation was discarded as stale.
    pub fn navigate(&self, ticket: NavigationTicket, path: &str) -> bool {
        let advanced = self.generation.compare_exchange(
            ticket.0,
            ticket.0 + 1,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        if advanced.is_err() {
            debug!(path, "Discarding stale navigation");
            return false;
        }
        self.navigator.navigate(path);
        true
    }

    /// Navigates unconditionally, invalidating every outstanding ticket.
    pub fn force(&self, path: &str) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        info!(path, "Forced navigation");
        self.navigator.navigate(path);
    }
}

/// Navigator that only records where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path navigated to, oldest first.
    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent destination.
    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());
    }
}
