//! # Search Debouncer
//!
//! Collapses rapid repeated triggers into one, using only the latest input.
//!
//! Each new keystroke cancels any pending scheduled recomputation and
//! schedules a fresh one; earlier pending invocations are discarded, not
//! deferred - there is no backlog. Only the most recent event fires, after
//! the window elapses with no further input.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use stocklens_core::SEARCH_DEBOUNCE_MS;

/// Cancellable one-shot timer for search-as-you-type.
///
/// ## Usage
/// ```rust,ignore
/// let debouncer = Debouncer::default(); // 300 ms window
/// // on every keystroke:
/// let state = store_state.clone();
/// let term = input.clone();
/// debouncer.schedule(move || {
///     state.with_store_mut(|store| store.filter(&term, ""));
/// });
/// ```
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Creates a debouncer with a custom window.
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `f` to run after the window elapses, discarding any
    /// previously scheduled invocation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let window = self.window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            f();
        });

        let mut pending = self.pending.lock().expect("debouncer mutex poisoned");
        if let Some(previous) = pending.replace(handle) {
            trace!("superseding pending debounced call");
            previous.abort();
        }
    }

    /// Discards any pending invocation without scheduling a new one.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().expect("debouncer mutex poisoned");
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    /// The standard search window.
    fn default() -> Self {
        Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
