//! Tracking for in-flight document intakes.
//!
//! [`UploadTracker`] counts intakes that have started but not yet committed and
//! broadcasts the count over a watch channel. The project screen reads
//! [`UploadTracker::is_uploading`] to show its "Uploading files..." notice.
//!
//! # Usage
//!
//! ```rust
//! use sitedocs_core::UploadTracker;
//!
//! let tracker = UploadTracker::new("project-42");
//! assert!(!tracker.is_uploading());
//!
//! let guard = tracker.begin();
//! assert!(tracker.is_uploading());
//! drop(guard);
//! assert!(!tracker.is_uploading());
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Thread-safe counter of in-flight intakes.
///
/// Cheap to clone (Arc internals). Count changes are broadcast to all
/// subscribers.
#[derive(Clone)]
pub struct UploadTracker {
    inner: Arc<UploadTrackerInner>,
}

struct UploadTrackerInner {
    name: String,
    tx: watch::Sender<usize>,
}

impl UploadTracker {
    /// Create a tracker with nothing in flight.
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            inner: Arc::new(UploadTrackerInner {
                name: name.into(),
                tx,
            }),
        }
    }

    /// Name used in log lines.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Number of intakes currently in flight.
    pub fn in_flight(&self) -> usize {
        *self.inner.tx.borrow()
    }

    /// Returns `true` while at least one intake is in flight.
    pub fn is_uploading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Mark an intake as started. The intake counts as in flight until the
    /// returned guard is dropped.
    pub fn begin(&self) -> UploadGuard {
        self.inner.tx.send_modify(|n| *n += 1);
        log::debug!("Uploads for '{}' → {} in flight", self.inner.name, self.in_flight());
        UploadGuard {
            tracker: self.clone(),
        }
    }

    fn finish(&self) {
        self.inner.tx.send_modify(|n| *n = n.saturating_sub(1));
        log::debug!("Uploads for '{}' → {} in flight", self.inner.name, self.in_flight());
    }

    /// Subscribe to in-flight count changes.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.inner.tx.subscribe()
    }

    /// Wait until nothing is in flight, or give up after `timeout`.
    pub async fn wait_idle(&self, timeout: Duration) -> Result<(), String> {
        let mut rx = self.subscribe();
        let outcome = tokio::time::timeout(timeout, rx.wait_for(|n| *n == 0)).await;
        match outcome {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(_)) => Err(format!("Upload tracker '{}' channel closed", self.inner.name)),
            Err(_) => Err(format!(
                "Uploads for '{}' still in flight after {timeout:?} ({} pending)",
                self.inner.name,
                self.in_flight()
            )),
        }
    }
}

impl fmt::Debug for UploadTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadTracker")
            .field("name", &self.inner.name)
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

/// Marks one intake as in flight until dropped.
#[must_use = "the intake stops counting as in flight when the guard is dropped"]
pub struct UploadGuard {
    tracker: UploadTracker,
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        self.tracker.finish();
    }
}

impl fmt::Debug for UploadGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadGuard")
            .field("tracker", &self.tracker.name())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
