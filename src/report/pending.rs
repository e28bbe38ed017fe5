// Pending report writes and the completion signal

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Callback run once every scheduled write has settled
pub type Completion = Box<dyn FnOnce() + Send + 'static>;

/// Count of report writes still in flight.
///
/// Clones share the same counter. When the count drops back to zero the
/// armed completion, if any, runs exactly once.
#[derive(Clone, Default)]
pub struct PendingWrites {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    count: AtomicUsize,
    on_finished: Mutex<Option<Completion>>,
}

impl PendingWrites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback to run when the count next reaches zero
    pub fn arm(&self, done: Completion) {
        let mut slot = self
            .inner
            .on_finished
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(done);
    }

    /// Mark one more write as in flight
    pub fn begin(&self) {
        self.inner.count.fetch_add(1, Ordering::AcqRel);
    }

    /// Mark one write as settled, successful or not
    pub fn settle(&self) {
        if self.inner.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.finish();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inner.count.load(Ordering::Acquire)
    }

    fn finish(&self) {
        let done = self
            .inner
            .on_finished
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(done) = done {
            done();
        }
    }
}

impl std::fmt::Debug for PendingWrites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingWrites")
            .field("in_flight", &self.in_flight())
            .finish()
    }
}
