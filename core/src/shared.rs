//! Shared access to one [`RacingApplication`] from several callers.
//!
//! The whole registry pair sits behind a single mutex: every operation runs
//! inside one critical section.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::application::RacingApplication;

#[derive(Clone, Default)]
pub struct SharedApplication {
    inner: Arc<Mutex<RacingApplication>>,
}

impl SharedApplication {
    pub fn new(app: RacingApplication) -> Self {
        Self {
            inner: Arc::new(Mutex::new(app)),
        }
    }

    /// Runs `f` while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut RacingApplication) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    // Operations only mutate after validating, so a poisoned guard is consistent.
    fn lock(&self) -> MutexGuard<'_, RacingApplication> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("recovering paddock state from a poisoned lock");
            poisoned.into_inner()
        })
    }
}

impl From<RacingApplication> for SharedApplication {
    fn from(app: RacingApplication) -> Self {
        Self::new(app)
    }
}
