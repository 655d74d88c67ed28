//! A Bevy `App` slot that an rspec fixture can carry between scenarios.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::App;

/// Holds the app built by the most recent `before_each`.
pub struct AppSlot(Option<App>);

// SAFETY: the slot only lives behind `SharedApp`'s mutex, and the suites that
// use it run their scenarios serially, so the `App` is never touched from two
// threads at once.
unsafe impl Send for AppSlot {}
unsafe impl Sync for AppSlot {}

impl fmt::Debug for AppSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppSlot")
            .field(&self.0.as_ref().map(|_| "App"))
            .finish()
    }
}

impl AppSlot {
    /// The app, once a scenario has installed one.
    pub fn app(&self) -> Option<&App> {
        self.0.as_ref()
    }
}

/// Cloneable handle to one [`AppSlot`].
#[derive(Debug, Clone)]
pub struct SharedApp(Arc<Mutex<AppSlot>>);

impl SharedApp {
    /// A handle with no app yet.
    pub fn empty() -> Self {
        Self(Arc::new(Mutex::new(AppSlot(None))))
    }

    /// Replaces the held app, dropping the previous scenario's world.
    pub fn install(&self, app: App) {
        self.lock().0 = Some(app);
    }

    /// Locks the slot, recovering from a scenario that panicked mid-lock.
    pub fn lock(&self) -> MutexGuard<'_, AppSlot> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
