//! Transport-agnostic application state.
//!
//! `CoreState` wraps the single [`AppStore`] so the IPC command layer (or any
//! other caller) can share it. Every call locks, applies one action to
//! completion and releases, so actions never interleave.

use std::sync::{Mutex, MutexGuard};

use crate::models::{OnboardingResult, Screen};
use crate::notices::Notice;
use crate::store::{AppAction, AppError, AppStore, ViewSnapshot};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

/// Shared application state. Wrapped in `Arc` at startup.
pub struct CoreState {
    store: Mutex<AppStore>,
}

impl CoreState {
    /// Create a new CoreState on the hero screen.
    pub fn new() -> Self {
        Self::with_store(AppStore::new())
    }

    pub fn with_store(store: AppStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, AppStore>, CoreError> {
        self.store.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Apply one action and return the snapshot to render next.
    pub fn dispatch(&self, action: AppAction) -> Result<ViewSnapshot, CoreError> {
        let mut store = self.lock()?;
        store.dispatch(action)?;
        Ok(store.snapshot())
    }

    pub fn snapshot(&self) -> Result<ViewSnapshot, CoreError> {
        Ok(self.lock()?.snapshot())
    }

    pub fn screen(&self) -> Result<Screen, CoreError> {
        Ok(self.lock()?.screen())
    }

    /// Take every pending notice for display.
    pub fn drain_notices(&self) -> Result<Vec<Notice>, CoreError> {
        Ok(self.lock()?.drain_notices())
    }

    pub fn pending_notice_count(&self) -> usize {
        self.store
            .lock()
            .map(|store| store.notices().len())
            .unwrap_or(0)
    }

    pub fn last_result(&self) -> Result<Option<OnboardingResult>, CoreError> {
        Ok(self.lock()?.last_result().cloned())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error(transparent)]
    App(#[from] AppError),
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
