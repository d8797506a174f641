pub mod dashboard;
pub mod navigation;
pub mod onboarding;

use std::sync::Arc;

use tauri::{AppHandle, Emitter, State};

use crate::core_state::CoreState;
use crate::notices::Notice;
use crate::store::{AppAction, ViewSnapshot};

/// Event telling the frontend there are notices to drain.
pub const NOTICES_EVENT: &str = "notices-updated";

/// Health check IPC command: verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Current screen and its data.
#[tauri::command]
pub fn get_view(state: State<'_, Arc<CoreState>>) -> Result<ViewSnapshot, String> {
    state.snapshot().map_err(|e| e.to_string())
}

/// Hands every pending notice to the frontend.
#[tauri::command]
pub fn drain_notices(state: State<'_, Arc<CoreState>>) -> Result<Vec<Notice>, String> {
    state.drain_notices().map_err(|e| e.to_string())
}

/// Shared path for every action command.
///
/// Rejected actions can still queue a notice, so the event goes out either way.
pub(crate) fn dispatch(
    app: &AppHandle,
    state: &CoreState,
    action: AppAction,
) -> Result<ViewSnapshot, String> {
    let result = state.dispatch(action).map_err(|e| e.to_string());
    let pending = state.pending_notice_count();
    if pending > 0 {
        let _ = app.emit(NOTICES_EVENT, pending);
    }
    result
}
