//! Dashboard: Tauri IPC commands.
//!
//! Two commands:
//! - `mark_taken`: flag one displayed medication as taken
//! - `view_history`: placeholder acknowledgement

use std::sync::Arc;

use tauri::{AppHandle, State};
use uuid::Uuid;

use crate::core_state::CoreState;
use crate::store::{AppAction, ViewSnapshot};

#[tauri::command]
pub fn mark_taken(
    medication_id: String,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    let id = Uuid::parse_str(&medication_id).map_err(|e| format!("Invalid medication ID: {e}"))?;
    super::dispatch(&app, &state, AppAction::MarkTaken(id))
}

#[tauri::command]
pub fn view_history(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    super::dispatch(&app, &state, AppAction::ViewHistory)
}
