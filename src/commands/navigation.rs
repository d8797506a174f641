//! Screen navigation: Tauri IPC commands.
//!
//! - `get_started`: hero → onboarding
//! - `add_medication_flow`: dashboard → onboarding (fresh wizard)

use std::sync::Arc;

use tauri::{AppHandle, State};

use crate::core_state::CoreState;
use crate::store::{AppAction, ViewSnapshot};

#[tauri::command]
pub fn get_started(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    super::dispatch(&app, &state, AppAction::GetStarted)
}

#[tauri::command]
pub fn add_medication_flow(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    super::dispatch(&app, &state, AppAction::AddMedication)
}
