//! Onboarding wizard: Tauri IPC commands.
//!
//! One command per form control:
//! - step control: `select_medicated`, `advance_onboarding`,
//!   `go_back_onboarding`, `complete_onboarding`
//! - medication form: `add_medication`, `remove_medication`,
//!   `edit_medication`, `add_intake_time`, `remove_intake_time`,
//!   `update_intake_time`
//! - caregiver step: `set_caregiver_alerts`, `set_caregiver_contact`

use std::sync::Arc;

use tauri::{AppHandle, State};
use uuid::Uuid;

use crate::config;
use crate::core_state::CoreState;
use crate::medications::MedicationEdit;
use crate::onboarding::OnboardingAction;
use crate::store::{AppAction, ViewSnapshot};

fn parse_id(medication_id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(medication_id).map_err(|e| format!("Invalid medication ID: {e}"))
}

fn onboard(
    app: &AppHandle,
    state: &CoreState,
    action: OnboardingAction,
) -> Result<ViewSnapshot, String> {
    super::dispatch(app, state, AppAction::Onboarding(action))
}

#[tauri::command]
pub fn select_medicated(
    is_medicated: bool,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    onboard(&app, &state, OnboardingAction::SelectMedicated { is_medicated })
}

#[tauri::command]
pub fn advance_onboarding(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    onboard(&app, &state, OnboardingAction::Advance)
}

#[tauri::command]
pub fn go_back_onboarding(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    onboard(&app, &state, OnboardingAction::GoBack)
}

/// Validates the answers and, on success, moves to the dashboard.
#[tauri::command]
pub fn complete_onboarding(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    onboard(&app, &state, OnboardingAction::Complete)
}

#[tauri::command]
pub fn add_medication(
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    onboard(&app, &state, OnboardingAction::AddMedication)
}

#[tauri::command]
pub fn remove_medication(
    medication_id: String,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    let id = parse_id(&medication_id)?;
    onboard(&app, &state, OnboardingAction::RemoveMedication { id })
}

#[tauri::command]
pub fn edit_medication(
    medication_id: String,
    edit: MedicationEdit,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    let id = parse_id(&medication_id)?;
    onboard(&app, &state, OnboardingAction::EditMedication { id, edit })
}

#[tauri::command]
pub fn add_intake_time(
    medication_id: String,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    let id = parse_id(&medication_id)?;
    onboard(&app, &state, OnboardingAction::AddTime { id })
}

#[tauri::command]
pub fn remove_intake_time(
    medication_id: String,
    index: usize,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    let id = parse_id(&medication_id)?;
    onboard(&app, &state, OnboardingAction::RemoveTime { id, index })
}

#[tauri::command]
pub fn update_intake_time(
    medication_id: String,
    index: usize,
    value: String,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    let id = parse_id(&medication_id)?;
    onboard(&app, &state, OnboardingAction::UpdateTime { id, index, value })
}

#[tauri::command]
pub fn set_caregiver_alerts(
    enabled: bool,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    onboard(&app, &state, OnboardingAction::SetCaregiverAlerts { enabled })
}

#[tauri::command]
pub fn set_caregiver_contact(
    contact: String,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<ViewSnapshot, String> {
    if !config::caregiver_contact_fits(&contact) {
        return Err(format!(
            "Caregiver contact is too long (max {} characters)",
            config::CAREGIVER_CONTACT_MAX_CHARS
        ));
    }
    onboard(&app, &state, OnboardingAction::SetCaregiverContact { contact })
}
