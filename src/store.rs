//! Top-level application state: which screen is showing, the onboarding
//! flow in progress, the dashboard rows and the outbound notice queue.
//!
//! Every user action goes through [`AppStore::dispatch`]. Navigation is
//! caller-driven and never validated; onboarding validation failures become
//! destructive notices and leave the state untouched.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;
use crate::dashboard::{Dashboard, DashboardData, DashboardError};
use crate::notices::{Notice, NoticeQueue};
use crate::models::{OnboardingResult, Screen};
use crate::onboarding::{OnboardingAction, OnboardingError, OnboardingFlow, OnboardingView};

// ═══════════════════════════════════════════════════════════
// Actions, errors, snapshots
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AppAction {
    /// Hero "Get Started"
    GetStarted,
    Onboarding(OnboardingAction),
    MarkTaken(Uuid),
    ViewHistory,
    /// Dashboard "Add Medication": restarts onboarding
    AddMedication,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("No onboarding in progress")]
    NoActiveOnboarding,

    #[error(transparent)]
    Onboarding(#[from] OnboardingError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

/// What the active screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "data", rename_all = "snake_case")]
pub enum ViewSnapshot {
    Hero,
    Onboarding(OnboardingView),
    Dashboard(DashboardData),
}

// ═══════════════════════════════════════════════════════════
// AppStore
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct AppStore {
    screen: Screen,
    onboarding: Option<OnboardingFlow>,
    last_result: Option<OnboardingResult>,
    dashboard: Dashboard,
    notices: NoticeQueue,
}

impl AppStore {
    /// Starts on the hero screen with the sample dashboard.
    pub fn new() -> Self {
        Self {
            screen: Screen::Hero,
            onboarding: None,
            last_result: None,
            dashboard: Dashboard::sample(),
            notices: NoticeQueue::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn onboarding(&self) -> Option<&OnboardingFlow> {
        self.onboarding.as_ref()
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn last_result(&self) -> Option<&OnboardingResult> {
        self.last_result.as_ref()
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Applies an action using today's local date for new medications.
    pub fn dispatch(&mut self, action: AppAction) -> Result<Screen, AppError> {
        self.dispatch_on(action, Local::now().date_naive())
    }

    /// Applies an action with an explicit "today".
    pub fn dispatch_on(&mut self, action: AppAction, today: NaiveDate) -> Result<Screen, AppError> {
        match action {
            AppAction::GetStarted | AppAction::AddMedication => self.start_onboarding(),
            AppAction::Onboarding(action) => self.handle_onboarding(action, today)?,
            AppAction::MarkTaken(id) => self.mark_taken(&id)?,
            AppAction::ViewHistory => self.notices.push(Notice::info(
                "Coming Soon",
                "Medication history feature will be available soon.",
            )),
        }
        Ok(self.screen)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        match (self.screen, &self.onboarding) {
            (Screen::Hero, _) => ViewSnapshot::Hero,
            (Screen::Onboarding, Some(flow)) => ViewSnapshot::Onboarding(flow.view()),
            // Unreachable through dispatch; render a fresh wizard rather than nothing.
            (Screen::Onboarding, None) => ViewSnapshot::Onboarding(OnboardingFlow::new().view()),
            (Screen::Dashboard, _) => ViewSnapshot::Dashboard(self.dashboard.data()),
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::info!(from = %self.screen, to = %screen, "Screen changed");
        }
        self.screen = screen;
    }

    fn start_onboarding(&mut self) {
        self.onboarding = Some(OnboardingFlow::new());
        self.set_screen(Screen::Onboarding);
    }

    fn handle_onboarding(&mut self, action: OnboardingAction, today: NaiveDate) -> Result<(), AppError> {
        let flow = self
            .onboarding
            .as_mut()
            .ok_or(AppError::NoActiveOnboarding)?;

        match flow.handle(action, today) {
            Ok(Some(result)) => {
                self.finish_onboarding(result);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "Onboarding action rejected");
                if let Some(notice) = e.notice() {
                    self.notices.push(notice);
                }
                Err(e.into())
            }
        }
    }

    fn finish_onboarding(&mut self, result: OnboardingResult) {
        let replaced = self.dashboard.apply_onboarding(&result);
        tracing::info!(replaced, "Dashboard updated from onboarding");

        let description = if result.is_medicated {
            format!("Welcome to {}! Your medication reminders are now active.", config::APP_NAME)
        } else {
            format!("Welcome to {}! You can add medications anytime.", config::APP_NAME)
        };
        self.notices.push(Notice::info("Setup Complete!", description));

        self.last_result = Some(result);
        self.onboarding = None;
        self.set_screen(Screen::Dashboard);
    }

    fn mark_taken(&mut self, id: &Uuid) -> Result<(), AppError> {
        let name = match self.dashboard.mark_taken(id) {
            Ok(med) => med.name.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "Mark taken rejected");
                return Err(e.into());
            }
        };
        self.notices.push(Notice::info(
            "Medication Recorded",
            format!("{name} marked as taken. Great job staying on track!"),
        ));
        Ok(())
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medications::{MedicationEdit, MedicationEditError};
    use crate::models::{MissingField, NoticeVariant};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn onboard(store: &mut AppStore, action: OnboardingAction) -> Result<Screen, AppError> {
        store.dispatch_on(AppAction::Onboarding(action), today())
    }

    fn first_medication_id(store: &AppStore) -> Uuid {
        store.onboarding().unwrap().medications().entries()[0].id
    }

    #[test]
    fn starts_on_hero_with_sample_dashboard() {
        let store = AppStore::new();
        assert_eq!(store.screen(), Screen::Hero);
        assert_eq!(store.snapshot(), ViewSnapshot::Hero);
        assert_eq!(store.dashboard().medications().len(), 3);
        assert!(store.last_result().is_none());
        assert!(store.notices().is_empty());
    }

    #[test]
    fn get_started_opens_fresh_onboarding() {
        let mut store = AppStore::new();
        assert_eq!(store.dispatch(AppAction::GetStarted), Ok(Screen::Onboarding));
        match store.snapshot() {
            ViewSnapshot::Onboarding(view) => {
                assert_eq!(view.step_number, 1);
                assert!(view.medications.is_empty());
            }
            other => panic!("Expected onboarding view, got: {other:?}"),
        }
    }

    #[test]
    fn onboarding_action_without_flow_rejected() {
        let mut store = AppStore::new();
        assert_eq!(
            onboard(&mut store, OnboardingAction::Advance),
            Err(AppError::NoActiveOnboarding)
        );
        assert_eq!(store.screen(), Screen::Hero);
    }

    #[test]
    fn missing_answer_surfaces_notice() {
        let mut store = AppStore::new();
        store.dispatch(AppAction::GetStarted).unwrap();

        let err = onboard(&mut store, OnboardingAction::Advance).unwrap_err();
        assert_eq!(err, AppError::Onboarding(OnboardingError::MissingAnswer));
        assert_eq!(store.screen(), Screen::Onboarding);

        let notices = store.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Please select an option");
        assert_eq!(notices[0].variant, NoticeVariant::Destructive);
    }

    #[test]
    fn full_medicated_flow_reaches_dashboard() {
        let mut store = AppStore::new();
        store.dispatch(AppAction::GetStarted).unwrap();
        onboard(&mut store, OnboardingAction::SelectMedicated { is_medicated: true }).unwrap();
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        onboard(&mut store, OnboardingAction::AddMedication).unwrap();

        let id = first_medication_id(&store);
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        let err = onboard(&mut store, OnboardingAction::Complete).unwrap_err();
        assert_eq!(
            err,
            AppError::Onboarding(OnboardingError::MissingMedicationDetails {
                field: MissingField::Name
            })
        );
        assert_eq!(store.drain_notices()[0].title, "Missing Information");

        onboard(&mut store, OnboardingAction::GoBack).unwrap();
        for edit in [
            MedicationEdit::Rename("Metformin".into()),
            MedicationEdit::ChangeDosage("500mg".into()),
        ] {
            onboard(&mut store, OnboardingAction::EditMedication { id, edit }).unwrap();
        }
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        assert_eq!(
            onboard(&mut store, OnboardingAction::Complete),
            Ok(Screen::Dashboard)
        );

        assert!(store.onboarding().is_none());
        let result = store.last_result().unwrap();
        assert!(result.is_medicated);
        assert_eq!(result.medications[0].name, "Metformin");

        match store.snapshot() {
            ViewSnapshot::Dashboard(data) => {
                assert_eq!(data.medication_count, 1);
                assert_eq!(data.adherence_rate, Some(100));
                assert_eq!(data.next_dose, "08:00");
                assert_eq!(data.medications[0].id, id);
            }
            other => panic!("Expected dashboard view, got: {other:?}"),
        }

        let notices = store.drain_notices();
        assert_eq!(notices[0].title, "Setup Complete!");
        assert!(notices[0].description.contains("reminders are now active"));
    }

    #[test]
    fn invalid_edits_queue_notice_and_keep_state() {
        let mut store = AppStore::new();
        store.dispatch(AppAction::GetStarted).unwrap();
        onboard(&mut store, OnboardingAction::SelectMedicated { is_medicated: true }).unwrap();
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        onboard(&mut store, OnboardingAction::AddMedication).unwrap();
        let id = first_medication_id(&store);
        let before = store.onboarding().cloned().unwrap();

        let err = onboard(
            &mut store,
            OnboardingAction::UpdateTime { id, index: 0, value: "25:99".into() },
        )
        .unwrap_err();
        assert_eq!(
            err,
            AppError::Onboarding(OnboardingError::Edit(MedicationEditError::InvalidTime(
                "25:99".into()
            )))
        );

        let yesterday = today().pred_opt().unwrap();
        let err = onboard(
            &mut store,
            OnboardingAction::EditMedication {
                id,
                edit: MedicationEdit::ChangeEndDate(Some(yesterday)),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            AppError::Onboarding(OnboardingError::Edit(MedicationEditError::EndBeforeStart))
        );

        assert_eq!(store.onboarding(), Some(&before));
        assert_eq!(store.screen(), Screen::Onboarding);

        let notices = store.drain_notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "Invalid Time");
        assert!(notices[0].description.contains("25:99"));
        assert_eq!(notices[1].title, "Invalid Date");
        assert!(notices
            .iter()
            .all(|n| n.variant == NoticeVariant::Destructive));
    }

    #[test]
    fn not_medicated_flow_keeps_sample_rows() {
        let mut store = AppStore::new();
        store.dispatch(AppAction::GetStarted).unwrap();
        onboard(&mut store, OnboardingAction::SelectMedicated { is_medicated: false }).unwrap();
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        onboard(&mut store, OnboardingAction::Complete).unwrap();

        assert_eq!(store.screen(), Screen::Dashboard);
        assert_eq!(store.dashboard().medications().len(), 3);
        let result = store.last_result().unwrap();
        assert!(!result.is_medicated);
        assert!(result.medications.is_empty());
        assert!(store.drain_notices()[0]
            .description
            .contains("You can add medications anytime"));
    }

    #[test]
    fn mark_taken_records_notice_and_keeps_result() {
        let mut store = AppStore::new();
        store.dispatch(AppAction::GetStarted).unwrap();
        onboard(&mut store, OnboardingAction::SelectMedicated { is_medicated: false }).unwrap();
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        onboard(&mut store, OnboardingAction::Complete).unwrap();
        store.drain_notices();

        let result_before = store.last_result().cloned();
        let aspirin = store.dashboard().medications()[2].id;
        store.dispatch(AppAction::MarkTaken(aspirin)).unwrap();

        assert!(store.dashboard().medications()[2].taken);
        assert!(!store.dashboard().medications()[0].taken);
        assert_eq!(store.last_result().cloned(), result_before);

        let notices = store.drain_notices();
        assert_eq!(notices[0].title, "Medication Recorded");
        assert_eq!(
            notices[0].description,
            "Aspirin marked as taken. Great job staying on track!"
        );
    }

    #[test]
    fn mark_taken_unknown_is_error_without_notice() {
        let mut store = AppStore::new();
        let stranger = Uuid::new_v4();
        assert_eq!(
            store.dispatch(AppAction::MarkTaken(stranger)),
            Err(AppError::Dashboard(DashboardError::NotFound(stranger)))
        );
        assert!(store.notices().is_empty());
    }

    #[test]
    fn view_history_is_coming_soon() {
        let mut store = AppStore::new();
        assert_eq!(store.dispatch(AppAction::ViewHistory), Ok(Screen::Hero));
        assert_eq!(store.drain_notices()[0].title, "Coming Soon");
    }

    #[test]
    fn add_medication_restarts_onboarding() {
        let mut store = AppStore::new();
        store.dispatch(AppAction::GetStarted).unwrap();
        onboard(&mut store, OnboardingAction::SelectMedicated { is_medicated: false }).unwrap();
        onboard(&mut store, OnboardingAction::Advance).unwrap();
        onboard(&mut store, OnboardingAction::Complete).unwrap();

        assert_eq!(store.dispatch(AppAction::AddMedication), Ok(Screen::Onboarding));
        let flow = store.onboarding().unwrap();
        assert_eq!(flow.step().number(), 1);
        assert!(flow.is_medicated().is_none());
        // The earlier result stays until the next completion replaces it.
        assert!(store.last_result().is_some());
    }

    #[test]
    fn action_wire_shape() {
        let action: AppAction = serde_json::from_str(
            r#"{"type":"onboarding","payload":{"type":"set_caregiver_alerts","enabled":true}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            AppAction::Onboarding(OnboardingAction::SetCaregiverAlerts { enabled: true })
        );

        let json = serde_json::to_value(AppStore::new().snapshot()).unwrap();
        assert_eq!(json["screen"], "hero");
    }
}
