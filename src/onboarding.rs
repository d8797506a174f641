//! Onboarding wizard: step progression and answer collection.
//!
//! Steps: "are you medicated?" → medication details → caregiver alerts →
//! complete. Answering "no" skips the medication details step. All
//! transitions are synchronous; a rejected transition leaves the flow
//! exactly as it was.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::medications::{MedicationEdit, MedicationEditError, MedicationList};
use crate::models::{Frequency, MedicationEntry, MissingField, OnboardingResult};
use crate::notices::Notice;

/// Number of steps shown in the wizard's progress indicator.
pub const TOTAL_STEPS: u8 = 3;

// ═══════════════════════════════════════════
// Steps
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Step 1: yes/no question
    AskingIfMedicated,
    /// Step 2: medication list form
    CollectingMedications,
    /// Step 3: caregiver alert preferences
    ConfirmingCaregiverAlerts,
    /// Result emitted; the flow accepts nothing further
    Complete,
}

impl OnboardingStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::AskingIfMedicated => 1,
            Self::CollectingMedications => 2,
            Self::ConfirmingCaregiverAlerts => 3,
            Self::Complete => TOTAL_STEPS + 1,
        }
    }

    /// Forward edge. `None` where only `complete()` (or nothing) applies.
    fn next(self, is_medicated: bool) -> Option<Self> {
        match self {
            Self::AskingIfMedicated if is_medicated => Some(Self::CollectingMedications),
            Self::AskingIfMedicated => Some(Self::ConfirmingCaregiverAlerts),
            Self::CollectingMedications => Some(Self::ConfirmingCaregiverAlerts),
            Self::ConfirmingCaregiverAlerts | Self::Complete => None,
        }
    }

    /// Backward edge to the previous reachable step.
    fn previous(self, is_medicated: bool) -> Option<Self> {
        match self {
            Self::AskingIfMedicated | Self::Complete => None,
            Self::CollectingMedications => Some(Self::AskingIfMedicated),
            Self::ConfirmingCaregiverAlerts if is_medicated => Some(Self::CollectingMedications),
            Self::ConfirmingCaregiverAlerts => Some(Self::AskingIfMedicated),
        }
    }
}

// ═══════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("Please answer whether you are taking any medications")]
    MissingAnswer,

    #[error("Medication {field} is required")]
    MissingMedicationDetails { field: MissingField },

    #[error("Setup can only be completed from the caregiver alerts step")]
    NotAtConfirmation,

    #[error("The medication answer can only be changed on the first step")]
    AnswerLocked,

    #[error("Already at the final step")]
    FinalStep,

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Onboarding is already complete")]
    AlreadyComplete,

    #[error(transparent)]
    Edit(#[from] MedicationEditError),
}

impl OnboardingError {
    /// User-facing advisory for failures the user can correct.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::MissingAnswer => Some(Notice::destructive(
                "Please select an option",
                "Are you currently taking any medications?",
            )),
            Self::MissingMedicationDetails { field } => Some(Notice::destructive(
                "Missing Information",
                format!(
                    "Please fill in all medication details before continuing. \
                     Medication {field} is required."
                ),
            )),
            Self::Edit(MedicationEditError::InvalidTime(value)) => Some(Notice::destructive(
                "Invalid Time",
                format!("\"{value}\" is not a valid time. Use HH:MM."),
            )),
            Self::Edit(MedicationEditError::EndBeforeStart) => Some(Notice::destructive(
                "Invalid Date",
                "The end date cannot be before the start date.",
            )),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════
// Actions & view
// ═══════════════════════════════════════════

/// Everything the onboarding screen can ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OnboardingAction {
    SelectMedicated { is_medicated: bool },
    Advance,
    GoBack,
    Complete,
    AddMedication,
    RemoveMedication { id: Uuid },
    EditMedication { id: Uuid, edit: MedicationEdit },
    AddTime { id: Uuid },
    RemoveTime { id: Uuid, index: usize },
    UpdateTime { id: Uuid, index: usize, value: String },
    SetCaregiverAlerts { enabled: bool },
    SetCaregiverContact { contact: String },
}

/// Snapshot rendered by the onboarding screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingView {
    pub step: OnboardingStep,
    pub step_number: u8,
    pub total_steps: u8,
    pub is_medicated: Option<bool>,
    pub medications: Vec<MedicationEntry>,
    pub caregiver_alerts: bool,
    pub caregiver_contact: String,
    pub frequency_options: Vec<Frequency>,
}

// ═══════════════════════════════════════════
// Flow controller
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    is_medicated: Option<bool>,
    medications: MedicationList,
    caregiver_alerts: bool,
    caregiver_contact: String,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::AskingIfMedicated,
            is_medicated: None,
            medications: MedicationList::new(),
            caregiver_alerts: false,
            caregiver_contact: String::new(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_medicated(&self) -> Option<bool> {
        self.is_medicated
    }

    pub fn medications(&self) -> &MedicationList {
        &self.medications
    }

    pub fn caregiver_alerts(&self) -> bool {
        self.caregiver_alerts
    }

    pub fn caregiver_contact(&self) -> &str {
        &self.caregiver_contact
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    /// Records the yes/no answer. Only accepted on the first step.
    pub fn select_medicated(&mut self, is_medicated: bool) -> Result<(), OnboardingError> {
        self.ensure_open()?;
        if self.step != OnboardingStep::AskingIfMedicated {
            return Err(OnboardingError::AnswerLocked);
        }
        self.is_medicated = Some(is_medicated);
        Ok(())
    }

    /// Moves forward one step, skipping medication details when not medicated.
    pub fn advance(&mut self) -> Result<OnboardingStep, OnboardingError> {
        self.ensure_open()?;
        let is_medicated = match (self.step, self.is_medicated) {
            (OnboardingStep::AskingIfMedicated, None) => {
                return Err(OnboardingError::MissingAnswer)
            }
            (_, answer) => answer.unwrap_or(false),
        };
        let next = self
            .step
            .next(is_medicated)
            .ok_or(OnboardingError::FinalStep)?;
        tracing::debug!(from = self.step.number(), to = next.number(), "Onboarding advanced");
        self.step = next;
        Ok(next)
    }

    pub fn go_back(&mut self) -> Result<OnboardingStep, OnboardingError> {
        self.ensure_open()?;
        let previous = self
            .step
            .previous(self.is_medicated.unwrap_or(false))
            .ok_or(OnboardingError::AtFirstStep)?;
        tracing::debug!(from = self.step.number(), to = previous.number(), "Onboarding went back");
        self.step = previous;
        Ok(previous)
    }

    /// Validates and emits the result. Only valid from the caregiver step.
    pub fn complete(&mut self) -> Result<OnboardingResult, OnboardingError> {
        self.ensure_open()?;
        if self.step != OnboardingStep::ConfirmingCaregiverAlerts {
            return Err(OnboardingError::NotAtConfirmation);
        }

        let is_medicated = self.is_medicated.unwrap_or(false);
        if is_medicated {
            if let Some(field) = self.medications.missing_details() {
                return Err(OnboardingError::MissingMedicationDetails { field });
            }
        }

        let medications = if is_medicated {
            self.medications.entries().to_vec()
        } else {
            Vec::new()
        };

        self.step = OnboardingStep::Complete;
        tracing::info!(
            is_medicated,
            medication_count = medications.len(),
            caregiver_alerts = self.caregiver_alerts,
            "Onboarding complete"
        );

        Ok(OnboardingResult {
            is_medicated,
            medications,
            caregiver_alerts: self.caregiver_alerts,
            caregiver_contact: self.caregiver_contact.clone(),
        })
    }

    pub fn set_caregiver_alerts(&mut self, enabled: bool) -> Result<(), OnboardingError> {
        self.ensure_open()?;
        self.caregiver_alerts = enabled;
        Ok(())
    }

    pub fn set_caregiver_contact(&mut self, contact: String) -> Result<(), OnboardingError> {
        self.ensure_open()?;
        self.caregiver_contact = contact;
        Ok(())
    }

    /// Mutable access to the medication form while the flow is open.
    pub fn medications_mut(&mut self) -> Result<&mut MedicationList, OnboardingError> {
        self.ensure_open()?;
        Ok(&mut self.medications)
    }

    /// Applies one action. Returns the result when the action completed the flow.
    pub fn handle(
        &mut self,
        action: OnboardingAction,
        today: NaiveDate,
    ) -> Result<Option<OnboardingResult>, OnboardingError> {
        use OnboardingAction::*;

        match action {
            SelectMedicated { is_medicated } => self.select_medicated(is_medicated)?,
            Advance => {
                self.advance()?;
            }
            GoBack => {
                self.go_back()?;
            }
            Complete => return self.complete().map(Some),
            AddMedication => {
                self.medications_mut()?.add_medication(today);
            }
            RemoveMedication { id } => {
                self.medications_mut()?.remove_medication(&id)?;
            }
            EditMedication { id, edit } => self.medications_mut()?.apply(&id, edit)?,
            AddTime { id } => self.medications_mut()?.add_time(&id)?,
            RemoveTime { id, index } => {
                self.medications_mut()?.remove_time(&id, index)?;
            }
            UpdateTime { id, index, value } => {
                self.medications_mut()?.update_time(&id, index, &value)?
            }
            SetCaregiverAlerts { enabled } => self.set_caregiver_alerts(enabled)?,
            SetCaregiverContact { contact } => self.set_caregiver_contact(contact)?,
        }
        Ok(None)
    }

    pub fn view(&self) -> OnboardingView {
        OnboardingView {
            step: self.step,
            step_number: self.step.number().min(TOTAL_STEPS),
            total_steps: TOTAL_STEPS,
            is_medicated: self.is_medicated,
            medications: self.medications.entries().to_vec(),
            caregiver_alerts: self.caregiver_alerts,
            caregiver_contact: self.caregiver_contact.clone(),
            frequency_options: Frequency::ALL.to_vec(),
        }
    }

    fn ensure_open(&self) -> Result<(), OnboardingError> {
        if self.is_complete() {
            Err(OnboardingError::AlreadyComplete)
        } else {
            Ok(())
        }
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
