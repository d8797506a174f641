use serde::{Deserialize, Serialize};

use super::medication::MedicationEntry;

/// Answers collected by the onboarding wizard.
///
/// Built once when the wizard completes. `medications` is always empty when
/// `is_medicated` is false, whatever was entered before the answer changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingResult {
    pub is_medicated: bool,
    pub medications: Vec<MedicationEntry>,
    pub caregiver_alerts: bool,
    pub caregiver_contact: String,
}

impl OnboardingResult {
    pub fn has_medications(&self) -> bool {
        self.is_medicated && !self.medications.is_empty()
    }
}
