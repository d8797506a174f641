use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Frequency, MissingField};
use crate::config;

/// A medication being described during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    /// `HH:MM` intake times. Never empty.
    pub times: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl MedicationEntry {
    /// Placeholder entry created by "Add Medication".
    pub fn placeholder(today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            dosage: String::new(),
            frequency: Frequency::default(),
            times: vec![config::DEFAULT_INTAKE_TIME.to_string()],
            start_date: today,
            end_date: None,
        }
    }

    /// First required field left blank, name before dosage.
    pub fn missing_detail(&self) -> Option<MissingField> {
        if self.name.trim().is_empty() {
            Some(MissingField::Name)
        } else if self.dosage.trim().is_empty() {
            Some(MissingField::Dosage)
        } else {
            None
        }
    }
}

/// A medication row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMedication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub times: Vec<String>,
    pub next_dose: String,
    pub taken: bool,
    /// Percentage, 0-100.
    pub adherence: u8,
}

impl From<&MedicationEntry> for DisplayMedication {
    /// Adherence history is not carried over: every entry starts at 100.
    fn from(entry: &MedicationEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            dosage: entry.dosage.clone(),
            frequency: entry.frequency,
            times: entry.times.clone(),
            next_dose: entry
                .times
                .first()
                .cloned()
                .unwrap_or_else(|| config::NEXT_DOSE_FALLBACK.to_string()),
            taken: false,
            adherence: config::FRESH_ADHERENCE,
        }
    }
}
