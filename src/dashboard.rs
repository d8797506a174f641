//! Medication dashboard: display projection and dose tracking.
//!
//! Provides the data for the dashboard screen: the displayed medication
//! rows, today's count, overall adherence and the next pending dose.
//! Rows are either the seeded sample set or the medications collected by
//! onboarding.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;
use crate::models::{DisplayMedication, Frequency, OnboardingResult};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Medication not found: {0}")]
    NotFound(Uuid),
}

/// Dashboard screen data, fetched in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub medication_count: u32,
    /// `None` when there is nothing to average.
    pub adherence_rate: Option<u8>,
    pub next_dose: String,
    pub medications: Vec<DisplayMedication>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    medications: Vec<DisplayMedication>,
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Stable id for a seeded sample row.
fn sample_id(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("vyva-sample-{name}").as_bytes())
}

fn sample(
    name: &str,
    dosage: &str,
    frequency: Frequency,
    times: &[&str],
    taken: bool,
    adherence: u8,
) -> DisplayMedication {
    DisplayMedication {
        id: sample_id(name),
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency,
        times: times.iter().map(|t| t.to_string()).collect(),
        next_dose: config::NEXT_DOSE_FALLBACK.to_string(),
        taken,
        adherence,
    }
}

/// The three demo rows shown before onboarding replaces them.
pub fn sample_medications() -> Vec<DisplayMedication> {
    vec![
        sample("Metformin", "500mg", Frequency::TwiceDaily, &["08:00", "20:00"], false, 88),
        sample("Lisinopril", "10mg", Frequency::OnceDaily, &["08:00"], true, 95),
        sample("Aspirin", "81mg", Frequency::OnceDaily, &["08:00"], false, 92),
    ]
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

impl Dashboard {
    pub fn new(medications: Vec<DisplayMedication>) -> Self {
        Self { medications }
    }

    pub fn sample() -> Self {
        Self::new(sample_medications())
    }

    pub fn medications(&self) -> &[DisplayMedication] {
        &self.medications
    }

    /// Replaces the rows with the onboarding medications, if there are any.
    /// A result without medications leaves the current rows in place.
    pub fn apply_onboarding(&mut self, result: &OnboardingResult) -> bool {
        if !result.has_medications() {
            return false;
        }
        self.medications = result.medications.iter().map(DisplayMedication::from).collect();
        true
    }

    /// Rounded mean of the per-medication adherence.
    pub fn overall_adherence(&self) -> Option<u8> {
        if self.medications.is_empty() {
            return None;
        }
        let total: u32 = self.medications.iter().map(|m| u32::from(m.adherence)).sum();
        let mean = f64::from(total) / self.medications.len() as f64;
        Some(mean.round().clamp(0.0, 100.0) as u8)
    }

    /// Next-dose label of the first medication not yet taken.
    pub fn next_pending_dose(&self) -> Option<&str> {
        self.medications
            .iter()
            .find(|m| !m.taken)
            .map(|m| m.next_dose.as_str())
    }

    /// Flags one medication as taken. Other rows are untouched.
    pub fn mark_taken(&mut self, id: &Uuid) -> Result<&DisplayMedication, DashboardError> {
        let med = self
            .medications
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or(DashboardError::NotFound(*id))?;
        med.taken = true;
        tracing::info!(%id, "Dose marked as taken");
        Ok(&*med)
    }

    pub fn data(&self) -> DashboardData {
        DashboardData {
            medication_count: self.medications.len() as u32,
            adherence_rate: self.overall_adherence(),
            next_dose: self
                .next_pending_dose()
                .unwrap_or(config::ALL_DONE_LABEL)
                .to_string(),
            medications: self.medications.clone(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::sample()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
