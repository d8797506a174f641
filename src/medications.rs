//! Medication list editor used by the onboarding wizard.
//!
//! Holds the ordered medication entries being described and applies the
//! add/remove/edit commands coming from the medication form. Every entry
//! keeps at least one intake time.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;
use crate::models::{Frequency, MedicationEntry, MissingField};

// ═══════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedicationEditError {
    #[error("Medication not found: {0}")]
    NotFound(Uuid),

    #[error("A medication needs at least one intake time")]
    LastIntakeTime,

    #[error("No intake time at position {index} (medication has {len})")]
    TimeIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid intake time (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("End date cannot be before the start date")]
    EndBeforeStart,
}

// ═══════════════════════════════════════════
// Edit commands
// ═══════════════════════════════════════════

/// A single field edit from the medication form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MedicationEdit {
    Rename(String),
    ChangeDosage(String),
    ChangeFrequency(Frequency),
    ChangeStartDate(NaiveDate),
    ChangeEndDate(Option<NaiveDate>),
}

impl MedicationEdit {
    fn field(&self) -> &'static str {
        match self {
            Self::Rename(_) => "name",
            Self::ChangeDosage(_) => "dosage",
            Self::ChangeFrequency(_) => "frequency",
            Self::ChangeStartDate(_) => "start_date",
            Self::ChangeEndDate(_) => "end_date",
        }
    }
}

// ═══════════════════════════════════════════
// Editor
// ═══════════════════════════════════════════

/// Ordered medication entries. New entries are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationList {
    entries: Vec<MedicationEntry>,
}

impl MedicationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MedicationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&MedicationEntry> {
        self.entries.iter().find(|m| m.id == *id)
    }

    /// Appends a placeholder entry and returns its id.
    pub fn add_medication(&mut self, today: NaiveDate) -> Uuid {
        let entry = MedicationEntry::placeholder(today);
        let id = entry.id;
        self.entries.push(entry);
        tracing::debug!(%id, count = self.entries.len(), "Medication added");
        id
    }

    pub fn remove_medication(&mut self, id: &Uuid) -> Result<MedicationEntry, MedicationEditError> {
        let pos = self
            .entries
            .iter()
            .position(|m| m.id == *id)
            .ok_or(MedicationEditError::NotFound(*id))?;
        let removed = self.entries.remove(pos);
        tracing::debug!(%id, count = self.entries.len(), "Medication removed");
        Ok(removed)
    }

    /// Applies one field edit to the matching entry.
    pub fn apply(&mut self, id: &Uuid, edit: MedicationEdit) -> Result<(), MedicationEditError> {
        let field = edit.field();
        let entry = self.entry_mut(id)?;

        match edit {
            MedicationEdit::Rename(name) => entry.name = name,
            MedicationEdit::ChangeDosage(dosage) => entry.dosage = dosage,
            MedicationEdit::ChangeFrequency(frequency) => entry.frequency = frequency,
            MedicationEdit::ChangeStartDate(start) => {
                if entry.end_date.is_some_and(|end| end < start) {
                    return Err(MedicationEditError::EndBeforeStart);
                }
                entry.start_date = start;
            }
            MedicationEdit::ChangeEndDate(end) => {
                if end.is_some_and(|end| end < entry.start_date) {
                    return Err(MedicationEditError::EndBeforeStart);
                }
                entry.end_date = end;
            }
        }

        tracing::debug!(%id, field, "Medication edited");
        Ok(())
    }

    /// Appends the "Add Time" default to the entry's intake times.
    pub fn add_time(&mut self, id: &Uuid) -> Result<(), MedicationEditError> {
        let entry = self.entry_mut(id)?;
        entry.times.push(config::ADDED_INTAKE_TIME.to_string());
        Ok(())
    }

    /// Removes the intake time at `index`. The last remaining time stays.
    pub fn remove_time(&mut self, id: &Uuid, index: usize) -> Result<String, MedicationEditError> {
        let entry = self.entry_mut(id)?;
        let len = entry.times.len();
        if index >= len {
            return Err(MedicationEditError::TimeIndexOutOfRange { index, len });
        }
        if len <= 1 {
            return Err(MedicationEditError::LastIntakeTime);
        }
        Ok(entry.times.remove(index))
    }

    pub fn update_time(
        &mut self,
        id: &Uuid,
        index: usize,
        value: &str,
    ) -> Result<(), MedicationEditError> {
        let value = normalize_time(value)?;
        let entry = self.entry_mut(id)?;
        let len = entry.times.len();
        let slot = entry
            .times
            .get_mut(index)
            .ok_or(MedicationEditError::TimeIndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// First blank required field across all entries, in list order.
    pub fn missing_details(&self) -> Option<MissingField> {
        self.entries.iter().find_map(MedicationEntry::missing_detail)
    }

    pub fn into_entries(self) -> Vec<MedicationEntry> {
        self.entries
    }

    fn entry_mut(&mut self, id: &Uuid) -> Result<&mut MedicationEntry, MedicationEditError> {
        self.entries
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or(MedicationEditError::NotFound(*id))
    }
}

/// Parses `HH:MM` and returns it zero-padded ("8:05" becomes "08:05").
pub fn normalize_time(value: &str) -> Result<String, MedicationEditError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, config::INTAKE_TIME_FORMAT)
        .map(|t| t.format(config::INTAKE_TIME_FORMAT).to_string())
        .map_err(|_| MedicationEditError::InvalidTime(trimmed.to_string()))
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
