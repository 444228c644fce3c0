use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Demographic facts about the person answering, used only to pick a
/// matching normative sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Respondent {
    #[serde(default)]
    pub age_years: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Free-text population label (e.g. "general", "clinical").
    #[serde(default)]
    pub population: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdministrationStatus {
    Created,
    Completed,
}

/// One occasion of a respondent completing one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Administration {
    pub id: Uuid,
    pub scale_id: String,
    #[serde(default)]
    pub respondent: Respondent,
    pub status: AdministrationStatus,
    pub created_at: jiff::Timestamp,
    pub completed_at: Option<jiff::Timestamp>,
}

impl Administration {
    pub fn new(scale_id: impl Into<String>, respondent: Respondent, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            scale_id: scale_id.into(),
            respondent,
            status: AdministrationStatus::Created,
            created_at: now,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == AdministrationStatus::Completed
    }

    /// Mark the administration completed. Completion happens exactly once.
    pub fn complete(&mut self, at: jiff::Timestamp) -> Result<(), CoreError> {
        if self.is_completed() {
            return Err(CoreError::AlreadyCompleted(self.id));
        }
        self.status = AdministrationStatus::Completed;
        self.completed_at = Some(at);
        Ok(())
    }
}
