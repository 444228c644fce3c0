use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::cut_point::InterpretationBand;
use super::norms::NormativeScore;
use crate::NOT_AVAILABLE;

/// Scoring outcome for one subscale (or the total) of one administration.
///
/// `norm` and `interpretation` are `None` when no normative sample or
/// cut-point band applies; that is a legitimate outcome, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleResult {
    pub administration_id: Uuid,
    pub subscale: String,
    pub raw_score: f64,
    pub norm: Option<NormativeScore>,
    pub interpretation: Option<InterpretationBand>,
}

impl SubscaleResult {
    pub fn label(&self) -> &str {
        self.interpretation
            .as_ref()
            .map(|band| band.label.as_str())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn is_alert(&self) -> bool {
        self.interpretation.as_ref().is_some_and(|band| band.alert)
    }
}
