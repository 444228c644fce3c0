use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use psymetric_core::models::scale::{ResponseType, ScaleDefinition};

use crate::error::ScoringError;
use crate::normalize;

/// A rejected answer, reported back to whoever submitted it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerError {
    pub item_sequence: u32,
    pub answer: String,
    pub message: String,
}

/// Check a scale definition before it is accepted as reference data.
pub fn validate_scale(scale: &ScaleDefinition) -> Result<(), ScoringError> {
    let invalid = |reason: String| ScoringError::InvalidScale {
        scale_id: scale.id.clone(),
        reason,
    };

    if scale.items.is_empty() {
        return Err(invalid("scale has no items".to_string()));
    }

    let mut seen = HashSet::new();
    for item in &scale.items {
        if !seen.insert(item.sequence) {
            return Err(invalid(format!("duplicate item sequence {}", item.sequence)));
        }
        match &item.response_type {
            ResponseType::Numeric if item.inverted => {
                return Err(invalid(format!(
                    "item {} is numeric and cannot be inverted",
                    item.sequence
                )));
            }
            ResponseType::MultipleChoice { options } if options.is_empty() => {
                return Err(invalid(format!(
                    "item {} is multiple choice without options",
                    item.sequence
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Validate a batch of `(item sequence, raw answer)` pairs against a scale.
/// Returns one error per rejected answer; empty means every answer scores.
pub fn validate_answers(scale: &ScaleDefinition, answers: &[(u32, String)]) -> Vec<AnswerError> {
    let mut errors = Vec::new();
    for (sequence, answer) in answers {
        let message = match scale.item(*sequence) {
            None => Some(format!("{}: no item {}", scale.name, sequence)),
            Some(item) => normalize::normalize(answer, &item.response_type, item.inverted)
                .err()
                .map(|e| format!("{}: item {}: {}", scale.name, sequence, e)),
        };
        if let Some(message) = message {
            errors.push(AnswerError {
                item_sequence: *sequence,
                answer: answer.clone(),
                message,
            });
        }
    }
    errors
}
