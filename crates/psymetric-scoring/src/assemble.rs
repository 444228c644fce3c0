//! Interpretation Assembler.
//!
//! Runs normalization, aggregation, normative lookup and classification
//! for one administration and persists the per-subscale results.

use std::collections::HashMap;

use tracing::{debug, info};
use uuid::Uuid;

use psymetric_core::NOT_AVAILABLE;
use psymetric_core::models::administration::Administration;
use psymetric_core::models::response::ItemResponse;
use psymetric_core::models::result::SubscaleResult;
use psymetric_core::models::scale::ScaleDefinition;

use crate::aggregate::{ItemScore, RawScores, aggregate};
use crate::error::ScoringError;
use crate::normalize::score_item;
use crate::store::ScoringStore;
use crate::{cut_points, norms};

/// Check the response set of an administration against its scale and
/// compute the raw score of every subscale.
///
/// Responses that point outside the scale or the administration abort
/// scoring; missing answers fail with `IncompleteAdministration`.
pub fn score_responses(
    scale: &ScaleDefinition,
    administration_id: Uuid,
    responses: &[ItemResponse],
) -> Result<RawScores, ScoringError> {
    let inconsistent = |reason: String| ScoringError::InconsistentResponse {
        administration_id,
        reason,
    };

    let mut answered: HashMap<u32, &ItemResponse> = HashMap::new();
    for response in responses {
        if response.administration_id != administration_id {
            return Err(inconsistent(format!(
                "response to item {} belongs to administration {}",
                response.item_sequence, response.administration_id
            )));
        }
        if response.scale_id != scale.id {
            return Err(inconsistent(format!(
                "response to item {} references scale '{}' instead of '{}'",
                response.item_sequence, response.scale_id, scale.id
            )));
        }
        if scale.item(response.item_sequence).is_none() {
            return Err(inconsistent(format!(
                "scale '{}' has no item {}",
                scale.id, response.item_sequence
            )));
        }
        if answered.insert(response.item_sequence, response).is_some() {
            return Err(inconsistent(format!(
                "item {} answered more than once",
                response.item_sequence
            )));
        }
    }

    let mut item_scores = Vec::with_capacity(scale.items.len());
    let mut missing = Vec::new();
    for item in &scale.items {
        match answered.get(&item.sequence) {
            Some(response) => {
                let score = score_item(item, &response.raw_answer)?;
                item_scores.push(ItemScore::new(item.subscale.as_deref(), score));
            }
            None => missing.push(item.sequence),
        }
    }
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAdministration {
            administration_id,
            missing,
        });
    }

    Ok(aggregate(&item_scores, scale.total_policy))
}

/// Recompute and replace the results of a completed administration.
///
/// Calling this again with unchanged inputs produces identical results.
pub fn assemble<S: ScoringStore + ?Sized>(
    store: &S,
    administration_id: Uuid,
    scale_id: &str,
) -> Result<Vec<SubscaleResult>, ScoringError> {
    let lock = store.administration_lock(administration_id)?;
    let _guard = lock
        .lock()
        .map_err(|_| ScoringError::Storage("administration lock poisoned".to_string()))?;

    let administration = store.administration(administration_id)?;
    if administration.scale_id != scale_id {
        return Err(ScoringError::ScaleMismatch {
            administration_id,
            requested: scale_id.to_string(),
            actual: administration.scale_id,
        });
    }
    if !administration.is_completed() {
        let scale = store.scale(scale_id)?;
        let responses = store.responses(administration_id)?;
        return Err(ScoringError::IncompleteAdministration {
            administration_id,
            missing: missing_items(&scale, &responses),
        });
    }

    let results = evaluate(store, &administration)?;
    store.replace_results(administration_id, &results)?;
    info!(%administration_id, scale_id, subscales = results.len(), "administration re-assembled");
    Ok(results)
}

/// Mark an administration completed and compute its results as one step.
///
/// Everything is validated and computed before anything is written; a
/// failure leaves the administration as it was. On an administration that
/// is already completed this only recomputes.
pub fn complete_and_assemble<S: ScoringStore + ?Sized>(
    store: &S,
    administration_id: Uuid,
    now: jiff::Timestamp,
) -> Result<Vec<SubscaleResult>, ScoringError> {
    let lock = store.administration_lock(administration_id)?;
    let _guard = lock
        .lock()
        .map_err(|_| ScoringError::Storage("administration lock poisoned".to_string()))?;

    let mut administration = store.administration(administration_id)?;
    let results = evaluate(store, &administration)?;

    if administration.is_completed() {
        store.replace_results(administration_id, &results)?;
    } else {
        administration.complete(now)?;
        store.commit_completion(&administration, &results)?;
    }

    info!(
        %administration_id,
        scale_id = %administration.scale_id,
        subscales = results.len(),
        alerts = results.iter().filter(|r| r.is_alert()).count(),
        "administration completed"
    );
    Ok(results)
}

/// Format results as a Markdown block for inclusion in a clinical report.
pub fn summarize(scale: &ScaleDefinition, results: &[SubscaleResult]) -> String {
    let mut output = format!("## {}\n\n", scale.name);
    for result in results {
        output.push_str(&format!("- {}: raw {}", result.subscale, result.raw_score));
        match &result.norm {
            Some(norm) => output.push_str(&format!(
                ", percentile {}, T {}",
                norm.percentile, norm.t_score
            )),
            None => output.push_str(", no normative comparison"),
        }
        match &result.interpretation {
            Some(band) if band.alert => output.push_str(&format!(", {} (alert)", band.label)),
            Some(band) => output.push_str(&format!(", {}", band.label)),
            None => output.push_str(&format!(", {NOT_AVAILABLE}")),
        }
        output.push('\n');
    }
    output
}

fn evaluate<S: ScoringStore + ?Sized>(
    store: &S,
    administration: &Administration,
) -> Result<Vec<SubscaleResult>, ScoringError> {
    let scale = store.scale(&administration.scale_id)?;
    let responses = store.responses(administration.id)?;
    let raw_scores = score_responses(&scale, administration.id, &responses)?;

    let mut results = Vec::with_capacity(raw_scores.len());
    for (subscale, raw_score) in raw_scores.iter() {
        let records = store.normative_records(&scale.id, subscale)?;
        let norm = norms::lookup(raw_score, subscale, &records, &administration.respondent);
        let bands = store.cut_points(&scale.id, subscale)?;
        let interpretation = cut_points::classify(raw_score, subscale, &bands);
        debug!(
            administration_id = %administration.id,
            subscale,
            raw_score,
            normed = norm.is_some(),
            classified = interpretation.is_some(),
            "subscale scored"
        );
        results.push(SubscaleResult {
            administration_id: administration.id,
            subscale: subscale.to_string(),
            raw_score,
            norm,
            interpretation,
        });
    }
    Ok(results)
}

fn missing_items(scale: &ScaleDefinition, responses: &[ItemResponse]) -> Vec<u32> {
    scale
        .items
        .iter()
        .filter(|item| !responses.iter().any(|r| r.item_sequence == item.sequence))
        .map(|item| item.sequence)
        .collect()
}
