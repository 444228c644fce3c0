//! Cut-Point Classifier.

use psymetric_core::models::cut_point::{CutPointRecord, InterpretationBand};

use crate::error::ScoringError;

/// First band of the subscale whose inclusive range contains `raw`.
///
/// `None` means no interpretation is available for this score.
pub fn classify(raw: f64, subscale: &str, records: &[CutPointRecord]) -> Option<InterpretationBand> {
    records
        .iter()
        .filter(|r| r.subscale == subscale)
        .find(|r| r.range.contains(raw))
        .map(InterpretationBand::from)
}

/// Reject inverted ranges and ranges that overlap within the same
/// (scale, subscale) pair.
pub fn validate_cut_points(records: &[CutPointRecord]) -> Result<(), ScoringError> {
    for (i, record) in records.iter().enumerate() {
        if !(record.range.min <= record.range.max) {
            return Err(ScoringError::InvalidScale {
                scale_id: record.scale_id.clone(),
                reason: format!(
                    "cut-point '{}' of subscale '{}' has min {} above max {}",
                    record.label, record.subscale, record.range.min, record.range.max
                ),
            });
        }
        let clash = records[i + 1..].iter().find(|other| {
            other.scale_id == record.scale_id
                && other.subscale == record.subscale
                && other.range.overlaps(&record.range)
        });
        if let Some(other) = clash {
            return Err(ScoringError::OverlappingCutPoints {
                scale_id: record.scale_id.clone(),
                subscale: record.subscale.clone(),
                first_min: record.range.min,
                first_max: record.range.max,
                second_min: other.range.min,
                second_max: other.range.max,
            });
        }
    }
    Ok(())
}
