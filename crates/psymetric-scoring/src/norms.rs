//! Normative Lookup.

use tracing::warn;

use psymetric_core::models::administration::Respondent;
use psymetric_core::models::norms::{EquivalenceEntry, NormMethod, NormativeRecord, NormativeScore};

use crate::stats;

/// First record for the subscale whose population filter admits the
/// respondent. Selection is by list order, not best fit.
pub fn select_record<'a>(
    records: &'a [NormativeRecord],
    subscale: &str,
    respondent: &Respondent,
) -> Option<&'a NormativeRecord> {
    records
        .iter()
        .filter(|r| r.subscale == subscale)
        .find(|r| r.filter.admits(respondent))
}

/// Equivalence row whose raw score is nearest to `raw`; ties keep the
/// first row encountered.
pub fn nearest_equivalence(entries: &[EquivalenceEntry], raw: f64) -> Option<&EquivalenceEntry> {
    let mut best: Option<(&EquivalenceEntry, f64)> = None;
    for entry in entries {
        let distance = (entry.raw_score - raw).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((entry, distance)),
        }
    }
    best.map(|(entry, _)| entry)
}

/// Derive percentile and T-score for a raw subscale score.
///
/// Returns `None` when no normative comparison is available: no record
/// admits the respondent, or the matched record has neither an
/// equivalence table nor a usable standard deviation.
pub fn lookup(
    raw: f64,
    subscale: &str,
    candidates: &[NormativeRecord],
    respondent: &Respondent,
) -> Option<NormativeScore> {
    let record = select_record(candidates, subscale, respondent)?;

    if let Some(entry) = nearest_equivalence(&record.equivalences, raw) {
        return Some(NormativeScore {
            record_id: record.id,
            method: NormMethod::EquivalenceTable,
            percentile: entry.percentile,
            t_score: entry.t_score,
            z_score: entry.z_score,
            stanine: entry.stanine,
            decile: entry.decile,
        });
    }

    let Some(z) = stats::z_score(raw, record.mean, record.std_dev) else {
        warn!(
            record_id = %record.id,
            subscale,
            std_dev = record.std_dev,
            "normative record has no usable standard deviation"
        );
        return None;
    };

    Some(NormativeScore {
        record_id: record.id,
        method: NormMethod::NormalApproximation,
        percentile: stats::percentile_from_z(z),
        t_score: stats::t_score_from_z(z),
        z_score: Some(z),
        stanine: None,
        decile: None,
    })
}
