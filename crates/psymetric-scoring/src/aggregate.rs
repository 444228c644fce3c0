//! Subscale Aggregator.

use serde::{Deserialize, Serialize};

use psymetric_core::TOTAL;
use psymetric_core::models::scale::{ScaleDefinition, TotalPolicy};

/// A normalized item score with the subscale it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemScore {
    pub subscale: Option<String>,
    pub score: f64,
}

impl ItemScore {
    pub fn new(subscale: Option<&str>, score: f64) -> Self {
        Self {
            subscale: subscale.map(str::to_string),
            score,
        }
    }
}

/// Raw totals keyed by subscale, in first-appearance order with the
/// synthetic total (if any) last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScores(Vec<(String, f64)>);

impl RawScores {
    pub fn get(&self, subscale: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(key, _)| key == subscale)
            .map(|(_, raw)| *raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, raw)| (key.as_str(), *raw))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sum item scores per subscale.
///
/// Untagged items group under `"total"`. When more than one group exists,
/// a synthetic `"total"` is added according to `policy`; it replaces the
/// untagged group, so untagged items in a mixed scale only count toward it.
pub fn aggregate(item_scores: &[ItemScore], policy: TotalPolicy) -> RawScores {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for item in item_scores {
        let key = item.subscale.as_deref().unwrap_or(TOTAL);
        match groups.iter_mut().find(|(k, _)| k == key) {
            Some((_, sum)) => *sum += item.score,
            None => groups.push((key.to_string(), item.score)),
        }
    }

    if groups.len() <= 1 {
        return RawScores(groups);
    }

    let total = match policy {
        TotalPolicy::Omit => return RawScores(groups),
        TotalPolicy::SumAll => item_scores.iter().map(|i| i.score).sum::<f64>(),
        TotalPolicy::ExcludeTotalTagged => item_scores
            .iter()
            .filter(|i| i.subscale.as_deref() != Some(TOTAL))
            .map(|i| i.score)
            .sum::<f64>(),
    };

    groups.retain(|(key, _)| key != TOTAL);
    groups.push((TOTAL.to_string(), total));
    RawScores(groups)
}

/// Subscale keys a scored administration of `scale` produces, in result
/// order, including the synthetic total when the policy adds one.
pub fn result_subscales(scale: &ScaleDefinition) -> Vec<&str> {
    let mut keys = scale.subscales();
    if keys.len() <= 1 || scale.total_policy == TotalPolicy::Omit {
        return keys;
    }
    keys.retain(|key| *key != TOTAL);
    keys.push(TOTAL);
    keys
}
