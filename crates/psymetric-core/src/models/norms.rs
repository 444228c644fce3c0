use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::administration::{Gender, Respondent};

/// Which respondents a normative sample applies to. Every field is
/// optional; an absent field places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PopulationFilter {
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub population: Option<String>,
}

impl PopulationFilter {
    /// Whether this filter is compatible with the respondent. Facts the
    /// respondent does not provide never exclude a sample.
    pub fn admits(&self, respondent: &Respondent) -> bool {
        if let Some(age) = respondent.age_years {
            if self.min_age.is_some_and(|min| age < min) {
                return false;
            }
            if self.max_age.is_some_and(|max| age > max) {
                return false;
            }
        }
        if let (Some(wanted), Some(actual)) = (self.gender, respondent.gender)
            && wanted != actual
        {
            return false;
        }
        if let (Some(wanted), Some(actual)) = (&self.population, &respondent.population)
            && !wanted.eq_ignore_ascii_case(actual)
        {
            return false;
        }
        true
    }
}

/// A precomputed row of a raw-score equivalence table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EquivalenceEntry {
    pub raw_score: f64,
    pub percentile: f64,
    pub t_score: f64,
    #[serde(default)]
    pub z_score: Option<f64>,
    #[serde(default)]
    pub stanine: Option<u8>,
    #[serde(default)]
    pub decile: Option<u8>,
}

/// Reference-sample statistics for one subscale of one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeRecord {
    pub id: Uuid,
    pub scale_id: String,
    pub subscale: String,
    #[serde(default)]
    pub filter: PopulationFilter,
    pub mean: f64,
    pub std_dev: f64,
    /// Description of the reference sample.
    #[serde(default)]
    pub sample: String,
    #[serde(default)]
    pub equivalences: Vec<EquivalenceEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NormMethod {
    /// Values copied from an equivalence table row.
    EquivalenceTable,
    /// Values derived from the sample mean and standard deviation.
    NormalApproximation,
}

/// Normative derived scores for one raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeScore {
    /// The normative record the values were taken from.
    pub record_id: Uuid,
    pub method: NormMethod,
    pub percentile: f64,
    pub t_score: f64,
    pub z_score: Option<f64>,
    pub stanine: Option<u8>,
    pub decile: Option<u8>,
}
