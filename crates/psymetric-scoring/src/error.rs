use thiserror::Error;
use uuid::Uuid;

use psymetric_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid response type: {0}")]
    InvalidResponseType(String),

    #[error("answer '{answer}' is outside [0, {max}]")]
    OutOfRangeAnswer { answer: String, max: u32 },

    #[error("answer '{answer}' is not a valid {expected}")]
    InvalidAnswer {
        answer: String,
        expected: &'static str,
    },

    #[error("inversion does not apply to free numeric responses")]
    InversionNotApplicable,

    #[error("item {sequence}: {source}")]
    Item {
        sequence: u32,
        #[source]
        source: Box<ScoringError>,
    },

    #[error("administration {administration_id} is incomplete (missing items {missing:?})")]
    IncompleteAdministration {
        administration_id: Uuid,
        missing: Vec<u32>,
    },

    #[error("inconsistent response for administration {administration_id}: {reason}")]
    InconsistentResponse {
        administration_id: Uuid,
        reason: String,
    },

    #[error("administration {administration_id} belongs to scale '{actual}', not '{requested}'")]
    ScaleMismatch {
        administration_id: Uuid,
        requested: String,
        actual: String,
    },

    #[error("invalid scale definition '{scale_id}': {reason}")]
    InvalidScale { scale_id: String, reason: String },

    #[error(
        "overlapping cut-points for '{scale_id}/{subscale}': [{first_min}, {first_max}] and [{second_min}, {second_max}]"
    )]
    OverlappingCutPoints {
        scale_id: String,
        subscale: String,
        first_min: f64,
        first_max: f64,
        second_min: f64,
        second_max: f64,
    },

    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown administration: {0}")]
    UnknownAdministration(Uuid),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ScoringError {
    /// The innermost error, looking through per-item wrapping.
    pub fn root(&self) -> &ScoringError {
        match self {
            ScoringError::Item { source, .. } => source.root(),
            other => other,
        }
    }
}
