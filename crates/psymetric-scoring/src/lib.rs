//! psymetric-scoring
//!
//! Psychometric scoring engine. Pure computation, no storage or HTTP
//! dependency. Turns raw item answers into subscale raw scores, derives
//! normative scores and classifies them against clinical cut-points.

pub mod aggregate;
pub mod assemble;
pub mod cut_points;
pub mod error;
pub mod instruments;
pub mod normalize;
pub mod norms;
pub mod stats;
pub mod store;
pub mod validate;

use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::scale::ScaleDefinition;

use validate::AnswerError;

/// Trait implemented by each bundled psychometric instrument.
pub trait Instrument: Send + Sync {
    /// The scale's items, response types and scoring configuration.
    fn definition(&self) -> &ScaleDefinition;

    /// Clinical interpretation bands for the scale's subscales.
    fn cut_points(&self) -> &[CutPointRecord];

    /// Unique identifier for this instrument (e.g., "phq9", "rses").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Validate `(item sequence, raw answer)` pairs against this instrument.
    fn validate_answers(&self, answers: &[(u32, String)]) -> Vec<AnswerError> {
        validate::validate_answers(self.definition(), answers)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::rses::Rses),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::dass21::Dass21),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
