use std::sync::{Arc, Mutex};

use uuid::Uuid;

use psymetric_core::models::administration::Administration;
use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::norms::NormativeRecord;
use psymetric_core::models::response::ItemResponse;
use psymetric_core::models::result::SubscaleResult;
use psymetric_core::models::scale::ScaleDefinition;

use crate::error::ScoringError;

/// Data the scoring engine reads from and writes to its surrounding
/// storage layer.
pub trait ScoringStore: Send + Sync {
    fn scale(&self, scale_id: &str) -> Result<ScaleDefinition, ScoringError>;

    fn administration(&self, administration_id: Uuid) -> Result<Administration, ScoringError>;

    fn responses(&self, administration_id: Uuid) -> Result<Vec<ItemResponse>, ScoringError>;

    /// Normative records for a (scale, subscale) pair, in selection order.
    fn normative_records(
        &self,
        scale_id: &str,
        subscale: &str,
    ) -> Result<Vec<NormativeRecord>, ScoringError>;

    /// Cut-point records for a (scale, subscale) pair, in scan order.
    fn cut_points(&self, scale_id: &str, subscale: &str)
    -> Result<Vec<CutPointRecord>, ScoringError>;

    /// Replace every stored result of the administration.
    fn replace_results(
        &self,
        administration_id: Uuid,
        results: &[SubscaleResult],
    ) -> Result<(), ScoringError>;

    /// Persist the completed administration together with its results.
    /// Either both become visible or neither does.
    fn commit_completion(
        &self,
        administration: &Administration,
        results: &[SubscaleResult],
    ) -> Result<(), ScoringError>;

    /// Lock serializing answer recording and completion for one
    /// administration.
    fn administration_lock(&self, administration_id: Uuid) -> Result<Arc<Mutex<()>>, ScoringError>;
}
