use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One raw answer to one item of an administration.
///
/// Raw answers are kept as submitted (strings for every response type);
/// `score` is the normalized value computed when the answer was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemResponse {
    pub administration_id: Uuid,
    pub scale_id: String,
    pub item_sequence: u32,
    pub raw_answer: String,
    pub score: f64,
    pub answered_at: jiff::Timestamp,
}
