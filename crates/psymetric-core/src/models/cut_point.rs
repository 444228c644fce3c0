use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An inclusive raw-score range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Ranges sharing even a single boundary value overlap.
    pub fn overlaps(&self, other: &ScoreRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// A clinical interpretation band for one subscale of one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CutPointRecord {
    pub scale_id: String,
    pub subscale: String,
    pub range: ScoreRange,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Set for bands signalling clinically significant severity.
    #[serde(default)]
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationBand {
    pub label: String,
    pub description: String,
    pub alert: bool,
}

impl From<&CutPointRecord> for InterpretationBand {
    fn from(record: &CutPointRecord) -> Self {
        Self {
            label: record.label.clone(),
            description: record.description.clone(),
            alert: record.alert,
        }
    }
}
