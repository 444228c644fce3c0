use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::TOTAL;

/// Population a scale is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TargetPopulation {
    Adult,
    Adolescent,
    Child,
    All,
}

/// How an item's raw answer is read and scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseType {
    /// Three-level rating, answers 0–2.
    Likert3,
    /// Four-level rating, answers 0–3.
    Likert4,
    /// Five-level rating, answers 0–4.
    Likert5,
    /// Affirmative/negative answer.
    YesNo,
    /// Free numeric value, scored as given.
    Numeric,
    /// Index into an ordered option list; the order encodes severity.
    MultipleChoice { options: Vec<String> },
}

impl ResponseType {
    /// Number of discrete answer levels, `None` for free numeric items.
    pub fn levels(&self) -> Option<u32> {
        match self {
            ResponseType::Likert3 => Some(3),
            ResponseType::Likert4 => Some(4),
            ResponseType::Likert5 => Some(5),
            ResponseType::YesNo => Some(2),
            ResponseType::Numeric => None,
            ResponseType::MultipleChoice { options } => Some(options.len() as u32),
        }
    }

    /// Highest score this type can produce. Inversion reflects around it.
    pub fn max_score(&self) -> Option<u32> {
        self.levels().map(|n| n.saturating_sub(1))
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ResponseType::Likert3 => "likert3",
            ResponseType::Likert4 => "likert4",
            ResponseType::Likert5 => "likert5",
            ResponseType::YesNo => "yes_no",
            ResponseType::Numeric => "numeric",
            ResponseType::MultipleChoice { .. } => "multiple_choice",
        }
    }
}

/// Policy for the synthetic whole-scale total when a scale has several
/// subscales. Different instruments compute their totals differently, so
/// this is configured per scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TotalPolicy {
    /// Sum every item except those tagged literally `"total"`.
    #[default]
    ExcludeTotalTagged,
    /// Sum every item regardless of tag.
    SumAll,
    /// Produce no synthetic total.
    Omit,
}

/// One question or statement within a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDefinition {
    /// Unique within the scale; defines presentation and scoring order.
    pub sequence: u32,
    pub text: String,
    pub response_type: ResponseType,
    #[serde(default)]
    pub inverted: bool,
    /// Absent means the item belongs to the single unnamed dimension.
    #[serde(default)]
    pub subscale: Option<String>,
}

impl ItemDefinition {
    /// Subscale key this item aggregates under.
    pub fn subscale_key(&self) -> &str {
        self.subscale.as_deref().unwrap_or(TOTAL)
    }
}

/// A standardized psychometric instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub name: String,
    pub population: TargetPopulation,
    pub estimated_minutes: u32,
    #[serde(default)]
    pub total_policy: TotalPolicy,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<ItemDefinition>,
}

impl ScaleDefinition {
    pub fn item(&self, sequence: u32) -> Option<&ItemDefinition> {
        self.items.iter().find(|i| i.sequence == sequence)
    }

    /// Distinct subscale keys in item order.
    pub fn subscales(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for item in &self.items {
            let key = item.subscale_key();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}
