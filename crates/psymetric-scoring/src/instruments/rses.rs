use psymetric_core::TOTAL;
use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::scale::{ScaleDefinition, TargetPopulation, TotalPolicy};

use super::{band, likert4};
use crate::Instrument;

/// RSES: Rosenberg Self-Esteem Scale.
/// Ten statements rated 0–3; items 2, 5, 6, 8 and 9 are worded negatively
/// and reverse-scored. Total 0–30, higher = higher self-esteem.
pub struct Rses;

const ID: &str = "rses";

impl Instrument for Rses {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let statements = [
                (1, "On the whole, I am satisfied with myself.", false),
                (2, "At times I think I am no good at all.", true),
                (3, "I feel that I have a number of good qualities.", false),
                (4, "I am able to do things as well as most other people.", false),
                (5, "I feel I do not have much to be proud of.", true),
                (6, "I certainly feel useless at times.", true),
                (7, "I feel that I'm a person of worth, at least on an equal plane with others.", false),
                (8, "I wish I could have more respect for myself.", true),
                (9, "All in all, I am inclined to feel that I am a failure.", true),
                (10, "I take a positive attitude toward myself.", false),
            ];

            ScaleDefinition {
                id: ID.to_string(),
                name: "Rosenberg Self-Esteem Scale".to_string(),
                population: TargetPopulation::All,
                estimated_minutes: 5,
                total_policy: TotalPolicy::ExcludeTotalTagged,
                description: Some(
                    "0 = strongly disagree, 1 = disagree, 2 = agree, 3 = strongly agree".to_string(),
                ),
                items: statements
                    .iter()
                    .map(|(seq, text, inverted)| likert4(*seq, text, *inverted, None))
                    .collect(),
            }
        });
        &DEFINITION
    }

    fn cut_points(&self) -> &[CutPointRecord] {
        static CUT_POINTS: std::sync::LazyLock<Vec<CutPointRecord>> =
            std::sync::LazyLock::new(|| {
                vec![
                    band(ID, TOTAL, 0.0, 14.0, "Low self-esteem", "Score below the usual range", true),
                    band(ID, TOTAL, 15.0, 25.0, "Normal self-esteem", "Score within the usual range", false),
                    band(ID, TOTAL, 26.0, 30.0, "High self-esteem", "Score above the usual range", false),
                ]
            });
        &CUT_POINTS
    }
}
