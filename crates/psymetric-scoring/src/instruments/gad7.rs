use psymetric_core::TOTAL;
use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::scale::{ScaleDefinition, TargetPopulation, TotalPolicy};

use super::{band, likert4};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale.
/// Seven symptoms over the last two weeks, each rated 0–3. Total 0–21.
pub struct Gad7;

const ID: &str = "gad7";

impl Instrument for Gad7 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let symptoms = [
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
            ];

            ScaleDefinition {
                id: ID.to_string(),
                name: "GAD-7".to_string(),
                population: TargetPopulation::Adult,
                estimated_minutes: 3,
                total_policy: TotalPolicy::ExcludeTotalTagged,
                description: Some(
                    "0 = not at all, 1 = several days, 2 = more than half the days, 3 = nearly every day"
                        .to_string(),
                ),
                items: symptoms
                    .iter()
                    .zip(1..)
                    .map(|(text, seq)| likert4(seq, text, false, None))
                    .collect(),
            }
        });
        &DEFINITION
    }

    fn cut_points(&self) -> &[CutPointRecord] {
        static CUT_POINTS: std::sync::LazyLock<Vec<CutPointRecord>> =
            std::sync::LazyLock::new(|| {
                vec![
                    band(ID, TOTAL, 0.0, 4.0, "Minimal anxiety", "None to minimal symptoms", false),
                    band(ID, TOTAL, 5.0, 9.0, "Mild anxiety", "Monitor", false),
                    band(ID, TOTAL, 10.0, 14.0, "Moderate anxiety", "Further evaluation recommended", true),
                    band(ID, TOTAL, 15.0, 21.0, "Severe anxiety", "Active treatment warranted", true),
                ]
            });
        &CUT_POINTS
    }
}
