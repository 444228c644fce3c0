use psymetric_core::TOTAL;
use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::scale::{ScaleDefinition, TargetPopulation, TotalPolicy};

use super::{band, likert4};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire depression module.
/// Nine symptoms over the last two weeks, each rated 0–3. Total 0–27.
pub struct Phq9;

const ID: &str = "phq9";

impl Instrument for Phq9 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let symptoms = [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading the newspaper or watching television",
                "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ];

            ScaleDefinition {
                id: ID.to_string(),
                name: "PHQ-9".to_string(),
                population: TargetPopulation::Adult,
                estimated_minutes: 5,
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
                    band(ID, TOTAL, 0.0, 4.0, "Minimal depression", "None to minimal symptoms", false),
                    band(ID, TOTAL, 5.0, 9.0, "Mild depression", "Watchful waiting; repeat at follow-up", false),
                    band(ID, TOTAL, 10.0, 14.0, "Moderate depression", "Treatment plan warranted", true),
                    band(ID, TOTAL, 15.0, 19.0, "Moderately severe depression", "Active treatment warranted", true),
                    band(ID, TOTAL, 20.0, 27.0, "Severe depression", "Immediate active treatment warranted", true),
                ]
            });
        &CUT_POINTS
    }
}
