use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::scale::{ScaleDefinition, TargetPopulation, TotalPolicy};

use super::{band, likert4};
use crate::Instrument;

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// Seven items per subscale rated 0–3 over the past week. Cut-points are on
/// the seven-item raw sums (half the DASS-42 equivalents); the whole-scale
/// total has none.
pub struct Dass21;

const ID: &str = "dass21";
const DEPRESSION: &str = "depression";
const ANXIETY: &str = "anxiety";
const STRESS: &str = "stress";

impl Instrument for Dass21 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let statements = [
                (STRESS, "I found it hard to wind down"),
                (ANXIETY, "I was aware of dryness of my mouth"),
                (DEPRESSION, "I couldn't seem to experience any positive feeling at all"),
                (ANXIETY, "I experienced breathing difficulty (e.g. excessively rapid breathing, breathlessness in the absence of physical exertion)"),
                (DEPRESSION, "I found it difficult to work up the initiative to do things"),
                (STRESS, "I tended to over-react to situations"),
                (ANXIETY, "I experienced trembling (e.g. in the hands)"),
                (STRESS, "I felt that I was using a lot of nervous energy"),
                (ANXIETY, "I was worried about situations in which I might panic and make a fool of myself"),
                (DEPRESSION, "I felt that I had nothing to look forward to"),
                (STRESS, "I found myself getting agitated"),
                (STRESS, "I found it difficult to relax"),
                (DEPRESSION, "I felt down-hearted and blue"),
                (STRESS, "I was intolerant of anything that kept me from getting on with what I was doing"),
                (ANXIETY, "I felt I was close to panic"),
                (DEPRESSION, "I was unable to become enthusiastic about anything"),
                (DEPRESSION, "I felt I wasn't worth much as a person"),
                (STRESS, "I felt that I was rather touchy"),
                (ANXIETY, "I was aware of the action of my heart in the absence of physical exertion (e.g. sense of heart rate increase, heart missing a beat)"),
                (ANXIETY, "I felt scared without any good reason"),
                (DEPRESSION, "I felt that life was meaningless"),
            ];

            ScaleDefinition {
                id: ID.to_string(),
                name: "DASS-21".to_string(),
                population: TargetPopulation::Adult,
                estimated_minutes: 10,
                total_policy: TotalPolicy::SumAll,
                description: Some(
                    "0 = did not apply to me at all, 3 = applied to me very much or most of the time"
                        .to_string(),
                ),
                items: statements
                    .iter()
                    .zip(1..)
                    .map(|((subscale, text), seq)| likert4(seq, text, false, Some(*subscale)))
                    .collect(),
            }
        });
        &DEFINITION
    }

    fn cut_points(&self) -> &[CutPointRecord] {
        static CUT_POINTS: std::sync::LazyLock<Vec<CutPointRecord>> =
            std::sync::LazyLock::new(|| {
                let mut bands = Vec::new();
                for (subscale, limits) in [
                    (DEPRESSION, [(0.0, 4.0), (5.0, 6.0), (7.0, 10.0), (11.0, 13.0), (14.0, 21.0)]),
                    (ANXIETY, [(0.0, 3.0), (4.0, 4.0), (5.0, 7.0), (8.0, 9.0), (10.0, 21.0)]),
                    (STRESS, [(0.0, 7.0), (8.0, 9.0), (10.0, 12.0), (13.0, 16.0), (17.0, 21.0)]),
                ] {
                    let labels = ["Normal", "Mild", "Moderate", "Severe", "Extremely severe"];
                    for (i, ((min, max), label)) in limits.iter().zip(labels).enumerate() {
                        bands.push(band(
                            ID,
                            subscale,
                            *min,
                            *max,
                            label,
                            &format!("{label} {subscale} symptoms"),
                            i >= 2,
                        ));
                    }
                }
                bands
            });
        &CUT_POINTS
    }
}
