//! Bundled public-domain instruments.
//!
//! Only item content and cut-points ship here. Normative tables depend on
//! the reference sample in use and are loaded from the catalog.

pub mod dass21;
pub mod gad7;
pub mod phq9;
pub mod rses;

use psymetric_core::models::cut_point::{CutPointRecord, ScoreRange};
use psymetric_core::models::scale::{ItemDefinition, ResponseType};

fn likert4(sequence: u32, text: &str, inverted: bool, subscale: Option<&str>) -> ItemDefinition {
    ItemDefinition {
        sequence,
        text: text.to_string(),
        response_type: ResponseType::Likert4,
        inverted,
        subscale: subscale.map(str::to_string),
    }
}

fn band(
    scale_id: &str,
    subscale: &str,
    min: f64,
    max: f64,
    label: &str,
    description: &str,
    alert: bool,
) -> CutPointRecord {
    CutPointRecord {
        scale_id: scale_id.to_string(),
        subscale: subscale.to_string(),
        range: ScoreRange { min, max },
        label: label.to_string(),
        description: description.to_string(),
        alert,
    }
}
