//! Item Response Normalizer.
//!
//! The single place where a raw answer string and its item metadata become
//! a numeric item score.

use psymetric_core::models::scale::{ItemDefinition, ResponseType};

use crate::error::ScoringError;

/// Tokens read as an affirmative answer to a yes/no item.
pub const AFFIRMATIVE: &[&str] = &["si", "sí", "yes"];

/// Tokens read as a negative answer to a yes/no item.
pub const NEGATIVE: &[&str] = &["no"];

/// Map a textual response-type tag, as found in reference-data files, to a
/// [`ResponseType`].
pub fn parse_response_type(tag: &str, options: Vec<String>) -> Result<ResponseType, ScoringError> {
    let response_type = match tag.trim().to_ascii_lowercase().as_str() {
        "likert3" | "likert_3" => ResponseType::Likert3,
        "likert4" | "likert_4" => ResponseType::Likert4,
        "likert5" | "likert_5" => ResponseType::Likert5,
        "yes_no" | "si_no" => ResponseType::YesNo,
        "numeric" => ResponseType::Numeric,
        "multiple_choice" => {
            if options.is_empty() {
                return Err(ScoringError::InvalidResponseType(
                    "multiple_choice without options".to_string(),
                ));
            }
            ResponseType::MultipleChoice { options }
        }
        other => return Err(ScoringError::InvalidResponseType(other.to_string())),
    };
    Ok(response_type)
}

/// Convert one raw answer into a numeric item score.
///
/// Inverted items are reflected within the response type's own range:
/// `v` in `[0, max]` becomes `max - v`.
pub fn normalize(raw: &str, response_type: &ResponseType, invert: bool) -> Result<f64, ScoringError> {
    let answer = raw.trim();
    match response_type {
        ResponseType::Likert3 | ResponseType::Likert4 | ResponseType::Likert5 => {
            let max = response_type.max_score().unwrap_or(0);
            let value = parse_level(answer, max, "Likert level")?;
            Ok(reflect(value, max, invert))
        }
        ResponseType::YesNo => {
            let token = answer.to_lowercase();
            let value = if AFFIRMATIVE.contains(&token.as_str()) {
                1
            } else if NEGATIVE.contains(&token.as_str()) {
                0
            } else {
                return Err(ScoringError::InvalidAnswer {
                    answer: answer.to_string(),
                    expected: "yes/no answer",
                });
            };
            Ok(reflect(value, 1, invert))
        }
        ResponseType::Numeric => {
            if invert {
                return Err(ScoringError::InversionNotApplicable);
            }
            answer
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ScoringError::InvalidAnswer {
                    answer: answer.to_string(),
                    expected: "number",
                })
        }
        ResponseType::MultipleChoice { options } => {
            if options.is_empty() {
                return Err(ScoringError::InvalidResponseType(
                    "multiple_choice without options".to_string(),
                ));
            }
            let max = options.len() as u32 - 1;
            let by_text = options
                .iter()
                .position(|option| option.trim().to_lowercase() == answer.to_lowercase());
            let value = match by_text {
                Some(index) if !is_integer(answer) => index as u32,
                _ => parse_level(answer, max, "option index or option text")?,
            };
            Ok(reflect(value, max, invert))
        }
    }
}

/// Normalize the answer to one item, tagging failures with its sequence.
pub fn score_item(item: &ItemDefinition, raw: &str) -> Result<f64, ScoringError> {
    normalize(raw, &item.response_type, item.inverted).map_err(|e| ScoringError::Item {
        sequence: item.sequence,
        source: Box::new(e),
    })
}

fn parse_level(answer: &str, max: u32, expected: &'static str) -> Result<u32, ScoringError> {
    let out_of_range = || ScoringError::OutOfRangeAnswer {
        answer: answer.to_string(),
        max,
    };
    let Ok(value) = answer.parse::<i64>() else {
        // Integers too wide for i64 are still integers outside the range.
        if is_integer(answer) {
            return Err(out_of_range());
        }
        return Err(ScoringError::InvalidAnswer {
            answer: answer.to_string(),
            expected,
        });
    };
    if value < 0 || value > i64::from(max) {
        return Err(out_of_range());
    }
    Ok(value as u32)
}

/// Optionally signed run of ASCII digits.
fn is_integer(answer: &str) -> bool {
    let digits = answer.strip_prefix(['+', '-']).unwrap_or(answer);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn reflect(value: u32, max: u32, invert: bool) -> f64 {
    if invert {
        f64::from(max - value)
    } else {
        f64::from(value)
    }
}
