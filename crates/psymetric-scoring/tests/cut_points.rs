mod common;

use psymetric_scoring::cut_points::{classify, validate_cut_points};
use psymetric_scoring::error::ScoringError;

use common::cut_point;

fn self_esteem_bands() -> Vec<psymetric_core::models::cut_point::CutPointRecord> {
    vec![
        cut_point("se", "total", 0.0, 13.0, "Low", true),
        cut_point("se", "total", 14.0, 19.0, "Medium", false),
        cut_point("se", "total", 20.0, 30.0, "High", false),
    ]
}

#[test]
fn boundary_score_falls_into_the_upper_band() {
    let band = classify(14.0, "total", &self_esteem_bands()).unwrap();
    assert_eq!(band.label, "Medium");
    assert!(!band.alert);

    let band = classify(13.0, "total", &self_esteem_bands()).unwrap();
    assert_eq!(band.label, "Low");
    assert!(band.alert);
}

#[test]
fn contiguous_bands_classify_every_score_once() {
    let bands = self_esteem_bands();
    for score in 0..=30 {
        let raw = f64::from(score);
        let hits = bands.iter().filter(|b| b.range.contains(raw)).count();
        assert_eq!(hits, 1, "score {score}");
        assert!(classify(raw, "total", &bands).is_some());
    }
}

#[test]
fn scores_outside_every_band_have_no_interpretation() {
    let bands = self_esteem_bands();
    assert!(classify(-1.0, "total", &bands).is_none());
    assert!(classify(31.0, "total", &bands).is_none());
    assert!(classify(13.5, "total", &bands).is_none());
}

#[test]
fn bands_of_other_subscales_are_ignored() {
    let bands = vec![cut_point("dass", "anxiety", 0.0, 21.0, "Any", false)];
    assert!(classify(5.0, "stress", &bands).is_none());
    assert!(classify(5.0, "anxiety", &bands).is_some());
}

#[test]
fn overlapping_bands_are_rejected() {
    let bands = vec![
        cut_point("se", "total", 0.0, 14.0, "Low", true),
        cut_point("se", "total", 14.0, 19.0, "Medium", false),
    ];
    let err = validate_cut_points(&bands).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::OverlappingCutPoints { first_max, second_min, .. }
            if first_max == 14.0 && second_min == 14.0
    ));
}

#[test]
fn inverted_band_is_rejected() {
    let bands = vec![cut_point("se", "total", 10.0, 5.0, "Broken", false)];
    assert!(matches!(
        validate_cut_points(&bands),
        Err(ScoringError::InvalidScale { .. })
    ));
}

#[test]
fn same_range_on_different_subscales_is_fine() {
    let bands = vec![
        cut_point("dass", "anxiety", 0.0, 3.0, "Normal", false),
        cut_point("dass", "stress", 0.0, 3.0, "Normal", false),
    ];
    assert!(validate_cut_points(&bands).is_ok());
    assert!(validate_cut_points(&self_esteem_bands()).is_ok());
}
