use psymetric_core::models::scale::{ItemDefinition, ResponseType};
use psymetric_scoring::error::ScoringError;
use psymetric_scoring::normalize::{normalize, parse_response_type, score_item};

#[test]
fn likert_answers_score_as_given() {
    assert_eq!(normalize("0", &ResponseType::Likert4, false).unwrap(), 0.0);
    assert_eq!(normalize(" 3 ", &ResponseType::Likert4, false).unwrap(), 3.0);
    assert_eq!(normalize("4", &ResponseType::Likert5, false).unwrap(), 4.0);
}

#[test]
fn inverted_likert_uses_the_type_maximum() {
    assert_eq!(normalize("2", &ResponseType::Likert4, true).unwrap(), 1.0);
    assert_eq!(normalize("0", &ResponseType::Likert3, true).unwrap(), 2.0);
    assert_eq!(normalize("1", &ResponseType::Likert5, true).unwrap(), 3.0);
}

#[test]
fn likert_inversion_is_an_involution() {
    for response_type in [ResponseType::Likert3, ResponseType::Likert4, ResponseType::Likert5] {
        let max = response_type.max_score().unwrap();
        for v in 0..=max {
            let once = normalize(&v.to_string(), &response_type, true).unwrap();
            let twice = normalize(&once.to_string(), &response_type, true).unwrap();
            assert_eq!(twice, f64::from(v), "{response_type:?} value {v}");
        }
    }
}

#[test]
fn likert_out_of_range_is_rejected() {
    for answer in ["4", "-1", "10", "99999999999999999999", "-99999999999999999999"] {
        let err = normalize(answer, &ResponseType::Likert4, false).unwrap_err();
        assert!(
            matches!(err, ScoringError::OutOfRangeAnswer { max: 3, .. }),
            "{answer}: {err:?}"
        );
    }
}

#[test]
fn non_numeric_likert_answers_are_rejected() {
    for answer in ["two", "2.5", ""] {
        let err = normalize(answer, &ResponseType::Likert3, false).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidAnswer { .. }), "{answer}: {err:?}");
    }
}

#[test]
fn yes_no_tokens() {
    assert_eq!(normalize("si", &ResponseType::YesNo, false).unwrap(), 1.0);
    assert_eq!(normalize("Sí", &ResponseType::YesNo, false).unwrap(), 1.0);
    assert_eq!(normalize("yes", &ResponseType::YesNo, false).unwrap(), 1.0);
    assert_eq!(normalize("NO", &ResponseType::YesNo, false).unwrap(), 0.0);
    assert_eq!(normalize("si", &ResponseType::YesNo, true).unwrap(), 0.0);
    assert_eq!(normalize("no", &ResponseType::YesNo, true).unwrap(), 1.0);
    assert!(matches!(
        normalize("maybe", &ResponseType::YesNo, false),
        Err(ScoringError::InvalidAnswer { .. })
    ));
}

#[test]
fn numeric_answers_pass_through() {
    assert_eq!(normalize("12.5", &ResponseType::Numeric, false).unwrap(), 12.5);
    assert_eq!(normalize("-3", &ResponseType::Numeric, false).unwrap(), -3.0);
    for answer in ["abc", "NaN", "inf"] {
        assert!(
            matches!(
                normalize(answer, &ResponseType::Numeric, false),
                Err(ScoringError::InvalidAnswer { .. })
            ),
            "{answer}"
        );
    }
}

#[test]
fn numeric_answers_cannot_be_inverted() {
    assert!(matches!(
        normalize("7", &ResponseType::Numeric, true),
        Err(ScoringError::InversionNotApplicable)
    ));
}

#[test]
fn multiple_choice_scores_the_option_index() {
    let options = ResponseType::MultipleChoice {
        options: vec!["never".into(), "sometimes".into(), "often".into()],
    };
    assert_eq!(normalize("0", &options, false).unwrap(), 0.0);
    assert_eq!(normalize("2", &options, false).unwrap(), 2.0);
    assert_eq!(normalize("0", &options, true).unwrap(), 2.0);
    assert!(matches!(
        normalize("3", &options, false),
        Err(ScoringError::OutOfRangeAnswer { max: 2, .. })
    ));
}

#[test]
fn multiple_choice_accepts_the_option_text() {
    let options = ResponseType::MultipleChoice {
        options: vec!["never".into(), "sometimes".into(), "Often".into()],
    };
    assert_eq!(normalize("sometimes", &options, false).unwrap(), 1.0);
    assert_eq!(normalize(" often ", &options, false).unwrap(), 2.0);
    assert_eq!(normalize("never", &options, true).unwrap(), 2.0);
    assert!(matches!(
        normalize("always", &options, false),
        Err(ScoringError::InvalidAnswer { .. })
    ));
}

#[test]
fn multiple_choice_index_takes_precedence_over_numeric_option_text() {
    let options = ResponseType::MultipleChoice {
        options: vec!["2".into(), "1".into(), "0".into()],
    };
    assert_eq!(normalize("2", &options, false).unwrap(), 2.0);
    assert!(matches!(
        normalize("5", &options, false),
        Err(ScoringError::OutOfRangeAnswer { max: 2, .. })
    ));
}

#[test]
fn response_type_tags() {
    assert_eq!(parse_response_type("likert4", vec![]).unwrap(), ResponseType::Likert4);
    assert_eq!(parse_response_type("Likert_3", vec![]).unwrap(), ResponseType::Likert3);
    assert_eq!(parse_response_type("si_no", vec![]).unwrap(), ResponseType::YesNo);
    assert_eq!(
        parse_response_type("multiple_choice", vec!["a".into()]).unwrap(),
        ResponseType::MultipleChoice {
            options: vec!["a".into()]
        }
    );
    assert!(matches!(
        parse_response_type("likert7", vec![]),
        Err(ScoringError::InvalidResponseType(tag)) if tag == "likert7"
    ));
    assert!(matches!(
        parse_response_type("multiple_choice", vec![]),
        Err(ScoringError::InvalidResponseType(_))
    ));
}

#[test]
fn item_failures_carry_the_sequence() {
    let item = ItemDefinition {
        sequence: 7,
        text: "I feel calm".to_string(),
        response_type: ResponseType::Likert4,
        inverted: true,
        subscale: None,
    };
    assert_eq!(score_item(&item, "3").unwrap(), 0.0);

    let err = score_item(&item, "9").unwrap_err();
    assert!(matches!(err, ScoringError::Item { sequence: 7, .. }));
    assert!(matches!(err.root(), ScoringError::OutOfRangeAnswer { .. }));
    assert!(err.to_string().starts_with("item 7: "));
}
