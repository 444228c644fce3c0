use psymetric_core::models::scale::ResponseType;
use psymetric_storage::catalog::{load_catalog, parse_catalog, save_catalog};
use psymetric_storage::error::StorageError;
use psymetric_storage::memory::MemoryStore;

use psymetric_scoring::error::ScoringError;
use psymetric_scoring::store::ScoringStore;

const LEGACY: &str = r#"{
    "scales": [{
        "id": "ocd5",
        "name": "OCD screen",
        "population": "adult",
        "estimated_minutes": 3,
        "items": [
            {"sequence": 1, "text": "Repeated checking", "response_type": "si_no"},
            {"sequence": 2, "text": "Intrusive thoughts", "response_type": "likert5"},
            {"sequence": 3, "text": "Hours per day", "response_type": "multiple_choice",
             "options": ["none", "under 1", "1-3", "over 3"]}
        ]
    }],
    "norms": [{
        "id": "6f1c2a34-1b2c-4d5e-8f90-123456789abc",
        "scale_id": "ocd5",
        "subscale": "total",
        "mean": 3.5,
        "std_dev": 1.5,
        "sample": "community adults",
        "equivalences": [
            {"puntuacion_directa": 4, "percentile": 60, "t_score": 53}
        ]
    }],
    "cut_points": [
        {"scale_id": "ocd5", "subscale": "total", "range": {"min": 0, "max": 4}, "label": "Low"},
        {"scale_id": "ocd5", "subscale": "total", "range": {"min": 5, "max": 8}, "label": "High", "alert": true}
    ]
}"#;

#[test]
fn legacy_catalog_is_migrated() {
    let catalog = parse_catalog(LEGACY).unwrap();
    assert_eq!(catalog.catalog_version, 1);
    assert_eq!(catalog.norms[0].equivalences[0].raw_score, 4.0);
    assert_eq!(catalog.cut_points.len(), 2);
    assert!(catalog.cut_points[1].alert);
}

#[test]
fn catalog_scales_resolve_response_types() {
    let catalog = parse_catalog(LEGACY).unwrap();
    let definition = catalog.scales[0].clone().into_definition().unwrap();
    assert_eq!(definition.items[0].response_type, ResponseType::YesNo);
    assert_eq!(definition.items[1].response_type, ResponseType::Likert5);
    assert!(matches!(
        definition.items[2].response_type,
        ResponseType::MultipleChoice { ref options } if options.len() == 4
    ));
}

#[test]
fn newer_catalog_versions_are_refused() {
    let err = parse_catalog(r#"{"catalog_version": 99}"#).unwrap_err();
    assert!(matches!(
        err,
        StorageError::UnsupportedCatalogVersion { found: 99, supported: 1 }
    ));
}

#[test]
fn non_object_catalog_is_invalid() {
    assert!(matches!(parse_catalog("[]"), Err(StorageError::InvalidCatalog(_))));
}

#[test]
fn unknown_response_type_rejects_the_catalog() {
    let json = LEGACY.replace("likert5", "likert9");
    let catalog = parse_catalog(&json).unwrap();
    let err = MemoryStore::from_catalog(catalog).err().unwrap();
    match err {
        StorageError::Scoring(e) => {
            assert!(matches!(e, ScoringError::Item { sequence: 2, .. }));
            assert!(matches!(e.root(), ScoringError::InvalidResponseType(tag) if tag == "likert9"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn overlapping_cut_points_reject_the_catalog() {
    let json = LEGACY.replace(r#""min": 5, "max": 8"#, r#""min": 4, "max": 8"#);
    let catalog = parse_catalog(&json).unwrap();
    assert!(matches!(
        MemoryStore::from_catalog(catalog),
        Err(StorageError::Scoring(ScoringError::OverlappingCutPoints { .. }))
    ));
}

#[test]
fn records_for_unknown_scales_reject_the_catalog() {
    let mut catalog = parse_catalog(LEGACY).unwrap();
    catalog.norms[0].scale_id = "nope".to_string();
    assert!(matches!(
        MemoryStore::from_catalog(catalog),
        Err(StorageError::InvalidCatalog(_))
    ));
}

#[test]
fn catalog_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let mut catalog = parse_catalog(LEGACY).unwrap();
    catalog.catalog_version = 0;
    save_catalog(&path, &catalog).unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.catalog_version, 1);
    assert_eq!(loaded.scales[0].id, "ocd5");

    let store = MemoryStore::from_catalog(loaded).unwrap();
    assert_eq!(store.scale("ocd5").unwrap().items.len(), 3);
    assert_eq!(store.normative_records("ocd5", "total").unwrap().len(), 1);
    assert_eq!(store.cut_points("ocd5", "total").unwrap().len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_catalog(&dir.path().join("absent.json")),
        Err(StorageError::Io(_))
    ));
}
