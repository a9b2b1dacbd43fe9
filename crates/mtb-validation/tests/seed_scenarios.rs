//! The seed scenarios an MTB file validator must get right: one minimal
//! valid file per consent mode, plus the handful of failure shapes that
//! exercise each severity rung and the cross-reference/contradiction rules.

use chrono::NaiveDate;
use mtb_catalog::{CatalogRegistry, CatalogRegistryBuilder, InMemoryCatalogRegistry};
use mtb_model::MtbFile;
use mtb_validation::{validate_file, DataQualityReport};
use serde_json::{json, Value};

fn catalog() -> InMemoryCatalogRegistry {
    CatalogRegistryBuilder::new()
        .with_icd10(mtb_catalog::CatalogVersion::new(2024), ["C34.9".to_string()])
        .with_icd_o3_topography(mtb_catalog::CatalogVersion::new(2024), ["T34.0".to_string()])
        .with_icd_o3_morphology(mtb_catalog::CatalogVersion::new(2024), ["M8140/3".to_string()])
        .with_atc(["L01XE01".to_string()])
        .with_hgnc(["BRAF".to_string()])
        .build()
        .unwrap()
}

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn file_from(value: Value) -> MtbFile {
    serde_json::from_value(value).expect("fixture should deserialize into MtbFile")
}

/// A minimal rejected-consent file with no medical data at all is valid
/// outright -- every attribute a rejected-consent patient needs is present.
#[test]
fn rejected_consent_minimal_file_is_valid() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "female", "birthDate": "1965-03", "insurance": "AOK"},
        "consent": {"id": "C1", "patient": "P1", "status": "rejected"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}}
    }));

    let outcome = validate_file(&file, &catalog(), now());
    assert!(outcome.is_valid(), "expected valid, got {:?}", outcome.issues());
}

/// Active consent but no diagnoses and no responses -- both required lists
/// are missing, so the file is Invalid but every issue is an Error, not
/// Fatal.
#[test]
fn active_consent_missing_required_lists_is_error_not_fatal() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01"},
        "consent": {"id": "C1", "patient": "P1", "status": "active"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}}
    }));

    let outcome = validate_file(&file, &catalog(), now());
    assert!(!outcome.is_valid());
    let report = DataQualityReport::from_outcome(mtb_model::PatientId::new("P1"), &outcome).unwrap();
    assert!(!report.has_fatal());
    assert!(!report.all_info());
    assert!(report
        .issues
        .iter()
        .any(|i| i.location.attribute == "diagnoses"));
    assert!(report
        .issues
        .iter()
        .any(|i| i.location.attribute == "responses"));
}

/// A CarePlan referencing a recommendation id that was never included in
/// the file -- a dangling reference, which is always Fatal.
#[test]
fn dangling_care_plan_reference_is_fatal() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01"},
        "consent": {"id": "C1", "patient": "P1", "status": "active"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}},
        "diagnoses": [{
            "id": "D1", "patient": "P1",
            "icd10": {"code": "C34.9", "system": "icd10gm", "version": "2024"}
        }],
        "carePlans": [{
            "id": "CP1", "patient": "P1", "diagnosis": "D1",
            "noTargetFinding": false,
            "recommendations": ["TR-does-not-exist"]
        }],
        "responses": []
    }));

    let outcome = validate_file(&file, &catalog(), now());
    assert!(!outcome.is_valid());
    let report = DataQualityReport::from_outcome(mtb_model::PatientId::new("P1"), &outcome).unwrap();
    assert!(report.has_fatal());
    assert!(report
        .issues
        .iter()
        .any(|i| i.location.entity_kind == "CarePlan" && i.location.attribute == "recommendations"
            && i.message.contains("does not resolve")));
}

/// An NGS report whose tmb and msi are both out of their documented ranges
/// -- out-of-range numeric checks are Error, not Fatal.
#[test]
fn ngs_report_out_of_range_values_are_error() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01"},
        "consent": {"id": "C1", "patient": "P1", "status": "active"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}},
        "diagnoses": [{
            "id": "D1", "patient": "P1",
            "icd10": {"code": "C34.9", "system": "icd10gm", "version": "2024"}
        }],
        "specimens": [{
            "id": "S1", "patient": "P1",
            "icd10": {"code": "C34.9", "system": "icd10gm", "version": "2024"}
        }],
        "tumorCellContents": [{"id": "TCC1", "specimen": "S1", "method": "bioinformatic", "value": 0.5}],
        "ngsReports": [{
            "id": "NGS1", "patient": "P1", "specimen": "S1",
            "issuedOn": "2026-01-01", "tumorCellContent": "TCC1",
            "tmb": 2_000_000.0, "msi": 5.0
        }],
        "responses": []
    }));

    let outcome = validate_file(&file, &catalog(), now());
    assert!(!outcome.is_valid());
    let report = DataQualityReport::from_outcome(mtb_model::PatientId::new("P1"), &outcome).unwrap();
    assert!(!report.has_fatal());
    assert!(report.issues.iter().any(|i| i.location.attribute == "tmb"));
    assert!(report.issues.iter().any(|i| i.location.attribute == "msi"));
}

/// A CarePlan that both sets `noTargetFinding: true` and lists
/// recommendations -- a direct contradiction, flagged as Error.
#[test]
fn care_plan_no_target_and_recommendations_is_contradiction() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01"},
        "consent": {"id": "C1", "patient": "P1", "status": "active"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}},
        "diagnoses": [{
            "id": "D1", "patient": "P1",
            "icd10": {"code": "C34.9", "system": "icd10gm", "version": "2024"}
        }],
        "recommendations": [{
            "id": "TR1", "patient": "P1", "diagnosis": "D1"
        }],
        "carePlans": [{
            "id": "CP1", "patient": "P1", "diagnosis": "D1",
            "noTargetFinding": true,
            "recommendations": ["TR1"]
        }],
        "responses": []
    }));

    let outcome = validate_file(&file, &catalog(), now());
    assert!(!outcome.is_valid());
    let report = DataQualityReport::from_outcome(mtb_model::PatientId::new("P1"), &outcome).unwrap();
    assert!(!report.has_fatal());
    assert!(report
        .issues
        .iter()
        .any(|i| i.message.contains("despite noTargetFinding")));
}

/// A rejected-consent file that still carries a populated medical list --
/// always Fatal, regardless of which list it is.
#[test]
fn rejected_consent_with_payload_is_fatal() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01"},
        "consent": {"id": "C1", "patient": "P1", "status": "rejected"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}},
        "diagnoses": [{"id": "D1", "patient": "P1"}]
    }));

    let outcome = validate_file(&file, &catalog(), now());
    assert!(!outcome.is_valid());
    let report = DataQualityReport::from_outcome(mtb_model::PatientId::new("P1"), &outcome).unwrap();
    assert!(report.has_fatal());
    assert!(report
        .issues
        .iter()
        .any(|i| i.location.attribute == "diagnoses" && i.severity == mtb_validation::kernel::Severity::Fatal));
}

/// A fully populated, wholly valid active-consent file exercises every list
/// at once -- the active-consent counterpart to the rejected-consent
/// minimal-file case above.
#[test]
fn minimal_valid_active_consent_with_required_lists_present() {
    let file = file_from(json!({
        "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01", "insurance": "AOK"},
        "consent": {"id": "C1", "patient": "P1", "status": "active"},
        "episode": {"id": "E1", "patient": "P1", "period": {"start": "2026-01-01"}},
        "diagnoses": [{
            "id": "D1", "patient": "P1", "recordedOn": "2025-01-01",
            "icd10": {"code": "C34.9", "system": "icd10gm", "version": "2024"},
            "guidelineTreatmentStatus": "non-exhausted"
        }],
        "responses": []
    }));

    let outcome = validate_file(&file, &catalog(), now());
    // responses is required but empty, and the diagnosis's icdO3T/histologyResults
    // are merely recommended -- the file is still Invalid overall, but every
    // surviving issue is at most a Warning.
    assert!(!outcome.is_valid());
    let report = DataQualityReport::from_outcome(mtb_model::PatientId::new("P1"), &outcome).unwrap();
    assert!(!report.has_fatal());
}
