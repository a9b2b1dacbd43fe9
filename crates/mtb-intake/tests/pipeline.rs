//! Integration coverage for [`IntakePipeline`] from outside the crate, using
//! local fakes -- the crate's own `#[cfg(test)]` fakes in `staging`/
//! `query_service` are not visible to a separate test binary.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use mtb_catalog::{CatalogRegistry, CatalogRegistryBuilder, CatalogVersion};
use mtb_intake::{IntakeCommand, IntakeOutcome, IntakePipeline, QueryService, QueryServiceError, StagingError, StagingStore};
use mtb_model::{Consent, ConsentStatus, Gender, MtbEpisode, MtbFile, Patient, PatientId, Period, YearMonth};
use mtb_validation::DataQualityReport;

#[derive(Default)]
struct LocalStagingStore {
    files: Mutex<HashMap<String, MtbFile>>,
    reports: Mutex<HashMap<String, DataQualityReport>>,
}

#[async_trait]
impl StagingStore for LocalStagingStore {
    async fn save_file(&self, file: &MtbFile) -> Result<(), StagingError> {
        self.files.lock().unwrap().insert(file.patient_id().as_str().to_string(), file.clone());
        Ok(())
    }

    async fn save_report(&self, report: &DataQualityReport) -> Result<(), StagingError> {
        self.reports.lock().unwrap().insert(report.patient.as_str().to_string(), report.clone());
        Ok(())
    }

    async fn delete_all(&self, patient: &PatientId) -> Result<(), StagingError> {
        self.files.lock().unwrap().remove(patient.as_str());
        self.reports.lock().unwrap().remove(patient.as_str());
        Ok(())
    }

    async fn mtbfile(&self, patient: &PatientId) -> Result<Option<MtbFile>, StagingError> {
        Ok(self.files.lock().unwrap().get(patient.as_str()).cloned())
    }

    async fn data_qc_report_of(&self, patient: &PatientId) -> Result<Option<DataQualityReport>, StagingError> {
        Ok(self.reports.lock().unwrap().get(patient.as_str()).cloned())
    }

    async fn mtbfiles(&self) -> Result<Vec<MtbFile>, StagingError> {
        Ok(self.files.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default)]
struct LocalQueryService {
    uploads: Mutex<Vec<MtbFile>>,
    fail_uploads: bool,
}

#[async_trait]
impl QueryService for LocalQueryService {
    async fn send_upload(&self, file: &MtbFile) -> Result<(), QueryServiceError> {
        if self.fail_uploads {
            return Err(QueryServiceError::Transport("simulated failure".to_string()));
        }
        self.uploads.lock().unwrap().push(file.clone());
        Ok(())
    }

    async fn send_delete(&self, _patient: &PatientId) -> Result<(), QueryServiceError> {
        Ok(())
    }
}

fn catalog() -> Arc<dyn CatalogRegistry> {
    Arc::new(
        CatalogRegistryBuilder::new()
            .with_icd10(CatalogVersion::new(2024), ["C34.9".to_string()])
            .with_icd_o3_topography(CatalogVersion::new(2024), ["T34.0".to_string()])
            .with_icd_o3_morphology(CatalogVersion::new(2024), ["M8140/3".to_string()])
            .with_atc(["L01XE01".to_string()])
            .with_hgnc(["BRAF".to_string()])
            .build()
            .unwrap(),
    )
}

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Active consent, no medical lists at all: `diagnoses` and `responses` are
/// both required and missing, but those issues are Error, not Fatal -- the
/// file should be staged alongside its report, not imported or rejected.
fn active_consent_missing_required_lists(patient_id: &str) -> MtbFile {
    MtbFile {
        patient: Patient {
            id: PatientId::new(patient_id),
            gender: Gender::Female,
            birth_date: YearMonth::new(1980, 6),
            managing_zpm: None,
            insurance: None,
            date_of_death: None,
        },
        consent: Consent {
            id: "C1".into(),
            patient: PatientId::new(patient_id),
            status: ConsentStatus::Active,
        },
        episode: MtbEpisode {
            id: "E1".into(),
            patient: PatientId::new(patient_id),
            period: Period {
                start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                end: None,
            },
        },
        diagnoses: None,
        family_member_diagnoses: None,
        previous_guideline_therapies: None,
        last_guideline_therapies: None,
        ecog_status: None,
        specimens: None,
        tumor_cell_contents: None,
        tumor_morphologies: None,
        histology_reports: None,
        molecular_pathology_findings: None,
        ngs_reports: None,
        care_plans: None,
        recommendations: None,
        counselling_requests: None,
        rebiopsy_requests: None,
        histology_reevaluation_requests: None,
        study_inclusion_requests: None,
        claims: None,
        claim_responses: None,
        molecular_therapies: None,
        responses: None,
    }
}

#[tokio::test]
async fn non_fatal_issues_are_staged_not_imported() {
    let store = Arc::new(LocalStagingStore::default());
    let query_service = Arc::new(LocalQueryService::default());
    let pipeline = IntakePipeline::new(catalog(), store.clone(), query_service.clone(), "ZPM-1");

    let outcome = pipeline
        .process(IntakeCommand::Upload(active_consent_missing_required_lists("P1")), now())
        .await;

    match outcome {
        IntakeOutcome::IssuesDetected(report) => assert!(!report.has_fatal()),
        other => panic!("expected IssuesDetected, got {other:?}"),
    }
    assert!(query_service.uploads.lock().unwrap().is_empty(), "a staged file must not be forwarded");
    assert!(store.mtbfile(&PatientId::new("P1")).await.unwrap().is_some(), "the file itself must be staged");
    assert!(store.data_qc_report_of(&PatientId::new("P1")).await.unwrap().is_some(), "the report must be staged alongside it");
}

#[tokio::test]
async fn forward_failure_surfaces_as_unspecific_error() {
    let store = Arc::new(LocalStagingStore::default());
    let query_service = Arc::new(LocalQueryService {
        fail_uploads: true,
        ..Default::default()
    });
    let pipeline = IntakePipeline::new(catalog(), store, query_service, "ZPM-1");

    // A rejected-consent file with no medical data validates cleanly, so the
    // pipeline takes the forward-and-purge path -- which the query service
    // fake is configured to fail.
    let file = MtbFile {
        patient: Patient {
            id: PatientId::new("P2"),
            gender: Gender::Male,
            birth_date: YearMonth::new(1970, 1),
            managing_zpm: None,
            insurance: Some("AOK".to_string()),
            date_of_death: None,
        },
        consent: Consent {
            id: "C2".into(),
            patient: PatientId::new("P2"),
            status: ConsentStatus::Rejected,
        },
        episode: MtbEpisode {
            id: "E2".into(),
            patient: PatientId::new("P2"),
            period: Period {
                start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end: None,
            },
        },
        diagnoses: None,
        family_member_diagnoses: None,
        previous_guideline_therapies: None,
        last_guideline_therapies: None,
        ecog_status: None,
        specimens: None,
        tumor_cell_contents: None,
        tumor_morphologies: None,
        histology_reports: None,
        molecular_pathology_findings: None,
        ngs_reports: None,
        care_plans: None,
        recommendations: None,
        counselling_requests: None,
        rebiopsy_requests: None,
        histology_reevaluation_requests: None,
        study_inclusion_requests: None,
        claims: None,
        claim_responses: None,
        molecular_therapies: None,
        responses: None,
    };

    let outcome = pipeline.process(IntakeCommand::Upload(file), now()).await;
    assert!(matches!(outcome, IntakeOutcome::UnspecificError(_)));
}
