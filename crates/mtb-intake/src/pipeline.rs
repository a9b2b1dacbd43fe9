//! The intake pipeline: classifies a validation outcome and drives the
//! staging store and query service accordingly.

use std::sync::Arc;

use mtb_catalog::CatalogRegistry;
use mtb_model::MtbFile;
use mtb_validation::DataQualityReport;
use tracing::{debug, info, warn};

use crate::command::{IntakeCommand, IntakeOutcome};
use crate::error::IntakeError;
use crate::query_service::QueryService;
use crate::staging::StagingStore;

/// Wires the catalog, model and validation crates to the two external
/// collaborators (staging store, query service) and the one piece of
/// required configuration: the local site identifier stamped onto every
/// uploaded patient's `managingZPM`.
pub struct IntakePipeline {
    catalog: Arc<dyn CatalogRegistry>,
    store: Arc<dyn StagingStore>,
    query_service: Arc<dyn QueryService>,
    site_id: String,
}

impl IntakePipeline {
    pub fn new(
        catalog: Arc<dyn CatalogRegistry>,
        store: Arc<dyn StagingStore>,
        query_service: Arc<dyn QueryService>,
        site_id: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            store,
            query_service,
            site_id: site_id.into(),
        }
    }

    /// Runs one command to completion. `now` is the injected clock the file
    /// validator's `Patient` check needs to stay pure rather than reading the
    /// system clock.
    pub async fn process(&self, command: IntakeCommand, now: chrono::NaiveDate) -> IntakeOutcome {
        match command {
            IntakeCommand::Upload(file) => self.upload(file, now).await,
            IntakeCommand::Delete(patient) => self.delete(patient).await,
        }
    }

    async fn upload(&self, mut file: MtbFile, now: chrono::NaiveDate) -> IntakeOutcome {
        file.patient.managing_zpm = Some(self.site_id.clone());

        let patient_id = file.patient_id().clone();
        let outcome = mtb_validation::validate_file(&file, self.catalog.as_ref(), now);
        let report = DataQualityReport::from_outcome(patient_id.clone(), &outcome);

        let classification = match &report {
            None => Classification::Valid,
            Some(r) if r.has_fatal() => Classification::Fatal,
            Some(r) if r.all_info() => Classification::Valid,
            Some(_) => Classification::IssuesOnly,
        };

        info!(
            patient = %patient_id,
            classification = ?classification,
            "processed MTB file upload"
        );

        match classification {
            Classification::Fatal => {
                let report = report.expect("Fatal classification implies a report");
                IntakeOutcome::InvalidData(report)
            }
            Classification::Valid => match self.forward_and_purge(&file).await {
                Ok(()) => IntakeOutcome::Imported(file),
                Err(e) => IntakeOutcome::UnspecificError(e.to_unspecific_message()),
            },
            Classification::IssuesOnly => {
                let report = report.expect("IssuesOnly classification implies a report");
                match self.store.stage(&file, &report).await {
                    Ok(()) => IntakeOutcome::IssuesDetected(report),
                    Err(e) => IntakeOutcome::UnspecificError(IntakeError::from(e).to_unspecific_message()),
                }
            }
        }
    }

    async fn forward_and_purge(&self, file: &MtbFile) -> Result<(), IntakeError> {
        self.query_service.send_upload(file).await?;
        self.store.delete_all(file.patient_id()).await?;
        Ok(())
    }

    async fn delete(&self, patient: mtb_model::PatientId) -> IntakeOutcome {
        let staging = self.store.delete_all(&patient);
        let downstream = self.query_service.send_delete(&patient);

        match tokio::try_join!(map_staging(staging), map_query(downstream)) {
            Ok(((), ())) => {
                debug!(patient = %patient, "deleted patient from staging and query service");
                IntakeOutcome::Deleted(patient)
            }
            Err(e) => {
                warn!(patient = %patient, error = %e, "delete failed");
                IntakeOutcome::UnspecificError(e.to_unspecific_message())
            }
        }
    }
}

async fn map_staging(fut: impl std::future::Future<Output = Result<(), crate::error::StagingError>>) -> Result<(), IntakeError> {
    fut.await.map_err(IntakeError::from)
}

async fn map_query(fut: impl std::future::Future<Output = Result<(), crate::error::QueryServiceError>>) -> Result<(), IntakeError> {
    fut.await.map_err(IntakeError::from)
}

#[derive(Debug)]
enum Classification {
    Valid,
    Fatal,
    IssuesOnly,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mtb_catalog::{CatalogRegistryBuilder, CatalogVersion};
    use mtb_model::{Consent, ConsentStatus, Gender, MtbEpisode, Patient, PatientId, Period, YearMonth};

    use super::*;
    use crate::query_service::fakes::RecordingQueryService;
    use crate::staging::fakes::InMemoryStagingStore;

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

    fn minimal_rejected_file(patient_id: &str) -> MtbFile {
        MtbFile {
            patient: Patient {
                id: PatientId::new(patient_id),
                gender: Gender::Male,
                birth_date: YearMonth::new(1970, 1),
                managing_zpm: None,
                insurance: Some("AOK".to_string()),
                date_of_death: None,
            },
            consent: Consent {
                id: "C1".into(),
                patient: PatientId::new(patient_id),
                status: ConsentStatus::Rejected,
            },
            episode: MtbEpisode {
                id: "E1".into(),
                patient: PatientId::new(patient_id),
                period: Period {
                    start: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
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
    async fn valid_file_is_imported_and_purged_from_staging() {
        let store = Arc::new(InMemoryStagingStore::default());
        let query_service = Arc::new(RecordingQueryService::default());
        let pipeline = IntakePipeline::new(catalog(), store.clone(), query_service.clone(), "ZPM-1");

        store.save_file(&minimal_rejected_file("P1")).await.unwrap();

        let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let outcome = pipeline.process(IntakeCommand::Upload(minimal_rejected_file("P1")), now).await;

        assert!(matches!(outcome, IntakeOutcome::Imported(_)));
        assert_eq!(query_service.uploads.lock().unwrap().len(), 1);
        assert!(store.mtbfile(&PatientId::new("P1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stamps_managing_zpm_from_configured_site() {
        let store = Arc::new(InMemoryStagingStore::default());
        let query_service = Arc::new(RecordingQueryService::default());
        let pipeline = IntakePipeline::new(catalog(), store, query_service.clone(), "ZPM-1");

        let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        pipeline.process(IntakeCommand::Upload(minimal_rejected_file("P1")), now).await;

        let uploaded = &query_service.uploads.lock().unwrap()[0];
        assert_eq!(uploaded.patient.managing_zpm.as_deref(), Some("ZPM-1"));
    }

    #[tokio::test]
    async fn rejected_consent_with_payload_is_fatal_and_not_forwarded() {
        let store = Arc::new(InMemoryStagingStore::default());
        let query_service = Arc::new(RecordingQueryService::default());
        let pipeline = IntakePipeline::new(catalog(), store, query_service.clone(), "ZPM-1");

        let mut file = minimal_rejected_file("P1");
        file.diagnoses = Some(vec![mtb_model::Diagnosis {
            id: "D1".into(),
            patient: PatientId::new("P1"),
            recorded_on: None,
            icd10: None,
            icd_o3_t: None,
            who_grade: None,
            status_history: None,
            histology_results: None,
            guideline_treatment_status: None,
        }]);

        let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let outcome = pipeline.process(IntakeCommand::Upload(file), now).await;

        match outcome {
            IntakeOutcome::InvalidData(report) => assert!(report.has_fatal()),
            other => panic!("expected InvalidData, got {other:?}"),
        }
        assert!(query_service.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_requires_both_legs_to_succeed() {
        let store = Arc::new(InMemoryStagingStore::default());
        let query_service = Arc::new(RecordingQueryService {
            fail_deletes: true,
            ..Default::default()
        });
        let pipeline = IntakePipeline::new(catalog(), store, query_service, "ZPM-1");

        let outcome = pipeline.delete(PatientId::new("P1")).await;
        assert!(matches!(outcome, IntakeOutcome::UnspecificError(_)));
    }
}
