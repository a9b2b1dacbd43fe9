//! The staging store: persists an `MtbFile` alongside its
//! [`DataQualityReport`] until it is either forwarded downstream (and
//! purged) or corrected and re-submitted.

use async_trait::async_trait;
use mtb_model::{MtbFile, PatientId};
use mtb_validation::DataQualityReport;

use crate::error::StagingError;

/// External collaborator: a key-scoped store for staged files and reports.
///
/// `stage` issues `save(file)` and `save(report)` together and must provide
/// at-least key-scoped atomicity for that pair; `delete_all` must be
/// idempotent -- deleting an already-absent patient succeeds.
#[async_trait]
pub trait StagingStore: Send + Sync {
    async fn save_file(&self, file: &MtbFile) -> Result<(), StagingError>;

    async fn save_report(&self, report: &DataQualityReport) -> Result<(), StagingError>;

    /// Saves `file` and `report` as one key-scoped unit.
    async fn stage(&self, file: &MtbFile, report: &DataQualityReport) -> Result<(), StagingError> {
        self.save_file(file).await?;
        self.save_report(report).await?;
        Ok(())
    }

    /// Idempotent: purges any staged file and report for `patient`.
    async fn delete_all(&self, patient: &PatientId) -> Result<(), StagingError>;

    async fn mtbfile(&self, patient: &PatientId) -> Result<Option<MtbFile>, StagingError>;

    async fn data_qc_report_of(&self, patient: &PatientId) -> Result<Option<DataQualityReport>, StagingError>;

    /// All files currently staged, across patients. The spec models this as
    /// an iterator; since staged inventories are assumed small (a backlog of
    /// files pending correction, not a full patient population), the
    /// in-process collaborator interface here returns the eagerly-collected
    /// `Vec` instead of a streaming type.
    async fn mtbfiles(&self) -> Result<Vec<MtbFile>, StagingError>;
}

#[cfg(test)]
pub mod fakes {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// An in-memory [`StagingStore`] for pipeline tests.
    #[derive(Default)]
    pub struct InMemoryStagingStore {
        files: Mutex<HashMap<String, MtbFile>>,
        reports: Mutex<HashMap<String, DataQualityReport>>,
    }

    #[async_trait]
    impl StagingStore for InMemoryStagingStore {
        async fn save_file(&self, file: &MtbFile) -> Result<(), StagingError> {
            self.files
                .lock()
                .unwrap()
                .insert(file.patient_id().as_str().to_string(), file.clone());
            Ok(())
        }

        async fn save_report(&self, report: &DataQualityReport) -> Result<(), StagingError> {
            self.reports
                .lock()
                .unwrap()
                .insert(report.patient.as_str().to_string(), report.clone());
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
}
