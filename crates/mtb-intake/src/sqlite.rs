//! SQLite-backed [`StagingStore`]: an r2d2-pooled `rusqlite` connection
//! manager, WAL mode, and a schema-version table created on first use.

use std::path::Path;

use async_trait::async_trait;
use mtb_model::{MtbFile, PatientId};
use mtb_validation::DataQualityReport;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

use crate::error::StagingError;
use crate::staging::StagingStore;

/// A file-backed (or in-memory) staging store for MTB files pending
/// correction, query-service forwarding, or deletion.
pub struct SqliteStagingStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStagingStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StagingError> {
        let manager = SqliteConnectionManager::file(path.as_ref());
        Self::with_manager(manager)
    }

    pub fn in_memory() -> Result<Self, StagingError> {
        Self::with_manager(SqliteConnectionManager::memory())
    }

    fn with_manager(manager: SqliteConnectionManager) -> Result<Self, StagingError> {
        let pool = Pool::builder()
            .max_size(10)
            .build(manager)
            .map_err(|e| StagingError::Backend(format!("failed to build connection pool: {e}")))?;

        let store = Self { pool };
        store.initialize_schema()?;
        Ok(store)
    }

    fn get_connection(&self) -> Result<PooledConnection<SqliteConnectionManager>, StagingError> {
        self.pool
            .get()
            .map_err(|e| StagingError::Backend(format!("failed to acquire connection: {e}")))
    }

    fn initialize_schema(&self) -> Result<(), StagingError> {
        let conn = self.get_connection()?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             CREATE TABLE IF NOT EXISTS staged_files (
                 patient_id TEXT PRIMARY KEY,
                 payload TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS staged_reports (
                 patient_id TEXT PRIMARY KEY,
                 payload TEXT NOT NULL
             );",
        )
        .map_err(|e| StagingError::Backend(format!("failed to initialize schema: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl StagingStore for SqliteStagingStore {
    async fn save_file(&self, file: &MtbFile) -> Result<(), StagingError> {
        let conn = self.get_connection()?;
        let payload = serde_json::to_string(file)
            .map_err(|e| StagingError::Serialization(format!("failed to serialize MtbFile: {e}")))?;
        conn.execute(
            "INSERT INTO staged_files (patient_id, payload) VALUES (?1, ?2)
             ON CONFLICT(patient_id) DO UPDATE SET payload = excluded.payload",
            params![file.patient_id().as_str(), payload],
        )
        .map_err(|e| StagingError::Backend(format!("failed to save staged file: {e}")))?;
        Ok(())
    }

    async fn save_report(&self, report: &DataQualityReport) -> Result<(), StagingError> {
        let conn = self.get_connection()?;
        let payload = serde_json::to_string(report)
            .map_err(|e| StagingError::Serialization(format!("failed to serialize report: {e}")))?;
        conn.execute(
            "INSERT INTO staged_reports (patient_id, payload) VALUES (?1, ?2)
             ON CONFLICT(patient_id) DO UPDATE SET payload = excluded.payload",
            params![report.patient.as_str(), payload],
        )
        .map_err(|e| StagingError::Backend(format!("failed to save staged report: {e}")))?;
        Ok(())
    }

    async fn stage(&self, file: &MtbFile, report: &DataQualityReport) -> Result<(), StagingError> {
        let mut conn = self.get_connection()?;
        let file_payload = serde_json::to_string(file)
            .map_err(|e| StagingError::Serialization(format!("failed to serialize MtbFile: {e}")))?;
        let report_payload = serde_json::to_string(report)
            .map_err(|e| StagingError::Serialization(format!("failed to serialize report: {e}")))?;

        let tx = conn
            .transaction()
            .map_err(|e| StagingError::Backend(format!("failed to start transaction: {e}")))?;
        tx.execute(
            "INSERT INTO staged_files (patient_id, payload) VALUES (?1, ?2)
             ON CONFLICT(patient_id) DO UPDATE SET payload = excluded.payload",
            params![file.patient_id().as_str(), file_payload],
        )
        .map_err(|e| StagingError::Backend(format!("failed to save staged file: {e}")))?;
        tx.execute(
            "INSERT INTO staged_reports (patient_id, payload) VALUES (?1, ?2)
             ON CONFLICT(patient_id) DO UPDATE SET payload = excluded.payload",
            params![report.patient.as_str(), report_payload],
        )
        .map_err(|e| StagingError::Backend(format!("failed to save staged report: {e}")))?;
        tx.commit()
            .map_err(|e| StagingError::Backend(format!("failed to commit staged pair: {e}")))?;
        Ok(())
    }

    async fn delete_all(&self, patient: &PatientId) -> Result<(), StagingError> {
        let conn = self.get_connection()?;
        conn.execute("DELETE FROM staged_files WHERE patient_id = ?1", params![patient.as_str()])
            .map_err(|e| StagingError::Backend(format!("failed to delete staged file: {e}")))?;
        conn.execute("DELETE FROM staged_reports WHERE patient_id = ?1", params![patient.as_str()])
            .map_err(|e| StagingError::Backend(format!("failed to delete staged report: {e}")))?;
        Ok(())
    }

    async fn mtbfile(&self, patient: &PatientId) -> Result<Option<MtbFile>, StagingError> {
        let conn = self.get_connection()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM staged_files WHERE patient_id = ?1",
                params![patient.as_str()],
                |row| row.get(0),
            )
            .ok();
        payload
            .map(|p| {
                serde_json::from_str(&p).map_err(|e| StagingError::Serialization(format!("corrupt staged file: {e}")))
            })
            .transpose()
    }

    async fn data_qc_report_of(&self, patient: &PatientId) -> Result<Option<DataQualityReport>, StagingError> {
        let conn = self.get_connection()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM staged_reports WHERE patient_id = ?1",
                params![patient.as_str()],
                |row| row.get(0),
            )
            .ok();
        payload
            .map(|p| {
                serde_json::from_str(&p)
                    .map_err(|e| StagingError::Serialization(format!("corrupt staged report: {e}")))
            })
            .transpose()
    }

    async fn mtbfiles(&self) -> Result<Vec<MtbFile>, StagingError> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare("SELECT payload FROM staged_files")
            .map_err(|e| StagingError::Backend(format!("failed to prepare query: {e}")))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StagingError::Backend(format!("failed to query staged files: {e}")))?;

        let mut files = Vec::new();
        for row in rows {
            let payload = row.map_err(|e| StagingError::Backend(format!("failed to read row: {e}")))?;
            let file: MtbFile = serde_json::from_str(&payload)
                .map_err(|e| StagingError::Serialization(format!("corrupt staged file: {e}")))?;
            files.push(file);
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtb_model::{Consent, ConsentStatus, Gender, MtbEpisode, Patient};
    use mtb_validation::kernel::{Issue, Location};

    fn sample_file(patient_id: &str) -> MtbFile {
        MtbFile {
            patient: Patient {
                id: PatientId::new(patient_id),
                gender: Gender::Male,
                birth_date: mtb_model::YearMonth::new(1970, 1),
                managing_zpm: None,
                insurance: None,
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
                period: mtb_model::Period {
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
    async fn stages_and_retrieves_a_file() {
        let store = SqliteStagingStore::in_memory().unwrap();
        let file = sample_file("P1");
        let report = DataQualityReport::new(
            PatientId::new("P1"),
            vec![Issue::warning(Location::new("MTBFile", "P1", "diagnoses"), "missing")],
        );

        store.stage(&file, &report).await.unwrap();

        let retrieved = store.mtbfile(&PatientId::new("P1")).await.unwrap().unwrap();
        assert_eq!(retrieved.patient.id.as_str(), "P1");

        let retrieved_report = store.data_qc_report_of(&PatientId::new("P1")).await.unwrap().unwrap();
        assert_eq!(retrieved_report.issues.len(), 1);
    }

    #[tokio::test]
    async fn delete_all_is_idempotent() {
        let store = SqliteStagingStore::in_memory().unwrap();
        let patient = PatientId::new("P1");
        store.delete_all(&patient).await.unwrap();
        store.delete_all(&patient).await.unwrap();
    }
}
