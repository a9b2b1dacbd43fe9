//! The downstream query service: the system a validated file is forwarded
//! to, and from which a deleted patient's data must also be removed.

use async_trait::async_trait;
use mtb_model::{MtbFile, PatientId};
use reqwest::{Client, StatusCode};

use crate::error::QueryServiceError;

/// External collaborator: accepts validated files and deletion requests.
/// Implementations should make `send_upload` idempotent on their end so
/// that caller-side retries after a transport failure are safe.
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn send_upload(&self, file: &MtbFile) -> Result<(), QueryServiceError>;

    async fn send_delete(&self, patient: &PatientId) -> Result<(), QueryServiceError>;
}

/// An HTTP-backed [`QueryService`]: a `reqwest::Client` POSTing/DELETEing
/// JSON against a configured base URL.
pub struct HttpQueryService {
    client: Client,
    base_url: String,
}

impl HttpQueryService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QueryService for HttpQueryService {
    async fn send_upload(&self, file: &MtbFile) -> Result<(), QueryServiceError> {
        let url = format!("{}/mtbfile", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(file)
            .send()
            .await
            .map_err(|e| QueryServiceError::Transport(e.to_string()))?;
        ensure_success(response).await
    }

    async fn send_delete(&self, patient: &PatientId) -> Result<(), QueryServiceError> {
        let url = format!("{}/mtbfile/{}", self.base_url.trim_end_matches('/'), patient.as_str());
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| QueryServiceError::Transport(e.to_string()))?;
        ensure_success(response).await
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<(), QueryServiceError> {
    if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
        return Ok(());
    }
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(QueryServiceError::Rejected { status, message })
}

#[cfg(test)]
pub mod fakes {
    use std::sync::Mutex;

    use super::*;

    /// A [`QueryService`] fake that records every call for pipeline tests.
    #[derive(Default)]
    pub struct RecordingQueryService {
        pub uploads: Mutex<Vec<MtbFile>>,
        pub deletes: Mutex<Vec<PatientId>>,
        pub fail_uploads: bool,
        pub fail_deletes: bool,
    }

    #[async_trait]
    impl QueryService for RecordingQueryService {
        async fn send_upload(&self, file: &MtbFile) -> Result<(), QueryServiceError> {
            if self.fail_uploads {
                return Err(QueryServiceError::Transport("simulated failure".to_string()));
            }
            self.uploads.lock().unwrap().push(file.clone());
            Ok(())
        }

        async fn send_delete(&self, patient: &PatientId) -> Result<(), QueryServiceError> {
            if self.fail_deletes {
                return Err(QueryServiceError::Transport("simulated failure".to_string()));
            }
            self.deletes.lock().unwrap().push(patient.clone());
            Ok(())
        }
    }
}
