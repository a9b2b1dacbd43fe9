//! Error hierarchy for the intake pipeline's external collaborators.
//!
//! Validation defects are never exceptions -- they travel as
//! [`mtb_validation::DataQualityReport`] values. The errors here cover
//! "store or query-service failure": anything that keeps `process()` from
//! completing its classification work at all. They follow a grouped
//! enum-of-enums shape, one leaf error type per collaborator, wrapped into
//! one top-level pipeline error.

use thiserror::Error;

/// Failures from the staging store.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("staging backend unavailable: {0}")]
    Backend(String),

    #[error("failed to (de)serialize staged record: {0}")]
    Serialization(String),

    #[error("no staged file found for patient {0}")]
    NotFound(String),
}

/// Failures from the downstream query service.
#[derive(Debug, Error)]
pub enum QueryServiceError {
    #[error("query service request failed: {0}")]
    Transport(String),

    #[error("query service rejected the request: status {status}, {message}")]
    Rejected { status: u16, message: String },
}

/// The top-level error type `mtb-intake` surfaces for failures that are not
/// classification-driven rejections. Any unhandled exception from an
/// external collaborator is translated into this type at the pipeline
/// boundary and then into [`crate::IntakeOutcome::UnspecificError`].
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error(transparent)]
    QueryService(#[from] QueryServiceError),
}

impl IntakeError {
    /// The caller-facing message for [`crate::IntakeOutcome::UnspecificError`].
    pub fn to_unspecific_message(&self) -> String {
        self.to_string()
    }
}
