//! Public command/outcome vocabulary for the intake pipeline.

use mtb_model::{MtbFile, PatientId};
use mtb_validation::DataQualityReport;

/// A request to the intake pipeline.
pub enum IntakeCommand {
    /// Validate, then forward or stage, one MTB file.
    Upload(MtbFile),
    /// Purge staging and instruct the query service to delete one patient.
    Delete(PatientId),
}

/// The result of one [`crate::IntakePipeline::process`] call.
#[derive(Debug)]
pub enum IntakeOutcome {
    /// Forwarded to the query service and (if it was staged) purged locally.
    Imported(MtbFile),
    /// Staged alongside a non-fatal report; the caller should address the
    /// issues and re-submit.
    IssuesDetected(DataQualityReport),
    /// Staging and query-service deletion both succeeded.
    Deleted(PatientId),
    /// Rejected outright: the report contains at least one Fatal issue.
    InvalidData(DataQualityReport),
    /// A collaborator failure unrelated to validation; the caller may retry.
    UnspecificError(String),
}
