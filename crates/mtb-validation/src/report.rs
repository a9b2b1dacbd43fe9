//! The [`DataQualityReport`] the file validator produces when an `MtbFile`
//! is not outright `Valid`.

use mtb_model::PatientId;

use crate::kernel::{Issue, Outcome, Severity};

/// A patient-scoped, non-empty list of issues produced by [`crate::validate_file`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityReport {
    pub patient: PatientId,
    pub issues: Vec<Issue>,
}

impl DataQualityReport {
    /// Builds a report directly from an id and a non-empty issue list; used
    /// by the staging store when reconstituting a previously saved report.
    pub fn new(patient: PatientId, issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { patient, issues }
    }

    /// Builds the report from a validation outcome; `None` if the outcome
    /// was `Valid` (there is nothing to report).
    pub fn from_outcome(patient: PatientId, outcome: &Outcome<mtb_model::MtbFile>) -> Option<Self> {
        if outcome.is_valid() {
            return None;
        }
        let issues = outcome.issues().to_vec();
        debug_assert!(!issues.is_empty());
        Some(Self { patient, issues })
    }

    /// Whether any issue in this report is [`Severity::Fatal`] -- the
    /// condition under which intake must reject the file.
    pub fn has_fatal(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Fatal)
    }

    /// Whether every issue in this report is [`Severity::Info`] -- the
    /// condition under which intake treats the file as valid despite the
    /// report being non-empty.
    pub fn all_info(&self) -> bool {
        self.issues.iter().all(|i| i.severity == Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Location;
    use mtb_model::MtbFile;

    fn loc() -> Location {
        Location::new("Test", "P1", "attr")
    }

    #[test]
    fn valid_outcome_has_no_report() {
        let file: MtbFile = serde_json::from_value(serde_json::json!({
            "patient": {"id": "P1", "gender": "male", "birthDate": "1970-01"},
            "consent": {"id": "C1", "patient": "P1", "status": "rejected"},
            "episode": {"id": "E1", "patient": "P1", "period": {"start": "2020-01-01"}}
        }))
        .unwrap();
        let outcome = Outcome::valid(file);
        assert!(DataQualityReport::from_outcome(PatientId::new("P1"), &outcome).is_none());
    }

    #[test]
    fn fatal_and_all_info_detection() {
        let report = DataQualityReport {
            patient: PatientId::new("P1"),
            issues: vec![Issue::fatal(loc(), "bad ref")],
        };
        assert!(report.has_fatal());
        assert!(!report.all_info());

        let info_only = DataQualityReport {
            patient: PatientId::new("P1"),
            issues: vec![Issue::info(loc(), "optional field missing")],
        };
        assert!(!info_only.has_fatal());
        assert!(info_only.all_info());
    }
}
