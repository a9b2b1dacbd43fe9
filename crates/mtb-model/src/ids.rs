//! Strongly typed entity identifiers.
//!
//! Every entity kind gets its own identifier newtype so that, for example, a
//! `DiagnosisId` can never be passed where a `SpecimenId` is expected. Each
//! identifier wraps an opaque `String`, compares by value, and serializes as
//! that bare string (mirroring `TenantId` in the persistence layer this crate
//! grew out of).

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps the given string as an identifier of this kind.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(PatientId, "Identifies a [`crate::Patient`].");
entity_id!(ConsentId, "Identifies a [`crate::Consent`].");
entity_id!(MtbEpisodeId, "Identifies an [`crate::MtbEpisode`].");
entity_id!(DiagnosisId, "Identifies a [`crate::Diagnosis`].");
entity_id!(
    FamilyMemberDiagnosisId,
    "Identifies a [`crate::FamilyMemberDiagnosis`]."
);
entity_id!(
    PreviousGuidelineTherapyId,
    "Identifies a [`crate::PreviousGuidelineTherapy`]."
);
entity_id!(
    LastGuidelineTherapyId,
    "Identifies a [`crate::LastGuidelineTherapy`]."
);
entity_id!(EcogStatusId, "Identifies an [`crate::EcogStatus`].");
entity_id!(SpecimenId, "Identifies a [`crate::Specimen`].");
entity_id!(
    TumorCellContentId,
    "Identifies a [`crate::TumorCellContent`]."
);
entity_id!(TumorMorphologyId, "Identifies a [`crate::TumorMorphology`].");
entity_id!(HistologyReportId, "Identifies a [`crate::HistologyReport`].");
entity_id!(
    MolecularPathologyFindingId,
    "Identifies a [`crate::MolecularPathologyFinding`]."
);
entity_id!(
    SomaticNgsReportId,
    "Identifies a [`crate::SomaticNgsReport`]."
);
entity_id!(VariantId, "Identifies a [`crate::Variant`].");
entity_id!(CarePlanId, "Identifies a [`crate::CarePlan`].");
entity_id!(
    TherapyRecommendationId,
    "Identifies a [`crate::TherapyRecommendation`]."
);
entity_id!(
    GeneticCounsellingRequestId,
    "Identifies a [`crate::GeneticCounsellingRequest`]."
);
entity_id!(RebiopsyRequestId, "Identifies a [`crate::RebiopsyRequest`].");
entity_id!(
    HistologyReevaluationRequestId,
    "Identifies a [`crate::HistologyReevaluationRequest`]."
);
entity_id!(
    StudyInclusionRequestId,
    "Identifies a [`crate::StudyInclusionRequest`]."
);
entity_id!(ClaimId, "Identifies a [`crate::Claim`].");
entity_id!(ClaimResponseId, "Identifies a [`crate::ClaimResponse`].");
entity_id!(
    MolecularTherapyId,
    "Identifies a [`crate::MolecularTherapy`]."
);
entity_id!(ResponseId, "Identifies a [`crate::Response`].");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_kinds_have_distinct_types() {
        let diagnosis = DiagnosisId::new("D1");
        let specimen = SpecimenId::new("D1");
        // Same wrapped string, but these are different Rust types -- the
        // following would not compile if uncommented:
        // assert_eq!(diagnosis, specimen);
        assert_eq!(diagnosis.as_str(), specimen.as_str());
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = PatientId::new("P1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"P1\"");
    }
}
