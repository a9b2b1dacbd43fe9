//! Typed data model for Molecular Tumor Board (MTB) intake files.
//!
//! This crate is the closed schema of roughly fifty entity kinds that make
//! up one Molecular Tumor Board case: strongly typed identifiers ([`ids`]),
//! coded values referencing external terminologies ([`coding`]), constrained
//! enumerations ([`enums`]), and the entity structs themselves, rooted at
//! [`MtbFile`]. It has no validation logic of its own -- that lives in the
//! `mtb-validation` crate -- and no knowledge of persistence or transport.

pub mod administrative;
pub mod care_plan;
pub mod claim;
pub mod coding;
pub mod common;
pub mod date;
pub mod diagnosis;
pub mod ecog;
pub mod enums;
pub mod guideline_therapy;
pub mod histology;
pub mod ids;
pub mod mtbfile;
pub mod ngs;
pub mod patient;
pub mod requests;
pub mod specimen;
pub mod therapy;

pub use administrative::{Consent, MtbEpisode};
pub use care_plan::{CarePlan, TherapyRecommendation};
pub use claim::{Claim, ClaimResponse};
pub use coding::{Atc, CodeSystem, Coding, Hgnc, Icd10Gm, IcdO3M, IcdO3T};
pub use common::{Period, StatusHistoryEntry};
pub use date::YearMonth;
pub use diagnosis::{Diagnosis, FamilyMemberDiagnosis};
pub use ecog::EcogStatus;
pub use guideline_therapy::{LastGuidelineTherapy, PreviousGuidelineTherapy};
pub use histology::{HistologyReport, MolecularPathologyFinding};
pub use enums::{
    ClaimResponseStatus, ConsentStatus, Gender, GuidelineTreatmentStatus, RecistValue,
    RecommendationPriority, TumorCellContentMethod,
};
pub use ids::{
    CarePlanId, ClaimId, ClaimResponseId, ConsentId, DiagnosisId, EcogStatusId,
    FamilyMemberDiagnosisId, GeneticCounsellingRequestId, HistologyReevaluationRequestId,
    HistologyReportId, LastGuidelineTherapyId, MolecularPathologyFindingId, MolecularTherapyId,
    MtbEpisodeId, PatientId, PreviousGuidelineTherapyId, RebiopsyRequestId, ResponseId,
    SomaticNgsReportId, SpecimenId, StudyInclusionRequestId, TherapyRecommendationId,
    TumorCellContentId, TumorMorphologyId, VariantId,
};
pub use mtbfile::MtbFile;
pub use ngs::{
    CnvVariant, DnaFusionVariant, NgsVariants, RnaFusionVariant, RnaSeqVariant, SimpleVariant,
    SomaticNgsReport,
};
pub use patient::Patient;
pub use requests::{
    GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest,
    StudyInclusionRequest,
};
pub use specimen::{Specimen, TumorCellContent, TumorMorphology};
pub use therapy::{MolecularTherapy, Response, TherapyId};
