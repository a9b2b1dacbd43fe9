use serde::{Deserialize, Serialize};

use crate::administrative::{Consent, MtbEpisode};
use crate::care_plan::{CarePlan, TherapyRecommendation};
use crate::claim::{Claim, ClaimResponse};
use crate::diagnosis::{Diagnosis, FamilyMemberDiagnosis};
use crate::ecog::EcogStatus;
use crate::guideline_therapy::{LastGuidelineTherapy, PreviousGuidelineTherapy};
use crate::histology::{HistologyReport, MolecularPathologyFinding};
use crate::ngs::SomaticNgsReport;
use crate::patient::Patient;
use crate::requests::{
    GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest,
    StudyInclusionRequest,
};
use crate::specimen::{Specimen, TumorCellContent, TumorMorphology};
use crate::therapy::{MolecularTherapy, Response};
use crate::PatientId;

/// The root aggregate: one patient's full Molecular Tumor Board case.
///
/// `patient`, `consent` and `episode` are always present; every other list is
/// optional and, when absent, is treated by the file validator as empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtbFile {
    pub patient: Patient,
    pub consent: Consent,
    pub episode: MtbEpisode,

    #[serde(default)]
    pub diagnoses: Option<Vec<Diagnosis>>,
    #[serde(default)]
    pub family_member_diagnoses: Option<Vec<FamilyMemberDiagnosis>>,
    #[serde(default)]
    pub previous_guideline_therapies: Option<Vec<PreviousGuidelineTherapy>>,
    #[serde(default)]
    pub last_guideline_therapies: Option<Vec<LastGuidelineTherapy>>,
    #[serde(default)]
    pub ecog_status: Option<Vec<EcogStatus>>,
    #[serde(default)]
    pub specimens: Option<Vec<Specimen>>,
    #[serde(default)]
    pub tumor_cell_contents: Option<Vec<TumorCellContent>>,
    #[serde(default)]
    pub tumor_morphologies: Option<Vec<TumorMorphology>>,
    #[serde(default)]
    pub histology_reports: Option<Vec<HistologyReport>>,
    #[serde(default)]
    pub molecular_pathology_findings: Option<Vec<MolecularPathologyFinding>>,
    #[serde(default)]
    pub ngs_reports: Option<Vec<SomaticNgsReport>>,
    #[serde(default)]
    pub care_plans: Option<Vec<CarePlan>>,
    #[serde(default)]
    pub recommendations: Option<Vec<TherapyRecommendation>>,
    #[serde(default)]
    pub counselling_requests: Option<Vec<GeneticCounsellingRequest>>,
    #[serde(default)]
    pub rebiopsy_requests: Option<Vec<RebiopsyRequest>>,
    #[serde(default)]
    pub histology_reevaluation_requests: Option<Vec<HistologyReevaluationRequest>>,
    #[serde(default)]
    pub study_inclusion_requests: Option<Vec<StudyInclusionRequest>>,
    #[serde(default)]
    pub claims: Option<Vec<Claim>>,
    #[serde(default)]
    pub claim_responses: Option<Vec<ClaimResponse>>,
    #[serde(default)]
    pub molecular_therapies: Option<Vec<MolecularTherapy>>,
    #[serde(default)]
    pub responses: Option<Vec<Response>>,
}

impl MtbFile {
    pub fn patient_id(&self) -> &PatientId {
        &self.patient.id
    }

    /// `true` if every optional medical-data list is absent or empty --
    /// the condition a rejected-consent patient must satisfy.
    pub fn has_no_medical_data(&self) -> bool {
        macro_rules! empty_or_absent {
            ($field:expr) => {
                $field.as_ref().is_none_or(|l| l.is_empty())
            };
        }
        empty_or_absent!(self.diagnoses)
            && empty_or_absent!(self.family_member_diagnoses)
            && empty_or_absent!(self.previous_guideline_therapies)
            && empty_or_absent!(self.last_guideline_therapies)
            && empty_or_absent!(self.ecog_status)
            && empty_or_absent!(self.specimens)
            && empty_or_absent!(self.tumor_cell_contents)
            && empty_or_absent!(self.tumor_morphologies)
            && empty_or_absent!(self.histology_reports)
            && empty_or_absent!(self.molecular_pathology_findings)
            && empty_or_absent!(self.ngs_reports)
            && empty_or_absent!(self.care_plans)
            && empty_or_absent!(self.recommendations)
            && empty_or_absent!(self.counselling_requests)
            && empty_or_absent!(self.rebiopsy_requests)
            && empty_or_absent!(self.histology_reevaluation_requests)
            && empty_or_absent!(self.study_inclusion_requests)
            && empty_or_absent!(self.claims)
            && empty_or_absent!(self.claim_responses)
            && empty_or_absent!(self.molecular_therapies)
            && empty_or_absent!(self.responses)
    }
}
