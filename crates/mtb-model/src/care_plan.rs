use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Atc, Coding};
use crate::enums::RecommendationPriority;
use crate::{
    CarePlanId, DiagnosisId, GeneticCounsellingRequestId, PatientId, RebiopsyRequestId,
    SomaticNgsReportId, StudyInclusionRequestId, TherapyRecommendationId, VariantId,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub id: CarePlanId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    pub issued_on: Option<NaiveDate>,
    pub no_target_finding: Option<bool>,
    #[serde(default)]
    pub recommendations: Option<Vec<TherapyRecommendationId>>,
    pub counselling_request: Option<GeneticCounsellingRequestId>,
    #[serde(default)]
    pub rebiopsy_requests: Option<Vec<RebiopsyRequestId>>,
    pub study_inclusion_request: Option<StudyInclusionRequestId>,
}

impl CarePlan {
    /// `true` if `recommendations` is present and non-empty.
    pub fn has_recommendations(&self) -> bool {
        self.recommendations
            .as_ref()
            .is_some_and(|r| !r.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyRecommendation {
    pub id: TherapyRecommendationId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    pub issued_on: Option<NaiveDate>,
    #[serde(default)]
    pub medication: Vec<Coding<Atc>>,
    pub priority: Option<RecommendationPriority>,
    pub level_of_evidence: Option<String>,
    pub ngs_report: Option<SomaticNgsReportId>,
    #[serde(default)]
    pub supporting_variants: Option<Vec<VariantId>>,
}
