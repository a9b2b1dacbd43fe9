//! Follow-up requests that a [`crate::CarePlan`] may raise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    DiagnosisId, GeneticCounsellingRequestId, HistologyReevaluationRequestId, PatientId,
    RebiopsyRequestId, SpecimenId, StudyInclusionRequestId,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticCounsellingRequest {
    pub id: GeneticCounsellingRequestId,
    pub patient: PatientId,
    pub diagnosis: Option<DiagnosisId>,
    pub issued_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebiopsyRequest {
    pub id: RebiopsyRequestId,
    pub patient: PatientId,
    pub specimen: Option<SpecimenId>,
    pub issued_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReevaluationRequest {
    pub id: HistologyReevaluationRequestId,
    pub patient: PatientId,
    pub specimen: Option<SpecimenId>,
    pub issued_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInclusionRequest {
    pub id: StudyInclusionRequestId,
    pub patient: PatientId,
    /// Must match `NCT\d{8}`.
    pub nct_number: String,
    pub issued_on: Option<NaiveDate>,
}
