use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ClaimId, ClaimResponseId, ClaimResponseStatus, PatientId, TherapyRecommendationId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    pub patient: PatientId,
    pub issued_on: NaiveDate,
    pub therapy_recommendation: TherapyRecommendationId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: ClaimResponseId,
    pub claim: ClaimId,
    pub patient: PatientId,
    pub issued_on: NaiveDate,
    pub status: ClaimResponseStatus,
    pub reason: Option<String>,
}
