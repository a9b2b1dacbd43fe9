use serde::{Deserialize, Serialize};

use crate::coding::{Atc, Coding};
use crate::common::Period;
use crate::{DiagnosisId, LastGuidelineTherapyId, PatientId, PreviousGuidelineTherapyId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousGuidelineTherapy {
    pub id: PreviousGuidelineTherapyId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    pub therapy_line: Option<u32>,
    #[serde(default)]
    pub medication: Vec<Coding<Atc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastGuidelineTherapy {
    pub id: LastGuidelineTherapyId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    pub therapy_line: Option<u32>,
    pub period: Option<Period>,
    #[serde(default)]
    pub medication: Vec<Coding<Atc>>,
    pub reason_stopped: Option<String>,
}
