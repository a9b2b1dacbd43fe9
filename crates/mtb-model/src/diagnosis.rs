use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Coding, Icd10Gm, IcdO3T};
use crate::common::StatusHistoryEntry;
use crate::{DiagnosisId, FamilyMemberDiagnosisId, GuidelineTreatmentStatus, HistologyReportId, PatientId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub id: DiagnosisId,
    pub patient: PatientId,
    pub recorded_on: Option<NaiveDate>,
    pub icd10: Option<Coding<Icd10Gm>>,
    pub icd_o3_t: Option<Coding<IcdO3T>>,
    /// WHO grade, a free enumeration coding not checked against any catalog.
    pub who_grade: Option<String>,
    #[serde(default)]
    pub status_history: Option<Vec<StatusHistoryEntry>>,
    #[serde(default)]
    pub histology_results: Option<Vec<HistologyReportId>>,
    pub guideline_treatment_status: Option<GuidelineTreatmentStatus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberDiagnosis {
    pub id: FamilyMemberDiagnosisId,
    pub patient: PatientId,
    pub relationship: String,
}
