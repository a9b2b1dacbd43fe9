use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Coding, Icd10Gm, IcdO3M};
use crate::{PatientId, SpecimenId, TumorCellContentId, TumorCellContentMethod, TumorMorphologyId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: SpecimenId,
    pub patient: PatientId,
    pub icd10: Coding<Icd10Gm>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub collection: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorCellContent {
    pub id: TumorCellContentId,
    pub specimen: SpecimenId,
    pub method: TumorCellContentMethod,
    /// Fraction of tumor cells in the specimen, in `[0.0, 1.0]`.
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorMorphology {
    pub id: TumorMorphologyId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    pub icd_o3_m: Coding<IcdO3M>,
    pub notes: Option<String>,
}
