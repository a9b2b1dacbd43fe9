use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    HistologyReportId, MolecularPathologyFindingId, PatientId, SpecimenId, TumorCellContentId,
    TumorMorphologyId,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReport {
    pub id: HistologyReportId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    pub issued_on: NaiveDate,
    pub tumor_morphology: Option<TumorMorphologyId>,
    /// Must resolve to a [`crate::TumorCellContent`] whose method is
    /// [`crate::TumorCellContentMethod::Histologic`].
    pub tumor_cell_content: Option<TumorCellContentId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularPathologyFinding {
    pub id: MolecularPathologyFindingId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    pub issued_on: NaiveDate,
}
