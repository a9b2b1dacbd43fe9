use serde::{Deserialize, Serialize};

use crate::{Gender, PatientId, YearMonth};

/// The patient the whole MTB file is about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub gender: Gender,
    pub birth_date: YearMonth,
    /// Stamped by the intake pipeline with the local site identifier.
    pub managing_zpm: Option<String>,
    pub insurance: Option<String>,
    pub date_of_death: Option<YearMonth>,
}
