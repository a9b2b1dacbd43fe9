use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EcogStatusId, PatientId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcogStatus {
    pub id: EcogStatusId,
    pub patient: PatientId,
    pub effective_date: NaiveDate,
    /// ECOG performance status, 0 (fully active) through 5 (dead).
    pub value: u8,
}
