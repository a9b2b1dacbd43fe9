//! Consent and episode: the two administrative entities every MTB file
//! carries regardless of consent status.

use serde::{Deserialize, Serialize};

use crate::common::Period;
use crate::{ConsentId, ConsentStatus, MtbEpisodeId, PatientId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub id: ConsentId,
    pub patient: PatientId,
    pub status: ConsentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtbEpisode {
    pub id: MtbEpisodeId,
    pub patient: PatientId,
    pub period: Period,
}
