//! Small value types shared across several entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A start date and optional end date, used by episodes and therapy courses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

/// One entry in a [`crate::Diagnosis`]'s guideline-treatment-status history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    pub date: NaiveDate,
    pub status: crate::GuidelineTreatmentStatus,
}
