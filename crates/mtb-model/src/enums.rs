//! Constrained enumerations used across the data model.
//!
//! All variants serialize as lowercase kebab-case identifiers, matching the
//! wire format the rest of the model uses.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentStatus {
    Active,
    Rejected,
}

/// Whether guideline-recommended therapy options remain for a diagnosis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidelineTreatmentStatus {
    Exhausted,
    NonExhausted,
    Impossible,
    NoGuidelinesAvailable,
    Unknown,
}

/// How a [`crate::TumorCellContent`] value was determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TumorCellContentMethod {
    Histologic,
    Bioinformatic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimResponseStatus {
    Accepted,
    Rejected,
    Unknown,
}

/// Ranked priority of a [`crate::TherapyRecommendation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationPriority {
    One,
    Two,
    Three,
    Four,
    Five,
}

/// RECIST response categories (`Response.value`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecistValue {
    CompleteResponse,
    PartialResponse,
    MixedResponse,
    StableDisease,
    ProgressiveDisease,
    NotEvaluable,
}
