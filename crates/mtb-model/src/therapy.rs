use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Atc, Coding};
use crate::common::Period;
use crate::enums::RecistValue;
use crate::{
    LastGuidelineTherapyId, MolecularTherapyId, PatientId, PreviousGuidelineTherapyId, ResponseId,
    TherapyRecommendationId,
};

/// A molecular (precision-oncology) therapy, modeled as a sum type over its
/// lifecycle stage rather than one struct with many optional fields -- a
/// `NotDone` therapy never carries a `period` or `medication`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
#[serde(rename_all = "kebab-case")]
#[serde(rename_all_fields = "camelCase")]
pub enum MolecularTherapy {
    NotDone {
        id: MolecularTherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        not_done_reason: Option<String>,
    },
    Ongoing {
        id: MolecularTherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        #[serde(default)]
        medication: Vec<Coding<Atc>>,
        period_start: NaiveDate,
    },
    Stopped {
        id: MolecularTherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        #[serde(default)]
        medication: Vec<Coding<Atc>>,
        period: Period,
        reason_stopped: Option<String>,
    },
    Completed {
        id: MolecularTherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        #[serde(default)]
        medication: Vec<Coding<Atc>>,
        period: Period,
    },
}

impl MolecularTherapy {
    pub fn id(&self) -> &MolecularTherapyId {
        match self {
            MolecularTherapy::NotDone { id, .. }
            | MolecularTherapy::Ongoing { id, .. }
            | MolecularTherapy::Stopped { id, .. }
            | MolecularTherapy::Completed { id, .. } => id,
        }
    }

    pub fn patient(&self) -> &PatientId {
        match self {
            MolecularTherapy::NotDone { patient, .. }
            | MolecularTherapy::Ongoing { patient, .. }
            | MolecularTherapy::Stopped { patient, .. }
            | MolecularTherapy::Completed { patient, .. } => patient,
        }
    }

    pub fn based_on(&self) -> &TherapyRecommendationId {
        match self {
            MolecularTherapy::NotDone { based_on, .. }
            | MolecularTherapy::Ongoing { based_on, .. }
            | MolecularTherapy::Stopped { based_on, .. }
            | MolecularTherapy::Completed { based_on, .. } => based_on,
        }
    }

    /// Medication codings, empty for the `NotDone` variant.
    pub fn medication(&self) -> &[Coding<Atc>] {
        match self {
            MolecularTherapy::NotDone { .. } => &[],
            MolecularTherapy::Ongoing { medication, .. }
            | MolecularTherapy::Stopped { medication, .. }
            | MolecularTherapy::Completed { medication, .. } => medication,
        }
    }
}

/// A reference to a therapy course: a [`PreviousGuidelineTherapyId`], a
/// [`LastGuidelineTherapyId`], or a [`MolecularTherapyId`]. The three id
/// kinds share no catalog of their own, so [`Response::therapy`] is resolved
/// against their combined id set rather than any single entity list.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TherapyId(String);

impl TherapyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TherapyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for TherapyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TherapyId({})", self.0)
    }
}

impl From<&PreviousGuidelineTherapyId> for TherapyId {
    fn from(id: &PreviousGuidelineTherapyId) -> Self {
        TherapyId::new(id.as_str())
    }
}

impl From<&LastGuidelineTherapyId> for TherapyId {
    fn from(id: &LastGuidelineTherapyId) -> Self {
        TherapyId::new(id.as_str())
    }
}

impl From<&MolecularTherapyId> for TherapyId {
    fn from(id: &MolecularTherapyId) -> Self {
        TherapyId::new(id.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub patient: PatientId,
    pub therapy: TherapyId,
    pub effective_date: NaiveDate,
    pub value: RecistValue,
}
