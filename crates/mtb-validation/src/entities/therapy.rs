//! `MolecularTherapy` (tagged union) and `Response`.

use mtb_model::{MolecularTherapy, Response};

use crate::context::ReferenceContext;
use crate::entities::codings;
use crate::kernel::{accumulate, in_set, matches_equal, validate_each, Location, Outcome};

pub fn validate_molecular_therapy(therapy: &MolecularTherapy, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "MolecularTherapy";
    let id = therapy.id().as_str().to_string();

    let patient = matches_equal(
        therapy.patient().as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", therapy.patient()),
    );
    let based_on = in_set(
        therapy.based_on().as_str(),
        &ctx.recommendation_ids,
        Location::new(KIND, id.clone(), "basedOn"),
        format!("recommendation '{}' does not resolve", therapy.based_on()),
    );
    let medication = validate_each(therapy.medication(), |coding| {
        codings::validate_atc(coding, ctx, KIND, &id, "medication")
    });

    accumulate([patient, based_on, medication])
}

pub fn validate_response(response: &Response, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "Response";
    let id = response.id.as_str().to_string();

    let patient = matches_equal(
        response.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", response.patient),
    );
    let therapy = in_set(
        response.therapy.as_str(),
        &ctx.therapy_ids,
        Location::new(KIND, id.clone(), "therapy"),
        format!("therapy '{}' does not resolve", response.therapy),
    );

    accumulate([patient, therapy])
}
