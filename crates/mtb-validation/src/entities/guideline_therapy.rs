//! `PreviousGuidelineTherapy` and `LastGuidelineTherapy`.

use mtb_model::{LastGuidelineTherapy, PreviousGuidelineTherapy};

use crate::context::ReferenceContext;
use crate::entities::codings;
use crate::kernel::{accumulate, in_set, matches_equal, should_be, validate_each, Location, Outcome};

fn refs(
    kind: &'static str,
    id: &str,
    patient: &str,
    patient_id: &str,
    diagnosis: &str,
    ctx: &ReferenceContext,
) -> Outcome<()> {
    let patient_ok = matches_equal(
        patient,
        patient_id,
        Location::new(kind, id.to_string(), "patient"),
        format!("patient '{patient}' does not resolve"),
    );
    let diagnosis_ok = in_set(
        diagnosis,
        &ctx.diagnosis_ids,
        Location::new(kind, id.to_string(), "diagnosis"),
        format!("diagnosis '{diagnosis}' does not resolve"),
    );
    patient_ok.then(diagnosis_ok)
}

pub fn validate_previous_guideline_therapy(
    therapy: &PreviousGuidelineTherapy,
    ctx: &ReferenceContext,
    patient_id: &str,
) -> Outcome<()> {
    let id = therapy.id.as_str().to_string();
    let kind = "PreviousGuidelineTherapy";

    let refs = refs(kind, &id, therapy.patient.as_str(), patient_id, therapy.diagnosis.as_str(), ctx);
    let therapy_line = should_be(
        therapy.therapy_line.is_some(),
        Location::new(kind, id.clone(), "therapyLine"),
        "therapyLine is recommended but missing",
    );
    let medication = validate_each(&therapy.medication, |coding| {
        codings::validate_atc(coding, ctx, kind, &id, "medication")
    });

    accumulate([refs, therapy_line, medication])
}

pub fn validate_last_guideline_therapy(
    therapy: &LastGuidelineTherapy,
    ctx: &ReferenceContext,
    patient_id: &str,
) -> Outcome<()> {
    let id = therapy.id.as_str().to_string();
    let kind = "LastGuidelineTherapy";

    let refs = refs(kind, &id, therapy.patient.as_str(), patient_id, therapy.diagnosis.as_str(), ctx);
    let therapy_line = should_be(
        therapy.therapy_line.is_some(),
        Location::new(kind, id.clone(), "therapyLine"),
        "therapyLine is recommended but missing",
    );
    let medication = validate_each(&therapy.medication, |coding| {
        codings::validate_atc(coding, ctx, kind, &id, "medication")
    });
    let period = should_be(
        therapy.period.is_some(),
        Location::new(kind, id.clone(), "period"),
        "period is recommended but missing",
    );
    let period_end = should_be(
        therapy.period.as_ref().is_some_and(|p| p.end.is_some()),
        Location::new(kind, id.clone(), "period.end"),
        "period.end is recommended but missing",
    );
    let reason_stopped = should_be(
        therapy.reason_stopped.is_some(),
        Location::new(kind, id.clone(), "reasonStopped"),
        "reasonStopped is recommended but missing",
    );
    let has_response = should_be(
        ctx.therapy_ids_with_response.contains(&id),
        Location::new(kind, id.clone(), "responses"),
        "no Response was recorded for this therapy",
    );

    accumulate([refs, therapy_line, medication, period, period_end, reason_stopped, has_response])
}
