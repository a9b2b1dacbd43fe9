//! The four follow-up request kinds a `CarePlan` may raise.

use mtb_model::{GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest, StudyInclusionRequest};
use regex::Regex;
use std::sync::OnceLock;

use crate::context::ReferenceContext;
use crate::kernel::{accumulate, in_set, matches_equal, must_be_error, should_be, Location, Outcome};

fn nct_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^NCT\d{8}$").expect("static pattern is valid"))
}

pub fn validate_genetic_counselling_request(request: &GeneticCounsellingRequest, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "GeneticCounsellingRequest";
    let id = request.id.as_str().to_string();

    let patient = matches_equal(
        request.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", request.patient),
    );
    let diagnosis = match &request.diagnosis {
        None => Outcome::ok(),
        Some(diagnosis_id) => in_set(
            diagnosis_id.as_str(),
            &ctx.diagnosis_ids,
            Location::new(KIND, id.clone(), "diagnosis"),
            format!("diagnosis '{diagnosis_id}' does not resolve"),
        ),
    };
    let issued_on = should_be(
        request.issued_on.is_some(),
        Location::new(KIND, id.clone(), "issuedOn"),
        "issuedOn is recommended but missing",
    );

    accumulate([patient, diagnosis, issued_on])
}

pub fn validate_rebiopsy_request(request: &RebiopsyRequest, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "RebiopsyRequest";
    let id = request.id.as_str().to_string();

    let patient = matches_equal(
        request.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", request.patient),
    );
    let specimen = match &request.specimen {
        None => Outcome::ok(),
        Some(specimen_id) => in_set(
            specimen_id.as_str(),
            &ctx.specimen_ids,
            Location::new(KIND, id.clone(), "specimen"),
            format!("specimen '{specimen_id}' does not resolve"),
        ),
    };
    let issued_on = should_be(
        request.issued_on.is_some(),
        Location::new(KIND, id.clone(), "issuedOn"),
        "issuedOn is recommended but missing",
    );

    accumulate([patient, specimen, issued_on])
}

pub fn validate_histology_reevaluation_request(request: &HistologyReevaluationRequest, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "HistologyReevaluationRequest";
    let id = request.id.as_str().to_string();

    let patient = matches_equal(
        request.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", request.patient),
    );
    let specimen = match &request.specimen {
        None => Outcome::ok(),
        Some(specimen_id) => in_set(
            specimen_id.as_str(),
            &ctx.specimen_ids,
            Location::new(KIND, id.clone(), "specimen"),
            format!("specimen '{specimen_id}' does not resolve"),
        ),
    };
    let issued_on = should_be(
        request.issued_on.is_some(),
        Location::new(KIND, id.clone(), "issuedOn"),
        "issuedOn is recommended but missing",
    );

    accumulate([patient, specimen, issued_on])
}

pub fn validate_study_inclusion_request(request: &StudyInclusionRequest, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "StudyInclusionRequest";
    let id = request.id.as_str().to_string();

    let patient = matches_equal(
        request.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", request.patient),
    );
    let nct_number = must_be_error(
        nct_pattern().is_match(&request.nct_number),
        Location::new(KIND, id.clone(), "nctNumber"),
        format!("nctNumber '{}' does not match NCT\\d{{8}}", request.nct_number),
    );
    let issued_on = should_be(
        request.issued_on.is_some(),
        Location::new(KIND, id.clone(), "issuedOn"),
        "issuedOn is recommended but missing",
    );

    accumulate([patient, nct_number, issued_on])
}
