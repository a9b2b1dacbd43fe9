//! `Claim` and `ClaimResponse`.

use mtb_model::{Claim, ClaimResponse, ClaimResponseStatus};

use crate::context::ReferenceContext;
use crate::kernel::{accumulate, in_set, matches_equal, should_be, Location, Outcome};

pub fn validate_claim(claim: &Claim, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "Claim";
    let id = claim.id.as_str().to_string();

    let patient = matches_equal(
        claim.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", claim.patient),
    );
    let recommendation = in_set(
        claim.therapy_recommendation.as_str(),
        &ctx.recommendation_ids,
        Location::new(KIND, id.clone(), "therapyRecommendation"),
        format!("therapy recommendation '{}' does not resolve", claim.therapy_recommendation),
    );

    accumulate([patient, recommendation])
}

pub fn validate_claim_response(response: &ClaimResponse, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "ClaimResponse";
    let id = response.id.as_str().to_string();

    let patient = matches_equal(
        response.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", response.patient),
    );
    let claim = in_set(
        response.claim.as_str(),
        &ctx.claim_ids,
        Location::new(KIND, id.clone(), "claim"),
        format!("claim '{}' does not resolve", response.claim),
    );
    let reason = should_be(
        response.status != ClaimResponseStatus::Rejected || response.reason.is_some(),
        Location::new(KIND, id.clone(), "reason"),
        "reason is recommended when status is rejected",
    );

    accumulate([patient, claim, reason])
}
