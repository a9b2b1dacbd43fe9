//! `CarePlan` and `TherapyRecommendation`.

use mtb_model::{CarePlan, TherapyRecommendation};

use crate::context::ReferenceContext;
use crate::entities::codings;
use crate::kernel::{accumulate, in_set, matches_equal, must_be_error, should_be, validate_each, Location, Outcome};

pub fn validate_care_plan(plan: &CarePlan, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "CarePlan";
    let id = plan.id.as_str().to_string();

    let patient = matches_equal(
        plan.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", plan.patient),
    );
    let diagnosis = in_set(
        plan.diagnosis.as_str(),
        &ctx.diagnosis_ids,
        Location::new(KIND, id.clone(), "diagnosis"),
        format!("diagnosis '{}' does not resolve", plan.diagnosis),
    );
    let issued_on = should_be(
        plan.issued_on.is_some(),
        Location::new(KIND, id.clone(), "issuedOn"),
        "issuedOn is recommended but missing",
    );

    let no_target = plan.no_target_finding.unwrap_or(false);
    let has_recs = plan.has_recommendations();
    let contradiction = must_be_error(
        !(no_target && has_recs),
        Location::new(KIND, id.clone(), "recommendations"),
        "recommendations present despite noTargetFinding",
    );
    let nothing_present = must_be_error(
        no_target || has_recs,
        Location::new(KIND, id.clone(), "recommendations"),
        "neither noTargetFinding nor recommendations is present",
    );

    let recommendations_resolve = validate_each(
        plan.recommendations.as_deref().unwrap_or_default(),
        |rec_id| {
            in_set(
                rec_id.as_str(),
                &ctx.recommendation_ids,
                Location::new(KIND, id.clone(), "recommendations"),
                format!("recommendation '{rec_id}' does not resolve"),
            )
        },
    );

    let counselling = match &plan.counselling_request {
        None => Outcome::ok(),
        Some(req_id) => in_set(
            req_id.as_str(),
            &ctx.counselling_request_ids,
            Location::new(KIND, id.clone(), "counsellingRequest"),
            format!("counselling request '{req_id}' does not resolve"),
        ),
    };

    let rebiopsies = validate_each(plan.rebiopsy_requests.as_deref().unwrap_or_default(), |req_id| {
        in_set(
            req_id.as_str(),
            &ctx.rebiopsy_request_ids,
            Location::new(KIND, id.clone(), "rebiopsyRequests"),
            format!("rebiopsy request '{req_id}' does not resolve"),
        )
    });

    let study_inclusion = match &plan.study_inclusion_request {
        None => Outcome::ok(),
        Some(req_id) => in_set(
            req_id.as_str(),
            &ctx.study_inclusion_request_ids,
            Location::new(KIND, id.clone(), "studyInclusionRequest"),
            format!("study inclusion request '{req_id}' does not resolve"),
        ),
    };

    accumulate([
        patient,
        diagnosis,
        issued_on,
        contradiction,
        nothing_present,
        recommendations_resolve,
        counselling,
        rebiopsies,
        study_inclusion,
    ])
}

pub fn validate_therapy_recommendation(rec: &TherapyRecommendation, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "TherapyRecommendation";
    let id = rec.id.as_str().to_string();

    let patient = matches_equal(
        rec.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", rec.patient),
    );
    let diagnosis = in_set(
        rec.diagnosis.as_str(),
        &ctx.diagnosis_ids,
        Location::new(KIND, id.clone(), "diagnosis"),
        format!("diagnosis '{}' does not resolve", rec.diagnosis),
    );
    let issued_on = should_be(
        rec.issued_on.is_some(),
        Location::new(KIND, id.clone(), "issuedOn"),
        "issuedOn is recommended but missing",
    );
    let medication = validate_each(&rec.medication, |coding| codings::validate_atc(coding, ctx, KIND, &id, "medication"));
    let priority = should_be(
        rec.priority.is_some(),
        Location::new(KIND, id.clone(), "priority"),
        "priority is recommended but missing",
    );
    let level_of_evidence = should_be(
        rec.level_of_evidence.is_some(),
        Location::new(KIND, id.clone(), "levelOfEvidence"),
        "levelOfEvidence is recommended but missing",
    );

    let ngs_report = match &rec.ngs_report {
        None => should_be(
            false,
            Location::new(KIND, id.clone(), "ngsReport"),
            "ngsReport is recommended but missing",
        ),
        Some(ngs_id) => in_set(
            ngs_id.as_str(),
            &ctx.ngs_report_ids,
            Location::new(KIND, id.clone(), "ngsReport"),
            format!("ngs report '{ngs_id}' does not resolve"),
        ),
    };

    let supporting_variants = match rec.supporting_variants.as_deref() {
        None | Some([]) => should_be(
            false,
            Location::new(KIND, id.clone(), "supportingVariants"),
            "supportingVariants is recommended but missing",
        ),
        Some(variants) => {
            let in_report: std::collections::HashSet<String> = rec
                .ngs_report
                .as_ref()
                .and_then(|ngs_id| ctx.variant_ids_by_ngs_report.get(ngs_id.as_str()))
                .cloned()
                .unwrap_or_default();
            validate_each(variants, |variant_id| {
                in_set(
                    variant_id.as_str(),
                    &in_report,
                    Location::new(KIND, id.clone(), "supportingVariants"),
                    format!("variant '{variant_id}' is not in the referenced NGS report"),
                )
            })
        }
    };

    accumulate([patient, diagnosis, issued_on, medication, priority, level_of_evidence, ngs_report, supporting_variants])
}
