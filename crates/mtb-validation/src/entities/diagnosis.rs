//! `Diagnosis` and `FamilyMemberDiagnosis`.

use mtb_model::{Diagnosis, FamilyMemberDiagnosis};

use crate::context::ReferenceContext;
use crate::entities::codings;
use crate::kernel::{accumulate, could_be, in_set, matches_equal, must_be_error, should_be, validate_each, Location, Outcome};

const KIND: &str = "Diagnosis";

pub fn validate_diagnosis(diagnosis: &Diagnosis, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    let id = diagnosis.id.as_str().to_string();

    let patient = matches_equal(
        diagnosis.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", diagnosis.patient),
    );

    let recorded_on = should_be(
        diagnosis.recorded_on.is_some(),
        Location::new(KIND, id.clone(), "recordedOn"),
        "recordedOn is recommended but missing",
    );

    let icd10 = match &diagnosis.icd10 {
        None => must_be_error(false, Location::new(KIND, id.clone(), "icd10"), "icd10 is required but missing"),
        Some(coding) => codings::validate_icd10(coding, ctx, KIND, &id, "icd10"),
    };

    let icd_o3_t = match &diagnosis.icd_o3_t {
        None => could_be(false, Location::new(KIND, id.clone(), "icdO3T"), "icdO3T is optional and missing"),
        Some(coding) => codings::validate_icd_o3_t(coding, ctx, KIND, &id, "icdO3T"),
    };

    let histology_results = validate_each(
        diagnosis.histology_results.as_deref().unwrap_or_default(),
        |href| {
            in_set(
                href.as_str(),
                &ctx.histology_report_ids,
                Location::new(KIND, id.clone(), "histologyResults"),
                format!("histology report '{href}' does not resolve"),
            )
        },
    );

    let guideline_status = should_be(
        diagnosis.guideline_treatment_status.is_some(),
        Location::new(KIND, id.clone(), "guidelineTreatmentStatus"),
        "guidelineTreatmentStatus is recommended but missing",
    );

    accumulate([patient, recorded_on, icd10, icd_o3_t, histology_results, guideline_status])
}

pub fn validate_family_member_diagnosis(entity: &FamilyMemberDiagnosis, patient_id: &str) -> Outcome<()> {
    matches_equal(
        entity.patient.as_str(),
        patient_id,
        Location::new("FamilyMemberDiagnosis", entity.id.as_str().to_string(), "patient"),
        format!("patient '{}' does not resolve", entity.patient),
    )
}
