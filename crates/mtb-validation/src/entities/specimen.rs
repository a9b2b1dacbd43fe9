//! `Specimen`, `TumorCellContent`, and `TumorMorphology`.

use mtb_model::{Specimen, TumorCellContent, TumorMorphology};

use crate::context::ReferenceContext;
use crate::entities::codings;
use crate::kernel::{accumulate, in_set, matches_equal, must_be_fatal, should_be, Location, Outcome};

pub fn validate_specimen(specimen: &Specimen, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "Specimen";
    let id = specimen.id.as_str().to_string();

    let patient = matches_equal(
        specimen.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", specimen.patient),
    );

    let icd10 = codings::validate_icd10(&specimen.icd10, ctx, KIND, &id, "icd10");
    let icd10_matches_diagnosis = must_be_fatal(
        ctx.diagnosis_icd10_codes.contains(&specimen.icd10.code),
        Location::new(KIND, id.clone(), "icd10"),
        format!("icd10 code '{}' does not match any diagnosis", specimen.icd10.code),
    );

    let kind_attr = should_be(
        specimen.kind.is_some(),
        Location::new(KIND, id.clone(), "type"),
        "type is recommended but missing",
    );
    let collection = should_be(
        specimen.collection.is_some(),
        Location::new(KIND, id.clone(), "collection"),
        "collection is recommended but missing",
    );

    accumulate([patient, icd10, icd10_matches_diagnosis, kind_attr, collection])
}

pub fn validate_tumor_cell_content(content: &TumorCellContent, ctx: &ReferenceContext) -> Outcome<()> {
    const KIND: &str = "TumorCellContent";
    let id = content.id.as_str().to_string();

    let specimen = in_set(
        content.specimen.as_str(),
        &ctx.specimen_ids,
        Location::new(KIND, id.clone(), "specimen"),
        format!("specimen '{}' does not resolve", content.specimen),
    );
    let value = crate::kernel::must_be_error(
        (0.0..=1.0).contains(&content.value),
        Location::new(KIND, id.clone(), "value"),
        format!("tumor cell content {} is out of range [0.0, 1.0]", content.value),
    );

    accumulate([specimen, value])
}

pub fn validate_tumor_morphology(morphology: &TumorMorphology, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "TumorMorphology";
    let id = morphology.id.as_str().to_string();

    let patient = matches_equal(
        morphology.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", morphology.patient),
    );
    let specimen = in_set(
        morphology.specimen.as_str(),
        &ctx.specimen_ids,
        Location::new(KIND, id.clone(), "specimen"),
        format!("specimen '{}' does not resolve", morphology.specimen),
    );
    let icd_o3_m = codings::validate_icd_o3_m(&morphology.icd_o3_m, ctx, KIND, &id, "icdO3M");

    accumulate([patient, specimen, icd_o3_m])
}
