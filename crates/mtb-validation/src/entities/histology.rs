//! `HistologyReport` and `MolecularPathologyFinding`.
//!
//! `HistologyReport`'s reference checks on `tumorMorphology` and
//! `tumorCellContent` are explicitly given Warning/Error severity in their
//! own rule text rather than the general Fatal policy for cross-references;
//! that per-rule text wins here.

use mtb_model::{HistologyReport, MolecularPathologyFinding, TumorCellContentMethod};

use crate::context::ReferenceContext;
use crate::kernel::{accumulate, in_set, matches_equal, must_be_error, should_be, Location, Outcome};

pub fn validate_histology_report(report: &HistologyReport, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "HistologyReport";
    let id = report.id.as_str().to_string();

    let patient = matches_equal(
        report.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", report.patient),
    );
    let specimen = in_set(
        report.specimen.as_str(),
        &ctx.specimen_ids,
        Location::new(KIND, id.clone(), "specimen"),
        format!("specimen '{}' does not resolve", report.specimen),
    );

    let tumor_morphology = match &report.tumor_morphology {
        None => should_be(
            false,
            Location::new(KIND, id.clone(), "tumorMorphology"),
            "tumorMorphology is recommended but missing",
        ),
        Some(morphology_id) => should_be(
            ctx.tumor_morphology_ids.contains(morphology_id.as_str()),
            Location::new(KIND, id.clone(), "tumorMorphology"),
            format!("tumor morphology '{morphology_id}' does not resolve"),
        ),
    };

    let tumor_cell_content = match &report.tumor_cell_content {
        None => must_be_error(
            false,
            Location::new(KIND, id.clone(), "tumorCellContent"),
            "tumorCellContent is required but missing",
        ),
        Some(content_id) => match ctx.tumor_cell_content_methods.get(content_id.as_str()) {
            None => must_be_error(
                false,
                Location::new(KIND, id.clone(), "tumorCellContent"),
                format!("tumor cell content '{content_id}' does not resolve"),
            ),
            Some(method) => must_be_error(
                *method == TumorCellContentMethod::Histologic,
                Location::new(KIND, id.clone(), "tumorCellContent"),
                format!("tumor cell content '{content_id}' was not determined histologically"),
            ),
        },
    };

    // issuedOn is non-optional in the schema; always defined once parsed.
    accumulate([patient, specimen, tumor_morphology, tumor_cell_content])
}

pub fn validate_molecular_pathology_finding(finding: &MolecularPathologyFinding, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
    const KIND: &str = "MolecularPathologyFinding";
    let id = finding.id.as_str().to_string();

    let patient = matches_equal(
        finding.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", finding.patient),
    );
    let specimen = in_set(
        finding.specimen.as_str(),
        &ctx.specimen_ids,
        Location::new(KIND, id.clone(), "specimen"),
        format!("specimen '{}' does not resolve", finding.specimen),
    );

    accumulate([patient, specimen])
}
