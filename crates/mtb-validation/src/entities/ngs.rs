//! `SomaticNGSReport` and its variant lists.

use mtb_model::{SomaticNgsReport, TumorCellContentMethod};

use crate::context::ReferenceContext;
use crate::entities::codings;
use crate::kernel::{accumulate, could_be, in_set, matches_equal, must_be_error, validate_each, Location, Outcome};

const KIND: &str = "SomaticNGSReport";

pub fn validate_somatic_ngs_report(report: &SomaticNgsReport, ctx: &ReferenceContext, patient_id: &str) -> Outcome<()> {
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

    let tumor_cell_content = match ctx.tumor_cell_content_methods.get(report.tumor_cell_content.as_str()) {
        None => must_be_error(
            false,
            Location::new(KIND, id.clone(), "tumorCellContent"),
            format!("tumor cell content '{}' does not resolve", report.tumor_cell_content),
        ),
        Some(method) => must_be_error(
            *method == TumorCellContentMethod::Bioinformatic,
            Location::new(KIND, id.clone(), "tumorCellContent"),
            format!("tumor cell content '{}' was not determined bioinformatically", report.tumor_cell_content),
        ),
    };

    let brcaness = match report.brcaness {
        None => could_be(false, Location::new(KIND, id.clone(), "brcaness"), "brcaness is optional and missing"),
        Some(v) => must_be_error(
            (0.0..=1.0).contains(&v),
            Location::new(KIND, id.clone(), "brcaness"),
            format!("brcaness {v} is out of range [0.0, 1.0]"),
        ),
    };
    let msi = match report.msi {
        None => could_be(false, Location::new(KIND, id.clone(), "msi"), "msi is optional and missing"),
        Some(v) => must_be_error(
            (0.0..=2.0).contains(&v),
            Location::new(KIND, id.clone(), "msi"),
            format!("msi {v} is out of range [0.0, 2.0]"),
        ),
    };
    let tmb = must_be_error(
        (0.0..=1_000_000.0).contains(&report.tmb),
        Location::new(KIND, id.clone(), "tmb"),
        format!("tmb {} is out of range [0.0, 1000000.0]", report.tmb),
    );

    let genes = validate_each(&report.variants.simple, |variant| {
        codings::validate_hgnc(&variant.gene, ctx, KIND, &id, "variants.simple.gene")
    });

    accumulate([patient, specimen, tumor_cell_content, brcaness, msi, tmb, genes])
}
