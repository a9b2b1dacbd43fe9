//! The three-step validation ladder shared by every catalog-backed
//! [`Coding`]: version defined, version syntax valid, code present in the
//! catalog for that version. ATC is unversioned and only gets the final
//! step.

use mtb_catalog::CatalogVersion;
use mtb_model::coding::{Atc, Coding, Hgnc, IcdO3M, IcdO3T, Icd10Gm};

use crate::context::ReferenceContext;
use crate::kernel::{must_be_error, Location, Outcome};

fn versioned_ladder(
    code: &str,
    version: Option<&str>,
    catalog_name: &'static str,
    entity_kind: &'static str,
    entity_id: &str,
    attribute: &'static str,
    codes_for: impl FnOnce(CatalogVersion) -> Option<bool>,
) -> Outcome<()> {
    let loc = Location::new(entity_kind, entity_id.to_string(), attribute);
    let Some(version) = version else {
        return must_be_error(false, loc, format!("{catalog_name} coding is missing a version"));
    };
    let Ok(parsed) = version.parse::<CatalogVersion>() else {
        return must_be_error(false, loc, format!("{catalog_name} version '{version}' is not a valid 4-digit year"));
    };
    match codes_for(parsed) {
        Some(true) => Outcome::ok(),
        Some(false) => must_be_error(false, loc, format!("{catalog_name} code '{code}' is not in the {version} catalog")),
        None => must_be_error(false, loc, format!("{catalog_name} catalog version {version} is not loaded")),
    }
}

pub fn validate_icd10(
    coding: &Coding<Icd10Gm>,
    ctx: &ReferenceContext,
    entity_kind: &'static str,
    entity_id: &str,
    attribute: &'static str,
) -> Outcome<()> {
    versioned_ladder(
        &coding.code,
        coding.version.as_deref(),
        "ICD-10-GM",
        entity_kind,
        entity_id,
        attribute,
        |v| ctx.catalog.icd10_codes(v).map(|codes| codes.contains(&coding.code)),
    )
}

pub fn validate_icd_o3_t(
    coding: &Coding<IcdO3T>,
    ctx: &ReferenceContext,
    entity_kind: &'static str,
    entity_id: &str,
    attribute: &'static str,
) -> Outcome<()> {
    versioned_ladder(
        &coding.code,
        coding.version.as_deref(),
        "ICD-O-3-T",
        entity_kind,
        entity_id,
        attribute,
        |v| ctx.catalog.icd_o3_topography_codes(v).map(|codes| codes.contains(&coding.code)),
    )
}

pub fn validate_icd_o3_m(
    coding: &Coding<IcdO3M>,
    ctx: &ReferenceContext,
    entity_kind: &'static str,
    entity_id: &str,
    attribute: &'static str,
) -> Outcome<()> {
    versioned_ladder(
        &coding.code,
        coding.version.as_deref(),
        "ICD-O-3-M",
        entity_kind,
        entity_id,
        attribute,
        |v| ctx.catalog.icd_o3_morphology_codes(v).map(|codes| codes.contains(&coding.code)),
    )
}

pub fn validate_atc(
    coding: &Coding<Atc>,
    ctx: &ReferenceContext,
    entity_kind: &'static str,
    entity_id: &str,
    attribute: &'static str,
) -> Outcome<()> {
    let loc = Location::new(entity_kind, entity_id.to_string(), attribute);
    must_be_error(
        ctx.catalog.atc_codes().contains(&coding.code),
        loc,
        format!("ATC code '{}' is not a recognized medication code", coding.code),
    )
}

pub fn validate_hgnc(
    coding: &Coding<Hgnc>,
    ctx: &ReferenceContext,
    entity_kind: &'static str,
    entity_id: &str,
    attribute: &'static str,
) -> Outcome<()> {
    let loc = Location::new(entity_kind, entity_id.to_string(), attribute);
    must_be_error(
        ctx.catalog.hgnc_has_symbol(&coding.code),
        loc,
        format!("gene symbol '{}' is not a recognized HGNC symbol", coding.code),
    )
}
