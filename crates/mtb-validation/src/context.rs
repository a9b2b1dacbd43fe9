//! The explicit validation context carried through traversal.
//!
//! Implicit per-validator reference-set parameters are replaced with one
//! explicit immutable value; [`ReferenceContext`] is that value. It is
//! built once per file, before any entity validator runs, and then passed
//! by shared reference everywhere.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use mtb_catalog::CatalogRegistry;
use mtb_model::{MtbFile, TumorCellContentMethod};

/// Everything an entity validator needs beyond the entity itself: the
/// catalog registry, an injected clock (so `Patient` validation stays pure
/// rather than reading the system clock), and the closed reference sets
/// derived from one `MtbFile`.
pub struct ReferenceContext<'a> {
    pub catalog: &'a dyn CatalogRegistry,
    pub now: NaiveDate,

    pub diagnosis_ids: HashSet<String>,
    pub diagnosis_icd10_codes: HashSet<String>,
    pub specimen_ids: HashSet<String>,
    pub tumor_cell_content_ids: HashSet<String>,
    pub tumor_morphology_ids: HashSet<String>,
    pub histology_report_ids: HashSet<String>,
    pub ngs_report_ids: HashSet<String>,
    pub recommendation_ids: HashSet<String>,
    pub counselling_request_ids: HashSet<String>,
    pub rebiopsy_request_ids: HashSet<String>,
    pub histology_reevaluation_request_ids: HashSet<String>,
    pub study_inclusion_request_ids: HashSet<String>,
    pub claim_ids: HashSet<String>,
    /// Union of previous-, last-guideline-, and molecular-therapy ids, the
    /// set `Response.therapy` resolves against.
    pub therapy_ids: HashSet<String>,
    /// `TumorCellContent.id` -> `method`, so `HistologyReport` and
    /// `SomaticNGSReport` can check the method of the specific content they
    /// reference without re-scanning the file.
    pub tumor_cell_content_methods: HashMap<String, TumorCellContentMethod>,
    /// `SomaticNGSReport.id` -> the set of variant ids it carries, so
    /// `TherapyRecommendation.supportingVariants` can be checked against the
    /// variants of the one report it names.
    pub variant_ids_by_ngs_report: HashMap<String, HashSet<String>>,
    /// Therapy ids named by some `Response.therapy`, used by
    /// `LastGuidelineTherapy` to warn when no response was ever recorded for
    /// it.
    pub therapy_ids_with_response: HashSet<String>,
}

impl<'a> ReferenceContext<'a> {
    pub fn build(file: &MtbFile, catalog: &'a dyn CatalogRegistry, now: NaiveDate) -> Self {
        let diagnosis_ids = ids(&file.diagnoses, |d| d.id.as_str());
        let diagnosis_icd10_codes: HashSet<String> = file
            .diagnoses
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|d| d.icd10.as_ref())
            .map(|c| c.code.clone())
            .collect();
        let specimen_ids = ids(&file.specimens, |s| s.id.as_str());
        let tumor_cell_content_ids = ids(&file.tumor_cell_contents, |t| t.id.as_str());
        let tumor_morphology_ids = ids(&file.tumor_morphologies, |t| t.id.as_str());
        let histology_report_ids = ids(&file.histology_reports, |h| h.id.as_str());
        let ngs_report_ids = ids(&file.ngs_reports, |n| n.id.as_str());
        let recommendation_ids = ids(&file.recommendations, |r| r.id.as_str());
        let counselling_request_ids = ids(&file.counselling_requests, |r| r.id.as_str());
        let rebiopsy_request_ids = ids(&file.rebiopsy_requests, |r| r.id.as_str());
        let histology_reevaluation_request_ids = ids(&file.histology_reevaluation_requests, |r| r.id.as_str());
        let study_inclusion_request_ids = ids(&file.study_inclusion_requests, |r| r.id.as_str());
        let claim_ids = ids(&file.claims, |c| c.id.as_str());

        let mut therapy_ids: HashSet<String> = ids(&file.previous_guideline_therapies, |t| t.id.as_str());
        therapy_ids.extend(ids(&file.last_guideline_therapies, |t| t.id.as_str()));
        therapy_ids.extend(
            file.molecular_therapies
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|t| t.id().as_str().to_string()),
        );

        let tumor_cell_content_methods: HashMap<String, TumorCellContentMethod> = file
            .tumor_cell_contents
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|t| (t.id.as_str().to_string(), t.method))
            .collect();

        let variant_ids_by_ngs_report: HashMap<String, HashSet<String>> = file
            .ngs_reports
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|r| {
                (
                    r.id.as_str().to_string(),
                    r.variants.all_ids().map(|id| id.as_str().to_string()).collect(),
                )
            })
            .collect();

        let therapy_ids_with_response: HashSet<String> = file
            .responses
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|r| r.therapy.as_str().to_string())
            .collect();

        Self {
            catalog,
            now,
            diagnosis_ids,
            diagnosis_icd10_codes,
            specimen_ids,
            tumor_cell_content_ids,
            tumor_morphology_ids,
            histology_report_ids,
            ngs_report_ids,
            recommendation_ids,
            counselling_request_ids,
            rebiopsy_request_ids,
            histology_reevaluation_request_ids,
            study_inclusion_request_ids,
            claim_ids,
            therapy_ids,
            tumor_cell_content_methods,
            variant_ids_by_ngs_report,
            therapy_ids_with_response,
        }
    }
}

fn ids<T>(list: &Option<Vec<T>>, id_of: impl Fn(&T) -> &str) -> HashSet<String> {
    list.as_deref()
        .unwrap_or_default()
        .iter()
        .map(|item| id_of(item).to_string())
        .collect()
}
