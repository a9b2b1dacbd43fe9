//! The file validator: composes every entity validator over one `MtbFile`
//! under a consent-status gate.

use chrono::NaiveDate;
use mtb_catalog::CatalogRegistry;
use mtb_model::{ConsentStatus, MtbFile};

use crate::context::ReferenceContext;
use crate::entities;
use crate::kernel::{accumulate, must_be_error, must_be_fatal, should_be, validate_each, Location, Outcome};

const FILE_KIND: &str = "MTBFile";

/// Validates one `MtbFile`, returning the file itself when valid and the
/// accumulated issues otherwise. Deterministic: fixed issue order follows
/// the entity order the data model declares, and within each list, input
/// order is preserved.
pub fn validate_file(file: &MtbFile, catalog: &dyn CatalogRegistry, now: NaiveDate) -> Outcome<MtbFile> {
    let patient_id = file.patient.id.as_str().to_string();

    let administrative = accumulate([
        entities::patient::validate_patient(&file.patient, now),
        entities::patient::validate_consent(&file.consent, &patient_id),
        entities::patient::validate_episode(&file.episode, &patient_id),
    ]);

    let body = match file.consent.status {
        ConsentStatus::Rejected => validate_rejected(file, &patient_id),
        ConsentStatus::Active => validate_active(file, catalog, now, &patient_id),
    };

    administrative.then(body).map(|_| file.clone())
}

/// Rejected-consent mode: every medical list must be absent or empty; a
/// populated list is one Fatal issue, located at the list's own field name.
fn validate_rejected(file: &MtbFile, patient_id: &str) -> Outcome<()> {
    macro_rules! must_be_empty {
        ($list:expr, $attribute:literal) => {
            must_be_fatal(
                $list.as_deref().unwrap_or_default().is_empty(),
                Location::new(FILE_KIND, patient_id.to_string(), $attribute),
                concat!($attribute, " is present despite rejected consent"),
            )
        };
    }

    accumulate([
        must_be_empty!(file.diagnoses, "diagnoses"),
        must_be_empty!(file.family_member_diagnoses, "familyMemberDiagnoses"),
        must_be_empty!(file.previous_guideline_therapies, "previousGuidelineTherapies"),
        must_be_empty!(file.last_guideline_therapies, "lastGuidelineTherapies"),
        must_be_empty!(file.ecog_status, "ecogStatus"),
        must_be_empty!(file.specimens, "specimens"),
        must_be_empty!(file.tumor_cell_contents, "tumorCellContents"),
        must_be_empty!(file.tumor_morphologies, "tumorMorphologies"),
        must_be_empty!(file.histology_reports, "histologyReports"),
        must_be_empty!(file.molecular_pathology_findings, "molecularPathologyFindings"),
        must_be_empty!(file.ngs_reports, "ngsReports"),
        must_be_empty!(file.care_plans, "carePlans"),
        must_be_empty!(file.recommendations, "recommendations"),
        must_be_empty!(file.counselling_requests, "counsellingRequests"),
        must_be_empty!(file.rebiopsy_requests, "rebiopsyRequests"),
        must_be_empty!(file.histology_reevaluation_requests, "histologyReevaluationRequests"),
        must_be_empty!(file.study_inclusion_requests, "studyInclusionRequests"),
        must_be_empty!(file.claims, "claims"),
        must_be_empty!(file.claim_responses, "claimResponses"),
        must_be_empty!(file.molecular_therapies, "molecularTherapies"),
        must_be_empty!(file.responses, "responses"),
    ])
}

/// Active-consent mode: build the reference sets once, then validate every
/// present list and flag absent/empty ones (Error for diagnoses and
/// responses, which are required; Warning otherwise).
fn validate_active(file: &MtbFile, catalog: &dyn CatalogRegistry, now: NaiveDate, patient_id: &str) -> Outcome<()> {
    let ctx = ReferenceContext::build(file, catalog, now);

    fn list_outcome<T>(
        list: &Option<Vec<T>>,
        required: bool,
        patient_id: &str,
        attribute: &'static str,
        validate: impl Fn(&T) -> Outcome<()>,
    ) -> Outcome<()> {
        match list.as_deref() {
            None | Some([]) => {
                let loc = Location::new(FILE_KIND, patient_id.to_string(), attribute);
                if required {
                    must_be_error(false, loc, format!("{attribute} is required but missing"))
                } else {
                    should_be(false, loc, format!("{attribute} is recommended but missing"))
                }
            }
            Some(items) => validate_each(items, validate),
        }
    }

    accumulate([
        list_outcome(&file.diagnoses, true, patient_id, "diagnoses", |d| {
            entities::diagnosis::validate_diagnosis(d, &ctx, patient_id)
        }),
        list_outcome(&file.family_member_diagnoses, false, patient_id, "familyMemberDiagnoses", |d| {
            entities::diagnosis::validate_family_member_diagnosis(d, patient_id)
        }),
        list_outcome(&file.previous_guideline_therapies, false, patient_id, "previousGuidelineTherapies", |t| {
            entities::guideline_therapy::validate_previous_guideline_therapy(t, &ctx, patient_id)
        }),
        list_outcome(&file.last_guideline_therapies, false, patient_id, "lastGuidelineTherapies", |t| {
            entities::guideline_therapy::validate_last_guideline_therapy(t, &ctx, patient_id)
        }),
        list_outcome(&file.ecog_status, false, patient_id, "ecogStatus", |e| {
            entities::ecog::validate_ecog_status(e, patient_id)
        }),
        list_outcome(&file.specimens, false, patient_id, "specimens", |s| {
            entities::specimen::validate_specimen(s, &ctx, patient_id)
        }),
        list_outcome(&file.tumor_cell_contents, false, patient_id, "tumorCellContents", |t| {
            entities::specimen::validate_tumor_cell_content(t, &ctx)
        }),
        list_outcome(&file.tumor_morphologies, false, patient_id, "tumorMorphologies", |t| {
            entities::specimen::validate_tumor_morphology(t, &ctx, patient_id)
        }),
        list_outcome(&file.histology_reports, false, patient_id, "histologyReports", |h| {
            entities::histology::validate_histology_report(h, &ctx, patient_id)
        }),
        list_outcome(&file.molecular_pathology_findings, false, patient_id, "molecularPathologyFindings", |m| {
            entities::histology::validate_molecular_pathology_finding(m, &ctx, patient_id)
        }),
        list_outcome(&file.ngs_reports, false, patient_id, "ngsReports", |n| {
            entities::ngs::validate_somatic_ngs_report(n, &ctx, patient_id)
        }),
        list_outcome(&file.care_plans, false, patient_id, "carePlans", |c| {
            entities::care_plan::validate_care_plan(c, &ctx, patient_id)
        }),
        list_outcome(&file.recommendations, false, patient_id, "recommendations", |r| {
            entities::care_plan::validate_therapy_recommendation(r, &ctx, patient_id)
        }),
        list_outcome(&file.counselling_requests, false, patient_id, "counsellingRequests", |r| {
            entities::requests::validate_genetic_counselling_request(r, &ctx, patient_id)
        }),
        list_outcome(&file.rebiopsy_requests, false, patient_id, "rebiopsyRequests", |r| {
            entities::requests::validate_rebiopsy_request(r, &ctx, patient_id)
        }),
        list_outcome(&file.histology_reevaluation_requests, false, patient_id, "histologyReevaluationRequests", |r| {
            entities::requests::validate_histology_reevaluation_request(r, &ctx, patient_id)
        }),
        list_outcome(&file.study_inclusion_requests, false, patient_id, "studyInclusionRequests", |r| {
            entities::requests::validate_study_inclusion_request(r, patient_id)
        }),
        list_outcome(&file.claims, false, patient_id, "claims", |c| {
            entities::claim::validate_claim(c, &ctx, patient_id)
        }),
        list_outcome(&file.claim_responses, false, patient_id, "claimResponses", |c| {
            entities::claim::validate_claim_response(c, &ctx, patient_id)
        }),
        list_outcome(&file.molecular_therapies, false, patient_id, "molecularTherapies", |t| {
            entities::therapy::validate_molecular_therapy(t, &ctx, patient_id)
        }),
        list_outcome(&file.responses, true, patient_id, "responses", |r| {
            entities::therapy::validate_response(r, &ctx, patient_id)
        }),
    ])
}
