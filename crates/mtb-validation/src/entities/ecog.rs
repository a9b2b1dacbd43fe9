//! `ECOGStatus`.

use mtb_model::EcogStatus;

use crate::kernel::{accumulate, matches_equal, must_be_error, Location, Outcome};

const KIND: &str = "ECOGStatus";

pub fn validate_ecog_status(status: &EcogStatus, patient_id: &str) -> Outcome<()> {
    let id = status.id.as_str().to_string();

    let patient = matches_equal(
        status.patient.as_str(),
        patient_id,
        Location::new(KIND, id.clone(), "patient"),
        format!("patient '{}' does not resolve", status.patient),
    );
    // effectiveDate is non-optional in the schema; always defined once parsed.
    let value = must_be_error(
        status.value <= 5,
        Location::new(KIND, id.clone(), "value"),
        format!("ECOG value {} is out of range 0..=5", status.value),
    );

    accumulate([patient, value])
}
