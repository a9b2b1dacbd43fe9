//! `Patient`, `Consent`, and `MTBEpisode`.

use chrono::NaiveDate;
use mtb_model::{Consent, MtbEpisode, Patient};

use crate::kernel::{accumulate, matches_equal, must_be_error, should_be, Location, Outcome};

const KIND: &str = "Patient";

/// `now` is injected rather than read from the system clock, so a
/// `dateOfDeath` check stays pure across repeated runs.
pub fn validate_patient(patient: &Patient, now: NaiveDate) -> Outcome<()> {
    let id = patient.id.as_str().to_string();

    // birthDate is a non-optional field; it is always defined once parsed.
    let insurance = should_be(
        patient.insurance.is_some(),
        Location::new(KIND, id.clone(), "insurance"),
        "insurance is recommended but missing",
    );
    let death = match patient.date_of_death {
        None => Outcome::ok(),
        Some(death) => {
            let loc = Location::new(KIND, id.clone(), "dateOfDeath");
            let not_future = must_be_error(
                death.first_day() <= now,
                loc.clone(),
                "dateOfDeath is in the future",
            );
            let after_birth = must_be_error(
                death > patient.birth_date,
                loc,
                "dateOfDeath is not after birthDate",
            );
            not_future.then(after_birth)
        }
    };

    accumulate([insurance, death])
}

pub fn validate_consent(consent: &Consent, patient_id: &str) -> Outcome<()> {
    matches_equal(
        consent.patient.as_str(),
        patient_id,
        Location::new("Consent", consent.id.as_str().to_string(), "patient"),
        format!("patient '{}' does not resolve", consent.patient),
    )
}

pub fn validate_episode(episode: &MtbEpisode, patient_id: &str) -> Outcome<()> {
    matches_equal(
        episode.patient.as_str(),
        patient_id,
        Location::new("MTBEpisode", episode.id.as_str().to_string(), "patient"),
        format!("patient '{}' does not resolve", episode.patient),
    )
}
