use std::collections::HashSet;

use super::issue::Issue;
use super::location::Location;
use super::outcome::Outcome;
use super::severity::Severity;

/// Fails with the given `severity` (`Error` or `Fatal`, per call site) when
/// `holds` is `false`. The three `*_be` helpers below differ only in which
/// severity they emit; `must_be` is the one that takes it explicitly because
/// Error vs. Fatal is a per-rule policy decision, not a fixed choice.
pub fn must_be(holds: bool, severity: Severity, location: Location, message: impl Into<String>) -> Outcome<()> {
    if holds {
        Outcome::ok()
    } else {
        Outcome::invalid(Issue::new(severity, location, message))
    }
}

/// `must_be` specialized to [`Severity::Error`].
pub fn must_be_error(holds: bool, location: Location, message: impl Into<String>) -> Outcome<()> {
    must_be(holds, Severity::Error, location, message)
}

/// `must_be` specialized to [`Severity::Fatal`].
pub fn must_be_fatal(holds: bool, location: Location, message: impl Into<String>) -> Outcome<()> {
    must_be(holds, Severity::Fatal, location, message)
}

/// Fails with [`Severity::Warning`] when `holds` is `false`.
pub fn should_be(holds: bool, location: Location, message: impl Into<String>) -> Outcome<()> {
    if holds {
        Outcome::ok()
    } else {
        Outcome::invalid(Issue::warning(location, message))
    }
}

/// Fails with [`Severity::Info`] when `holds` is `false`.
pub fn could_be(holds: bool, location: Location, message: impl Into<String>) -> Outcome<()> {
    if holds {
        Outcome::ok()
    } else {
        Outcome::invalid(Issue::info(location, message))
    }
}

/// Fatal unless `candidate` is a member of `refs` -- the cross-reference
/// check every Fatal "ref resolves" rule is built from.
pub fn in_set(candidate: &str, refs: &HashSet<String>, location: Location, message: impl Into<String>) -> Outcome<()> {
    must_be_fatal(refs.contains(candidate), location, message)
}

/// Fatal unless `candidate == expected` -- used where a single reference is
/// checked rather than set membership (e.g. `Specimen.icd10` against one
/// diagnosis at a time before folding into `orElse` across all diagnoses).
pub fn matches_equal(candidate: &str, expected: &str, location: Location, message: impl Into<String>) -> Outcome<()> {
    must_be_fatal(candidate == expected, location, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::new("Test", "x", "attr")
    }

    #[test]
    fn in_set_fails_fatal_on_miss() {
        let refs: HashSet<String> = ["a".to_string()].into_iter().collect();
        let outcome = in_set("b", &refs, loc(), "missing");
        assert_eq!(outcome.issues()[0].severity, Severity::Fatal);
    }

    #[test]
    fn in_set_passes_on_hit() {
        let refs: HashSet<String> = ["a".to_string()].into_iter().collect();
        assert!(in_set("a", &refs, loc(), "missing").is_valid());
    }
}
