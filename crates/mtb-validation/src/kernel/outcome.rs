use super::issue::Issue;

/// The result of validating a value `T`: either it is `Valid`, or it is
/// `Invalid` with a non-empty list of [`Issue`]s.
///
/// Outcomes compose by accumulation rather than short-circuiting: combining
/// two outcomes concatenates their issue lists (left then right) and only
/// reconstructs a value when every constituent was `Valid`.
#[derive(Clone, Debug)]
pub enum Outcome<T> {
    Valid(T),
    Invalid(Vec<Issue>),
}

impl<T> Outcome<T> {
    pub fn valid(value: T) -> Self {
        Outcome::Valid(value)
    }

    pub fn invalid(issue: Issue) -> Self {
        Outcome::Invalid(vec![issue])
    }

    pub fn invalid_many(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty(), "Invalid outcome must carry at least one issue");
        Outcome::Invalid(issues)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    pub fn issues(&self) -> &[Issue] {
        match self {
            Outcome::Valid(_) => &[],
            Outcome::Invalid(issues) => issues,
        }
    }

    pub fn into_issues(self) -> Vec<Issue> {
        match self {
            Outcome::Valid(_) => Vec::new(),
            Outcome::Invalid(issues) => issues,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Valid(v) => Some(v),
            Outcome::Invalid(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Valid(t) => Outcome::Valid(f(t)),
            Outcome::Invalid(issues) => Outcome::Invalid(issues),
        }
    }

    /// Runs `f` only if `self` succeeded -- for steps that depend on a
    /// prerequisite being valid/defined (e.g. a coding's code can only be
    /// checked against the catalog once its version has been confirmed).
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Valid(t) => f(t),
            Outcome::Invalid(issues) => Outcome::Invalid(issues),
        }
    }

    /// Succeeds if either `self` or `fallback()` succeeds; if both fail,
    /// concatenates their issues.
    pub fn or_else(self, fallback: impl FnOnce() -> Outcome<T>) -> Outcome<T> {
        match self {
            Outcome::Valid(t) => Outcome::Valid(t),
            Outcome::Invalid(mut issues) => match fallback() {
                Outcome::Valid(t) => Outcome::Valid(t),
                Outcome::Invalid(more) => {
                    issues.extend(more);
                    Outcome::Invalid(issues)
                }
            },
        }
    }

    /// Accumulates `other` alongside `self`, concatenating issues
    /// left-then-right and pairing values only if both are valid.
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Outcome::Valid(a), Outcome::Valid(b)) => Outcome::Valid((a, b)),
            (a, b) => {
                let mut issues = a.into_issues();
                issues.extend(b.into_issues());
                Outcome::Invalid(issues)
            }
        }
    }
}

impl Outcome<()> {
    /// The always-successful unit outcome, the identity element for
    /// [`accumulate`].
    pub fn ok() -> Self {
        Outcome::Valid(())
    }

    /// Runs `other` regardless of whether `self` succeeded, concatenating
    /// any issues from both. Used to chain a sequence of independent
    /// `Outcome<()>` checks within one entity validator.
    pub fn then(self, other: Outcome<()>) -> Outcome<()> {
        let mut issues = self.into_issues();
        issues.extend(other.into_issues());
        if issues.is_empty() {
            Outcome::Valid(())
        } else {
            Outcome::Invalid(issues)
        }
    }
}

/// Accumulates a sequence of independent `Outcome<()>` checks into one,
/// concatenating issues in order. This is the workhorse combinator every
/// entity validator in `crate::entities` is built from.
pub fn accumulate(outcomes: impl IntoIterator<Item = Outcome<()>>) -> Outcome<()> {
    let mut issues = Vec::new();
    for outcome in outcomes {
        issues.extend(outcome.into_issues());
    }
    if issues.is_empty() {
        Outcome::Valid(())
    } else {
        Outcome::Invalid(issues)
    }
}

/// Applies `validate` to every element of `items`, accumulating all issues
/// in input order.
pub fn validate_each<T>(items: &[T], validate: impl Fn(&T) -> Outcome<()>) -> Outcome<()> {
    accumulate(items.iter().map(validate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::location::Location;

    fn loc() -> Location {
        Location::new("Test", "x", "attr")
    }

    #[test]
    fn accumulate_concatenates_in_order() {
        let a = Outcome::invalid(Issue::error(loc(), "a"));
        let b = Outcome::ok();
        let c = Outcome::invalid(Issue::warning(loc(), "c"));
        let combined = accumulate([a, b, c]);
        let issues = combined.into_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "a");
        assert_eq!(issues[1].message, "c");
    }

    #[test]
    fn and_then_skips_when_invalid() {
        let mut ran = false;
        let outcome: Outcome<i32> = Outcome::invalid(Issue::error(loc(), "bad"));
        let result = outcome.and_then(|v| {
            ran = true;
            Outcome::valid(v + 1)
        });
        assert!(!ran);
        assert!(!result.is_valid());
    }

    #[test]
    fn or_else_concatenates_only_when_both_fail() {
        let a: Outcome<i32> = Outcome::invalid(Issue::error(loc(), "a"));
        let ok = a.clone().or_else(|| Outcome::valid(1));
        assert!(ok.is_valid());

        let both_fail = a.or_else(|| Outcome::invalid(Issue::error(loc(), "b")));
        assert_eq!(both_fail.into_issues().len(), 2);
    }
}
