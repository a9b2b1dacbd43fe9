use super::location::Location;
use super::severity::Severity;

/// One validation finding.
///
/// The message text is free-form prose for humans; tests and downstream
/// logic should key off `(severity, location)` only.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
}

impl Issue {
    pub fn new(severity: Severity, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location,
        }
    }

    pub fn fatal(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, location, message)
    }

    pub fn error(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, location, message)
    }

    pub fn warning(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, location, message)
    }

    pub fn info(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, location, message)
    }
}
