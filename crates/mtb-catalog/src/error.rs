use thiserror::Error;

/// Failure constructing a [`crate::CatalogRegistry`] at process startup.
///
/// Catalog loading is required to succeed before a validator can be built;
/// there is no per-request fallback. Callers should treat this as fatal to
/// process startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("catalog source unreadable: {0}")]
    Source(String),

    #[error("catalog entry malformed in {catalog}: {line}")]
    Malformed { catalog: &'static str, line: String },

    #[error("catalog is empty: {0}")]
    Empty(&'static str),
}
