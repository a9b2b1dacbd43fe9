//! Read-only code-system catalog registry for MTB intake validation.
//!
//! Exposes ICD-10-GM, ICD-O-3 (topography and morphology), ATC and HGNC
//! lookups through [`CatalogRegistry`]. Loading is an external concern: the
//! registry is built once, at process startup, and is required to be present
//! before any validator can run -- absence is a startup error, never a
//! per-request one.

pub mod error;
pub mod loader;
pub mod registry;
pub mod version;

pub use error::CatalogLoadError;
pub use loader::{load_registry, CatalogPaths};
pub use registry::{CatalogRegistry, CatalogRegistryBuilder, InMemoryCatalogRegistry};
pub use version::{CatalogVersion, InvalidVersionSyntax};
