//! Accumulating validation kernel, per-entity validators, and the file
//! validator for MTB intake files.
//!
//! The entry point is [`validate_file`]: given an `MtbFile`, a
//! [`mtb_catalog::CatalogRegistry`] and an injected "now", it returns either
//! the file itself (valid) or an accumulated, non-empty list of issues. Every
//! validator in this crate is a pure function -- no I/O, no shared mutable
//! state, no short-circuiting except where one check's result gates another
//! (an `and_then`-shaped dependency).

pub mod context;
pub mod entities;
pub mod file;
pub mod kernel;
pub mod report;

pub use context::ReferenceContext;
pub use file::validate_file;
pub use report::DataQualityReport;
