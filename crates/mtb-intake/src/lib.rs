//! The intake decision pipeline: converts a validation outcome into
//! rejection, staging, or forwarding.
//!
//! This crate is the asynchronous outer ring around the pure, synchronous
//! `mtb-validation` kernel. Its two external collaborators -- the staging
//! store and the downstream query service -- are behind `async_trait`
//! traits so callers can supply fakes in tests and real backends (SQLite,
//! HTTP) in production.

pub mod command;
pub mod error;
pub mod pipeline;
pub mod query_service;
pub mod sqlite;
pub mod staging;

pub use command::{IntakeCommand, IntakeOutcome};
pub use error::{IntakeError, QueryServiceError, StagingError};
pub use pipeline::IntakePipeline;
pub use query_service::{HttpQueryService, QueryService};
pub use sqlite::SqliteStagingStore;
pub use staging::StagingStore;
