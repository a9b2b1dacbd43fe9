//! One validator per entity kind, each a pure function of
//! `(&entity, &ReferenceContext, ..)` to an [`crate::kernel::Outcome`].
//! Dispatch by kind is a closed set of free functions rather than a trait,
//! favoring that over ad-hoc polymorphism in a systems language.

pub mod care_plan;
pub mod claim;
pub mod codings;
pub mod diagnosis;
pub mod ecog;
pub mod guideline_therapy;
pub mod histology;
pub mod ngs;
pub mod patient;
pub mod requests;
pub mod specimen;
pub mod therapy;
