//! Data structures representing subatomic particles and their collections.
//!
//! - [`particle`] - A single particle record with classification and derived fields
//! - [`quark`] - Quark flavors and expanded hadron composition
//! - [`repository`] - The loaded, indexed, queryable particle collection

pub mod particle;
pub mod quark;
pub mod repository;
