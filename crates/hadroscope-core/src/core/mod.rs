//! # Core Module
//!
//! Fundamental data structures for the particle reference browser: the typed
//! particle model with its derived classification fields, the repository that
//! loads and indexes particle records, and the static property catalog that
//! describes which physical quantities exist and how they may be encoded.
//!
//! Everything in this layer is read-only after construction and carries no
//! presentation state.

pub mod catalog;
pub mod io;
pub mod models;
