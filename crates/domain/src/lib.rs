//! # staffdir-domain
//!
//! Pure domain model for the staffdir client suite.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Location** records as the staff-directory service serves them
//! - Define the **sort model** (field enumeration, direction, comparator)
//! - Contain all invariant enforcement and payload-cleaning logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod location;
pub mod sort;
pub mod time;
