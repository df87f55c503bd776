//! Core domain entities representing the business data model.
//!
//! - [`LinkEntry`] - A persisted short code → link mapping

pub mod link;

pub use link::LinkEntry;
