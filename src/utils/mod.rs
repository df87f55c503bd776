//! Utility functions for code generation and database error inspection.
//!
//! - [`code_generator`] - Short code fingerprinting and salt perturbation
//! - [`db_error`] - Classification of SQLx errors

pub mod code_generator;
pub mod db_error;
