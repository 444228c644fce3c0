//! psymetric-storage
//!
//! In-process storage for scales, administrations and results, and the
//! versioned JSON catalog that seeds reference data.

pub mod catalog;
pub mod error;
pub mod memory;
