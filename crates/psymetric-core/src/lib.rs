//! psymetric-core
//!
//! Pure domain types for psychometric scale administration and scoring.
//! No storage or HTTP dependency. This is the shared vocabulary of the
//! Psymetric system.

pub mod error;
pub mod models;

/// Subscale key used for items without a subscale tag and for the
/// synthetic whole-scale total.
pub const TOTAL: &str = "total";

/// Text shown wherever a normative comparison or cut-point band is missing.
pub const NOT_AVAILABLE: &str = "interpretation not available";
