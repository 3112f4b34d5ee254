//! Various procedures for mutating a formula.
//!
//! For the most part these are methods accessed via a formula, and primarily placed here for documentation.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod schedulers;
pub mod solve;
