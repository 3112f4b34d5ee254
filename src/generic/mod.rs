//! Generic structures, independent of the solver.

pub mod ceiling;
pub mod minimal_pcg;
