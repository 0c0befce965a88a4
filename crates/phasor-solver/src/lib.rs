//! DC and AC steady-state analysis for phasor.
//!
//! This crate provides:
//! - A dense LU linear solve, generic over real and complex scalars
//! - DC operating point analysis (capacitors open, inductors short)
//! - AC frequency sweeps with linear or logarithmic spacing, solved in
//!   parallel across frequency points
//! - High-level [`LinearDcAnalysis`] / [`LinearAcSweep`] front ends

pub mod ac;
pub mod analysis;
pub mod dc;
pub mod error;
pub mod linear;

pub use ac::{AcPoint, AcResult, SweepParams, SweepSpacing, solve_ac};
pub use analysis::{LinearAcSweep, LinearDcAnalysis};
pub use dc::{DcSolution, solve_dc};
pub use error::{Error, Result};
pub use linear::solve_dense;
