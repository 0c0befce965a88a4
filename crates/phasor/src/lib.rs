//! # phasor
//!
//! Steady-state analysis of linear circuits via Modified Nodal Analysis:
//! a DC operating point, or an AC sweep solving an independent complex
//! system at each frequency.
//!
//! Supported elements: resistors, capacitors, inductors, independent
//! voltage and current sources. Node 0 is always ground. Source phases
//! and reported phases are in degrees.
//!
//! ## Quick start
//!
//! ```rust
//! use phasor::prelude::*;
//!
//! // 5V source into a 100Ω + 100Ω divider
//! let mut dc = LinearDcAnalysis::new();
//! dc.add_resistor(1, 0, 100.0).unwrap();
//! dc.add_resistor(2, 1, 100.0).unwrap();
//! dc.add_independent_voltage_source(2, 0, 5.0, 0.0).unwrap();
//!
//! let solution = dc.solve().unwrap();
//! assert!((solution.voltage(NodeId::new(1)).unwrap() - 2.5).abs() < 1e-10);
//! ```
//!
//! ## AC sweeps
//!
//! ```rust
//! use phasor::prelude::*;
//!
//! // RC low-pass, swept over 5 decades
//! let mut ac = LinearAcSweep::logarithmic(10.0, 1e6, 101).unwrap();
//! ac.add_independent_voltage_source(1, 0, 1.0, 0.0).unwrap();
//! ac.add_resistor(1, 2, 1000.0).unwrap();
//! ac.add_capacitor(2, 0, 100e-9).unwrap();
//!
//! let result = ac.solve().unwrap();
//! let magnitude = result.magnitude(NodeId::new(2)).unwrap();
//! assert_eq!(magnitude.len(), 101);
//! ```

pub use phasor_core as core;
pub use phasor_solver as solver;

pub use phasor_core::{Element, Error as CoreError, MnaSystem, Netlist, NodeId};

pub use phasor_solver::{
    AcPoint, AcResult, DcSolution, Error as SolverError, LinearAcSweep, LinearDcAnalysis,
    SweepParams, SweepSpacing, solve_ac, solve_dc, solve_dense,
};

/// Re-export of nalgebra's dynamic vector type.
pub use nalgebra::DVector;

/// Re-export of nalgebra's dynamic matrix type.
pub use nalgebra::DMatrix;

/// Re-export of num_complex's Complex type.
pub use num_complex::Complex;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::{
        AcResult, Complex, DcSolution, LinearAcSweep, LinearDcAnalysis, Netlist, NodeId,
        SweepParams, SweepSpacing, solve_ac, solve_dc,
    };
}
