//! High-level analysis front ends.
//!
//! [`LinearDcAnalysis`] and [`LinearAcSweep`] bundle a netlist builder
//! with the matching solve call, taking raw `u32` node ids (node 0 is
//! ground). This is the surface driver code is expected to use; the
//! lower-level [`Netlist`]/[`solve_dc`]/[`solve_ac`] API stays available
//! for callers that want to reuse one netlist across analyses.

use phasor_core::{Netlist, NodeId};

use crate::ac::{AcResult, SweepParams, SweepSpacing, solve_ac};
use crate::dc::{DcSolution, solve_dc};
use crate::error::Result;

macro_rules! builder_methods {
    () => {
        /// Add a resistor between nodes `node_pos` and `node_neg`, value in ohms.
        pub fn add_resistor(&mut self, node_pos: u32, node_neg: u32, ohms: f64) -> Result<()> {
            self.netlist
                .add_resistor(NodeId::new(node_pos), NodeId::new(node_neg), ohms)?;
            Ok(())
        }

        /// Add a capacitor, value in farads.
        pub fn add_capacitor(&mut self, node_pos: u32, node_neg: u32, farads: f64) -> Result<()> {
            self.netlist
                .add_capacitor(NodeId::new(node_pos), NodeId::new(node_neg), farads)?;
            Ok(())
        }

        /// Add an inductor, value in henries.
        pub fn add_inductor(&mut self, node_pos: u32, node_neg: u32, henries: f64) -> Result<()> {
            self.netlist
                .add_inductor(NodeId::new(node_pos), NodeId::new(node_neg), henries)?;
            Ok(())
        }

        /// Add an independent voltage source: amplitude in volts, phase in
        /// degrees (ignored at DC).
        pub fn add_independent_voltage_source(
            &mut self,
            node_pos: u32,
            node_neg: u32,
            amplitude: f64,
            phase_deg: f64,
        ) -> Result<()> {
            self.netlist.add_voltage_source(
                NodeId::new(node_pos),
                NodeId::new(node_neg),
                amplitude,
                phase_deg,
            )?;
            Ok(())
        }

        /// Add an independent current source, value in amperes.
        pub fn add_independent_current_source(
            &mut self,
            node_pos: u32,
            node_neg: u32,
            amps: f64,
        ) -> Result<()> {
            self.netlist
                .add_current_source(NodeId::new(node_pos), NodeId::new(node_neg), amps)?;
            Ok(())
        }

        /// The accumulated netlist.
        pub fn netlist(&self) -> &Netlist {
            &self.netlist
        }
    };
}

/// DC operating point analysis with an embedded netlist builder.
#[derive(Debug, Default, Clone)]
pub struct LinearDcAnalysis {
    netlist: Netlist,
}

impl LinearDcAnalysis {
    /// Create an empty DC analysis.
    pub fn new() -> Self {
        Self::default()
    }

    builder_methods!();

    /// Solve the DC operating point.
    pub fn solve(&self) -> Result<DcSolution> {
        solve_dc(&self.netlist)
    }
}

/// AC frequency-sweep analysis with an embedded netlist builder.
#[derive(Debug, Clone)]
pub struct LinearAcSweep {
    netlist: Netlist,
    params: SweepParams,
}

impl LinearAcSweep {
    /// Create a linearly spaced sweep from `fstart` to `fstop` Hz with
    /// `num_points` points.
    pub fn new(fstart: f64, fstop: f64, num_points: usize) -> Result<Self> {
        Ok(Self {
            netlist: Netlist::new(),
            params: SweepParams::new(fstart, fstop, num_points, SweepSpacing::Linear)?,
        })
    }

    /// Create a logarithmically spaced sweep (equal steps in log10 f).
    pub fn logarithmic(fstart: f64, fstop: f64, num_points: usize) -> Result<Self> {
        Ok(Self {
            netlist: Netlist::new(),
            params: SweepParams::new(fstart, fstop, num_points, SweepSpacing::Logarithmic)?,
        })
    }

    builder_methods!();

    /// The sweep parameters.
    pub fn params(&self) -> &SweepParams {
        &self.params
    }

    /// Run the sweep.
    pub fn solve(&self) -> Result<AcResult> {
        solve_ac(&self.netlist, &self.params)
    }
}
