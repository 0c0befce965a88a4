//! AC steady-state frequency-sweep analysis.
//!
//! Each sweep point is an independent pure function of (netlist,
//! frequency): the complex MNA system is assembled fresh and solved at
//! every point, and the points run in parallel with results collected
//! back in ascending frequency order.

use std::f64::consts::PI;

use nalgebra::DVector;
use num_complex::Complex;
use phasor_core::{Netlist, NodeId};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::linear::solve_dense;

/// Frequency spacing of an AC sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepSpacing {
    /// Equal steps in frequency.
    Linear,
    /// Equal steps in log10(frequency), for Bode-style sweeps.
    Logarithmic,
}

/// AC sweep parameters, validated at construction.
#[derive(Debug, Clone)]
pub struct SweepParams {
    fstart: f64,
    fstop: f64,
    num_points: usize,
    spacing: SweepSpacing,
}

impl SweepParams {
    /// Create sweep parameters.
    ///
    /// Requires `num_points >= 1` (>= 2 for logarithmic spacing),
    /// `0 < fstart <= fstop`.
    pub fn new(
        fstart: f64,
        fstop: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> Result<Self> {
        if num_points == 0 {
            return Err(Error::InvalidSweepParameters(
                "number of points must be positive".into(),
            ));
        }
        if !fstart.is_finite() || !fstop.is_finite() || fstart <= 0.0 {
            return Err(Error::InvalidSweepParameters(format!(
                "frequency bounds must be positive and finite, got {fstart}..{fstop}"
            )));
        }
        if fstart > fstop {
            return Err(Error::InvalidSweepParameters(format!(
                "start frequency {fstart} Hz exceeds stop frequency {fstop} Hz"
            )));
        }
        if spacing == SweepSpacing::Logarithmic && num_points < 2 {
            return Err(Error::InvalidSweepParameters(
                "logarithmic spacing needs at least 2 points".into(),
            ));
        }
        Ok(Self {
            fstart,
            fstop,
            num_points,
            spacing,
        })
    }

    /// Start frequency in Hz.
    pub fn fstart(&self) -> f64 {
        self.fstart
    }

    /// Stop frequency in Hz.
    pub fn fstop(&self) -> f64 {
        self.fstop
    }

    /// Number of sweep points.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Spacing mode.
    pub fn spacing(&self) -> SweepSpacing {
        self.spacing
    }

    /// The frequency grid, ascending.
    pub fn frequencies(&self) -> Vec<f64> {
        if self.num_points == 1 {
            return vec![self.fstart];
        }
        let n = (self.num_points - 1) as f64;
        match self.spacing {
            SweepSpacing::Linear => {
                let step = (self.fstop - self.fstart) / n;
                (0..self.num_points)
                    .map(|i| self.fstart + step * i as f64)
                    .collect()
            }
            SweepSpacing::Logarithmic => {
                let step = (self.fstop / self.fstart).log10() / n;
                (0..self.num_points)
                    .map(|i| self.fstart * 10.0_f64.powf(step * i as f64))
                    .collect()
            }
        }
    }
}

/// A single solved frequency point.
#[derive(Debug, Clone)]
pub struct AcPoint {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Complex solution vector: node voltages then branch currents.
    pub solution: DVector<Complex<f64>>,
}

/// Result of an AC sweep: one solved point per frequency, ascending.
///
/// The raw complex solutions are the contract; magnitude and phase are
/// derived views. Phases are in degrees. No normalization by source
/// amplitude is applied.
#[derive(Debug, Clone)]
pub struct AcResult {
    points: Vec<AcPoint>,
    nodes: Vec<NodeId>,
    source_branches: Vec<usize>,
}

impl AcResult {
    /// All frequency values, ascending.
    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }

    /// The solved points.
    pub fn points(&self) -> &[AcPoint] {
        &self.points
    }

    /// Non-ground nodes, in the netlist's first-seen order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of voltage sources.
    pub fn num_sources(&self) -> usize {
        self.source_branches.len()
    }

    fn node_position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    /// Complex voltage at a node across all frequencies.
    pub fn voltage_at(&self, node: NodeId) -> Option<Vec<(f64, Complex<f64>)>> {
        let idx = self.node_position(node)?;
        Some(
            self.points
                .iter()
                .map(|p| (p.frequency, p.solution[idx]))
                .collect(),
        )
    }

    /// Voltage magnitude |V| at a node across all frequencies.
    pub fn magnitude(&self, node: NodeId) -> Option<Vec<(f64, f64)>> {
        let idx = self.node_position(node)?;
        Some(
            self.points
                .iter()
                .map(|p| (p.frequency, p.solution[idx].norm()))
                .collect(),
        )
    }

    /// Voltage magnitude in dB (20·log10|V|) at a node.
    pub fn magnitude_db(&self, node: NodeId) -> Option<Vec<(f64, f64)>> {
        let idx = self.node_position(node)?;
        Some(
            self.points
                .iter()
                .map(|p| (p.frequency, 20.0 * p.solution[idx].norm().log10()))
                .collect(),
        )
    }

    /// Voltage phase in degrees at a node.
    pub fn phase_deg(&self, node: NodeId) -> Option<Vec<(f64, f64)>> {
        let idx = self.node_position(node)?;
        Some(
            self.points
                .iter()
                .map(|p| (p.frequency, p.solution[idx].arg().to_degrees()))
                .collect(),
        )
    }

    /// Complex current through the `k`-th voltage source (insertion
    /// order) across all frequencies.
    pub fn source_current(&self, k: usize) -> Option<Vec<(f64, Complex<f64>)>> {
        let branch = *self.source_branches.get(k)?;
        let num_nodes = self.nodes.len();
        Some(
            self.points
                .iter()
                .map(|p| (p.frequency, p.solution[num_nodes + branch]))
                .collect(),
        )
    }
}

/// Run an AC sweep over a netlist.
///
/// Solves an independent complex MNA system at each frequency. Fails as
/// soon as any point is singular, reporting that frequency; no partial
/// results are returned.
pub fn solve_ac(netlist: &Netlist, params: &SweepParams) -> Result<AcResult> {
    if netlist.elements().is_empty() {
        return Err(Error::SingularSystem { frequency: None });
    }

    let frequencies = params.frequencies();
    log::debug!(
        "ac sweep: {} points, {} to {} Hz, {} unknowns",
        frequencies.len(),
        params.fstart(),
        params.fstop(),
        netlist.num_nodes() + netlist.num_branches()
    );

    // Sweep points share nothing but the read-only netlist.
    let solutions: Vec<Result<DVector<Complex<f64>>>> = frequencies
        .par_iter()
        .map(|&freq| {
            let omega = 2.0 * PI * freq;
            let mna = netlist.assemble_ac(omega);
            solve_dense(mna.matrix(), mna.rhs())
        })
        .collect();

    let mut points = Vec::with_capacity(frequencies.len());
    for (freq, solution) in frequencies.into_iter().zip(solutions) {
        match solution {
            Ok(solution) => points.push(AcPoint {
                frequency: freq,
                solution,
            }),
            Err(Error::SingularSystem { .. }) => {
                return Err(Error::SingularSystem {
                    frequency: Some(freq),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(AcResult {
        points,
        nodes: netlist.nodes().collect(),
        source_branches: netlist.source_branches().to_vec(),
    })
}
