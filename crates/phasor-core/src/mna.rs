//! Modified Nodal Analysis (MNA) system, generic over the scalar field.
//!
//! The system is Ax = b where rows/columns `0..num_nodes` are node
//! voltages and `num_nodes..size` are auxiliary branch currents (voltage
//! sources and inductors). Instantiated at `f64` for DC and
//! `Complex<f64>` for AC; the stamps are identical in both fields.
//!
//! Ground (node 0) has no row or column; stamps take `Option<usize>`
//! indices and skip `None` entries.

use nalgebra::{ComplexField, DMatrix, DVector};
use num_traits::{One, Zero};

/// MNA system: square coefficient matrix plus right-hand side.
///
/// Rebuilt fresh for every solve; never mutated incrementally across
/// sweep points.
#[derive(Debug, Clone)]
pub struct MnaSystem<T: ComplexField> {
    matrix: DMatrix<T>,
    rhs: DVector<T>,
    num_nodes: usize,
    num_branches: usize,
}

impl<T: ComplexField> MnaSystem<T> {
    /// Create a zeroed system for `num_nodes` non-ground nodes and
    /// `num_branches` auxiliary current unknowns.
    pub fn new(num_nodes: usize, num_branches: usize) -> Self {
        let size = num_nodes + num_branches;
        Self {
            matrix: DMatrix::zeros(size, size),
            rhs: DVector::zeros(size),
            num_nodes,
            num_branches,
        }
    }

    /// Total size of the system (nodes + branch currents).
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_branches
    }

    /// Number of non-ground nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of auxiliary branch-current unknowns.
    pub fn num_branches(&self) -> usize {
        self.num_branches
    }

    /// Get a reference to the coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Get a reference to the RHS vector.
    pub fn rhs(&self) -> &DVector<T> {
        &self.rhs
    }

    /// Stamp an admittance `y` between two nodes:
    ///   A[i,i] += y,  A[j,j] += y,  A[i,j] -= y,  A[j,i] -= y
    pub fn stamp_admittance(&mut self, node_i: Option<usize>, node_j: Option<usize>, y: T) {
        if let Some(i) = node_i {
            self.matrix[(i, i)] += y.clone();
        }
        if let Some(j) = node_j {
            self.matrix[(j, j)] += y.clone();
        }
        if let (Some(i), Some(j)) = (node_i, node_j) {
            self.matrix[(i, j)] -= y.clone();
            self.matrix[(j, i)] -= y;
        }
    }

    /// Stamp a current source driving current from `node_pos` through the
    /// source to `node_neg` (i.e. injecting into the external circuit at
    /// `node_neg`).
    pub fn stamp_current_source(
        &mut self,
        node_pos: Option<usize>,
        node_neg: Option<usize>,
        current: T,
    ) {
        if let Some(i) = node_pos {
            self.rhs[i] -= current.clone();
        }
        if let Some(j) = node_neg {
            self.rhs[j] += current;
        }
    }

    /// Stamp the branch constraint `V(pos) - V(neg) = value` for branch
    /// index `branch` (0-based, offset from the node block):
    /// ±1 coupling in the B and C blocks plus the RHS entry.
    ///
    /// Used for voltage sources (`value` = source voltage) and for
    /// inductors (`value` = 0, with the impedance added separately via
    /// [`stamp_branch_impedance`](Self::stamp_branch_impedance)).
    pub fn stamp_branch_voltage(
        &mut self,
        node_pos: Option<usize>,
        node_neg: Option<usize>,
        branch: usize,
        value: T,
    ) {
        let bi = self.num_nodes + branch;
        let one = T::one();

        if let Some(p) = node_pos {
            self.matrix[(p, bi)] += one.clone();
            self.matrix[(bi, p)] += one.clone();
        }
        if let Some(n) = node_neg {
            self.matrix[(n, bi)] -= one.clone();
            self.matrix[(bi, n)] -= one;
        }
        self.rhs[bi] += value;
    }

    /// Add a series impedance `z` to a branch equation, turning the
    /// constraint into `V(pos) - V(neg) - z*I_branch = 0`.
    pub fn stamp_branch_impedance(&mut self, branch: usize, z: T) {
        let bi = self.num_nodes + branch;
        self.matrix[(bi, bi)] -= z;
    }

    /// True if every matrix and RHS entry is zero (no element stamped).
    pub fn is_empty(&self) -> bool {
        self.matrix.iter().all(|v| v.is_zero()) && self.rhs.iter().all(|v| v.is_zero())
    }
}
