//! Netlist: an append-only circuit description plus the MNA assembler.
//!
//! The builder tracks every distinct non-ground node in first-seen order
//! and assigns branch-current indices to voltage sources and inductors as
//! they are added. Once built, a netlist is read-only; assembly produces
//! a fresh [`MnaSystem`] per call so no state leaks between sweep points.

use indexmap::IndexMap;
use num_complex::Complex;

use crate::element::Element;
use crate::error::Result;
use crate::mna::MnaSystem;
use crate::node::NodeId;

/// A complete circuit ready for analysis.
#[derive(Debug, Default, Clone)]
pub struct Netlist {
    /// Elements in insertion order.
    elements: Vec<Element>,
    /// Dense unknown index per non-ground node, in first-seen order.
    node_index: IndexMap<NodeId, usize>,
    /// Total branch-current unknowns (voltage sources + inductors).
    num_branches: usize,
    /// Branch index of each voltage source, in insertion order.
    source_branches: Vec<usize>,
}

impl Netlist {
    /// Create a new empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resistor between `node_pos` and `node_neg`, value in ohms.
    pub fn add_resistor(&mut self, node_pos: NodeId, node_neg: NodeId, ohms: f64) -> Result<()> {
        let element = Element::resistor(node_pos, node_neg, ohms)?;
        self.push(element);
        Ok(())
    }

    /// Add a capacitor between `node_pos` and `node_neg`, value in farads.
    pub fn add_capacitor(&mut self, node_pos: NodeId, node_neg: NodeId, farads: f64) -> Result<()> {
        let element = Element::capacitor(node_pos, node_neg, farads)?;
        self.push(element);
        Ok(())
    }

    /// Add an inductor between `node_pos` and `node_neg`, value in henries.
    /// Takes the next branch-current index.
    pub fn add_inductor(&mut self, node_pos: NodeId, node_neg: NodeId, henries: f64) -> Result<()> {
        let element = Element::inductor(node_pos, node_neg, henries, self.num_branches)?;
        self.push(element);
        Ok(())
    }

    /// Add an independent voltage source: `V(pos) - V(neg) = amplitude` at
    /// phase `phase_deg` degrees. Takes the next branch-current index; the
    /// branch current it solves for flows from `node_pos` through the
    /// source to `node_neg`.
    pub fn add_voltage_source(
        &mut self,
        node_pos: NodeId,
        node_neg: NodeId,
        amplitude: f64,
        phase_deg: f64,
    ) -> Result<()> {
        let element =
            Element::voltage_source(node_pos, node_neg, amplitude, phase_deg, self.num_branches)?;
        self.source_branches.push(self.num_branches);
        self.push(element);
        Ok(())
    }

    /// Add an independent current source driving `amps` from `node_pos`
    /// through the source to `node_neg`.
    pub fn add_current_source(
        &mut self,
        node_pos: NodeId,
        node_neg: NodeId,
        amps: f64,
    ) -> Result<()> {
        let element = Element::current_source(node_pos, node_neg, amps)?;
        self.push(element);
        Ok(())
    }

    fn push(&mut self, element: Element) {
        let (pos, neg) = element.nodes();
        self.register_node(pos);
        self.register_node(neg);
        self.num_branches += element.num_branch_vars();
        self.elements.push(element);
    }

    fn register_node(&mut self, node: NodeId) {
        if !node.is_ground() && !self.node_index.contains_key(&node) {
            let next = self.node_index.len();
            self.node_index.insert(node, next);
        }
    }

    /// Unknown index of a node, or `None` for ground.
    pub fn node_index(&self, node: NodeId) -> Option<usize> {
        self.node_index.get(&node).copied()
    }

    /// All non-ground nodes, in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_index.keys().copied()
    }

    /// Number of non-ground nodes.
    pub fn num_nodes(&self) -> usize {
        self.node_index.len()
    }

    /// Number of branch-current unknowns (voltage sources + inductors).
    pub fn num_branches(&self) -> usize {
        self.num_branches
    }

    /// Number of independent voltage sources.
    pub fn num_sources(&self) -> usize {
        self.source_branches.len()
    }

    /// Branch index of the `k`-th voltage source (insertion order).
    pub fn source_branch(&self, k: usize) -> Option<usize> {
        self.source_branches.get(k).copied()
    }

    /// Branch indices of all voltage sources, in insertion order.
    pub fn source_branches(&self) -> &[usize] {
        &self.source_branches
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Assemble the real MNA system for the DC operating point.
    ///
    /// DC is a distinguished mode, not ω = 0 substituted into the AC
    /// impedance formulas: capacitors are open circuits (no stamp) and
    /// inductors are zero-valued voltage sources (shorts) occupying their
    /// branch row.
    pub fn assemble_dc(&self) -> MnaSystem<f64> {
        let mut mna = MnaSystem::new(self.num_nodes(), self.num_branches);

        for element in &self.elements {
            match *element {
                Element::Resistor {
                    node_pos,
                    node_neg,
                    resistance,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_admittance(i, j, 1.0 / resistance);
                }
                Element::Capacitor { .. } => {}
                Element::Inductor {
                    node_pos,
                    node_neg,
                    branch,
                    ..
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_branch_voltage(i, j, branch, 0.0);
                }
                Element::VoltageSource {
                    node_pos,
                    node_neg,
                    amplitude,
                    branch,
                    ..
                } => {
                    // Phase is meaningless at DC.
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_branch_voltage(i, j, branch, amplitude);
                }
                Element::CurrentSource {
                    node_pos,
                    node_neg,
                    current,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_current_source(i, j, current);
                }
            }
        }

        mna
    }

    /// Assemble the complex MNA system at angular frequency `omega` = 2πf.
    ///
    /// Inductors use the branch formulation `V(pos) - V(neg) = jωL·I`,
    /// which matches their DC short-circuit stamp at ω = 0 and keeps the
    /// system the same shape in both modes.
    pub fn assemble_ac(&self, omega: f64) -> MnaSystem<Complex<f64>> {
        let mut mna = MnaSystem::new(self.num_nodes(), self.num_branches);

        for element in &self.elements {
            match *element {
                Element::Resistor {
                    node_pos,
                    node_neg,
                    resistance,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_admittance(i, j, Complex::new(1.0 / resistance, 0.0));
                }
                Element::Capacitor {
                    node_pos,
                    node_neg,
                    capacitance,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_admittance(i, j, Complex::new(0.0, omega * capacitance));
                }
                Element::Inductor {
                    node_pos,
                    node_neg,
                    inductance,
                    branch,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_branch_voltage(i, j, branch, Complex::new(0.0, 0.0));
                    mna.stamp_branch_impedance(branch, Complex::new(0.0, omega * inductance));
                }
                Element::VoltageSource {
                    node_pos,
                    node_neg,
                    amplitude,
                    phase_deg,
                    branch,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    let phasor = Complex::from_polar(amplitude, phase_deg.to_radians());
                    mna.stamp_branch_voltage(i, j, branch, phasor);
                }
                Element::CurrentSource {
                    node_pos,
                    node_neg,
                    current,
                } => {
                    let (i, j) = self.terminal_indices(node_pos, node_neg);
                    mna.stamp_current_source(i, j, Complex::new(current, 0.0));
                }
            }
        }

        mna
    }

    fn terminal_indices(&self, pos: NodeId, neg: NodeId) -> (Option<usize>, Option<usize>) {
        (self.node_index(pos), self.node_index(neg))
    }
}
