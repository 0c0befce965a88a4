//! DC operating point analysis.

use nalgebra::DVector;
use phasor_core::{Netlist, NodeId};

use crate::error::Result;
use crate::linear::solve_dense;

/// Result of a DC operating point analysis.
///
/// Node ordering follows the netlist's first-seen order; source ordering
/// follows insertion order. Ground is implicitly 0 V and not stored.
#[derive(Debug, Clone)]
pub struct DcSolution {
    nodes: Vec<NodeId>,
    node_voltages: DVector<f64>,
    branch_currents: DVector<f64>,
    source_branches: Vec<usize>,
}

impl DcSolution {
    /// Voltage at a node. Ground reads 0; a node the netlist never used
    /// reads `None`.
    pub fn voltage(&self, node: NodeId) -> Option<f64> {
        if node.is_ground() {
            return Some(0.0);
        }
        self.nodes
            .iter()
            .position(|&n| n == node)
            .map(|idx| self.node_voltages[idx])
    }

    /// All node voltages as `(node, volts)` pairs, in first-seen order.
    pub fn voltages(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.nodes
            .iter()
            .zip(self.node_voltages.iter())
            .map(|(&n, &v)| (n, v))
    }

    /// Current through the `k`-th voltage source (insertion order),
    /// flowing from its positive terminal through the source.
    pub fn source_current(&self, k: usize) -> Option<f64> {
        self.source_branches
            .get(k)
            .map(|&b| self.branch_currents[b])
    }

    /// Currents through all voltage sources, in insertion order.
    pub fn source_currents(&self) -> Vec<f64> {
        self.source_branches
            .iter()
            .map(|&b| self.branch_currents[b])
            .collect()
    }

    /// Voltage difference `V(pos) - V(neg)`.
    pub fn voltage_diff(&self, node_pos: NodeId, node_neg: NodeId) -> Option<f64> {
        Some(self.voltage(node_pos)? - self.voltage(node_neg)?)
    }
}

/// Solve the DC operating point of a netlist.
///
/// Assembles the real MNA system (capacitors open, inductors short) and
/// solves it once. Fails with [`crate::Error::SingularSystem`] for an
/// empty or electrically ill-formed netlist.
pub fn solve_dc(netlist: &Netlist) -> Result<DcSolution> {
    if netlist.elements().is_empty() {
        return Err(crate::Error::SingularSystem { frequency: None });
    }

    let mna = netlist.assemble_dc();
    log::debug!(
        "dc operating point: {} nodes, {} branches",
        mna.num_nodes(),
        mna.num_branches()
    );

    let solution = solve_dense(mna.matrix(), mna.rhs())?;

    let num_nodes = mna.num_nodes();
    let node_voltages = DVector::from_iterator(num_nodes, solution.iter().take(num_nodes).copied());
    let branch_currents = DVector::from_iterator(
        mna.num_branches(),
        solution.iter().skip(num_nodes).copied(),
    );

    Ok(DcSolution {
        nodes: netlist.nodes().collect(),
        node_voltages,
        branch_currents,
        source_branches: netlist.source_branches().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_voltage_divider() {
        // V1 = 10V at node 1; R1 = R2 = 1k
        //
        //  V1(+) --- node1 --- R1 --- node2 --- R2 --- GND
        //   |                                          |
        //  GND ----------------------------------------+
        let mut netlist = Netlist::new();
        netlist
            .add_voltage_source(NodeId::new(1), NodeId::GROUND, 10.0, 0.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(1), NodeId::new(2), 1000.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(2), NodeId::GROUND, 1000.0)
            .unwrap();

        let solution = solve_dc(&netlist).unwrap();

        assert!((solution.voltage(NodeId::new(1)).unwrap() - 10.0).abs() < 1e-10);
        assert!((solution.voltage(NodeId::new(2)).unwrap() - 5.0).abs() < 1e-10);
        // 5mA flows around the loop, out of the source's negative terminal,
        // so the branch current through V1 is -5mA.
        assert!((solution.source_current(0).unwrap() + 0.005).abs() < 1e-10);
    }

    #[test]
    fn test_capacitor_open_at_dc() {
        // V --- R --- node2 --- C --- GND: no DC path, so no current and
        // the full source voltage appears across the capacitor.
        let mut netlist = Netlist::new();
        netlist
            .add_voltage_source(NodeId::new(1), NodeId::GROUND, 5.0, 0.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(1), NodeId::new(2), 1000.0)
            .unwrap();
        netlist
            .add_capacitor(NodeId::new(2), NodeId::GROUND, 100e-9)
            .unwrap();

        let solution = solve_dc(&netlist).unwrap();

        assert!((solution.source_current(0).unwrap()).abs() < 1e-12);
        assert!((solution.voltage(NodeId::new(2)).unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_inductor_short_at_dc() {
        // Divider with the lower resistor replaced by an inductor: node 2
        // is shorted to ground, so all the source voltage drops across R.
        let mut netlist = Netlist::new();
        netlist
            .add_voltage_source(NodeId::new(1), NodeId::GROUND, 5.0, 0.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(1), NodeId::new(2), 1000.0)
            .unwrap();
        netlist
            .add_inductor(NodeId::new(2), NodeId::GROUND, 30e-6)
            .unwrap();

        let solution = solve_dc(&netlist).unwrap();

        assert!(solution.voltage(NodeId::new(2)).unwrap().abs() < 1e-10);
        assert!((solution.source_current(0).unwrap() + 0.005).abs() < 1e-10);
    }

    #[test]
    fn test_current_source() {
        // 10mA into node 1 through 1k to ground: V(1) = 10V
        let mut netlist = Netlist::new();
        netlist
            .add_current_source(NodeId::GROUND, NodeId::new(1), 0.010)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(1), NodeId::GROUND, 1000.0)
            .unwrap();

        let solution = solve_dc(&netlist).unwrap();
        assert!((solution.voltage(NodeId::new(1)).unwrap() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_floating_node_is_singular() {
        // Node 2 connects only to node 3, and neither has a path to
        // ground: the system has no unique solution.
        let mut netlist = Netlist::new();
        netlist
            .add_voltage_source(NodeId::new(1), NodeId::GROUND, 5.0, 0.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(1), NodeId::GROUND, 100.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(2), NodeId::new(3), 100.0)
            .unwrap();

        let result = solve_dc(&netlist);
        assert!(matches!(result, Err(Error::SingularSystem { .. })));
    }

    #[test]
    fn test_empty_netlist_is_singular() {
        let netlist = Netlist::new();
        let result = solve_dc(&netlist);
        assert!(matches!(result, Err(Error::SingularSystem { .. })));
    }

    #[test]
    fn test_node_set_round_trip() {
        let mut netlist = Netlist::new();
        netlist
            .add_voltage_source(NodeId::new(4), NodeId::GROUND, 1.0, 0.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(4), NodeId::new(9), 50.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(9), NodeId::GROUND, 50.0)
            .unwrap();

        let solution = solve_dc(&netlist).unwrap();
        let nodes: Vec<u32> = solution.voltages().map(|(n, _)| n.as_u32()).collect();
        assert_eq!(nodes, vec![4, 9]);
        assert_eq!(solution.voltage(NodeId::new(2)), None);
        assert_eq!(solution.voltage(NodeId::GROUND), Some(0.0));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let mut netlist = Netlist::new();
        netlist
            .add_voltage_source(NodeId::new(1), NodeId::GROUND, 3.3, 0.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(1), NodeId::new(2), 220.0)
            .unwrap();
        netlist
            .add_resistor(NodeId::new(2), NodeId::GROUND, 330.0)
            .unwrap();

        let a = solve_dc(&netlist).unwrap();
        let b = solve_dc(&netlist).unwrap();
        assert_eq!(
            a.voltage(NodeId::new(2)).unwrap(),
            b.voltage(NodeId::new(2)).unwrap()
        );
        assert_eq!(a.source_current(0).unwrap(), b.source_current(0).unwrap());
    }
}
