//! The element model: a tagged variant per device kind.
//!
//! Constructors validate terminals and values, so a constructed `Element`
//! is always well-formed. Stamping behavior lives in the netlist assembler,
//! which matches exhaustively on this enum.

use crate::error::{Error, Result};
use crate::node::NodeId;

/// A linear, time-invariant two-terminal circuit element.
///
/// Voltage sources and inductors carry a branch index: the index of the
/// auxiliary current unknown they contribute to the MNA system. Source
/// phases are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Fixed resistor, value in ohms.
    Resistor {
        node_pos: NodeId,
        node_neg: NodeId,
        resistance: f64,
    },
    /// Fixed capacitor, value in farads. Open circuit at DC.
    Capacitor {
        node_pos: NodeId,
        node_neg: NodeId,
        capacitance: f64,
    },
    /// Fixed inductor, value in henries. Short circuit at DC.
    Inductor {
        node_pos: NodeId,
        node_neg: NodeId,
        inductance: f64,
        branch: usize,
    },
    /// Independent voltage source: amplitude in volts, phase in degrees.
    VoltageSource {
        node_pos: NodeId,
        node_neg: NodeId,
        amplitude: f64,
        phase_deg: f64,
        branch: usize,
    },
    /// Independent current source, amplitude in amperes, flowing from
    /// `node_pos` through the source to `node_neg`.
    CurrentSource {
        node_pos: NodeId,
        node_neg: NodeId,
        current: f64,
    },
}

fn check_terminals(kind: &str, node_pos: NodeId, node_neg: NodeId) -> Result<()> {
    if node_pos == node_neg {
        return Err(Error::InvalidElement(format!(
            "{kind} has both terminals on node {node_pos}"
        )));
    }
    Ok(())
}

fn check_positive(kind: &str, what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidElement(format!(
            "{kind} {what} must be positive and finite, got {value}"
        )));
    }
    Ok(())
}

impl Element {
    /// Create a resistor. Fails unless `resistance > 0`.
    pub fn resistor(node_pos: NodeId, node_neg: NodeId, resistance: f64) -> Result<Self> {
        check_terminals("resistor", node_pos, node_neg)?;
        check_positive("resistor", "resistance", resistance)?;
        Ok(Element::Resistor {
            node_pos,
            node_neg,
            resistance,
        })
    }

    /// Create a capacitor. Fails unless `capacitance > 0`.
    pub fn capacitor(node_pos: NodeId, node_neg: NodeId, capacitance: f64) -> Result<Self> {
        check_terminals("capacitor", node_pos, node_neg)?;
        check_positive("capacitor", "capacitance", capacitance)?;
        Ok(Element::Capacitor {
            node_pos,
            node_neg,
            capacitance,
        })
    }

    /// Create an inductor with its assigned branch index. Fails unless
    /// `inductance > 0`.
    pub fn inductor(
        node_pos: NodeId,
        node_neg: NodeId,
        inductance: f64,
        branch: usize,
    ) -> Result<Self> {
        check_terminals("inductor", node_pos, node_neg)?;
        check_positive("inductor", "inductance", inductance)?;
        Ok(Element::Inductor {
            node_pos,
            node_neg,
            inductance,
            branch,
        })
    }

    /// Create an independent voltage source with its assigned branch index.
    /// `phase_deg` is the source phase in degrees; it is ignored at DC.
    pub fn voltage_source(
        node_pos: NodeId,
        node_neg: NodeId,
        amplitude: f64,
        phase_deg: f64,
        branch: usize,
    ) -> Result<Self> {
        check_terminals("voltage source", node_pos, node_neg)?;
        if !amplitude.is_finite() || !phase_deg.is_finite() {
            return Err(Error::InvalidElement(format!(
                "voltage source amplitude/phase must be finite, got {amplitude} / {phase_deg}"
            )));
        }
        Ok(Element::VoltageSource {
            node_pos,
            node_neg,
            amplitude,
            phase_deg,
            branch,
        })
    }

    /// Create an independent current source.
    pub fn current_source(node_pos: NodeId, node_neg: NodeId, current: f64) -> Result<Self> {
        check_terminals("current source", node_pos, node_neg)?;
        if !current.is_finite() {
            return Err(Error::InvalidElement(format!(
                "current source value must be finite, got {current}"
            )));
        }
        Ok(Element::CurrentSource {
            node_pos,
            node_neg,
            current,
        })
    }

    /// The terminal nodes of this element, positive first.
    pub fn nodes(&self) -> (NodeId, NodeId) {
        match *self {
            Element::Resistor {
                node_pos, node_neg, ..
            }
            | Element::Capacitor {
                node_pos, node_neg, ..
            }
            | Element::Inductor {
                node_pos, node_neg, ..
            }
            | Element::VoltageSource {
                node_pos, node_neg, ..
            }
            | Element::CurrentSource {
                node_pos, node_neg, ..
            } => (node_pos, node_neg),
        }
    }

    /// Number of auxiliary branch-current unknowns this element adds.
    pub fn num_branch_vars(&self) -> usize {
        match self {
            Element::Inductor { .. } | Element::VoltageSource { .. } => 1,
            _ => 0,
        }
    }
}
