//! Node identifiers for circuit netlists.

use std::fmt;

/// Unique identifier for a node in the circuit.
///
/// Node 0 is the reference (ground) node. It is always present and never
/// assigned an unknown in the MNA system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The ground node (node 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw node ID value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Check if this is the ground node.
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
