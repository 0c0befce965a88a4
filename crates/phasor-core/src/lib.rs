//! Core circuit representation and MNA assembly for phasor.
//!
//! This crate provides the element model, the append-only netlist builder,
//! and the Modified Nodal Analysis (MNA) system that the solver crate
//! factorizes. The MNA system is generic over the scalar field so DC
//! (real) and AC (complex) analyses share one set of stamps.

pub mod element;
pub mod error;
pub mod mna;
pub mod netlist;
pub mod node;

pub use element::Element;
pub use error::{Error, Result};
pub use mna::MnaSystem;
pub use netlist::Netlist;
pub use node::NodeId;
