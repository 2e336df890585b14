//! Core circuit representation and MNA matrix structures for Ohmic.
//!
//! This crate provides the data model shared by the parser and solver:
//! node identifiers with a deterministic name-to-index mapping, the three
//! supported element kinds, the netlist container, and the Modified Nodal
//! Analysis (MNA) system they stamp into.

pub mod element;
pub mod error;
pub mod mna;
pub mod netlist;
pub mod node;

pub use element::{CurrentSource, Element, Resistor, SourceForm, VoltageSource};
pub use error::{Error, Result};
pub use netlist::Netlist;
pub use node::{GROUND_NAME, NodeId, NodeMap};
