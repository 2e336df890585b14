//! Linear solve and DC operating-point analysis for Ohmic.
//!
//! This crate provides:
//! - A dense linear solver with an explicit singularity check
//! - DC operating-point analysis over an assembled MNA system
//! - The end-to-end driver from a netlist file to named results

pub mod dc;
pub mod error;
pub mod linear;
pub mod op;

pub use dc::{DcSolution, solve_dc};
pub use error::{Error, Result};
pub use linear::solve_dense;
pub use op::{OpError, OperatingPoint, solve_op, solve_op_file};
