//! # Ohmic
//!
//! A DC operating-point solver for restricted SPICE-style netlists.
//!
//! Ohmic reads a `.circuit`/`.end` block of resistors and independent DC
//! sources, builds the Modified Nodal Analysis (MNA) system, and solves it
//! for node voltages and voltage-source branch currents.
//!
//! ## Quick Start
//!
//! ```rust
//! use ohmic::prelude::*;
//!
//! let netlist = parse(
//!     ".circuit\n\
//!      V1 in GND dc 10\n\
//!      R1 in out 5\n\
//!      R2 out GND 5\n\
//!      .end\n",
//! )
//! .unwrap();
//!
//! let op = solve_op(&netlist).unwrap();
//! assert!((op.voltage("out").unwrap() - 5.0).abs() < 1e-9);
//! assert_eq!(op.voltage("GND"), Some(0.0));
//! ```
//!
//! ## From a file
//!
//! ```rust,ignore
//! let op = ohmic::solve_op_file("divider.ckt")?;
//! println!("V(out) = {} V", op.voltage("out").unwrap());
//! ```

// Re-export member crates
pub use ohmic_core as core;
pub use ohmic_parser as parser;
pub use ohmic_solver as solver;

// ============================================================================
// Convenient re-exports from ohmic_core
// ============================================================================

pub use ohmic_core::{
    CurrentSource,
    // Elements
    Element,
    // Errors
    Error as CoreError,
    GROUND_NAME,
    // Netlist
    Netlist,
    NodeId,
    NodeMap,
    Resistor,
    SourceForm,
    VoltageSource,
};

// MNA system (exported from submodule)
pub use ohmic_core::mna::MnaSystem;

// ============================================================================
// Convenient re-exports from ohmic_parser
// ============================================================================

pub use ohmic_parser::{Error as ParseError, parse};

// ============================================================================
// Convenient re-exports from ohmic_solver
// ============================================================================

pub use ohmic_solver::{
    DcSolution,
    // Errors
    Error as SolverError,
    OpError,
    // Results
    OperatingPoint,
    // DC analysis
    solve_dc,
    solve_dense,
    // Driver
    solve_op,
    solve_op_file,
};

// ============================================================================
// Re-export commonly used external types
// ============================================================================

/// Re-export of nalgebra's dynamic vector type.
pub use nalgebra::DVector;

/// Re-export of nalgebra's dynamic matrix type.
pub use nalgebra::DMatrix;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use ohmic::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{
        CurrentSource, Element, MnaSystem, Netlist, NodeId, NodeMap, Resistor, SourceForm,
        VoltageSource,
    };

    // Parser
    pub use crate::parse;

    // Solver
    pub use crate::{DcSolution, OperatingPoint, solve_dc, solve_op, solve_op_file};

    // Common external types
    pub use crate::{DMatrix, DVector};
}
