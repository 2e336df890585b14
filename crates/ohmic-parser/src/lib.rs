//! Restricted SPICE netlist parser for Ohmic.
//!
//! Circuit statements live between a line starting with `.circuit` and the
//! next line starting with `.end`; everything outside the block is ignored.
//! Three element kinds are recognized by the first letter of the element
//! name: resistors (`R`), voltage sources (`V`), and current sources (`I`).
//!
//! # Example
//!
//! ```
//! use ohmic_parser::parse;
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
//! assert_eq!(netlist.num_elements(), 3);
//! assert_eq!(netlist.num_vsources(), 1);
//! ```

pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::parse;
