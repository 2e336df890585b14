//! End-to-end operating-point driver: netlist text to named results.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ohmic_core::Netlist;
use thiserror::Error;

use crate::dc::{DcSolution, solve_dc};

/// Failure modes of the end-to-end solve.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("not a valid input file: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ohmic_parser::Error),

    #[error(transparent)]
    Circuit(#[from] ohmic_core::Error),

    #[error(transparent)]
    Solve(#[from] crate::error::Error),
}

/// Named node voltages and voltage-source currents.
///
/// Ground always reports 0 V. Source currents follow the convention of the
/// MNA branch unknown: positive when flowing into the positive terminal.
#[derive(Debug, Clone, Default)]
pub struct OperatingPoint {
    voltages: HashMap<String, f64>,
    currents: HashMap<String, f64>,
}

impl OperatingPoint {
    /// Map a raw solution back onto the netlist's node and source names.
    pub fn from_solution(netlist: &Netlist, solution: &DcSolution) -> Self {
        let voltages = netlist
            .nodes()
            .iter()
            .map(|(name, id)| (name.to_string(), solution.voltage(id)))
            .collect();

        let currents = netlist
            .voltage_source_names()
            .enumerate()
            .map(|(k, name)| (name.to_string(), solution.current(k)))
            .collect();

        Self { voltages, currents }
    }

    /// Voltage at a named node.
    pub fn voltage(&self, node: &str) -> Option<f64> {
        self.voltages.get(node).copied()
    }

    /// Current through a named voltage source.
    pub fn current(&self, source: &str) -> Option<f64> {
        self.currents.get(source).copied()
    }

    /// All node voltages by name.
    pub fn voltages(&self) -> &HashMap<String, f64> {
        &self.voltages
    }

    /// All voltage-source currents by name.
    pub fn currents(&self) -> &HashMap<String, f64> {
        &self.currents
    }
}

/// Solve the DC operating point of a parsed netlist.
pub fn solve_op(netlist: &Netlist) -> Result<OperatingPoint, OpError> {
    let mna = netlist.assemble_mna()?;
    log::debug!(
        "assembled {}x{} MNA system ({} sources)",
        mna.dim(),
        mna.dim(),
        mna.num_vsources()
    );
    let solution = solve_dc(&mna)?;
    Ok(OperatingPoint::from_solution(netlist, &solution))
}

/// Solve the DC operating point of a netlist file.
pub fn solve_op_file(path: impl AsRef<Path>) -> Result<OperatingPoint, OpError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(OpError::InputNotFound(path.to_path_buf()));
    }

    let input = fs::read_to_string(path).map_err(|source| OpError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let netlist = ohmic_parser::parse(&input)?;
    solve_op(&netlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found() {
        let err = solve_op_file("/no/such/netlist.ckt").unwrap_err();
        assert!(matches!(err, OpError::InputNotFound(_)));
    }

    #[test]
    fn test_empty_circuit_reports_ground_only() {
        let netlist = ohmic_parser::parse(".circuit\n.end\n").unwrap();
        let op = solve_op(&netlist).unwrap();

        assert_eq!(op.voltage("GND"), Some(0.0));
        assert_eq!(op.voltages().len(), 1);
        assert!(op.currents().is_empty());
    }
}
