//! DC operating-point analysis.

use nalgebra::DVector;
use ohmic_core::NodeId;
use ohmic_core::mna::MnaSystem;

use crate::error::Result;
use crate::linear::solve_dense;

/// Result of a DC operating-point solve, split into node voltages and
/// voltage-source branch currents.
#[derive(Debug, Clone)]
pub struct DcSolution {
    node_voltages: DVector<f64>,
    branch_currents: DVector<f64>,
}

impl DcSolution {
    /// Get the voltage at a node. Ground is 0 V by definition.
    pub fn voltage(&self, node: NodeId) -> f64 {
        match node.matrix_index() {
            Some(idx) if idx < self.node_voltages.len() => self.node_voltages[idx],
            _ => 0.0,
        }
    }

    /// Get the voltage difference between two nodes.
    pub fn voltage_diff(&self, node_pos: NodeId, node_neg: NodeId) -> f64 {
        self.voltage(node_pos) - self.voltage(node_neg)
    }

    /// Get the branch current of the voltage source owning index `k`.
    pub fn current(&self, k: usize) -> f64 {
        if k < self.branch_currents.len() {
            self.branch_currents[k]
        } else {
            0.0
        }
    }

    /// Number of node-voltage unknowns.
    pub fn num_unknowns(&self) -> usize {
        self.node_voltages.len()
    }
}

/// Solve the DC operating point of an assembled MNA system.
pub fn solve_dc(mna: &MnaSystem) -> Result<DcSolution> {
    let solution = solve_dense(mna.matrix(), mna.rhs())?;

    let n = mna.num_unknowns();
    let m = mna.num_vsources();

    let node_voltages = DVector::from_iterator(n, solution.iter().take(n).copied());
    let branch_currents = DVector::from_iterator(m, solution.iter().skip(n).copied());

    Ok(DcSolution {
        node_voltages,
        branch_currents,
    })
}
