//! Modified Nodal Analysis (MNA) matrix structures.

use nalgebra::{DMatrix, DVector};

/// The MNA linear system `Ax = b`.
///
/// Unknowns are the non-ground node voltages followed by one branch
/// current per voltage source: row/column `k < num_unknowns` belongs to
/// node `k + 1`, and row `num_unknowns + p` belongs to voltage source `p`.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    num_unknowns: usize,
    num_vsources: usize,
}

impl MnaSystem {
    /// Create a zeroed system for `num_unknowns` node voltages and
    /// `num_vsources` branch currents.
    pub fn new(num_unknowns: usize, num_vsources: usize) -> Self {
        let dim = num_unknowns + num_vsources;
        Self {
            matrix: DMatrix::zeros(dim, dim),
            rhs: DVector::zeros(dim),
            num_unknowns,
            num_vsources,
        }
    }

    /// Total dimension of the system (node voltages + branch currents).
    pub fn dim(&self) -> usize {
        self.num_unknowns + self.num_vsources
    }

    /// Number of node-voltage unknowns (ground excluded).
    pub fn num_unknowns(&self) -> usize {
        self.num_unknowns
    }

    /// Number of branch-current unknowns.
    pub fn num_vsources(&self) -> usize {
        self.num_vsources
    }

    /// Get a reference to the coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Get a reference to the RHS vector.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Stamp a conductance between two nodes (`None` = ground).
    ///
    /// For a conductance G between nodes i and j:
    /// - `A[i,i] += G`, `A[j,j] += G`
    /// - `A[i,j] -= G`, `A[j,i] -= G` (both non-ground only)
    pub fn stamp_conductance(&mut self, node_i: Option<usize>, node_j: Option<usize>, g: f64) {
        if let Some(i) = node_i {
            self.matrix[(i, i)] += g;
        }
        if let Some(j) = node_j {
            self.matrix[(j, j)] += g;
        }
        if let (Some(i), Some(j)) = (node_i, node_j) {
            self.matrix[(i, j)] -= g;
            self.matrix[(j, i)] -= g;
        }
    }

    /// Stamp an independent current source driving `current` amperes out
    /// of `node_i` (positive terminal) and into `node_j`.
    ///
    /// Contributions accumulate, so parallel sources on a node add up.
    pub fn stamp_current_source(
        &mut self,
        node_i: Option<usize>,
        node_j: Option<usize>,
        current: f64,
    ) {
        if let Some(i) = node_i {
            self.rhs[i] -= current;
        }
        if let Some(j) = node_j {
            self.rhs[j] += current;
        }
    }

    /// Stamp voltage source `k` between `node_pos` and `node_neg`.
    ///
    /// Each source owns auxiliary row `num_unknowns + k` exclusively, so
    /// the couplings and the RHS entry are set rather than accumulated.
    pub fn stamp_voltage_source(
        &mut self,
        node_pos: Option<usize>,
        node_neg: Option<usize>,
        k: usize,
        voltage: f64,
    ) {
        let row = self.num_unknowns + k;

        if let Some(i) = node_pos {
            self.matrix[(row, i)] = 1.0;
            self.matrix[(i, row)] = 1.0;
        }
        if let Some(j) = node_neg {
            self.matrix[(row, j)] = -1.0;
            self.matrix[(j, row)] = -1.0;
        }

        self.rhs[row] = voltage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_system() {
        let sys = MnaSystem::new(3, 1);
        assert_eq!(sys.dim(), 4);
        assert_eq!(sys.num_unknowns(), 3);
        assert_eq!(sys.num_vsources(), 1);
        assert_eq!(sys.matrix().nrows(), 4);
        assert_eq!(sys.rhs().len(), 4);
    }

    #[test]
    fn test_stamp_conductance() {
        let mut sys = MnaSystem::new(2, 0);

        sys.stamp_conductance(Some(0), Some(1), 0.5);

        assert_eq!(sys.matrix()[(0, 0)], 0.5);
        assert_eq!(sys.matrix()[(1, 1)], 0.5);
        assert_eq!(sys.matrix()[(0, 1)], -0.5);
        assert_eq!(sys.matrix()[(1, 0)], -0.5);
    }

    #[test]
    fn test_stamp_conductance_to_ground() {
        let mut sys = MnaSystem::new(2, 0);

        sys.stamp_conductance(Some(0), None, 1.0);

        assert_eq!(sys.matrix()[(0, 0)], 1.0);
        assert_eq!(sys.matrix()[(1, 1)], 0.0);
        assert_eq!(sys.matrix()[(0, 1)], 0.0);
    }

    #[test]
    fn test_stamp_conductance_accumulates() {
        let mut sys = MnaSystem::new(1, 0);

        sys.stamp_conductance(Some(0), None, 1.0);
        sys.stamp_conductance(Some(0), None, 2.0);

        assert_eq!(sys.matrix()[(0, 0)], 3.0);
    }

    #[test]
    fn test_stamp_current_source() {
        let mut sys = MnaSystem::new(2, 0);

        // 1A out of node 0, into node 1
        sys.stamp_current_source(Some(0), Some(1), 1.0);

        assert_eq!(sys.rhs()[0], -1.0);
        assert_eq!(sys.rhs()[1], 1.0);
    }

    #[test]
    fn test_stamp_current_source_accumulates() {
        let mut sys = MnaSystem::new(1, 0);

        sys.stamp_current_source(None, Some(0), 1.0);
        sys.stamp_current_source(None, Some(0), 2.0);

        assert_eq!(sys.rhs()[0], 3.0);
    }

    #[test]
    fn test_stamp_voltage_source() {
        let mut sys = MnaSystem::new(2, 1);

        // 5V source between node 1 (index 0) and ground
        sys.stamp_voltage_source(Some(0), None, 0, 5.0);

        assert_eq!(sys.matrix()[(2, 0)], 1.0);
        assert_eq!(sys.matrix()[(0, 2)], 1.0);
        assert_eq!(sys.rhs()[2], 5.0);
    }

    #[test]
    fn test_stamp_voltage_source_between_nodes() {
        let mut sys = MnaSystem::new(2, 1);

        sys.stamp_voltage_source(Some(0), Some(1), 0, 3.0);

        assert_eq!(sys.matrix()[(2, 0)], 1.0);
        assert_eq!(sys.matrix()[(0, 2)], 1.0);
        assert_eq!(sys.matrix()[(2, 1)], -1.0);
        assert_eq!(sys.matrix()[(1, 2)], -1.0);
        assert_eq!(sys.rhs()[2], 3.0);
    }
}
