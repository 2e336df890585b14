//! Output formatting for solved operating points.

use ohmic_solver::OperatingPoint;

/// Print node voltages and source currents in tabular form.
///
/// Entries are sorted by name so output is stable across runs.
pub fn print_operating_point(op: &OperatingPoint) {
    let mut nodes: Vec<_> = op.voltages().iter().collect();
    nodes.sort_by(|a, b| a.0.cmp(b.0));

    println!("Node Voltages:");
    for (name, voltage) in nodes {
        println!("  V({}) = {:.6} V", name, voltage);
    }

    if !op.currents().is_empty() {
        let mut sources: Vec<_> = op.currents().iter().collect();
        sources.sort_by(|a, b| a.0.cmp(b.0));

        println!();
        println!("Source Currents:");
        for (name, current) in sources {
            println!("  I({}) = {:.6} A", name, current);
        }
    }
    println!();
}
