//! End-to-end operating-point tests from netlist text to named results.

use ohmic_core::Error as CoreError;
use ohmic_parser::{Error as ParseError, parse};
use ohmic_solver::{Error as SolverError, OpError, OperatingPoint, solve_op};

const TOL: f64 = 1e-9;

fn solve(input: &str) -> Result<OperatingPoint, OpError> {
    let netlist = parse(input)?;
    solve_op(&netlist)
}

#[test]
fn voltage_divider() {
    let op = solve(
        ".circuit
V1 N1 GND dc 10
R1 N1 N2 5
R2 N2 GND 5
.end
",
    )
    .unwrap();

    assert!((op.voltage("N1").unwrap() - 10.0).abs() < TOL);
    assert!((op.voltage("N2").unwrap() - 5.0).abs() < TOL);
    assert_eq!(op.voltage("GND"), Some(0.0));

    // 1A flows out of the positive terminal through the divider, so the
    // branch current solved into that terminal is -1A.
    assert!((op.current("V1").unwrap() + 1.0).abs() < TOL);
}

#[test]
fn source_fixes_voltage_difference() {
    let op = solve(
        ".circuit
V1 a b dc 3
R1 a GND 10
R2 b GND 10
R3 a b 7
.end
",
    )
    .unwrap();

    let diff = op.voltage("a").unwrap() - op.voltage("b").unwrap();
    assert!((diff - 3.0).abs() < TOL);
}

#[test]
fn ground_is_always_zero() {
    for input in [
        ".circuit\n.end\n",
        ".circuit\nR1 x GND 1\nI1 GND x dc 2\n.end\n",
        ".circuit\nV1 p q dc 1\nR1 p GND 1\nR2 q GND 1\n.end\n",
    ] {
        let op = solve(input).unwrap();
        assert_eq!(op.voltage("GND"), Some(0.0), "input: {input:?}");
    }
}

#[test]
fn named_results_are_permutation_invariant() {
    let a = solve(
        ".circuit
V1 N1 GND dc 10
V2 N3 GND dc 4
R1 N1 N2 5
R2 N2 GND 5
R3 N2 N3 2
.end
",
    )
    .unwrap();

    let b = solve(
        ".circuit
R3 N2 N3 2
R2 N2 GND 5
V2 N3 GND dc 4
R1 N1 N2 5
V1 N1 GND dc 10
.end
",
    )
    .unwrap();

    for node in ["GND", "N1", "N2", "N3"] {
        let va = a.voltage(node).unwrap();
        let vb = b.voltage(node).unwrap();
        assert!((va - vb).abs() < TOL, "V({node}): {va} vs {vb}");
    }
    for source in ["V1", "V2"] {
        let ia = a.current(source).unwrap();
        let ib = b.current(source).unwrap();
        assert!((ia - ib).abs() < TOL, "I({source}): {ia} vs {ib}");
    }
}

#[test]
fn current_source_into_resistor() {
    // 1A driven into N1 develops 10V across the 10 ohm resistor.
    let op = solve(
        ".circuit
R1 N1 GND 10
I1 GND N1 dc 1
.end
",
    )
    .unwrap();

    assert!((op.voltage("N1").unwrap() - 10.0).abs() < TOL);
    assert_eq!(op.voltage("GND"), Some(0.0));
}

#[test]
fn current_source_orientation() {
    // Positive terminal listed first: the 1A flows out of N1, so the node
    // settles below ground.
    let op = solve(
        ".circuit
R1 N1 GND 10
I1 N1 GND dc 1
.end
",
    )
    .unwrap();

    assert!((op.voltage("N1").unwrap() + 10.0).abs() < TOL);
}

#[test]
fn parallel_current_sources_accumulate() {
    let op = solve(
        ".circuit
R1 N1 GND 10
I1 GND N1 dc 1
I2 GND N1 dc 2
.end
",
    )
    .unwrap();

    assert!((op.voltage("N1").unwrap() - 30.0).abs() < TOL);
}

#[test]
fn ac_source_solves_at_amplitude() {
    let op = solve(
        ".circuit
V1 N1 GND ac 6
R1 N1 GND 3
.end
",
    )
    .unwrap();

    assert!((op.voltage("N1").unwrap() - 6.0).abs() < TOL);
    assert!((op.current("V1").unwrap() + 2.0).abs() < TOL);
}

#[test]
fn conflicting_voltage_sources_have_no_solution() {
    let err = solve(
        ".circuit
V1 N1 GND dc 5
V2 N1 GND dc 10
R1 N1 GND 1
.end
",
    )
    .unwrap_err();

    assert!(matches!(err, OpError::Solve(SolverError::SingularMatrix)));
}

#[test]
fn floating_subcircuit_has_no_solution() {
    // Nothing ties any node to ground.
    let err = solve(
        ".circuit
V1 a b dc 1
R1 a b 10
.end
",
    )
    .unwrap_err();

    assert!(matches!(err, OpError::Solve(SolverError::SingularMatrix)));
}

#[test]
fn unsupported_element_is_rejected() {
    let err = solve(".circuit\nQ1 a b 10\n.end\n").unwrap_err();
    assert!(matches!(
        err,
        OpError::Parse(ParseError::UnsupportedElement(name)) if name == "Q1"
    ));
}

#[test]
fn missing_block_is_rejected() {
    let err = solve("R1 a GND 10\n").unwrap_err();
    assert!(matches!(
        err,
        OpError::Parse(ParseError::MissingCircuitBlock)
    ));
}

#[test]
fn zero_resistance_is_rejected() {
    let err = solve(
        ".circuit
V1 N1 GND dc 5
R1 N1 GND 0
.end
",
    )
    .unwrap_err();

    assert!(matches!(
        err,
        OpError::Circuit(CoreError::ZeroResistance(name)) if name == "R1"
    ));
}

#[test]
fn series_sources_stack() {
    let op = solve(
        ".circuit
V1 a GND dc 5
V2 b a dc 5
R1 b GND 10
.end
",
    )
    .unwrap();

    assert!((op.voltage("a").unwrap() - 5.0).abs() < TOL);
    assert!((op.voltage("b").unwrap() - 10.0).abs() < TOL);
    // All of R1's 1A returns through both sources.
    assert!((op.current("V1").unwrap() + 1.0).abs() < TOL);
    assert!((op.current("V2").unwrap() + 1.0).abs() < TOL);
}
