//! Ohmic command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ohmic_solver::solve_op_file;

mod output;

#[derive(Parser)]
#[command(name = "ohmic")]
#[command(about = "A DC operating-point solver for SPICE-style netlists", long_about = None)]
#[command(version)]
struct Cli {
    /// Input netlist file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref input) = cli.input {
        let op = solve_op_file(input)
            .with_context(|| format!("failed to solve {}", input.display()))?;

        if cli.verbose {
            println!(
                "Solved {} node voltages, {} source currents.",
                op.voltages().len(),
                op.currents().len()
            );
            println!();
        }

        output::print_operating_point(&op);
    } else {
        println!("Ohmic - DC operating-point solver for SPICE-style netlists");
        println!();
        println!("Usage: ohmic <netlist> [options]");
        println!();
        println!("Options:");
        println!("  -v, --verbose      Verbose output");
        println!("  -h, --help         Show help");
        println!("  -V, --version      Show version");
    }

    Ok(())
}
