//! Schematic - DC circuit solver
//!
//! Solves a netlist for the steady-state voltage and current of every
//! component.
//!
//! # Usage
//!
//! ```bash
//! schematic divider.net
//! schematic -vv --short-threshold 1e-6 divider.net
//! ```

use std::path::PathBuf;

use clap::Parser;
use schematic_core::{
    circuit::{validate_schematic, Schematic},
    dsl,
    error::{Result, SchematicError},
    DcSolver, SolverConfig, DEFAULT_EPSILON,
};
use tracing::{info, Level};

/// Steady-state DC solver for schematic netlists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Pivot magnitude below which the system is declared singular
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pivot_tolerance: f64,

    /// Resistance below which a resistor is treated as an ideal short
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    short_threshold: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Parse the netlist file
    let ast = dsl::parse_file(&args.netlist)?;

    // Build and validate the schematic
    let mut schematic = Schematic::from_ast(ast);
    validate_schematic(&schematic)?;
    info!(
        components = schematic.components.len(),
        connections = schematic.connections.len(),
        "loaded netlist"
    );

    let config = SolverConfig::new()
        .with_pivot_tolerance(args.pivot_tolerance)
        .with_short_threshold(args.short_threshold);
    let solver = DcSolver::with_config(config);

    let analysis = schematic.analyze(&solver);
    info!(outcome = %analysis.outcome, nodes = analysis.nodes, unknowns = analysis.unknowns, "solved");

    if analysis.outcome.is_failure() {
        return Err(SchematicError::Unsolvable);
    }
    schematic.apply_readings(&analysis.readings);

    for component in &schematic.components {
        println!(
            "{:<12} {:<14} {:>14.6} V {:>14.6} A",
            component.id.as_str(),
            component.kind.to_string(),
            component.voltage.unwrap_or(0.0),
            component.current.unwrap_or(0.0),
        );
    }

    Ok(())
}
