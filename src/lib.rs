//! # Schematic Core
//!
//! The DC steady-state solver behind an interactive schematic editor.
//!
//! This library provides:
//! - An explicit schematic snapshot (components and wires) as solver input
//! - Topology discovery: grouping wired terminals into electrical nodes
//! - Modified Nodal Analysis (MNA) formulation and a pivoting dense solver
//! - Per-component steady-state voltage and current readings
//! - A small text netlist format for driving the solver without the editor
//!
//! ## Architecture
//!
//! - [`circuit`] - Schematic snapshot, topology, ground selection, validation
//! - [`components`] - Component kinds and their DC models
//! - [`solver`] - MNA assembly, Gaussian elimination, result mapping
//! - [`dsl`] - Parser for the netlist format
//!
//! ## Usage
//!
//! ```
//! use schematic_core::circuit::{Connection, ConnectionPoint, Terminal};
//! use schematic_core::components::Component;
//!
//! let components = vec![
//!     Component::power_source("V1", 10.0),
//!     Component::resistor("R1", 50.0),
//! ];
//! let connections = vec![
//!     Connection::new(
//!         "W1",
//!         ConnectionPoint::new("V1", Terminal::Positive),
//!         ConnectionPoint::new("R1", Terminal::Negative),
//!     ),
//!     Connection::new(
//!         "W2",
//!         ConnectionPoint::new("R1", Terminal::Positive),
//!         ConnectionPoint::new("V1", Terminal::Negative),
//!     ),
//! ];
//!
//! let readings = schematic_core::simulate(&components, &connections);
//! assert!((readings["R1"].current - 0.2).abs() < 1e-9);
//! ```
//!
//! ## Failure Model
//!
//! Solving never returns an error. An empty circuit or an unsolvable one
//! (floating component, conflicting shorted sources) yields an empty reading
//! map; a circuit without a power source reads (0, 0) everywhere.

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::Schematic;
pub use error::{Result, SchematicError};
pub use solver::{simulate, DcSolver, Reading, Readings, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSchematic;

/// Default threshold for singular pivots and for treating a resistor as a short.
pub const DEFAULT_EPSILON: f64 = 1e-9;
