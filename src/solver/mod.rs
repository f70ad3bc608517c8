//! DC steady-state solver based on Modified Nodal Analysis.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ 0 ]
//! [ C   0 ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix built from ordinary resistors
//! - B, C (= Bᵀ) couple branch currents to their terminal nodes
//! - v is the vector of non-ground node voltages
//! - j is the vector of branch currents (power sources, inductors, shorts)
//! - e is the vector of branch voltages (source voltage, or 0 for shorts)
//!
//! At DC capacitors and oscilloscopes are open circuits and stamp nothing.
//!
//! ## Pipeline
//!
//! topology → ground → formulation → elimination → result mapping.
//! Degenerate circuits short-circuit the pipeline; see [`DcOutcome`].

mod linear;
mod mna;
mod results;
mod simulator;

pub use linear::gaussian_elimination;
pub use mna::{formulate, MnaMatrix, UnknownLayout};
pub use results::{map_results, Reading, Readings};
pub use simulator::{simulate, DcAnalysis, DcOutcome, DcSolver, SolverConfig};
