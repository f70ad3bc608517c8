//! Schematic representation, topology and validation.
//!
//! This module provides the solver's input snapshot ([`Schematic`]), the
//! partition of component terminals into electrical nodes ([`Topology`]),
//! and reference node selection.

mod graph;
mod ground;
mod schematic;
mod types;
mod validate;

pub use graph::{terminal_slot, Topology};
pub use ground::select_ground;
pub use schematic::Schematic;
pub use types::*;
pub use validate::validate_schematic;
