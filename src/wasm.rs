//! WASM bindings for Schematic Core.
//!
//! This module lets the browser editor hand its schematic to the solver as a
//! netlist and read the results back.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSchematic } from 'schematic_core';
//!
//! await init();
//!
//! const schematic = new WasmSchematic(`
//!   V1 10
//!   R1 50
//!   .wire V1:1 R1:0
//!   .wire R1:1 V1:0
//! `);
//!
//! const readings = schematic.simulate(); // [v0, i0, v1, i1, ...]
//! if (readings.length === 0) {
//!   alert('Circuit may be unsolvable');
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{validate_schematic, Schematic};
use crate::solver::{DcSolver, SolverConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible schematic and DC solver.
#[wasm_bindgen]
pub struct WasmSchematic {
    schematic: Schematic,
    solver: DcSolver,
}

#[wasm_bindgen]
impl WasmSchematic {
    /// Create a schematic from netlist text.
    ///
    /// # Returns
    /// A new `WasmSchematic` or an error if the netlist is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str) -> Result<WasmSchematic, JsValue> {
        Self::with_config(netlist, crate::DEFAULT_EPSILON, crate::DEFAULT_EPSILON)
    }

    /// Create a schematic with custom solver tolerances.
    ///
    /// # Arguments
    /// * `netlist` - The schematic in netlist format
    /// * `pivot_tolerance` - Pivot magnitude below which the system is singular
    /// * `short_threshold` - Resistance below which a resistor is a short
    #[wasm_bindgen]
    pub fn with_config(
        netlist: &str,
        pivot_tolerance: f64,
        short_threshold: f64,
    ) -> Result<WasmSchematic, JsValue> {
        let schematic =
            Schematic::from_netlist(netlist).map_err(|e| JsValue::from_str(&e.to_string()))?;

        validate_schematic(&schematic).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let config = SolverConfig::new()
            .with_pivot_tolerance(pivot_tolerance)
            .with_short_threshold(short_threshold);

        Ok(WasmSchematic {
            schematic,
            solver: DcSolver::with_config(config),
        })
    }

    /// Solve the schematic.
    ///
    /// # Returns
    /// A flat array `[voltage, current]` per component in declaration order,
    /// or an empty array if the circuit could not be solved.
    #[wasm_bindgen]
    pub fn simulate(&mut self) -> Vec<f64> {
        let readings = self.schematic.simulate(&self.solver);
        self.schematic.apply_readings(&readings);

        if readings.is_empty() {
            return Vec::new();
        }
        self.schematic
            .components
            .iter()
            .flat_map(|c| [c.voltage.unwrap_or(0.0), c.current.unwrap_or(0.0)])
            .collect()
    }

    /// Number of components in the schematic.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.schematic.components.len()
    }

    /// Id of the component at `index`, or `undefined` if out of range.
    #[wasm_bindgen]
    pub fn component_id(&self, index: usize) -> Option<String> {
        self.schematic
            .components
            .get(index)
            .map(|c| c.id.to_string())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
