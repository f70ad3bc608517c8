//! The schematic snapshot handed to the solver.

use std::collections::HashSet;

use super::types::{ComponentId, Connection, ConnectionId, ConnectionPoint};
use crate::components::{Component, ComponentKind};
use crate::dsl::{self, EndpointDef, NetlistAst};
use crate::error::Result;
use crate::solver::{DcAnalysis, DcSolver, Readings};

/// An explicit, self-contained snapshot of the editor's components and wires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schematic {
    /// Components in input order (the order decides the ground node)
    pub components: Vec<Component>,
    pub connections: Vec<Connection>,
}

impl Schematic {
    pub fn new(components: Vec<Component>, connections: Vec<Connection>) -> Self {
        Self {
            components,
            connections,
        }
    }

    /// Parse a netlist string into a schematic.
    pub fn from_netlist(input: &str) -> Result<Self> {
        Ok(Self::from_ast(dsl::parse(input)?))
    }

    /// Build a schematic from a parsed netlist.
    ///
    /// Wires without an explicit id are named `W<n>`, skipping any names the
    /// netlist already uses. References to unknown components are kept; the
    /// solver tolerates them.
    pub fn from_ast(ast: NetlistAst) -> Self {
        let components = ast
            .components
            .into_iter()
            .map(|def| {
                let value = match def.kind {
                    ComponentKind::Oscilloscope => 0.0,
                    _ => def.value.unwrap_or(0.0),
                };
                Component::new(def.id, def.kind, value)
            })
            .collect();

        let mut taken: HashSet<String> = ast.wires.iter().filter_map(|w| w.id.clone()).collect();
        let mut next = 1usize;
        let connections = ast
            .wires
            .into_iter()
            .map(|wire| {
                let id = wire.id.unwrap_or_else(|| loop {
                    let candidate = format!("W{}", next);
                    next += 1;
                    if taken.insert(candidate.clone()) {
                        break candidate;
                    }
                });
                let [a, b] = wire.endpoints;
                Connection {
                    id: ConnectionId(id),
                    endpoints: [endpoint(a), endpoint(b)],
                }
            })
            .collect();

        Self {
            components,
            connections,
        }
    }

    /// Find a component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id.as_str() == id)
    }

    /// Run a DC analysis of this snapshot.
    pub fn analyze(&self, solver: &DcSolver) -> DcAnalysis {
        solver.analyze(&self.components, &self.connections)
    }

    /// Solve this snapshot and return the readings.
    pub fn simulate(&self, solver: &DcSolver) -> Readings {
        solver.solve(&self.components, &self.connections)
    }

    /// Store readings as each component's last computed voltage and current.
    ///
    /// Components without a reading (every component, when the solve
    /// failed) are cleared.
    pub fn apply_readings(&mut self, readings: &Readings) {
        for component in &mut self.components {
            match readings.get(&component.id) {
                Some(reading) => {
                    component.voltage = Some(reading.voltage);
                    component.current = Some(reading.current);
                }
                None => component.clear_reading(),
            }
        }
    }
}

fn endpoint(def: EndpointDef) -> ConnectionPoint {
    ConnectionPoint {
        component: ComponentId(def.component),
        terminal: def.terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Terminal;
    use approx::assert_abs_diff_eq;

    const DIVIDER: &str = "\
# 10 V across 10 + 40 ohms
V1 10
R1 10
R2 40
.wire W1 V1:1 R1:0
.wire W2 R1:1 R2:0
.wire R2:1 V1:0
";

    #[test]
    fn test_from_netlist() {
        let schematic = Schematic::from_netlist(DIVIDER).unwrap();
        assert_eq!(schematic.components.len(), 3);
        assert_eq!(schematic.connections.len(), 3);
        assert_eq!(schematic.components[0].kind, ComponentKind::PowerSource);
        assert_eq!(
            schematic.connections[2].endpoints[1],
            ConnectionPoint::new("V1", Terminal::Negative)
        );
    }

    #[test]
    fn test_generated_wire_ids_avoid_collisions() {
        let schematic = Schematic::from_netlist(DIVIDER).unwrap();
        // W1 and W2 are taken explicitly, so the unnamed wire becomes W3.
        assert_eq!(schematic.connections[2].id, ConnectionId::from("W3"));
    }

    #[test]
    fn test_missing_value_defaults_to_zero() {
        let schematic = Schematic::from_netlist("R1\nSCOPE S1").unwrap();
        assert_eq!(schematic.components[0].value, 0.0);
        assert_eq!(schematic.components[1].kind, ComponentKind::Oscilloscope);
    }

    #[test]
    fn test_simulate_and_apply() {
        let mut schematic = Schematic::from_netlist(DIVIDER).unwrap();
        let readings = schematic.simulate(&DcSolver::new());
        schematic.apply_readings(&readings);

        let r2 = schematic.component("R2").unwrap();
        assert_abs_diff_eq!(r2.voltage.unwrap(), 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r2.current.unwrap(), 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_failed_solve_clears_readings() {
        let mut schematic = Schematic::from_netlist(DIVIDER).unwrap();
        schematic.apply_readings(&schematic.simulate(&DcSolver::new()));
        assert!(schematic.components.iter().all(|c| c.voltage.is_some()));

        schematic.apply_readings(&Readings::new());
        assert!(schematic.components.iter().all(|c| c.voltage.is_none() && c.current.is_none()));
    }
}
