//! Schematic validation.

use std::collections::HashSet;

use tracing::warn;

use super::Schematic;
use crate::error::{Result, SchematicError};

/// Validate a schematic before solving.
///
/// Checks:
/// - Component ids are unique
/// - Connection ids are unique
/// - Component values are finite
///
/// Wires that reference unknown components are only logged: the solver
/// ignores them and still solves the rest of the schematic.
pub fn validate_schematic(schematic: &Schematic) -> Result<()> {
    let mut ids = HashSet::with_capacity(schematic.components.len());
    for component in &schematic.components {
        if !ids.insert(component.id.as_str()) {
            return Err(SchematicError::DuplicateComponent {
                id: component.id.to_string(),
            });
        }
        if !component.value.is_finite() {
            return Err(SchematicError::InvalidValue {
                id: component.id.to_string(),
                value: component.value,
            });
        }
    }

    let mut wire_ids = HashSet::with_capacity(schematic.connections.len());
    for connection in &schematic.connections {
        if !wire_ids.insert(&connection.id) {
            return Err(SchematicError::DuplicateConnection {
                id: connection.id.to_string(),
            });
        }
        for point in &connection.endpoints {
            if !ids.contains(point.component.as_str()) {
                warn!(connection = %connection.id, endpoint = %point, "wire references unknown component");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Connection, ConnectionPoint, Terminal};
    use crate::components::Component;

    fn wire(id: &str, a: &str, b: &str) -> Connection {
        Connection::new(
            id,
            ConnectionPoint::new(a, Terminal::Positive),
            ConnectionPoint::new(b, Terminal::Negative),
        )
    }

    #[test]
    fn test_valid_schematic() {
        let schematic = Schematic::new(
            vec![Component::power_source("V1", 5.0), Component::resistor("R1", 1.0)],
            vec![wire("W1", "V1", "R1"), wire("W2", "R1", "V1")],
        );
        assert!(validate_schematic(&schematic).is_ok());
    }

    #[test]
    fn test_duplicate_component() {
        let schematic = Schematic::new(
            vec![Component::resistor("R1", 1.0), Component::resistor("R1", 2.0)],
            vec![],
        );
        assert!(matches!(
            validate_schematic(&schematic),
            Err(SchematicError::DuplicateComponent { id }) if id == "R1"
        ));
    }

    #[test]
    fn test_duplicate_connection() {
        let schematic = Schematic::new(
            vec![Component::resistor("R1", 1.0)],
            vec![wire("W1", "R1", "R1"), wire("W1", "R1", "R1")],
        );
        assert!(matches!(
            validate_schematic(&schematic),
            Err(SchematicError::DuplicateConnection { .. })
        ));
    }

    #[test]
    fn test_non_finite_value() {
        let schematic = Schematic::new(vec![Component::resistor("R1", f64::NAN)], vec![]);
        assert!(matches!(
            validate_schematic(&schematic),
            Err(SchematicError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_dangling_wire_is_not_an_error() {
        let schematic = Schematic::new(
            vec![Component::resistor("R1", 1.0)],
            vec![wire("W1", "R1", "GHOST")],
        );
        assert!(validate_schematic(&schematic).is_ok());
    }
}
