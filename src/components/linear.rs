//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! At DC steady state the reactive elements degenerate: a charged capacitor
//! passes no current (open circuit) and an inductor drops no voltage (short).

use super::DcModel;

/// DC model of a resistor.
///
/// A resistance below `short_threshold` cannot be inverted into a usable
/// conductance, so it becomes an ideal short with its own current unknown.
pub fn resistor_model(resistance: f64, short_threshold: f64) -> DcModel {
    if resistance < short_threshold {
        DcModel::Branch { emf: 0.0 }
    } else {
        DcModel::Conductance(1.0 / resistance)
    }
}

/// DC model of a capacitor: open circuit.
pub fn capacitor_model() -> DcModel {
    DcModel::Open
}

/// DC model of an inductor: short circuit.
pub fn inductor_model() -> DcModel {
    DcModel::Branch { emf: 0.0 }
}

/// Current through a resistance by Ohm's law.
pub fn ohmic_current(voltage: f64, resistance: f64) -> f64 {
    voltage / resistance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resistor_conductance() {
        match resistor_model(1000.0, 1e-9) {
            DcModel::Conductance(g) => assert_relative_eq!(g, 0.001),
            other => panic!("expected conductance, got {:?}", other),
        }
    }

    #[test]
    fn test_resistor_threshold_is_exclusive() {
        assert!(matches!(resistor_model(1e-9, 1e-9), DcModel::Conductance(_)));
        assert!(resistor_model(0.5e-9, 1e-9).is_branch());
    }

    #[test]
    fn test_negative_resistance_is_short() {
        assert_eq!(resistor_model(-5.0, 1e-9), DcModel::Branch { emf: 0.0 });
    }

    #[test]
    fn test_ohmic_current() {
        assert_relative_eq!(ohmic_current(8.0, 40.0), 0.2);
    }
}
