//! Component models for DC steady-state analysis.
//!
//! This module provides the closed set of schematic components:
//! - Linear: Resistor, Capacitor, Inductor
//! - Sources: Power Source
//! - Probes: Oscilloscope
//!
//! Every component reduces, at DC, to one of three [`DcModel`]s which the
//! MNA formulator knows how to stamp.

mod linear;
mod probe;
mod sources;

pub use linear::{capacitor_model, inductor_model, ohmic_current, resistor_model};
pub use probe::oscilloscope_model;
pub use sources::power_source_model;

use std::fmt;

use crate::circuit::ComponentId;

/// The type tag of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Resistor (value in ohms)
    Resistor,
    /// Capacitor (value in farads)
    Capacitor,
    /// Inductor (value in henries)
    Inductor,
    /// Ideal DC voltage source (value in volts)
    PowerSource,
    /// Infinite-impedance probe, carries no value
    Oscilloscope,
}

impl ComponentKind {
    /// Parse a component kind from the first letter of its id.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'R' => Some(Self::Resistor),
            'C' => Some(Self::Capacitor),
            'L' => Some(Self::Inductor),
            'V' => Some(Self::PowerSource),
            _ => None,
        }
    }

    /// Parse a component kind from a keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "RES" | "RESISTOR" => Some(Self::Resistor),
            "CAP" | "CAPACITOR" => Some(Self::Capacitor),
            "IND" | "INDUCTOR" => Some(Self::Inductor),
            "PWR" | "SOURCE" | "BATTERY" => Some(Self::PowerSource),
            "SCOPE" | "OSC" | "OSCILLOSCOPE" => Some(Self::Oscilloscope),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
            Self::PowerSource => "power source",
            Self::Oscilloscope => "oscilloscope",
        };
        f.write_str(name)
    }
}

/// How a component behaves in a DC steady-state network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DcModel {
    /// Ordinary conductance between the two terminals.
    Conductance(f64),
    /// Ideal voltage constraint `V(+) - V(-) = emf` with its own current unknown.
    /// Shorts are branches with zero emf.
    Branch { emf: f64 },
    /// Open circuit; contributes nothing to the matrix.
    Open,
}

impl DcModel {
    /// Whether this model needs a branch-current unknown.
    pub fn is_branch(&self) -> bool {
        matches!(self, DcModel::Branch { .. })
    }
}

/// A schematic component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Resistance, capacitance, inductance or source voltage depending on `kind`
    pub value: f64,
    /// Last computed voltage across the terminals
    pub voltage: Option<f64>,
    /// Last computed current through the component
    pub current: Option<f64>,
}

impl Component {
    /// Create a component that has not been simulated yet.
    pub fn new(id: impl Into<ComponentId>, kind: ComponentKind, value: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            value,
            voltage: None,
            current: None,
        }
    }

    pub fn resistor(id: impl Into<ComponentId>, ohms: f64) -> Self {
        Self::new(id, ComponentKind::Resistor, ohms)
    }

    pub fn capacitor(id: impl Into<ComponentId>, farads: f64) -> Self {
        Self::new(id, ComponentKind::Capacitor, farads)
    }

    pub fn inductor(id: impl Into<ComponentId>, henries: f64) -> Self {
        Self::new(id, ComponentKind::Inductor, henries)
    }

    pub fn power_source(id: impl Into<ComponentId>, volts: f64) -> Self {
        Self::new(id, ComponentKind::PowerSource, volts)
    }

    pub fn oscilloscope(id: impl Into<ComponentId>) -> Self {
        Self::new(id, ComponentKind::Oscilloscope, 0.0)
    }

    /// Reduce the component to its DC steady-state model.
    ///
    /// Resistors below `short_threshold` ohms are treated as ideal shorts.
    pub fn dc_model(&self, short_threshold: f64) -> DcModel {
        match self.kind {
            ComponentKind::Resistor => resistor_model(self.value, short_threshold),
            ComponentKind::Capacitor => capacitor_model(),
            ComponentKind::Inductor => inductor_model(),
            ComponentKind::PowerSource => power_source_model(self.value),
            ComponentKind::Oscilloscope => oscilloscope_model(),
        }
    }

    pub fn is_power_source(&self) -> bool {
        self.kind == ComponentKind::PowerSource
    }

    /// Forget any previously computed voltage and current.
    pub fn clear_reading(&mut self) {
        self.voltage = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_prefix() {
        assert_eq!(ComponentKind::from_prefix('r'), Some(ComponentKind::Resistor));
        assert_eq!(ComponentKind::from_prefix('V'), Some(ComponentKind::PowerSource));
        assert_eq!(ComponentKind::from_prefix('Q'), None);
    }

    #[test]
    fn test_kind_from_keyword() {
        assert_eq!(ComponentKind::from_keyword("scope"), Some(ComponentKind::Oscilloscope));
        assert_eq!(ComponentKind::from_keyword("PWR"), Some(ComponentKind::PowerSource));
        assert_eq!(ComponentKind::from_keyword("R1"), None);
    }

    #[test]
    fn test_dc_models() {
        let eps = 1e-9;
        assert_eq!(Component::resistor("R1", 4.0).dc_model(eps), DcModel::Conductance(0.25));
        assert_eq!(Component::resistor("R0", 0.0).dc_model(eps), DcModel::Branch { emf: 0.0 });
        assert_eq!(Component::capacitor("C1", 1e-6).dc_model(eps), DcModel::Open);
        assert_eq!(Component::inductor("L1", 1e-3).dc_model(eps), DcModel::Branch { emf: 0.0 });
        assert_eq!(Component::power_source("V1", 9.0).dc_model(eps), DcModel::Branch { emf: 9.0 });
        assert_eq!(Component::oscilloscope("S1").dc_model(eps), DcModel::Open);
    }

    #[test]
    fn test_new_component_is_unsimulated() {
        let r = Component::resistor("R1", 100.0);
        assert!(r.voltage.is_none());
        assert!(r.current.is_none());
    }
}
