//! Mapping a solved MNA vector back onto components.

use std::collections::HashMap;

use crate::circuit::{ComponentId, NodeId, Topology};
use crate::components::{ohmic_current, Component, ComponentKind, DcModel};

use super::mna::UnknownLayout;

/// Steady-state voltage across and current through one component.
///
/// Both values are magnitudes; polarity is not reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub voltage: f64,
    pub current: f64,
}

impl Reading {
    pub const ZERO: Reading = Reading {
        voltage: 0.0,
        current: 0.0,
    };

    pub fn new(voltage: f64, current: f64) -> Self {
        Self { voltage, current }
    }
}

/// Per-component readings keyed by component id.
pub type Readings = HashMap<ComponentId, Reading>;

/// Every component at (0, 0).
pub fn zeroed(components: &[Component]) -> Readings {
    components
        .iter()
        .map(|c| (c.id.clone(), Reading::ZERO))
        .collect()
}

/// Turn the solution vector `x` into one reading per component.
pub fn map_results(
    components: &[Component],
    models: &[DcModel],
    topology: &Topology,
    layout: &UnknownLayout,
    x: &[f64],
) -> Readings {
    let node_voltages: Vec<f64> = (0..topology.num_nodes())
        .map(|n| layout.node_index(NodeId(n)).map_or(0.0, |i| x[i]))
        .collect();

    components
        .iter()
        .zip(models)
        .enumerate()
        .map(|(i, (component, model))| {
            let reading = match topology.terminals_of(i) {
                // Probes carry no reading of their own.
                _ if component.kind == ComponentKind::Oscilloscope => Reading::ZERO,
                Some([neg, pos]) => {
                    let voltage = (node_voltages[pos.0] - node_voltages[neg.0]).abs();
                    let current = match *model {
                        DcModel::Conductance(_) => ohmic_current(voltage, component.value),
                        DcModel::Branch { .. } => layout
                            .branch_of(i)
                            .map_or(0.0, |b| x[layout.branch_index(b)].abs()),
                        DcModel::Open => 0.0,
                    };
                    Reading::new(voltage, current)
                }
                None => Reading::ZERO,
            };
            (component.id.clone(), reading)
        })
        .collect()
}
