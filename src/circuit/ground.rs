//! Reference node selection.

use super::graph::Topology;
use super::types::{NodeId, Terminal};
use crate::components::Component;

/// Pick the node held at 0 V.
///
/// The ground is the node of terminal 0 of the first power source in input
/// order, so the choice is reproducible for a given snapshot. Returns `None`
/// when the schematic has no power source (nothing drives the network).
pub fn select_ground(components: &[Component], topology: &Topology) -> Option<NodeId> {
    let index = components.iter().position(Component::is_power_source)?;
    topology.node_of(index, Terminal::Negative)
}
