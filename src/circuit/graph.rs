//! Electrical topology: partitioning component terminals into nodes.
//!
//! Terminals live in a dense integer space, `slot = component_index * 2 +
//! terminal_index`. Wires become undirected edges between slots, stored in a
//! compact offset/adjacency layout, and a breadth-first flood fill assigns
//! every slot to exactly one node.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::types::{Connection, NodeId, Terminal};
use crate::components::Component;

/// Slot of a component terminal in the dense terminal space.
pub fn terminal_slot(component_index: usize, terminal: Terminal) -> usize {
    component_index * 2 + terminal.index()
}

/// Partition of all component terminals into electrical nodes.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Node of every terminal slot
    slot_nodes: Vec<NodeId>,
    /// Number of distinct nodes
    num_nodes: usize,
    /// Wires skipped because an endpoint names an unknown component
    dangling: usize,
}

impl Topology {
    /// Discover the electrical nodes of a schematic.
    ///
    /// Nodes are numbered in discovery order: components in input order,
    /// terminal 0 before terminal 1. Unwired terminals become singleton nodes.
    /// This never fails; wires naming unknown components are ignored and
    /// counted in [`Topology::dangling_connections`].
    pub fn build(components: &[Component], connections: &[Connection]) -> Self {
        let slots = components.len() * 2;

        // First occurrence wins for duplicated ids.
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(components.len());
        for (i, component) in components.iter().enumerate() {
            index.entry(component.id.as_str()).or_insert(i);
        }

        let mut edges = Vec::with_capacity(connections.len());
        let mut dangling = 0usize;
        for connection in connections {
            let [a, b] = &connection.endpoints;
            match (index.get(a.component.as_str()), index.get(b.component.as_str())) {
                (Some(&ia), Some(&ib)) => {
                    edges.push((terminal_slot(ia, a.terminal), terminal_slot(ib, b.terminal)));
                }
                _ => {
                    debug!(connection = %connection.id, "skipping wire with unknown endpoint");
                    dangling += 1;
                }
            }
        }

        let (offsets, adjacency) = build_adjacency(slots, &edges);

        let mut slot_nodes: Vec<Option<NodeId>> = vec![None; slots];
        let mut num_nodes = 0usize;
        let mut queue = VecDeque::new();

        for seed in 0..slots {
            if slot_nodes[seed].is_some() {
                continue;
            }

            let node = NodeId(num_nodes);
            num_nodes += 1;

            slot_nodes[seed] = Some(node);
            queue.push_back(seed);

            while let Some(slot) = queue.pop_front() {
                for &neighbor in &adjacency[offsets[slot]..offsets[slot + 1]] {
                    if slot_nodes[neighbor].is_none() {
                        slot_nodes[neighbor] = Some(node);
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        // Every slot was either a seed or reached from one.
        let slot_nodes = slot_nodes.into_iter().flatten().collect::<Vec<_>>();
        debug_assert_eq!(slot_nodes.len(), slots);

        Self {
            slot_nodes,
            num_nodes,
            dangling,
        }
    }

    /// Node containing the given terminal, or `None` if it cannot be resolved.
    pub fn node_of(&self, component_index: usize, terminal: Terminal) -> Option<NodeId> {
        self.slot_nodes
            .get(terminal_slot(component_index, terminal))
            .copied()
    }

    /// Both terminal nodes of a component as `[terminal 0, terminal 1]`.
    pub fn terminals_of(&self, component_index: usize) -> Option<[NodeId; 2]> {
        Some([
            self.node_of(component_index, Terminal::Negative)?,
            self.node_of(component_index, Terminal::Positive)?,
        ])
    }

    /// Number of electrical nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of wires that referenced a component not in the schematic.
    pub fn dangling_connections(&self) -> usize {
        self.dangling
    }
}

/// Build a compact adjacency list: slot `s` is adjacent to
/// `adjacency[offsets[s]..offsets[s + 1]]`. Each edge is stored in both directions.
fn build_adjacency(slots: usize, edges: &[(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
    let mut offsets = vec![0usize; slots + 1];
    for &(a, b) in edges {
        offsets[a + 1] += 1;
        offsets[b + 1] += 1;
    }
    for i in 0..slots {
        offsets[i + 1] += offsets[i];
    }

    let mut fill = offsets.clone();
    let mut adjacency = vec![0usize; edges.len() * 2];
    for &(a, b) in edges {
        adjacency[fill[a]] = b;
        fill[a] += 1;
        adjacency[fill[b]] = a;
        fill[b] += 1;
    }

    (offsets, adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ConnectionPoint;

    fn wire(id: &str, a: (&str, Terminal), b: (&str, Terminal)) -> Connection {
        Connection::new(
            id,
            ConnectionPoint::new(a.0, a.1),
            ConnectionPoint::new(b.0, b.1),
        )
    }

    #[test]
    fn test_empty_schematic() {
        let topology = Topology::build(&[], &[]);
        assert_eq!(topology.num_nodes(), 0);
        assert_eq!(topology.node_of(0, Terminal::Negative), None);
    }

    #[test]
    fn test_unwired_terminals_are_singletons() {
        let components = vec![Component::resistor("R1", 1.0), Component::resistor("R2", 1.0)];
        let topology = Topology::build(&components, &[]);
        assert_eq!(topology.num_nodes(), 4);
        assert_eq!(topology.node_of(0, Terminal::Negative), Some(NodeId(0)));
        assert_eq!(topology.node_of(0, Terminal::Positive), Some(NodeId(1)));
        assert_eq!(topology.node_of(1, Terminal::Negative), Some(NodeId(2)));
        assert_eq!(topology.node_of(1, Terminal::Positive), Some(NodeId(3)));
    }

    #[test]
    fn test_wires_join_transitively() {
        let components = vec![
            Component::resistor("R1", 1.0),
            Component::resistor("R2", 1.0),
            Component::resistor("R3", 1.0),
        ];
        let connections = vec![
            wire("W1", ("R1", Terminal::Positive), ("R2", Terminal::Negative)),
            wire("W2", ("R2", Terminal::Negative), ("R3", Terminal::Positive)),
        ];
        let topology = Topology::build(&components, &connections);

        let shared = topology.node_of(0, Terminal::Positive);
        assert_eq!(topology.node_of(1, Terminal::Negative), shared);
        assert_eq!(topology.node_of(2, Terminal::Positive), shared);
        // R1:0, shared, R2:1, R3:0
        assert_eq!(topology.num_nodes(), 4);
    }

    #[test]
    fn test_wire_across_one_component() {
        let components = vec![Component::resistor("R1", 1.0)];
        let connections = vec![wire("W1", ("R1", Terminal::Negative), ("R1", Terminal::Positive))];
        let topology = Topology::build(&components, &connections);
        assert_eq!(topology.num_nodes(), 1);
        assert_eq!(topology.terminals_of(0), Some([NodeId(0), NodeId(0)]));
    }

    #[test]
    fn test_dangling_wire_is_ignored() {
        let components = vec![Component::resistor("R1", 1.0)];
        let connections = vec![wire("W1", ("R1", Terminal::Positive), ("GHOST", Terminal::Negative))];
        let topology = Topology::build(&components, &connections);
        assert_eq!(topology.num_nodes(), 2);
        assert_eq!(topology.dangling_connections(), 1);
    }

    #[test]
    fn test_parallel_wires() {
        let components = vec![Component::resistor("R1", 1.0), Component::resistor("R2", 1.0)];
        let connections = vec![
            wire("W1", ("R1", Terminal::Negative), ("R2", Terminal::Negative)),
            wire("W2", ("R1", Terminal::Negative), ("R2", Terminal::Negative)),
            wire("W3", ("R1", Terminal::Positive), ("R2", Terminal::Positive)),
        ];
        let topology = Topology::build(&components, &connections);
        assert_eq!(topology.num_nodes(), 2);
    }
}
