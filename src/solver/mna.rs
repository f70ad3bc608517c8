//! MNA matrix assembly.

use tracing::trace;

use crate::circuit::{BranchId, NodeId, Topology};
use crate::components::{Component, DcModel};
use crate::error::Result;

use super::linear::gaussian_elimination;

/// Assignment of MNA unknowns: node voltages first (ground excluded), then
/// branch currents.
#[derive(Debug, Clone)]
pub struct UnknownLayout {
    /// Matrix index of each node's voltage, `None` for ground
    node_index: Vec<Option<usize>>,
    /// Branch of each component, `None` if it carries no current unknown
    branches: Vec<Option<BranchId>>,
    num_node_unknowns: usize,
    num_branches: usize,
}

impl UnknownLayout {
    /// Lay out the unknowns for a topology and the components' DC models.
    ///
    /// Components whose terminals cannot be resolved get no branch, so they
    /// never leave an empty row behind.
    pub fn new(topology: &Topology, ground: NodeId, models: &[DcModel]) -> Self {
        let mut next = 0usize;
        let node_index: Vec<Option<usize>> = (0..topology.num_nodes())
            .map(|n| {
                if NodeId(n) == ground {
                    None
                } else {
                    next += 1;
                    Some(next - 1)
                }
            })
            .collect();

        let mut num_branches = 0usize;
        let branches: Vec<Option<BranchId>> = models
            .iter()
            .enumerate()
            .map(|(i, model)| {
                if model.is_branch() && topology.terminals_of(i).is_some() {
                    num_branches += 1;
                    Some(BranchId(num_branches - 1))
                } else {
                    None
                }
            })
            .collect();

        Self {
            node_index,
            branches,
            num_node_unknowns: next,
            num_branches,
        }
    }

    /// Matrix index of a node voltage. Returns `None` for ground.
    pub fn node_index(&self, node: NodeId) -> Option<usize> {
        self.node_index.get(node.0).copied().flatten()
    }

    /// Branch assigned to the component at `component_index`, if any.
    pub fn branch_of(&self, component_index: usize) -> Option<BranchId> {
        self.branches.get(component_index).copied().flatten()
    }

    /// Matrix index of a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        self.num_node_unknowns + branch.0
    }

    pub fn num_node_unknowns(&self) -> usize {
        self.num_node_unknowns
    }

    pub fn num_branches(&self) -> usize {
        self.num_branches
    }

    /// Total size of the MNA system.
    pub fn size(&self) -> usize {
        self.num_node_unknowns + self.num_branches
    }
}

/// MNA matrix system Ax = z.
#[derive(Debug, Clone)]
pub struct MnaMatrix {
    /// System matrix A (row-major)
    pub a: Vec<f64>,
    /// Source vector z
    pub z: Vec<f64>,
    /// Matrix dimension
    pub size: usize,
}

impl MnaMatrix {
    /// Create a zeroed system of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            z: vec![0.0; size],
            size,
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Add to source vector element.
    pub fn add_source(&mut self, row: usize, value: f64) {
        self.z[row] += value;
    }

    /// Stamp a conductance between two nodes.
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: f64) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp a voltage source between two nodes with branch current at index br.
    /// V[n+] - V[n-] = E
    pub fn stamp_voltage_source(
        &mut self,
        n_pos: Option<usize>,
        n_neg: Option<usize>,
        br: usize,
        voltage: f64,
    ) {
        if let Some(i) = n_pos {
            self.add(br, i, 1.0);
            self.add(i, br, 1.0);
        }
        if let Some(j) = n_neg {
            self.add(br, j, -1.0);
            self.add(j, br, -1.0);
        }
        self.add_source(br, voltage);
    }

    /// Solve the system, leaving the matrix untouched.
    pub fn solve(&self, pivot_tolerance: f64) -> Result<Vec<f64>> {
        let mut a = self.a.clone();
        let mut z = self.z.clone();
        gaussian_elimination(&mut a, &mut z, self.size, pivot_tolerance)
    }
}

/// Build the MNA system for a resolved schematic.
///
/// `models[i]` is the DC model of `components[i]`. Stamping only accumulates,
/// so component order does not matter.
pub fn formulate(
    components: &[Component],
    models: &[DcModel],
    topology: &Topology,
    layout: &UnknownLayout,
) -> MnaMatrix {
    let mut matrix = MnaMatrix::new(layout.size());

    for (i, (component, model)) in components.iter().zip(models).enumerate() {
        let Some([neg, pos]) = topology.terminals_of(i) else {
            continue;
        };
        let n_neg = layout.node_index(neg);
        let n_pos = layout.node_index(pos);

        match *model {
            DcModel::Conductance(g) => {
                trace!(component = %component.id, g, "stamp conductance");
                matrix.stamp_conductance(n_pos, n_neg, g);
            }
            DcModel::Branch { emf } => {
                if let Some(branch) = layout.branch_of(i) {
                    trace!(component = %component.id, emf, %branch, "stamp branch");
                    matrix.stamp_voltage_source(n_pos, n_neg, layout.branch_index(branch), emf);
                }
            }
            DcModel::Open => {}
        }
    }

    matrix
}
