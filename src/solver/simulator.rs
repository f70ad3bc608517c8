//! Main DC solver interface.

use std::fmt;

use tracing::debug;

use crate::circuit::{select_ground, Connection, Topology};
use crate::components::{Component, DcModel};
use crate::DEFAULT_EPSILON;

use super::mna::{formulate, UnknownLayout};
use super::results::{map_results, zeroed, Readings};

/// Configuration for the DC solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Pivot magnitude below which the system is declared singular.
    pub pivot_tolerance: f64,
    /// Resistance (ohms) below which a resistor is treated as an ideal short.
    pub short_threshold: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_EPSILON,
            short_threshold: DEFAULT_EPSILON,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singular-pivot tolerance.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    /// Set the resistance below which resistors become shorts.
    pub fn with_short_threshold(mut self, short_threshold: f64) -> Self {
        self.short_threshold = short_threshold;
        self
    }
}

/// How a DC solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcOutcome {
    /// The MNA system was solved; readings come from the solution.
    Solved,
    /// No components: readings are empty.
    EmptyCircuit,
    /// No power source: every component reads (0, 0).
    NoDrive,
    /// The system is singular: readings are empty.
    Singular,
}

impl DcOutcome {
    /// Whether the readings are a failure (empty for a non-empty circuit).
    pub fn is_failure(&self) -> bool {
        matches!(self, DcOutcome::Singular)
    }
}

impl fmt::Display for DcOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DcOutcome::Solved => "solved",
            DcOutcome::EmptyCircuit => "empty circuit",
            DcOutcome::NoDrive => "no power source",
            DcOutcome::Singular => "singular system",
        };
        f.write_str(text)
    }
}

/// Result of one DC solve, with some bookkeeping about the system.
#[derive(Debug, Clone)]
pub struct DcAnalysis {
    pub outcome: DcOutcome,
    pub readings: Readings,
    /// Number of electrical nodes found
    pub nodes: usize,
    /// Dimension of the MNA system (0 if it was never built)
    pub unknowns: usize,
    /// Wires ignored because they reference unknown components
    pub dangling_connections: usize,
}

impl DcAnalysis {
    fn new(outcome: DcOutcome, readings: Readings) -> Self {
        Self {
            outcome,
            readings,
            nodes: 0,
            unknowns: 0,
            dangling_connections: 0,
        }
    }
}

/// The DC steady-state solver.
///
/// The solver holds only its configuration; each call builds its own
/// topology and matrix, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DcSolver {
    config: SolverConfig,
}

impl DcSolver {
    /// Create a solver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve and return only the readings.
    ///
    /// The map holds exactly one entry per component, or is empty when the
    /// circuit has no components or cannot be solved.
    pub fn solve(&self, components: &[Component], connections: &[Connection]) -> Readings {
        self.analyze(components, connections).readings
    }

    /// Run the full pipeline: topology, ground, formulation, elimination,
    /// and result mapping.
    pub fn analyze(&self, components: &[Component], connections: &[Connection]) -> DcAnalysis {
        if components.is_empty() {
            debug!("no components to solve");
            return DcAnalysis::new(DcOutcome::EmptyCircuit, Readings::new());
        }

        let topology = Topology::build(components, connections);
        debug!(
            components = components.len(),
            nodes = topology.num_nodes(),
            dangling = topology.dangling_connections(),
            "built topology"
        );

        let finish = |mut analysis: DcAnalysis| {
            analysis.nodes = topology.num_nodes();
            analysis.dangling_connections = topology.dangling_connections();
            debug!(outcome = %analysis.outcome, "dc solve finished");
            analysis
        };

        let Some(ground) = select_ground(components, &topology) else {
            return finish(DcAnalysis::new(DcOutcome::NoDrive, zeroed(components)));
        };
        debug!(%ground, "selected ground");

        let models: Vec<DcModel> = components
            .iter()
            .map(|c| c.dc_model(self.config.short_threshold))
            .collect();
        let layout = UnknownLayout::new(&topology, ground, &models);
        // The ground source always owns a branch unknown.
        debug_assert!(layout.size() > 0);

        let matrix = formulate(components, &models, &topology, &layout);
        debug!(
            size = matrix.size,
            node_unknowns = layout.num_node_unknowns(),
            branches = layout.num_branches(),
            "formulated MNA system"
        );

        let mut analysis = match matrix.solve(self.config.pivot_tolerance) {
            Ok(x) => DcAnalysis::new(
                DcOutcome::Solved,
                map_results(components, &models, &topology, &layout, &x),
            ),
            Err(err) => {
                debug!(%err, "elimination failed");
                DcAnalysis::new(DcOutcome::Singular, Readings::new())
            }
        };
        analysis.unknowns = layout.size();
        finish(analysis)
    }
}

/// Solve a schematic snapshot with the default configuration.
pub fn simulate(components: &[Component], connections: &[Connection]) -> Readings {
    DcSolver::new().solve(components, connections)
}
