//! Abstract Syntax Tree types for the netlist format.

use crate::circuit::Terminal;
use crate::components::ComponentKind;

/// Complete AST representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct NetlistAst {
    /// Component declarations in file order
    pub components: Vec<ComponentDef>,
    /// Wire declarations in file order
    pub wires: Vec<WireDef>,
}

impl NetlistAst {
    /// Create a new empty netlist AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A component declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    pub kind: ComponentKind,
    /// Component id
    pub id: String,
    /// Component value (resistance, capacitance, etc.)
    pub value: Option<f64>,
    /// Source line number for error reporting
    pub line: usize,
}

/// One end of a wire, `<component>:<terminal>`.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDef {
    pub component: String,
    pub terminal: Terminal,
}

/// A `.wire` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct WireDef {
    /// Explicit wire id, if given
    pub id: Option<String>,
    pub endpoints: [EndpointDef; 2],
    /// Source line number for error reporting
    pub line: usize,
}
