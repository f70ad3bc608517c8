//! Core types for schematic representation.

use std::borrow::Borrow;
use std::fmt;

/// Opaque, caller-assigned identifier of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets readings be looked up with a plain `&str`.
impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub String);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One of the two terminals every component has.
///
/// Terminal 0 is the reference (negative) side and terminal 1 the positive
/// side; source and branch-current stamps are oriented by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    Negative = 0,
    Positive = 1,
}

impl Terminal {
    /// Terminal from its index in {0, 1}.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Terminal::Negative),
            1 => Some(Terminal::Positive),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A single component terminal: (component, terminal index).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionPoint {
    pub component: ComponentId,
    pub terminal: Terminal,
}

impl ConnectionPoint {
    pub fn new(component: impl Into<ComponentId>, terminal: Terminal) -> Self {
        Self {
            component: component.into(),
            terminal,
        }
    }
}

impl fmt::Display for ConnectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.terminal)
    }
}

/// A wire joining two terminals.
///
/// Wires are undirected and ideal: they make both endpoints part of the same
/// electrical node and carry no resistance of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub endpoints: [ConnectionPoint; 2],
}

impl Connection {
    pub fn new(id: impl Into<ConnectionId>, a: ConnectionPoint, b: ConnectionPoint) -> Self {
        Self {
            id: id.into(),
            endpoints: [a, b],
        }
    }
}

/// An electrical node produced by the topology pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Index of a branch-current unknown in the MNA system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchId(pub usize);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}
