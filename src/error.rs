//! Error types for the schematic solver.
//!
//! This module provides a unified error type [`SchematicError`] that covers
//! netlist parsing, schematic validation, and the internal linear solve.
//! The public DC solve itself never returns an error: degenerate and
//! unsolvable circuits are encoded in its result (see [`crate::solver::DcOutcome`]).

use thiserror::Error;

/// Result type alias using [`SchematicError`].
pub type Result<T> = std::result::Result<T, SchematicError>;

/// Unified error type for all schematic operations.
#[derive(Error, Debug)]
pub enum SchematicError {
    // ============ Netlist Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown component type
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    /// Terminal index outside {0, 1}
    #[error("Invalid terminal '{terminal}' at line {line} (expected 0 or 1)")]
    InvalidTerminal { terminal: String, line: usize },

    // ============ Schematic Validation Errors ============
    /// Duplicate component id
    #[error("Duplicate component id '{id}'")]
    DuplicateComponent { id: String },

    /// Duplicate connection id
    #[error("Duplicate connection id '{id}'")]
    DuplicateConnection { id: String },

    /// Component value is NaN or infinite
    #[error("Component '{id}' has a non-finite value ({value})")]
    InvalidValue { id: String, value: f64 },

    // ============ Solver Errors ============
    /// Elimination hit a pivot below tolerance
    #[error("Singular matrix at column {column} (pivot {pivot:.2e}) - circuit may have a floating node or shorted sources")]
    SingularMatrix { column: usize, pivot: f64 },

    /// The DC solve produced no readings for a non-empty circuit
    #[error("Circuit may be unsolvable (floating node, shorted or conflicting sources)")]
    Unsolvable,

    // ============ I/O Errors ============
    /// Error reading a netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SchematicError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a singular matrix error
    pub fn singular(column: usize, pivot: f64) -> Self {
        Self::SingularMatrix { column, pivot }
    }
}
