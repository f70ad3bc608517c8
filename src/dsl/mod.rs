//! Netlist format for describing schematics as text.
//!
//! The format is line-oriented and lets the solver be driven without the
//! editor UI (CLI, WASM, tests).
//!
//! # Grammar Overview
//!
//! ```text
//! netlist    = { line }
//! line       = comment | wire | component | empty
//! comment    = ('#' | ';') { any_char }
//! component  = (id | keyword id) [value]
//! wire       = ".wire" [id] endpoint endpoint
//! endpoint   = id ':' ('0' | '1')
//!
//! keyword    = "RES" | "CAP" | "IND" | "PWR" | "SOURCE" | "SCOPE" | "OSC" | ...
//! id         = (letter | '_') { letter | digit | '_' }
//! value      = number [unit_suffix]
//!
//! number      = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! ```
//!
//! # Component Types
//!
//! | Prefix / keyword | Component | Value |
//! |------------------|-----------|-------|
//! | R / RES | Resistor | ohms |
//! | C / CAP | Capacitor | farads |
//! | L / IND | Inductor | henries |
//! | V / PWR | Power Source | volts |
//! | SCOPE / OSC | Oscilloscope | none |
//!
//! Terminal 0 is the negative side, terminal 1 the positive side.
//!
//! # Example
//!
//! ```text
//! # 10 V across a 10 Ω + 40 Ω divider
//! V1 10
//! R1 10
//! R2 40
//! .wire W1 V1:1 R1:0
//! .wire W2 R1:1 R2:0
//! .wire W3 R2:1 V1:0
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a netlist string into an AST.
pub fn parse(input: &str) -> Result<NetlistAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<NetlistAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::SchematicError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
