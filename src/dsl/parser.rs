//! Parser for the netlist format.

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::circuit::Terminal;
use crate::components::ComponentKind;
use crate::error::{Result, SchematicError};

/// Parser for netlist text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<NetlistAst> {
        let mut ast = NetlistAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let component = self.parse_component()?;
                    ast.components.push(component);
                }
                _ => {
                    return Err(SchematicError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.end_of_line()?;
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(SchematicError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    /// Consume the newline ending a statement; anything else is trailing junk.
    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(SchematicError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    fn parse_directive(&mut self, ast: &mut NetlistAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".wire" => {
                let wire = self.parse_wire(line)?;
                ast.wires.push(wire);
            }
            _ => {
                return Err(SchematicError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    /// `.wire [id] <comp>:<terminal> <comp>:<terminal>`
    fn parse_wire(&mut self, line: usize) -> Result<WireDef> {
        let first = self.expect(TokenKind::Identifier)?.text;

        let (id, a) = if self.current.kind == TokenKind::Colon {
            (None, self.parse_terminal(first, line)?)
        } else {
            let component = self.expect(TokenKind::Identifier)?.text;
            (Some(first), self.parse_terminal(component, line)?)
        };

        let component = self.expect(TokenKind::Identifier)?.text;
        let b = self.parse_terminal(component, line)?;

        Ok(WireDef {
            id,
            endpoints: [a, b],
            line,
        })
    }

    /// The `:<terminal>` half of an endpoint, after the component id.
    fn parse_terminal(&mut self, component: String, line: usize) -> Result<EndpointDef> {
        self.expect(TokenKind::Colon)?;
        let text = self.expect(TokenKind::Number)?.text;
        let terminal = text
            .parse::<usize>()
            .ok()
            .and_then(Terminal::from_index)
            .ok_or(SchematicError::InvalidTerminal {
                terminal: text,
                line,
            })?;
        Ok(EndpointDef {
            component,
            terminal,
        })
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let first_token = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        // Keywords first, so `SCOPE` is not read as an id with an unknown prefix.
        let (kind, id) = if let Some(kind) = ComponentKind::from_keyword(&first_token) {
            let id = self.expect(TokenKind::Identifier)?.text;
            (kind, id)
        } else {
            let first_char = first_token.chars().next().unwrap_or('?');
            let kind = ComponentKind::from_prefix(first_char).ok_or_else(|| {
                SchematicError::UnknownComponentType {
                    component_type: first_token.clone(),
                    line,
                }
            })?;
            (kind, first_token)
        };

        let value = if self.current.kind == TokenKind::Number {
            let text = self.current.text.clone();
            self.advance()?;
            Some(parse_value(&text).ok_or_else(|| {
                SchematicError::parse(line, format!("invalid number: {}", text))
            })?)
        } else {
            None
        };

        Ok(ComponentDef {
            kind,
            id,
            value,
            line,
        })
    }
}
