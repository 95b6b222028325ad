//! Recursive-descent parser for single-line propositions.
//!
//! ```text
//! expr     := const | '[' name ']' | ('!' | "not") expr | '(' expr op expr ')'
//! const    := 'T' | "true" | 'F' | "false"
//! op       := "and" | '&' | "or" | '|' | "xor" | '^'
//!           | "then" | "implies" | "=>" | "if" | "<=" | "iff" | "<=>"
//! ```
//!
//! `(l if r)` and `(l <= r)` mean `r => l`. A line that does not parse as a single expression is
//! retried once with an enclosing pair of parentheses, so `[A] and [B]` is accepted.
//!
//! As in C strings, a NUL ends the line. Nesting is limited to [`MAX_DEPTH`] expressions.

use crate::expr::{BinaryOp, Expr};
use crate::registry::{VariableLimitExceeded, VariableRegistry};
use log::trace;
use std::fmt;

/// Deepest chain of nested expressions (negations and parenthesized operands) a line may hold.
pub const MAX_DEPTH: usize = 256;

pub fn parse(line: &str, variables: &mut VariableRegistry) -> Result<Expr, ParseError> {
    let line = until_nul(line);
    if let Some(expr) = Parser::new(line, variables).parse_complete()? {
        return Ok(expr);
    }

    trace!("retrying {:?} with enclosing parentheses", line);
    let wrapped = format!("({})", line);
    Parser::new(&wrapped, variables)
        .parse_complete()?
        .ok_or(ParseError::Syntax)
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    Syntax,
    TooDeep,
    VariableLimit(VariableLimitExceeded),
}

impl From<VariableLimitExceeded> for ParseError {
    fn from(e: VariableLimitExceeded) -> Self {
        Self::VariableLimit(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax => f.write_str("syntax error"),
            ParseError::TooDeep => write!(f, "expression nested deeper than {} levels", MAX_DEPTH),
            ParseError::VariableLimit(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

/// A successful production: the parsed tree and the input position just past it.
#[derive(Debug)]
struct Match {
    end: usize,
    expr: Expr,
}

/// `Ok(None)` means the production does not match at this position; errors are fatal.
type Step = Result<Option<Match>, ParseError>;

/// The part of `line` before its first NUL.
pub(crate) fn until_nul(line: &str) -> &str {
    match line.find('\0') {
        Some(end) => &line[..end],
        None => line,
    }
}

// Same set as C's isspace in the default locale.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

struct Parser<'s, 'v> {
    input: &'s str,
    variables: &'v mut VariableRegistry,
    depth: usize,
}

impl<'s, 'v> Parser<'s, 'v> {
    fn new(input: &'s str, variables: &'v mut VariableRegistry) -> Self {
        Self {
            input,
            variables,
            depth: 0,
        }
    }

    fn byte(&self, pos: usize) -> Option<u8> {
        self.input.as_bytes().get(pos).copied()
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while self.byte(pos).map_or(false, is_space) {
            pos += 1;
        }
        pos
    }

    /// End position of `keyword` if the input at `pos` starts with it.
    fn keyword(&self, pos: usize, keyword: &str) -> Option<usize> {
        if self.input.as_bytes()[pos..].starts_with(keyword.as_bytes()) {
            Some(pos + keyword.len())
        } else {
            None
        }
    }

    /// Parses one expression that must span the rest of the input, up to trailing whitespace.
    fn parse_complete(&mut self) -> Result<Option<Expr>, ParseError> {
        Ok(self
            .expr(0)?
            .filter(|m| self.skip_whitespace(m.end) == self.input.len())
            .map(|m| m.expr))
    }

    fn expr(&mut self, pos: usize) -> Step {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        self.depth += 1;
        let result = self.expr_at(pos);
        self.depth -= 1;
        result
    }

    fn expr_at(&mut self, pos: usize) -> Step {
        let pos = self.skip_whitespace(pos);
        if let Some(m) = self.constant(pos) {
            return Ok(Some(m));
        }
        if let Some(m) = self.variable(pos)? {
            return Ok(Some(m));
        }
        if let Some(m) = self.negation(pos)? {
            return Ok(Some(m));
        }
        self.binary(pos)
    }

    fn constant(&self, pos: usize) -> Option<Match> {
        let single = |c: u8| if self.byte(pos) == Some(c) { Some(pos + 1) } else { None };

        if let Some(end) = single(b'T').or_else(|| self.keyword(pos, "true")) {
            return Some(Match { end, expr: Expr::Constant(true) });
        }
        if let Some(end) = single(b'F').or_else(|| self.keyword(pos, "false")) {
            return Some(Match { end, expr: Expr::Constant(false) });
        }
        None
    }

    fn variable(&mut self, pos: usize) -> Step {
        if self.byte(pos) != Some(b'[') {
            return Ok(None);
        }
        let start = self.skip_whitespace(pos + 1);
        let close = match self.input[start..].find(']') {
            Some(offset) => start + offset,
            None => return Ok(None),
        };
        let mut name_end = close;
        while name_end > start && is_space(self.input.as_bytes()[name_end - 1]) {
            name_end -= 1;
        }

        let variable = self.variables.resolve(&self.input[start..name_end])?;
        Ok(Some(Match {
            end: close + 1,
            expr: Expr::Variable(variable),
        }))
    }

    fn negation(&mut self, pos: usize) -> Step {
        let after = match self.keyword(pos, "!").or_else(|| self.keyword(pos, "not")) {
            Some(after) => after,
            None => return Ok(None),
        };
        Ok(self.expr(after)?.map(|m| Match {
            end: m.end,
            expr: Expr::not(m.expr),
        }))
    }

    /// Scans an operator token: everything up to whitespace or the first character that could
    /// begin an operand.
    fn operator_end(&self, mut pos: usize) -> usize {
        while let Some(b) = self.byte(pos) {
            let next = self.byte(pos + 1);
            let starts_operand = match b {
                b'!' | b'(' | b'[' | b'T' | b'F' => true,
                b'f' => next == Some(b'a'),
                b't' => next == Some(b'r'),
                b'n' => next == Some(b'o'),
                _ => is_space(b),
            };
            if starts_operand {
                break;
            }
            pos += 1;
        }
        pos
    }

    fn binary(&mut self, pos: usize) -> Step {
        if self.byte(pos) != Some(b'(') {
            return Ok(None);
        }
        let left = match self.expr(pos + 1)? {
            Some(m) => m,
            None => return Ok(None),
        };

        let input = self.input;
        let op_start = self.skip_whitespace(left.end);
        let op_end = self.operator_end(op_start);
        let op = &input[op_start..op_end];

        // the right operand is parsed before the operator is checked
        let right = match self.expr(op_end)? {
            Some(m) => m,
            None => return Ok(None),
        };
        let close = self.skip_whitespace(right.end);
        if self.byte(close) != Some(b')') {
            return Ok(None);
        }

        let (l, r) = (left.expr, right.expr);
        let expr = match op {
            "and" | "&" => Expr::binary(BinaryOp::And, l, r),
            "or" | "|" => Expr::binary(BinaryOp::Or, l, r),
            "xor" | "^" => Expr::binary(BinaryOp::Xor, l, r),
            "then" | "implies" | "=>" => Expr::binary(BinaryOp::Implies, l, r),
            "if" | "<=" => Expr::binary(BinaryOp::Implies, r, l),
            "iff" | "<=>" => Expr::binary(BinaryOp::Iff, l, r),
            _ => return Ok(None),
        };
        Ok(Some(Match { end: close + 1, expr }))
    }
}
