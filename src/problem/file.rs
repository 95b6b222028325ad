use crate::expr::parser::{self, until_nul, ParseError, MAX_DEPTH};
use crate::problem::Problem;
use crate::registry::{VariableLimitExceeded, VariableRegistry};
use log::debug;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};

/// Reads one proposition per line. Blank lines and lines starting with `//` are skipped; the
/// last proposition is the theorem. Anything after a NUL on a line is ignored.
pub fn parse<R: Read>(reader: R) -> Result<Problem, ProblemError> {
    let reader = BufReader::new(reader);

    let mut variables = VariableRegistry::new();
    let mut propositions = vec![];

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = until_nul(&line);
        let line_number = idx + 1;

        if line.starts_with("//") || line.trim().is_empty() {
            continue;
        }

        match parser::parse(line, &mut variables) {
            Ok(expr) => {
                debug!("line {}: {}", line_number, expr.display(&variables));
                propositions.push(expr);
            }
            Err(ParseError::Syntax) => return Err(ProblemError::Syntax { line: line_number }),
            Err(ParseError::TooDeep) => return Err(ProblemError::TooDeep { line: line_number }),
            Err(ParseError::VariableLimit(source)) => {
                return Err(ProblemError::TooManyVariables {
                    line: line_number,
                    source,
                })
            }
        }
    }

    Problem::from_propositions(variables, propositions).ok_or(ProblemError::Empty)
}

#[derive(Debug)]
pub enum ProblemError {
    Io(io::Error),
    Syntax { line: usize },
    TooDeep { line: usize },
    TooManyVariables { line: usize, source: VariableLimitExceeded },
    Empty,
}

impl From<io::Error> for ProblemError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::Io(e) => write!(f, "cannot read input: {}", e),
            ProblemError::Syntax { line } => write!(f, "syntax error on line {}", line),
            ProblemError::TooDeep { line } => {
                write!(f, "expression nested deeper than {} levels on line {}", MAX_DEPTH, line)
            }
            ProblemError::TooManyVariables { line, source } => write!(f, "{} on line {}", source, line),
            ProblemError::Empty => f.write_str("no theorem to check"),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::Io(e) => Some(e),
            ProblemError::TooManyVariables { source, .. } => Some(source),
            _ => None,
        }
    }
}
