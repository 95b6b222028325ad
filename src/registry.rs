use crate::expr::Variable;
use log::trace;
use std::fmt;

/// Assignments are packed into a `u32`, one bit per variable.
pub const MAX_VARIABLES: usize = 32;

/// Maps variable names to bit indices in order of first occurrence.
#[derive(Clone, Default, Debug)]
pub struct VariableRegistry {
    names: Vec<String>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, registering it if this is its first occurrence.
    pub fn resolve(&mut self, name: &str) -> Result<Variable, VariableLimitExceeded> {
        if let Some(variable) = self.get(name) {
            return Ok(variable);
        }
        if self.names.len() >= MAX_VARIABLES {
            return Err(VariableLimitExceeded { name: name.to_string() });
        }
        let variable = Variable(self.names.len());
        trace!("registered variable {:?} as {}", name, variable.0);
        self.names.push(name.to_string());
        Ok(variable)
    }

    pub fn get(&self, name: &str) -> Option<Variable> {
        self.names.iter().position(|n| n == name).map(Variable)
    }

    /// Panics if `variable` was not issued by this registry.
    pub fn name(&self, variable: Variable) -> &str {
        &self.names[variable.0]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, &str)> {
        self.names.iter().enumerate().map(|(i, name)| (Variable(i), name.as_str()))
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VariableLimitExceeded {
    pub name: String,
}

impl fmt::Display for VariableLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "over {} propositional variables (first excess variable: [{}])",
            MAX_VARIABLES, self.name
        )
    }
}

impl std::error::Error for VariableLimitExceeded {}
