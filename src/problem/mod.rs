pub mod file;

use crate::expr::{Assignment, Expr};
use crate::registry::VariableRegistry;

/// Axioms and a theorem over a shared set of variables.
#[derive(Clone, Debug)]
pub struct Problem {
    variables: VariableRegistry,
    axioms: Vec<Expr>,
    theorem: Expr,
}

impl Problem {
    pub fn new(variables: VariableRegistry, axioms: Vec<Expr>, theorem: Expr) -> Self {
        Self {
            variables,
            axioms,
            theorem,
        }
    }

    /// The last proposition is the theorem and the rest are axioms. Returns `None` if there are
    /// no propositions at all.
    pub fn from_propositions(variables: VariableRegistry, mut propositions: Vec<Expr>) -> Option<Self> {
        let theorem = propositions.pop()?;
        Some(Self::new(variables, propositions, theorem))
    }

    pub fn variables(&self) -> &VariableRegistry {
        &self.variables
    }

    pub fn axioms(&self) -> &[Expr] {
        &self.axioms
    }

    pub fn theorem(&self) -> &Expr {
        &self.theorem
    }

    /// `2^n` for `n` registered variables; a problem without variables still has the empty assignment.
    pub fn assignment_count(&self) -> u64 {
        1u64 << self.variables.len()
    }

    /// Every assignment, in ascending order.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment> {
        (0..self.assignment_count()).map(|x| Assignment(x as u32))
    }

    /// Whether every axiom holds under `assignment`. Axioms are evaluated in order and the
    /// first false one stops the evaluation.
    pub fn is_model(&self, assignment: Assignment) -> bool {
        self.axioms.iter().all(|axiom| axiom.eval(assignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::var;
    use crate::registry::MAX_VARIABLES;
    use test_env_log::test;

    fn registry(n: usize) -> VariableRegistry {
        let mut variables = VariableRegistry::new();
        for i in 0..n {
            variables.resolve(&format!("v{}", i)).unwrap();
        }
        variables
    }

    #[test]
    fn last_proposition_is_theorem() {
        let problem = Problem::from_propositions(registry(2), vec![var(0), var(1), Expr::not(var(0))]).unwrap();
        assert_eq!(problem.axioms(), &[var(0), var(1)][..]);
        assert_eq!(problem.theorem(), &Expr::not(var(0)));
    }

    #[test]
    fn no_propositions() {
        assert!(Problem::from_propositions(registry(1), vec![]).is_none());
    }

    #[test]
    fn assignment_space() {
        let empty = Problem::new(registry(0), vec![], Expr::Constant(true));
        assert_eq!(empty.assignments().collect::<Vec<_>>(), vec![Assignment(0)]);

        let three = Problem::new(registry(3), vec![], Expr::Constant(true));
        assert_eq!(three.assignment_count(), 8);
        assert_eq!(three.assignments().last(), Some(Assignment(7)));

        let full = Problem::new(registry(MAX_VARIABLES), vec![], Expr::Constant(true));
        assert_eq!(full.assignment_count(), 1u64 << 32);
    }

    #[test]
    fn models_without_axioms() {
        let problem = Problem::new(registry(1), vec![], Expr::Constant(false));
        assert!(problem.assignments().all(|a| problem.is_model(a)));
    }
}
