use crate::expr::{Assignment, BinaryOp, Expr};
use crate::problem::Problem;
use crate::Verdict;

// Reference implementation for the property tests: collects every model first and then looks
// for the smallest one refuting the theorem, evaluating over plain vectors of booleans.
#[cfg(test)]
pub(crate) fn check_brute_force(problem: &Problem) -> Verdict {
    let num_variables = problem.variables().len();
    assert!(num_variables <= 16); // just for safety

    fn values_for(assignment: u32, num_variables: usize) -> Vec<bool> {
        (0..num_variables).map(|i| assignment & (1 << i) != 0).collect()
    }

    fn eval(e: &Expr, values: &[bool]) -> bool {
        match e {
            Expr::Constant(v) => *v,
            Expr::Variable(v) => values[v.0],
            Expr::Not(e) => !eval(e, values),
            Expr::Binary(op, l, r) => {
                let (l, r) = (eval(l, values), eval(r, values));
                match op {
                    BinaryOp::And => l && r,
                    BinaryOp::Or => l || r,
                    BinaryOp::Xor => l != r,
                    BinaryOp::Implies => !l || r,
                    BinaryOp::Iff => l == r,
                }
            }
        }
    }

    let models = (0..1u32 << num_variables)
        .filter(|&x| {
            let values = values_for(x, num_variables);
            problem.axioms().iter().all(|axiom| eval(axiom, &values))
        })
        .collect::<Vec<_>>();

    if models.is_empty() {
        return Verdict::Inconsistent;
    }
    match models
        .into_iter()
        .filter(|&x| !eval(problem.theorem(), &values_for(x, num_variables)))
        .min()
    {
        Some(x) => Verdict::Falsified(Assignment(x)),
        None => Verdict::Verified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::var;
    use crate::registry::VariableRegistry;

    fn registry(n: usize) -> VariableRegistry {
        let mut variables = VariableRegistry::new();
        for i in 0..n {
            variables.resolve(&format!("v{}", i)).unwrap();
        }
        variables
    }

    #[test]
    fn modus_ponens() {
        let axioms = vec![var(0), Expr::binary(BinaryOp::Implies, var(0), var(1))];
        let problem = Problem::new(registry(2), axioms, var(1));
        assert_eq!(check_brute_force(&problem), Verdict::Verified);
    }

    #[test]
    fn contradictory_axioms() {
        let problem = Problem::new(registry(1), vec![var(0), Expr::not(var(0))], var(0));
        assert_eq!(check_brute_force(&problem), Verdict::Inconsistent);
    }

    #[test]
    fn affirming_the_consequent() {
        let axioms = vec![var(1), Expr::binary(BinaryOp::Implies, var(0), var(1))];
        let problem = Problem::new(registry(2), axioms, var(0));
        assert_eq!(check_brute_force(&problem), Verdict::Falsified(Assignment(0b10)));
    }
}
