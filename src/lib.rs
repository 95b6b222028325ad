pub mod checker;
pub mod expr;
pub mod problem;
pub mod registry;

#[cfg(test)]
mod brute_force;

use expr::Assignment;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Verdict {
    /// Every model of the axioms satisfies the theorem, and at least one model exists.
    Verified,
    /// No assignment satisfies all axioms.
    Inconsistent,
    /// The smallest assignment that satisfies the axioms but not the theorem.
    Falsified(Assignment),
}

pub use checker::Checker;
pub use expr::{BinaryOp, Expr, Variable};
pub use problem::Problem;
pub use registry::{VariableRegistry, MAX_VARIABLES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::file::parse;
    use test_env_log::test;

    fn check(text: &str) -> (Problem, Verdict) {
        let problem = parse(text.as_bytes()).expect("failed to parse");
        let verdict = Checker::new(&problem).check();
        assert_eq!(Checker::new(&problem).check_parallel(), verdict);
        (problem, verdict)
    }

    #[test]
    fn scenario_modus_ponens() {
        let (problem, verdict) = check("[A]\n( [A] => [B] )\n[B]\n");
        assert_eq!(problem.variables().get("A"), Some(Variable(0)));
        assert_eq!(problem.variables().get("B"), Some(Variable(1)));
        assert_eq!(verdict, Verdict::Verified);
    }

    #[test]
    fn scenario_inconsistent_axioms() {
        let (_, verdict) = check("[A]\nnot [A]\n[A]\n");
        assert_eq!(verdict, Verdict::Inconsistent);
    }

    #[test]
    fn scenario_first_counterexample() {
        let (problem, verdict) = check("( [A] or [B] )\n[A]\n");
        assert_eq!(verdict, Verdict::Falsified(Assignment(0b10)));

        let bindings = Assignment(0b10).bindings(problem.variables()).collect::<Vec<_>>();
        assert_eq!(bindings, vec![("A", false), ("B", true)]);
    }

    #[test]
    fn scenario_unsatisfiable_theorem() {
        let (problem, verdict) = check("[P] and not [P]\n");
        assert!(problem.axioms().is_empty());
        assert_eq!(verdict, Verdict::Falsified(Assignment(0)));
    }

    #[test]
    fn vacuous_tautology_is_verified() {
        let (problem, verdict) = check("// no variables at all\n(T or F)\n");
        assert!(problem.variables().is_empty());
        assert_eq!(verdict, Verdict::Verified);
    }

    #[test]
    fn reverse_implication_and_synonyms() {
        let text = "// contraposition
( [wet] if [rain] )
not [wet]
( not [rain] iff true )
";
        let (_, verdict) = check(text);
        assert_eq!(verdict, Verdict::Verified);
    }

    #[test]
    fn xor_excludes_both() {
        // the only model is A = true, B = false
        let (problem, verdict) = check("( [A] xor [B] )\n[A]\n( [A] and [B] )\n");
        assert_eq!(problem.axioms().len(), 2);
        assert_eq!(verdict, Verdict::Falsified(Assignment(0b01)));
    }
}
