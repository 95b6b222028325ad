use crate::expr::Assignment;
use crate::problem::Problem;
use crate::Verdict;
use log::{debug, trace};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Decides entailment by enumerating every assignment in ascending order.
pub struct Checker<'a> {
    problem: &'a Problem,
}

impl<'a> Checker<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    pub fn check(&self) -> Verdict {
        debug!(
            "checking {} axioms over {} assignments",
            self.problem.axioms().len(),
            self.problem.assignment_count()
        );

        let mut consistent = false;
        for assignment in self.problem.assignments() {
            if !self.problem.is_model(assignment) {
                continue;
            }
            trace!("model {:#b}", assignment.0);
            consistent = true;
            if !self.problem.theorem().eval(assignment) {
                debug!("counterexample {:#b}", assignment.0);
                return Verdict::Falsified(assignment);
            }
        }

        if consistent {
            Verdict::Verified
        } else {
            Verdict::Inconsistent
        }
    }

    /// Same verdict as [`Checker::check`], with the assignment space split across the rayon
    /// thread pool. `find_first` keeps the smallest counterexample.
    pub fn check_parallel(&self) -> Verdict {
        debug!(
            "checking {} axioms over {} assignments on {} threads",
            self.problem.axioms().len(),
            self.problem.assignment_count(),
            rayon::current_num_threads()
        );

        // exact whenever no counterexample turns up, since then every assignment was visited
        let consistent = AtomicBool::new(false);
        let counterexample = (0..self.problem.assignment_count())
            .into_par_iter()
            .map(|x| Assignment(x as u32))
            .find_first(|&assignment| {
                if !self.problem.is_model(assignment) {
                    return false;
                }
                consistent.store(true, Ordering::Relaxed);
                !self.problem.theorem().eval(assignment)
            });

        match counterexample {
            Some(assignment) => {
                debug!("counterexample {:#b}", assignment.0);
                Verdict::Falsified(assignment)
            }
            None if consistent.load(Ordering::Relaxed) => Verdict::Verified,
            None => Verdict::Inconsistent,
        }
    }
}
