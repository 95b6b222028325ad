use clap::{App, Arg};
use propcheck::problem::file::{parse, ProblemError};
use propcheck::*;
use std::fs::File;
use std::io::{self, Write};

fn main() {
    env_logger::init();

    let matches = App::new("propcheck")
        .about("Checks that the last proposition in a file follows from the ones before it")
        .arg(
            Arg::with_name("INPUT")
                .help("proposition file, one proposition per line; the last one is the theorem")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("parallel")
                .short("p")
                .long("parallel")
                .help("enumerate assignments on all cores"),
        )
        .get_matches();

    let path = matches.value_of("INPUT").unwrap_or_default();
    let problem = match parse_from_file(path) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("error: {} in {}", e, path);
            std::process::exit(1);
        }
    };

    let checker = Checker::new(&problem);
    let verdict = if matches.is_present("parallel") {
        checker.check_parallel()
    } else {
        checker.check()
    };

    let stdout = io::stdout();
    let exit_code = match report(verdict, problem.variables(), &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: cannot write report: {}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

fn parse_from_file(path: &str) -> Result<Problem, ProblemError> {
    let file = File::open(path)?;
    parse(file)
}

/// Writes the verdict and returns the process exit code: 0 unless the theorem was refuted.
fn report<W: Write>(verdict: Verdict, variables: &VariableRegistry, out: &mut W) -> io::Result<i32> {
    match verdict {
        Verdict::Verified => {
            writeln!(out, "Theorem has been verified!")?;
            Ok(0)
        }
        Verdict::Inconsistent => {
            writeln!(out, "Axioms are not consistent!")?;
            Ok(0)
        }
        Verdict::Falsified(assignment) => {
            writeln!(out, "Theorem is false!")?;
            if !variables.is_empty() {
                writeln!(out, "Counterexample:")?;
                writeln!(out, "{:>40} Value", "Proposition")?;
            }
            for (name, value) in assignment.bindings(variables) {
                writeln!(out, "{:>40} {}", name, if value { "True" } else { "False" })?;
            }
            Ok(1)
        }
    }
}
