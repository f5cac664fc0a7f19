pub mod assignment;
pub mod formula;
pub mod simplify;
mod solver;

#[cfg(test)]
mod brute_force;

use std::fmt::{self, Display, Formatter};

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Assignment),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Assignment> {
        match self {
            SatResult::Satisfiable(model) => Some(model),
            SatResult::Unsatisfiable => None,
        }
    }
}

impl Display for SatResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SatResult::Satisfiable(model) => write!(f, "SAT {{{}}}", model),
            SatResult::Unsatisfiable => f.write_str("UNSAT"),
        }
    }
}

pub use assignment::Assignment;
pub use formula::{Clause, Formula, Literal, Variable};
pub use simplify::{is_contradictory, simplify};
pub use solver::Solver;
