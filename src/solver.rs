use crate::assignment::Assignment;
use crate::formula::{Formula, Literal};
use crate::simplify::{is_contradictory, simplify};
use crate::SatResult;
use log::{debug, trace};

pub struct Solver {
    formula: Formula,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self { formula }
    }

    pub fn solve(&self) -> SatResult {
        self.solve_under(Assignment::new())
    }

    /// Searches for a satisfying extension of `assignment`. Variables the
    /// formula never needed stay undecided in the returned model.
    pub fn solve_under(&self, assignment: Assignment) -> SatResult {
        let mut search = Search::default();
        let result = match search.dpll(&self.formula, assignment, 0) {
            Some(model) => SatResult::Satisfiable(model),
            None => SatResult::Unsatisfiable,
        };
        debug!("{} => {} after {} decisions", self.formula, result, search.decisions);
        result
    }
}

#[derive(Default)]
struct Search {
    decisions: usize,
}

impl Search {
    // Branches on the first literal of the first clause, making that literal
    // true before false. Every level decides one new variable, so `depth`
    // never exceeds the number of variables in the formula.
    fn dpll(
        &mut self,
        formula: &Formula,
        assignment: Assignment,
        depth: usize,
    ) -> Option<Assignment> {
        let formula = simplify(formula, &assignment);

        if formula.is_empty() {
            return Some(assignment);
        }
        if is_contradictory(&formula) {
            debug!("conflict at depth {} under {{{}}}", depth, assignment);
            return None;
        }

        let literal = decide(&formula)?;
        let variable = literal.variable();

        for &value in &[literal.is_positive(), !literal.is_positive()] {
            self.decisions += 1;
            trace!(
                "decision {}: {} = {} at depth {}",
                self.decisions,
                variable.name(),
                value,
                depth
            );
            if let Some(model) = self.dpll(&formula, assignment.with(variable, value), depth + 1) {
                return Some(model);
            }
        }
        None
    }
}

// Only called on a non-empty formula without empty clauses, so this always
// finds a literal.
fn decide(formula: &Formula) -> Option<Literal> {
    formula.first_clause()?.literals().next().copied()
}
