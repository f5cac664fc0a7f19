use crate::assignment::Assignment;
use crate::formula::{Formula, Literal};

/// Applies `assignment` to `formula`: clauses with a true literal are dropped,
/// false literals are dropped from the clauses that remain. Undecided
/// literals are left alone and surviving clauses keep their order.
///
/// The result is empty when the assignment satisfies every clause, and holds
/// an empty clause when it falsifies one.
pub fn simplify(formula: &Formula, assignment: &Assignment) -> Formula {
    let mut clauses = formula.clone().into_clauses();
    for (variable, value) in assignment.iter() {
        let pos = Literal::Positive(variable);
        let neg = Literal::Negative(variable);
        let (satisfied, falsified) = if value { (pos, neg) } else { (neg, pos) };

        clauses = clauses
            .into_iter()
            .filter_map(|mut clause| {
                if clause.contains(&satisfied) {
                    None
                } else {
                    clause.remove(&falsified);
                    Some(clause)
                }
            })
            .collect();
    }
    Formula::new(clauses)
}

/// True iff some clause has no literals left. An empty formula is not
/// contradictory.
pub fn is_contradictory(formula: &Formula) -> bool {
    formula.clauses().any(|clause| clause.is_empty())
}
