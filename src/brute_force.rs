use crate::*;

// Simple brute-force implementation for use in proptest
#[cfg(test)]
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let variables = f.variables().into_iter().collect::<Vec<_>>();
    assert!(variables.len() <= 15); // just for safety

    for bits in 0..2u32.pow(variables.len() as u32) {
        let assignment = variables
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, bits & (1 << i) != 0))
            .collect::<Assignment>();
        // every clause needs a true literal; an empty clause never has one
        if assignment.satisfies(f) {
            return SatResult::Satisfiable(assignment);
        }
    }
    // no assignment is valid
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn solve_unit_sat() {
        let c1 = Clause::new(vec![p('A'), p('B')]);
        let c2 = Clause::new(vec![n('A')]);
        let f = Formula::new(vec![c1, c2]);

        assert!(solve_brute_force(&f).is_satisfiable());
    }

    #[test]
    fn solve_conflict_unsat() {
        let c1 = Clause::new(vec![p('A'), p('B')]);
        let c2 = Clause::new(vec![n('A')]);
        let c3 = Clause::new(vec![n('B')]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_trivial() {
        assert_eq!(
            solve_brute_force(&Formula::default()),
            SatResult::Satisfiable(Assignment::new())
        );
        let f = Formula::new(vec![Clause::default()]);
        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }
}
