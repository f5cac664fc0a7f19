use crate::formula::{Clause, Formula, Literal, Variable};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// A partial truth assignment, keyed by variable.
///
/// An entry `A -> v` fixes the positive literal `A` to `v` and the negative
/// literal `a` to `!v`, so a literal and its complement always carry opposite
/// values. Entries are never removed. [`Assignment::with`] returns an extended
/// copy, leaving `self` as it was, which is what keeps the two branches of a
/// decision apart.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Assignment {
    values: BTreeMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of `self` that also maps `variable` to `value`.
    pub fn with(&self, variable: Variable, value: bool) -> Self {
        let mut extended = self.clone();
        extended.values.insert(variable, value);
        extended
    }

    pub fn get(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    /// `None` when the literal's variable is undecided.
    pub fn value_of(&self, literal: &Literal) -> Option<bool> {
        self.get(literal.variable()).map(|value| literal.value_under(value))
    }

    /// Decided variables in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values.iter().map(|(v, value)| (*v, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if some literal of `clause` is true. Undecided literals do not
    /// count.
    pub fn satisfies_clause(&self, clause: &Clause) -> bool {
        clause.literals().any(|literal| self.value_of(literal) == Some(true))
    }

    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.clauses().all(|clause| self.satisfies_clause(clause))
    }
}

impl std::iter::FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for (variable, value) in self.iter() {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{} = {}", variable.name(), value)?;
        }
        Ok(())
    }
}
