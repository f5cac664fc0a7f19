pub mod notation;

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// A propositional variable, one of the letters `A` through `Z`.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(char);

impl Variable {
    /// Returns `None` unless `name` is an uppercase ASCII letter.
    pub fn new(name: char) -> Option<Self> {
        if name.is_ascii_uppercase() {
            Some(Variable(name))
        } else {
            None
        }
    }

    pub fn name(&self) -> char {
        self.0
    }
}

// Positive sorts before Negative, so a clause iterates `A, B, a, b`.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> Variable {
        match self {
            Literal::Positive(v) => *v,
            Literal::Negative(v) => *v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }

    /// The positive literal of this literal's variable.
    pub fn positive(&self) -> Self {
        Literal::Positive(self.variable())
    }

    /// The negative literal of this literal's variable.
    pub fn negative(&self) -> Self {
        Literal::Negative(self.variable())
    }

    /// Truth value of this literal when its variable is `value`.
    pub fn value_under(&self, value: bool) -> bool {
        value == self.is_positive()
    }

    pub fn same_variable(&self, other: &Literal) -> bool {
        self.variable() == other.variable()
    }

    pub fn is_complement_of(&self, other: &Literal) -> bool {
        *self == other.negated()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(v) => write!(f, "{}", v.0),
            Literal::Negative(v) => write!(f, "{}", v.0.to_ascii_lowercase()),
        }
    }
}

/// A disjunction of literals. Duplicates collapse; iteration order is the
/// literal ordering, not insertion order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub(crate) fn remove(&mut self, literal: &Literal) {
        self.literals.remove(literal);
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("false");
        }
        if self.literals.len() > 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in &self.literals {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A conjunction of clauses. Clause order is kept because the search
/// branches on the first clause.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn first_clause(&self) -> Option<&Clause> {
        self.clauses.first()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Every variable mentioned in some clause, in alphabetical order.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals().map(|literal| literal.variable()))
            .collect()
    }

    pub(crate) fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.clauses.is_empty() {
            return f.write_str("true");
        }
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn var(name: char) -> Variable {
    Variable::new(name).expect("test variables are uppercase letters")
}

#[cfg(test)]
pub(crate) fn p(name: char) -> Literal {
    Literal::Positive(var(name))
}

#[cfg(test)]
pub(crate) fn n(name: char) -> Literal {
    Literal::Negative(var(name))
}

/// Random formulas over `A..=F` with clauses of up to three literals. Empty
/// clauses and the empty formula are both possible.
#[cfg(test)]
pub(crate) fn formula_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    let literal = (0u8..6, any::<bool>()).prop_map(|(offset, positive)| {
        let variable = var((b'A' + offset) as char);
        if positive {
            Literal::Positive(variable)
        } else {
            Literal::Negative(variable)
        }
    });
    let clause = proptest::collection::vec(literal, 0..=3).prop_map(Clause::new);
    proptest::collection::vec(clause, 0..10).prop_map(Formula::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_rejects_non_uppercase() {
        assert!(Variable::new('a').is_none());
        assert!(Variable::new('1').is_none());
        assert!(Variable::new('É').is_none());
        assert_eq!(Variable::new('Q').map(|v| v.name()), Some('Q'));
    }

    #[test]
    fn literal_forms() {
        assert_eq!(n('A').positive(), p('A'));
        assert_eq!(p('A').negative(), n('A'));
        assert_eq!(p('A').negated(), n('A'));
        assert_eq!(n('A').negated(), p('A'));
        assert!(p('A').same_variable(&n('A')));
        assert!(!p('A').same_variable(&p('B')));
        assert!(p('A').is_complement_of(&n('A')));
        assert!(!p('A').is_complement_of(&p('A')));
        assert!(!p('A').is_complement_of(&n('B')));
    }

    #[test]
    fn literal_value_under() {
        assert!(p('A').value_under(true));
        assert!(!p('A').value_under(false));
        assert!(!n('A').value_under(true));
        assert!(n('A').value_under(false));
    }

    #[test]
    fn clause_is_a_sorted_set() {
        let c = Clause::new(vec![n('B'), p('B'), n('A'), n('B'), p('A')]);
        assert_eq!(c.len(), 4);
        assert_eq!(
            c.literals().cloned().collect::<Vec<_>>(),
            vec![p('A'), p('B'), n('A'), n('B')]
        );
    }

    #[test]
    fn formula_variables() {
        let f = Formula::new(vec![
            Clause::new(vec![n('C'), p('A')]),
            Clause::new(vec![]),
            Clause::new(vec![n('A')]),
        ]);
        assert_eq!(f.variables().into_iter().collect::<Vec<_>>(), vec![var('A'), var('C')]);
    }

    #[test]
    fn display() {
        let f = Formula::new(vec![
            Clause::new(vec![p('A'), n('B')]),
            Clause::new(vec![n('A')]),
            Clause::new(vec![]),
        ]);
        assert_eq!(f.to_string(), "(A | b) & a & false");
        assert_eq!(Formula::default().to_string(), "true");
    }
}
