//! Letter notation: an uppercase letter is a positive literal, the same letter
//! in lowercase is its negation. A clause is written as a string of letters
//! (`"Ab"` is `A | !B`), and the empty string is the empty clause.

use crate::formula::{Clause, Formula, Literal, Variable};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub fn parse<'a>(clauses: impl IntoIterator<Item = &'a str>) -> Result<Formula, NotationError> {
    let clauses = clauses
        .into_iter()
        .enumerate()
        .map(|(idx, clause)| parse_clause(clause).map_err(|e| e.in_clause(idx + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Formula::new(clauses))
}

/// Whitespace between letters is ignored.
pub fn parse_clause(s: &str) -> Result<Clause, NotationError> {
    let literals = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(parse_literal)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Clause::new(literals))
}

pub fn parse_literal(c: char) -> Result<Literal, NotationError> {
    let invalid = || NotationError::InvalidVariable {
        character: c,
        clause: None,
    };
    if c.is_ascii_uppercase() {
        Variable::new(c).map(Literal::Positive).ok_or_else(invalid)
    } else if c.is_ascii_lowercase() {
        Variable::new(c.to_ascii_uppercase())
            .map(Literal::Negative)
            .ok_or_else(invalid)
    } else {
        Err(invalid())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum NotationError {
    /// `clause` is the 1-based position of the offending clause, when known.
    InvalidVariable { character: char, clause: Option<usize> },
}

impl NotationError {
    fn in_clause(self, idx: usize) -> Self {
        match self {
            NotationError::InvalidVariable { character, .. } => NotationError::InvalidVariable {
                character,
                clause: Some(idx),
            },
        }
    }
}

impl Display for NotationError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NotationError::InvalidVariable {
                character,
                clause: Some(idx),
            } => write!(f, "invalid variable {:?} in clause {}", character, idx),
            NotationError::InvalidVariable { character, clause: None } => {
                write!(f, "invalid variable {:?}", character)
            }
        }
    }
}

impl Error for NotationError {}
