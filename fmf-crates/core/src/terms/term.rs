use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;
use crate::fmf_assert_simple;

/// A handle to a term stored in a [`super::TermManager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId {
    id: u32,
}

impl StorageKey for TermId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        fmf_assert_simple!(
            index <= u32::MAX as usize,
            "the term arena is limited to u32::MAX + 1 terms"
        );
        Self { id: index as u32 }
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.id)
    }
}

/// The type of a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Boolean,
    Integer,
    String,
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sort::Boolean => write!(f, "Bool"),
            Sort::Integer => write!(f, "Int"),
            Sort::String => write!(f, "String"),
        }
    }
}

/// The node stored for a [`TermId`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// An uninterpreted constant of the given sort; every variable is distinct, even when two
    /// share a name.
    Variable { name: String, sort: Sort },
    IntegerConstant(i64),
    StringConstant(String),
    /// `(str.len s)`
    StringLength(TermId),
    /// `(str.++ s1 ... sn)` with at least two arguments.
    StringConcat(Vec<TermId>),
    /// `(+ n1 ... nk)` with at least two arguments.
    Plus(Vec<TermId>),
    /// `(<= lhs rhs)`
    LessOrEqual { lhs: TermId, rhs: TermId },
    Not(TermId),
}

impl Term {
    pub fn sort(&self) -> Sort {
        match self {
            Term::Variable { sort, .. } => *sort,
            Term::IntegerConstant(_) | Term::StringLength(_) | Term::Plus(_) => Sort::Integer,
            Term::StringConstant(_) | Term::StringConcat(_) => Sort::String,
            Term::LessOrEqual { .. } | Term::Not(_) => Sort::Boolean,
        }
    }

    /// Calls `f` on the direct subterms, left to right.
    pub fn for_each_child(&self, mut f: impl FnMut(TermId)) {
        match self {
            Term::Variable { .. } | Term::IntegerConstant(_) | Term::StringConstant(_) => {}
            Term::StringLength(term) | Term::Not(term) => f(*term),
            Term::StringConcat(terms) | Term::Plus(terms) => terms.iter().copied().for_each(f),
            Term::LessOrEqual { lhs, rhs } => {
                f(*lhs);
                f(*rhs);
            }
        }
    }
}
