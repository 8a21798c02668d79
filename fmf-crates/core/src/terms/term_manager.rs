use std::fmt::Display;
use std::fmt::Formatter;

use log::trace;

use super::Sort;
use super::Term;
use super::TermId;
use crate::basic_types::FmfError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;

/// Creates and stores terms.
///
/// Every construction except [`TermManager::new_variable`] is hash-consed: building the same term
/// twice yields the same [`TermId`]. The constructors check sorts and reject ill-sorted arguments
/// with [`FmfError::IllegalArgument`].
#[derive(Debug, Default)]
pub struct TermManager {
    terms: KeyedVec<TermId, Term>,
    interned: HashMap<Term, TermId>,
}

impl TermManager {
    fn intern(&mut self, term: Term) -> TermId {
        if let Some(&id) = self.interned.get(&term) {
            return id;
        }

        let id = self.terms.push(term.clone());
        let _ = self.interned.insert(term, id);
        trace!("Created term {id}: {}", self.display(id));
        id
    }

    fn expect_sort(&self, term: TermId, sort: Sort, operator: &str) -> Result<(), FmfError> {
        let actual = self.sort(term);
        if actual == sort {
            Ok(())
        } else {
            Err(FmfError::illegal_argument(format!(
                "{operator} expects a {sort} argument but {} has sort {actual}",
                self.display(term)
            )))
        }
    }

    /// Creates a fresh variable.
    pub fn new_variable(&mut self, name: impl Into<String>, sort: Sort) -> TermId {
        self.terms.push(Term::Variable {
            name: name.into(),
            sort,
        })
    }

    pub fn integer(&mut self, value: i64) -> TermId {
        self.intern(Term::IntegerConstant(value))
    }

    pub fn string_constant(&mut self, value: &str) -> TermId {
        self.intern(Term::StringConstant(value.to_owned()))
    }

    /// `(str.len term)`
    pub fn string_length(&mut self, term: TermId) -> Result<TermId, FmfError> {
        self.expect_sort(term, Sort::String, "str.len")?;
        Ok(self.intern(Term::StringLength(term)))
    }

    /// `(str.++ t1 ... tn)`; the empty concatenation is `""` and a single argument is returned as
    /// is.
    pub fn concat(&mut self, terms: Vec<TermId>) -> Result<TermId, FmfError> {
        for &term in &terms {
            self.expect_sort(term, Sort::String, "str.++")?;
        }
        Ok(match terms.len() {
            0 => self.string_constant(""),
            1 => terms[0],
            _ => self.intern(Term::StringConcat(terms)),
        })
    }

    /// `(+ t1 ... tn)`; the empty sum is `0` and a single summand is returned as is.
    pub fn plus(&mut self, terms: Vec<TermId>) -> Result<TermId, FmfError> {
        for &term in &terms {
            self.expect_sort(term, Sort::Integer, "+")?;
        }
        Ok(match terms.len() {
            0 => self.integer(0),
            1 => terms[0],
            _ => self.intern(Term::Plus(terms)),
        })
    }

    /// `(<= lhs rhs)`
    pub fn less_or_equal(&mut self, lhs: TermId, rhs: TermId) -> Result<TermId, FmfError> {
        self.expect_sort(lhs, Sort::Integer, "<=")?;
        self.expect_sort(rhs, Sort::Integer, "<=")?;
        Ok(self.intern(Term::LessOrEqual { lhs, rhs }))
    }

    /// `(not term)`; a double negation is removed.
    pub fn not(&mut self, term: TermId) -> Result<TermId, FmfError> {
        self.expect_sort(term, Sort::Boolean, "not")?;
        if let Term::Not(negated) = self.terms[term] {
            return Ok(negated);
        }
        Ok(self.intern(Term::Not(term)))
    }

    /// # Panics
    /// If `term` was not created by this manager.
    pub fn term(&self, term: TermId) -> &Term {
        &self.terms[term]
    }

    pub fn sort(&self, term: TermId) -> Sort {
        self.terms[term].sort()
    }

    pub fn is_string(&self, term: TermId) -> bool {
        self.sort(term) == Sort::String
    }

    pub fn is_variable(&self, term: TermId) -> bool {
        matches!(self.terms[term], Term::Variable { .. })
    }

    /// The variables occurring in `term` (including `term` itself), in order of first occurrence.
    pub fn collect_variables(&self, term: TermId) -> Vec<TermId> {
        let mut variables = vec![];
        let mut visited: HashSet<TermId> = HashSet::default();
        let mut stack = vec![term];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }

            let node = &self.terms[current];
            if let Term::Variable { .. } = node {
                variables.push(current);
            }

            // Children are pushed in reverse so that they are visited left to right.
            let start = stack.len();
            node.for_each_child(|child| stack.push(child));
            stack[start..].reverse();
        }

        variables
    }

    /// Wraps `term` so that it is displayed in SMT-LIB syntax.
    pub fn display(&self, term: TermId) -> TermDisplay<'_> {
        TermDisplay {
            manager: self,
            term,
        }
    }
}

/// Displays a term in SMT-LIB syntax; see [`TermManager::display`].
#[derive(Clone, Copy, Debug)]
pub struct TermDisplay<'a> {
    manager: &'a TermManager,
    term: TermId,
}

impl TermDisplay<'_> {
    fn with(&self, term: TermId) -> Self {
        Self {
            manager: self.manager,
            term,
        }
    }

    fn write_application(
        &self,
        f: &mut Formatter<'_>,
        operator: &str,
        arguments: &[TermId],
    ) -> std::fmt::Result {
        write!(f, "({operator}")?;
        for &argument in arguments {
            write!(f, " {}", self.with(argument))?;
        }
        write!(f, ")")
    }
}

impl Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.manager.term(self.term) {
            Term::Variable { name, .. } => write!(f, "{name}"),
            Term::IntegerConstant(value) if *value < 0 => write!(f, "(- {})", value.unsigned_abs()),
            Term::IntegerConstant(value) => write!(f, "{value}"),
            Term::StringConstant(value) => write!(f, "\"{}\"", value.replace('"', "\"\"")),
            Term::StringLength(term) => self.write_application(f, "str.len", &[*term]),
            Term::StringConcat(terms) => self.write_application(f, "str.++", terms),
            Term::Plus(terms) => self.write_application(f, "+", terms),
            Term::LessOrEqual { lhs, rhs } => self.write_application(f, "<=", &[*lhs, *rhs]),
            Term::Not(term) => self.write_application(f, "not", &[*term]),
        }
    }
}
