use std::fmt::Display;
use std::fmt::Formatter;

use super::Sort;
use super::TermId;
use super::TermManager;
use crate::basic_types::FmfError;
use crate::containers::HashMap;

/// Why a skolem was introduced for a string term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkolemPurpose {
    /// A variable standing for the term itself.
    Purify,
    /// A variable standing for a prefix of the term.
    Prefix,
    /// A variable standing for a suffix of the term.
    Suffix,
}

impl Display for SkolemPurpose {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SkolemPurpose::Purify => write!(f, "purify"),
            SkolemPurpose::Prefix => write!(f, "pre"),
            SkolemPurpose::Suffix => write!(f, "suf"),
        }
    }
}

/// Hands out one fresh string variable per (purpose, term) pair and returns the same variable
/// on every later request for that pair.
#[derive(Debug, Default)]
pub struct SkolemCache {
    skolems: HashMap<(SkolemPurpose, TermId), TermId>,
}

impl SkolemCache {
    pub fn skolem(
        &mut self,
        terms: &mut TermManager,
        purpose: SkolemPurpose,
        term: TermId,
    ) -> Result<TermId, FmfError> {
        if !terms.is_string(term) {
            return Err(FmfError::illegal_argument(format!(
                "skolems are only introduced for strings, not for {}",
                terms.display(term)
            )));
        }

        if let Some(&skolem) = self.skolems.get(&(purpose, term)) {
            return Ok(skolem);
        }

        let skolem = terms.new_variable(format!("@{purpose}_{}", self.skolems.len()), Sort::String);
        let _ = self.skolems.insert((purpose, term), skolem);
        Ok(skolem)
    }

    /// Returns true if `term` was introduced by this cache.
    pub fn is_skolem(&self, term: TermId) -> bool {
        self.skolems.values().any(|&skolem| skolem == term)
    }

    pub fn len(&self) -> usize {
        self.skolems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skolems.is_empty()
    }
}
