use log::trace;

use crate::basic_types::FmfError;
use crate::containers::KeyGenerator;
use crate::containers::StorageKey;
use crate::fmf_assert_eq_simple;

/// Identifies a single opened scope; identifiers are never reused, so a scope which is popped and
/// then opened again at the same level receives a different identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId {
    id: usize,
}

impl StorageKey for ScopeId {
    fn index(&self) -> usize {
        self.id
    }

    fn create_from_index(index: usize) -> Self {
        Self { id: index }
    }
}

/// The scope in which a write to a context-scoped container took place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeStamp {
    level: usize,
    scope: ScopeId,
}

impl ScopeStamp {
    pub fn level(&self) -> usize {
        self.level
    }
}

/// A push/pop stack of backtracking scopes.
///
/// Level 0 is the root scope, which is always open and can never be popped.
#[derive(Debug)]
pub struct Context {
    /// At index `i` the identifier of the scope which is open at level `i`.
    open_scopes: Vec<ScopeId>,
    scope_ids: KeyGenerator<ScopeId>,
}

impl Default for Context {
    fn default() -> Self {
        let mut scope_ids = KeyGenerator::default();
        let root = scope_ids.next_key();
        Self {
            open_scopes: vec![root],
            scope_ids,
        }
    }
}

impl Context {
    /// The number of scopes which are open on top of the root scope.
    pub fn level(&self) -> usize {
        self.open_scopes.len() - 1
    }

    /// Opens a new scope.
    pub fn push(&mut self) {
        let scope = self.scope_ids.next_key();
        self.open_scopes.push(scope);
        trace!("Pushed scope {scope:?} at level {}", self.level());
    }

    /// Closes the innermost scope.
    pub fn pop(&mut self) -> Result<(), FmfError> {
        if self.level() == 0 {
            return Err(FmfError::contract_violation("cannot pop the root scope"));
        }
        let _ = self.open_scopes.pop();
        trace!("Popped to level {}", self.level());
        Ok(())
    }

    /// Closes scopes until `level` is the current level.
    pub fn pop_to(&mut self, level: usize) -> Result<(), FmfError> {
        if level > self.level() {
            return Err(FmfError::illegal_argument(format!(
                "cannot pop to level {level}, the current level is {}",
                self.level()
            )));
        }
        self.open_scopes.truncate(level + 1);
        fmf_assert_eq_simple!(self.level(), level);
        trace!("Popped to level {level}");
        Ok(())
    }

    /// The stamp with which writes in the current scope are tagged.
    pub fn current_stamp(&self) -> ScopeStamp {
        let level = self.level();
        ScopeStamp {
            level,
            scope: self.open_scopes[level],
        }
    }

    /// Returns true if the scope identified by `stamp` has not been popped.
    pub fn is_live(&self, stamp: ScopeStamp) -> bool {
        self.open_scopes
            .get(stamp.level)
            .is_some_and(|&scope| scope == stamp.scope)
    }

    /// Checks that a write requested at `level` targets the current scope.
    pub(crate) fn check_write_level(&self, level: usize) -> Result<(), FmfError> {
        let current = self.level();
        if level < current {
            Err(FmfError::contract_violation(format!(
                "write at level {level} while level {current} is open"
            )))
        } else if level > current {
            Err(FmfError::illegal_argument(format!(
                "level {level} is not open, the current level is {current}"
            )))
        } else {
            Ok(())
        }
    }
}
