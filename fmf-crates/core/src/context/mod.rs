//! Backtrackable state.
//!
//! A [`Context`] is a stack of nested scopes which the search engine pushes when it enters a
//! branch and pops when it abandons one. It owns no data; it is the clock which context-scoped
//! containers consult on every read and write:
//! - a [`ContextCell`] holds a single value and reverts to the value of an enclosing scope when
//!   the scope of its latest write is popped;
//! - a [`ContextSet`] is an insert-only set whose elements disappear when the scope in which they
//!   were inserted is popped.
//!
//! Rollback never relies on anybody remembering to notify the containers: every entry is tagged
//! with the [`ScopeStamp`] of the scope it was recorded in, and entries of popped scopes are
//! ignored on reads and discarded on the next write (or an explicit `synchronise`).
mod context_cell;
mod context_set;
#[allow(
    clippy::module_inception,
    reason = "the scope stack is the central type of this module"
)]
mod context;

pub use context::Context;
pub use context::ScopeId;
pub use context::ScopeStamp;
pub use context_cell::ContextCell;
pub use context_set::ContextSet;
