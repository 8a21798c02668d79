use std::iter::Rev;
use std::vec::Drain;

use crate::context::Context;
use crate::context::ScopeStamp;
use crate::fmf_assert_moderate;

/// An entry of a [`Trail`], tagged with the scope in which it was recorded.
#[derive(Clone, Debug)]
pub(crate) struct TrailEntry<T> {
    pub(crate) stamp: ScopeStamp,
    pub(crate) value: T,
}

/// An undo log whose entries are tagged with the scope they were recorded in.
///
/// Entries are only ever appended in the current scope of the [`Context`], so the entries whose
/// scope is still open always form a prefix of the trail. Backtracking therefore never needs to
/// scan history: the stale entries are exactly the tail which follows that prefix.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    entries: Vec<TrailEntry<T>>,
}

// We explicitly implement the Default and not as a macro, because we want to avoid imposing Default
// on the generic type T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            entries: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    /// The number of entries recorded in scopes which are still open.
    fn live_len(&self, context: &Context) -> usize {
        self.entries
            .partition_point(|entry| context.is_live(entry.stamp))
    }

    /// The entries recorded in scopes which are still open, oldest first.
    pub(crate) fn live_entries(&self, context: &Context) -> &[TrailEntry<T>] {
        &self.entries[..self.live_len(context)]
    }

    /// Removes the entries of scopes which have been popped, yielding them newest first.
    pub(crate) fn synchronise(&mut self, context: &Context) -> Rev<Drain<'_, TrailEntry<T>>> {
        let live_len = self.live_len(context);
        self.entries.drain(live_len..).rev()
    }

    /// Records `value` in the current scope of `context`.
    ///
    /// The trail must be synchronised with `context` before pushing.
    pub(crate) fn push(&mut self, context: &Context, value: T) {
        fmf_assert_moderate!(
            self.live_len(context) == self.entries.len(),
            "pushing onto a trail which still holds entries of popped scopes"
        );
        self.entries.push(TrailEntry {
            stamp: context.current_stamp(),
            value,
        })
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut TrailEntry<T>> {
        self.entries.last_mut()
    }
}
