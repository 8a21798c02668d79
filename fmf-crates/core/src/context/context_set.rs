use std::hash::Hash;

use super::Context;
use super::ScopeStamp;
use crate::basic_types::FmfError;
use crate::basic_types::Trail;
use crate::containers::HashMap;

/// An insert-only set whose elements are removed again when the scope in which they were inserted
/// is popped.
///
/// Membership does not depend on the level at which it is queried: an element is a member as long
/// as the scope in which it was inserted is open. An element which was evicted by a pop can be
/// inserted again. There is no explicit removal.
#[derive(Clone, Debug)]
pub struct ContextSet<T> {
    /// Maps every recorded element to the scope in which it was inserted.
    members: HashMap<T, ScopeStamp>,
    /// The insertions in chronological order; used both for eviction and for iterating in
    /// insertion order.
    trail: Trail<T>,
}

impl<T> Default for ContextSet<T> {
    fn default() -> Self {
        Self {
            members: HashMap::default(),
            trail: Trail::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> ContextSet<T> {
    pub fn contains(&self, context: &Context, element: &T) -> bool {
        self.members
            .get(element)
            .is_some_and(|&stamp| context.is_live(stamp))
    }

    /// Inserts `element` in the current scope of `context`.
    ///
    /// Returns false (and does nothing) if the element is already a member.
    pub fn insert(&mut self, context: &Context, element: T) -> bool {
        self.synchronise(context);

        if self.members.contains_key(&element) {
            return false;
        }

        let _ = self
            .members
            .insert(element.clone(), context.current_stamp());
        self.trail.push(context, element);
        true
    }

    /// Inserts `element` at `level`, which has to be the current level of `context`.
    pub fn insert_at(
        &mut self,
        context: &Context,
        level: usize,
        element: T,
    ) -> Result<bool, FmfError> {
        context.check_write_level(level)?;
        Ok(self.insert(context, element))
    }

    /// Evicts the elements inserted in scopes which have been popped.
    pub fn synchronise(&mut self, context: &Context) {
        self.trail.synchronise(context).for_each(|entry| {
            let _ = self.members.remove(&entry.value);
        });
    }

    /// The members in the order in which they were inserted.
    pub fn iter<'a>(&'a self, context: &Context) -> impl Iterator<Item = &'a T> + 'a {
        self.trail
            .live_entries(context)
            .iter()
            .map(|entry| &entry.value)
    }

    pub fn len(&self, context: &Context) -> usize {
        self.trail.live_entries(context).len()
    }

    pub fn is_empty(&self, context: &Context) -> bool {
        self.len(context) == 0
    }
}
