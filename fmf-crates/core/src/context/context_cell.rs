use super::Context;
use crate::basic_types::FmfError;
use crate::basic_types::Trail;

/// A single value whose writes are undone when the scope in which they were made is popped.
///
/// A read returns the value of the most recent write whose scope is still open in the
/// [`Context`], or the initial value if there is none. At most one write is kept per open scope.
#[derive(Clone, Debug)]
pub struct ContextCell<T> {
    initial: T,
    trail: Trail<T>,
}

impl<T: Default> Default for ContextCell<T> {
    fn default() -> Self {
        ContextCell::new(T::default())
    }
}

impl<T> ContextCell<T> {
    /// Creates a cell which holds `initial` in every scope in which it has not been written.
    pub fn new(initial: T) -> Self {
        Self {
            initial,
            trail: Trail::default(),
        }
    }

    pub fn get<'a>(&'a self, context: &Context) -> &'a T {
        self.trail
            .live_entries(context)
            .last()
            .map_or(&self.initial, |entry| &entry.value)
    }

    /// Writes `value` in the current scope of `context`.
    pub fn set(&mut self, context: &Context, value: T) {
        self.synchronise(context);

        let stamp = context.current_stamp();
        match self.trail.last_mut() {
            Some(entry) if entry.stamp == stamp => entry.value = value,
            _ => self.trail.push(context, value),
        }
    }

    /// Writes `value` at `level`, which has to be the current level of `context`.
    pub fn write(&mut self, context: &Context, level: usize, value: T) -> Result<(), FmfError> {
        context.check_write_level(level)?;
        self.set(context, value);
        Ok(())
    }

    /// Discards the writes made in scopes which have been popped.
    pub fn synchronise(&mut self, context: &Context) {
        let _ = self.trail.synchronise(context);
    }
}

impl<T: Copy> ContextCell<T> {
    /// Returns a copy of the current value.
    pub fn read(&self, context: &Context) -> T {
        *self.get(context)
    }
}
