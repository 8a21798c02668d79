use std::marker::PhantomData;

use super::StorageKey;

/// Generates a sequence of distinct [`StorageKey`]s; a key is never handed out twice.
#[derive(Clone, Copy, Debug)]
pub struct KeyGenerator<Key> {
    key: PhantomData<Key>,
    counter: usize,
}

impl<Key> Default for KeyGenerator<Key> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            counter: 0,
        }
    }
}

impl<Key: StorageKey> KeyGenerator<Key> {
    /// Generate a new `Key`.
    pub fn next_key(&mut self) -> Key {
        let key = Key::create_from_index(self.counter);
        self.counter += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_handed_out_in_sequence() {
        let mut generator = KeyGenerator::<usize>::default();

        assert_eq!(0, generator.next_key());
        assert_eq!(1, generator.next_key());
        assert_eq!(2, generator.next_key());
    }
}
