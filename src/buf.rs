#![cfg_attr(feature = "player", allow(dead_code))]

use {
    std::ops::{Index, IndexMut},
    crate::TrackKey,
};

pub type Result<T> = std::result::Result<(), Error<T>>;

#[derive(Debug)]
pub enum Error<T> {
    /// Storage could not grow; the rejected element is handed back.
    Overflow(T),
}

/// Track internal buffer (sorted key storage)
#[derive(Debug, Clone, Default)]
pub struct KeyBuffer {
    inner: Vec<TrackKey>,
    #[cfg(test)]
    limit: Option<usize>,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self {
            inner: Vec::new(),
            #[cfg(test)]
            limit: None,
        }
    }

    /// Buffer that refuses to grow past `limit` keys.
    #[cfg(test)]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            inner: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn as_slice(&self) -> &[TrackKey] {
        &self.inner
    }

    pub fn get(&self, index: usize) -> Option<&TrackKey> {
        self.inner.get(index)
    }

    /// Inserts `key` at `index`, shifting the tail right.
    ///
    /// Room for the new element is reserved before anything moves, so a
    /// failed allocation leaves the buffer exactly as it was.
    pub fn try_insert(&mut self, index: usize, key: TrackKey) -> Result<TrackKey> {
        debug_assert!(index <= self.len());

        if self.is_full() || self.inner.try_reserve(1).is_err() {
            return Err(Error::Overflow(key));
        }

        self.inner.insert(index, key);

        Ok(())
    }

    /// Removes the key at `index`, shifting the tail left.
    ///
    /// Shrinking never fails. Storage is released once the buffer is empty.
    pub fn remove(&mut self, index: usize) -> TrackKey {
        let removed = self.inner.remove(index);

        if self.inner.is_empty() {
            self.inner = Vec::new();
        }

        removed
    }

    #[cfg(test)]
    fn is_full(&self) -> bool {
        self.limit.map_or(false, |limit| self.inner.len() >= limit)
    }

    #[cfg(not(test))]
    fn is_full(&self) -> bool {
        false
    }
}

impl Index<usize> for KeyBuffer {
    type Output = TrackKey;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for KeyBuffer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}
