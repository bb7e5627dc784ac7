mod buf;
mod key;
mod interpolator;
mod search;


use {
    buf::KeyBuffer,
    thiserror::Error,
};

#[cfg(not(feature = "player"))]
use tracing::{debug, trace};

pub use {
    key::{
        Policy,
        TrackKey,
        POLICY_COUNT,
    },
    search::{
        locate,
        Location,
    },
    interpolator::interpolate,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unable to grow key storage to {requested} keys")]
    AllocationFailure { requested: usize },
    #[error("no key at position {position}")]
    KeyNotFound { position: i32 },
    #[error("invalid interpolation policy code {0}")]
    InvalidPolicy(u8),
}

/// Sorted set of keys driving one parameter.
///
/// Keys are kept strictly ascending by position at all times.
#[derive(Debug, Clone, Default)]
pub struct Track {
    name: String,
    keys: KeyBuffer,
}

impl Track {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            keys: KeyBuffer::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[TrackKey] {
        self.keys.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackKey> {
        self.keys().iter()
    }

    pub fn key(&self, index: usize) -> Option<&TrackKey> {
        self.keys.get(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn locate(&self, position: i32) -> Location {
        locate(self.keys(), position)
    }

    /// Index of the latest key at or before `position`.
    pub fn floor_index(&self, position: i32) -> Option<usize> {
        self.locate(position).floor_index()
    }

    pub fn has_key(&self, position: i32) -> bool {
        self.locate(position).is_found()
    }

    /// Interpolated value at a fractional `position`.
    ///
    /// An empty track yields `0`. Before the first key the first value is
    /// returned, at or after the last key the last value.
    pub fn value_at(&self, position: f64) -> i32 {
        let keys = self.keys();

        let (first, last) = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0,
        };

        let index = match self.floor_index(position.floor() as i32) {
            Some(index) => index,
            None => return first.value,
        };

        match keys.get(index + 1) {
            Some(next) => interpolate(&keys[index], next, position),
            None => last.value,
        }
    }

    /// Inserts `key`, or overwrites value and policy of the key already at
    /// its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the storage could not grow.
    /// The track is left untouched in that case.
    #[cfg(not(feature = "player"))]
    pub fn set_key(&mut self, key: TrackKey) -> Result<()> {
        match self.locate(key.position) {
            Location::Found(index) => {
                trace!(track = %self.name, position = key.position, "overwriting key");

                self.keys[index] = key;
            }
            Location::Insert(index) => {
                if let Err(buf::Error::Overflow(rejected)) = self.keys.try_insert(index, key) {
                    let requested = self.keys.len() + 1;
                    debug!(
                        track = %self.name,
                        position = rejected.position,
                        requested,
                        "key storage allocation failed"
                    );

                    return Err(Error::AllocationFailure { requested });
                }

                trace!(track = %self.name, position = key.position, index, "inserted key");
            }
        }

        Ok(())
    }

    /// Removes the key at exactly `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no key sits at `position`.
    #[cfg(not(feature = "player"))]
    pub fn del_key(&mut self, position: i32) -> Result<()> {
        match self.locate(position) {
            Location::Found(index) => {
                trace!(track = %self.name, position, index, "deleting key");
                self.keys.remove(index);

                Ok(())
            }
            Location::Insert(_) => {
                debug!(track = %self.name, position, "delete of missing key rejected");

                Err(Error::KeyNotFound { position })
            }
        }
    }
}

impl<'t> IntoIterator for &'t Track {
    type Item = &'t TrackKey;
    type IntoIter = std::slice::Iter<'t, TrackKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
