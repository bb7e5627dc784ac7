use crate::TrackKey;

/// Result of looking a position up in a sorted key sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A key sits exactly at the position.
    Found(usize),
    /// No key at the position; a new one would be inserted at this index.
    Insert(usize),
}

impl Location {
    pub fn index(self) -> usize {
        match self {
            Self::Found(index) | Self::Insert(index) => index,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Index of the latest key at or before the searched position,
    /// `None` if the position is before the first key.
    pub fn floor_index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Insert(index) => index.checked_sub(1),
        }
    }
}

/// Binary search over `keys`, which must be sorted by position.
pub fn locate(keys: &[TrackKey], position: i32) -> Location {
    let mut left = 0;
    let mut right = keys.len();

    while left < right {
        let middle = left + (right - left) / 2;
        let middle_position = keys[middle].position;

        if middle_position < position {
            left = middle + 1;
        } else if middle_position > position {
            right = middle;
        } else {
            return Location::Found(middle);
        }
    }

    Location::Insert(left)
}
