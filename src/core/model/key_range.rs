use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Range;

/// The index reported in place of a result when the key does not occur in the search space.
pub const NOT_FOUND_INDEX: isize = -1;

/// KeyRange is the outcome of a range search: the closed run of indexes holding the key, or the
/// absence of the key.
///
/// - `Found { first, last }`: every index in `first..=last` holds the key, and the indexes just
///   outside of it (when they exist) do not. `first <= last` always holds.
/// - `NotFound`: the key does not occur in the search space.
///
/// The sentinel shape `[-1]` expected by index-list callers is produced by
/// [`KeyRange::to_sentinel_vec`]; it is never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyRange {
    Found { first: usize, last: usize },
    NotFound,
}

impl KeyRange {
    /// Creates a range holding a single index.
    pub fn single(idx: usize) -> KeyRange {
        KeyRange::Found {
            first: idx,
            last: idx,
        }
    }

    /// Returns true if the key was found at least once.
    pub fn is_found(&self) -> bool {
        matches!(self, KeyRange::Found { .. })
    }

    /// Returns the index of the first occurrence of the key, if any.
    pub fn first(&self) -> Option<usize> {
        match self {
            KeyRange::Found { first, .. } => Some(*first),
            KeyRange::NotFound => None,
        }
    }

    /// Returns the index of the last occurrence of the key, if any.
    pub fn last(&self) -> Option<usize> {
        match self {
            KeyRange::Found { last, .. } => Some(*last),
            KeyRange::NotFound => None,
        }
    }

    /// Returns the number of occurrences of the key.
    pub fn len(&self) -> usize {
        match self {
            KeyRange::Found { first, last } => last - first + 1,
            KeyRange::NotFound => 0,
        }
    }

    /// Returns true if the key does not occur at all.
    pub fn is_empty(&self) -> bool {
        !self.is_found()
    }

    /// Returns true if `idx` holds the key.
    pub fn contains(&self, idx: usize) -> bool {
        match self {
            KeyRange::Found { first, last } => *first <= idx && idx <= *last,
            KeyRange::NotFound => false,
        }
    }

    /// Returns the matching indexes in ascending order. Empty when the key was not found.
    pub fn indexes(&self) -> Range<usize> {
        match self {
            KeyRange::Found { first, last } => *first..*last + 1,
            KeyRange::NotFound => 0..0,
        }
    }

    /// Converts the range into the index-list shape: the ascending list of matching indexes, or
    /// the single-element list `[NOT_FOUND_INDEX]` when the key is absent.
    ///
    /// The list is generated from the two boundaries; the search space is not read again.
    /// Indexes of in-memory search spaces never exceed `isize::MAX`.
    pub fn to_sentinel_vec(&self) -> Vec<isize> {
        match self {
            KeyRange::Found { .. } => self.indexes().map(|idx| idx as isize).collect(),
            KeyRange::NotFound => vec![NOT_FOUND_INDEX],
        }
    }
}

impl From<KeyRange> for Vec<isize> {
    fn from(range: KeyRange) -> Self {
        range.to_sentinel_vec()
    }
}

impl From<KeyRange> for Option<(usize, usize)> {
    fn from(range: KeyRange) -> Self {
        match range {
            KeyRange::Found { first, last } => Some((first, last)),
            KeyRange::NotFound => None,
        }
    }
}

/// Prints the range in its index-list shape, e.g. `[6, 7, 8, 9]` or `[-1]`.
impl Display for KeyRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, idx) in self.to_sentinel_vec().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{idx}")?;
        }
        write!(f, "]")
    }
}
