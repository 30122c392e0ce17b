use crate::core::model::search_space::SearchSpace;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Represents the order in which a search space is sorted.
///
/// The direction is never stored alongside the data; it is derived from the two endpoints of the
/// search space every time a search is performed (see [`SortDirection::of`]).
#[derive(Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[allow(useless_deprecated)]
impl Clone for SortDirection {
    #[deprecated(note = "This type is Copy; prefer implicit copying instead of .clone()")]
    fn clone(&self) -> Self {
        *self
    }
}

impl SortDirection {
    /// Derives the sort direction of the given search space from its endpoints.
    /// A search space with at most one element, or whose first element is less than or equal to its
    /// last element, is `Ascending`. Otherwise, it is `Descending`.
    pub fn of<S>(space: &S) -> SortDirection
    where
        S: SearchSpace + ?Sized,
    {
        let len = space.len();
        if len > 1 && space.elem(0) > space.elem(len - 1) {
            return SortDirection::Descending;
        }
        SortDirection::Ascending
    }

    /// Returns true if, given `key` and the element at the middle of the current search window,
    /// the right half of the window can be discarded.
    ///
    /// - Ascending: the key lies to the left when it is smaller than the middle element.
    /// - Descending: the key lies to the left when it is greater than the middle element.
    pub fn reduces<T: Ord>(&self, key: &T, mid: &T) -> bool {
        match self {
            SortDirection::Ascending => key < mid,
            SortDirection::Descending => key > mid,
        }
    }

    /// Returns the direction of the same search space read back to front.
    pub fn reverse(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}
