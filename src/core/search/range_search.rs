use crate::core::error::SearchError;
use crate::core::model::direction::SortDirection;
use crate::core::model::key_range::KeyRange;
use crate::core::model::search_space::SearchSpace;
use crate::core::search::boundary::{find_boundary, Boundary};
use std::fmt;
use std::fmt::{Debug, Formatter};
use tracing::{Level, Span};

/// RangeBinarySearch finds every index at which a key occurs in a sorted search space.
///
/// The search space may be sorted ascending or descending (non-strictly); the direction is derived
/// from its endpoints on every search. Sortedness itself is not validated, and the result on an
/// unsorted search space is unspecified.
///
/// The engine holds only its constructor inputs and never mutates them, so searching is a pure
/// function of the instance: it can be repeated, and shared across threads whenever the search
/// space and key can be.
pub struct RangeBinarySearch<S: SearchSpace> {
    space: S,
    key: S::Elem,
    span: Span,
}

impl<S: SearchSpace> RangeBinarySearch<S> {
    /// Creates a new range search of `key` over `space`.
    ///
    /// An empty search space is valid and simply never contains the key. An absent one (`None`) is
    /// rejected with [`SearchError::InvalidArgument`], whatever the key.
    pub fn new(parent_span: &Span, space: Option<S>, key: S::Elem) -> anyhow::Result<Self> {
        let space = space.ok_or_else(|| {
            SearchError::InvalidArgument("search space must not be absent".to_string())
        })?;
        let span = tracing::span!(parent: parent_span, Level::TRACE, "range_binary_search");

        Ok(RangeBinarySearch { space, key, span })
    }

    /// Returns the key being searched for.
    pub fn key(&self) -> &S::Elem {
        &self.key
    }

    /// Returns the search space being searched.
    pub fn search_space(&self) -> &S {
        &self.space
    }

    /// Returns the sort direction of the search space, as derived from its endpoints.
    pub fn direction(&self) -> SortDirection {
        SortDirection::of(&self.space)
    }

    /// Locates the run of indexes holding the key.
    ///
    /// Two boundary searches are performed: one over the whole search space for the first
    /// occurrence, and one over the indexes after it for the last occurrence. The second one is
    /// skipped when the first occurrence is the final element. Both are logarithmic, so the whole
    /// call is `O(log n)` regardless of how many times the key repeats.
    pub fn find(&self) -> KeyRange {
        let _enter = self.span.enter();

        let len = self.space.len();
        let direction = self.direction();
        tracing::trace!("searching {} search space of {} elements", direction, len);

        let first = match find_boundary(&self.space, &self.key, 0, direction, Boundary::First) {
            Some(idx) => idx,
            None => {
                tracing::trace!("key not found");
                return KeyRange::NotFound;
            }
        };
        tracing::trace!("first occurrence at index {}", first);

        // the run cannot extend past the final element
        if first == len - 1 {
            return KeyRange::single(first);
        }

        let last = find_boundary(&self.space, &self.key, first + 1, direction, Boundary::Last)
            .unwrap_or(first);
        tracing::trace!("last occurrence at index {}", last);

        KeyRange::Found { first, last }
    }

    /// Returns the ascending list of indexes holding the key, or `[-1]` when the key is absent.
    ///
    /// This is [`RangeBinarySearch::find`] rendered through [`KeyRange::to_sentinel_vec`]; callers
    /// that prefer a tagged result should use `find` directly.
    pub fn search(&self) -> Vec<isize> {
        self.find().to_sentinel_vec()
    }
}

impl<S> Debug for RangeBinarySearch<S>
where
    S: SearchSpace,
    S::Elem: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeBinarySearch")
            .field("key", &self.key)
            .field("len", &self.space.len())
            .field("direction", &self.direction())
            .finish()
    }
}

impl<S> Clone for RangeBinarySearch<S>
where
    S: SearchSpace + Clone,
    S::Elem: Clone,
{
    fn clone(&self) -> Self {
        RangeBinarySearch {
            space: self.space.clone(),
            key: self.key.clone(),
            span: self.span.clone(),
        }
    }
}
