use crate::core::model::direction::SortDirection;
use crate::core::model::search_space::SearchSpace;

/// Boundary selects which end of a run of equal elements a boundary search converges on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// The lowest index holding the key.
    First,
    /// The highest index holding the key.
    Last,
}

/// Binary searches `space[low_start..]` for the outermost index holding `key`.
///
/// Unlike a plain binary search, a match does not end the search: the match is recorded and the
/// search carries on into the left half (for [`Boundary::First`]) or the right half (for
/// [`Boundary::Last`]) until the window is empty, so the last recorded match is the boundary of the
/// run. Whether a mismatch discards the left or the right half is decided by
/// [`SortDirection::reduces`], so the same loop serves ascending and descending search spaces.
///
/// Returns `None` if the key does not occur in `space[low_start..]`, including when `low_start` is
/// at or past the end of the search space.
///
/// Reads at most `O(log(n - low_start))` elements.
pub fn find_boundary<S>(
    space: &S,
    key: &S::Elem,
    low_start: usize,
    direction: SortDirection,
    boundary: Boundary,
) -> Option<usize>
where
    S: SearchSpace + ?Sized,
{
    // window is [low, high); an exclusive upper bound keeps `high` from underflowing at index 0.
    let mut low = low_start;
    let mut high = space.len();
    let mut result = None;

    while low < high {
        let mid = low + (high - low) / 2;
        let elem = space.elem(mid);
        if elem == *key {
            result = Some(mid);
            match boundary {
                Boundary::First => high = mid,
                Boundary::Last => low = mid + 1,
            }
        } else if direction.reduces(key, &elem) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    result
}
