/// SearchSpace is an indexed, random-access view over a sorted sequence.
///
/// The range search only ever reads elements by index, so anything that can answer "how many
/// elements" and "which element is at position i" can be searched without first being copied into
/// a contiguous buffer. Indexes are 0-based and `elem` is only called with `idx < len()`.
pub trait SearchSpace {
    type Elem: Ord;

    /// Returns the number of elements in the search space.
    fn len(&self) -> usize;

    /// Returns the element at the given index.
    fn elem(&self, idx: usize) -> Self::Elem;

    /// Returns true if the search space holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord + Copy> SearchSpace for [T] {
    type Elem = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn elem(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Ord + Copy, const N: usize> SearchSpace for [T; N] {
    type Elem = T;

    fn len(&self) -> usize {
        N
    }

    fn elem(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Ord + Copy> SearchSpace for Vec<T> {
    type Elem = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn elem(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<S: SearchSpace + ?Sized> SearchSpace for &S {
    type Elem = S::Elem;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn elem(&self, idx: usize) -> S::Elem {
        (**self).elem(idx)
    }
}
