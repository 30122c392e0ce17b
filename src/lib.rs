pub mod core;

pub use crate::core::{
    Boundary, KeyRange, RangeBinarySearch, SearchError, SearchSpace, SortDirection,
    NOT_FOUND_INDEX,
};
