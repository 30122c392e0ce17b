pub mod error;
pub mod model;
mod search;

pub use crate::core::error::SearchError;
pub use crate::core::model::direction::SortDirection;
pub use crate::core::model::key_range::{KeyRange, NOT_FOUND_INDEX};
pub use crate::core::model::search_space::SearchSpace;
pub use crate::core::search::boundary::{find_boundary, Boundary};
pub use crate::core::search::range_search::RangeBinarySearch;
