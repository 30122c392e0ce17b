pub mod boundary;
pub mod range_search;
