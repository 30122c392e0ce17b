pub mod direction;
pub mod key_range;
pub mod search_space;
