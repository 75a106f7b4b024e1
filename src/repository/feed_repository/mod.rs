mod feed_repository;
mod in_memory_feed_repository;

pub use feed_repository::*;
pub use in_memory_feed_repository::*;
