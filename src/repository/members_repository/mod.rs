mod in_memory_members_repository;
mod members_repository;

pub use in_memory_members_repository::*;
pub use members_repository::*;
