mod error;
mod event_store;
mod feed_repository;
mod members_repository;

pub use error::*;
pub use event_store::*;
pub use feed_repository::*;
pub use members_repository::*;
