//!
//! Module with records shared between repositories and services
//!

mod badge;
mod feed;
mod member;
mod notification;
mod snapshot;

pub use badge::*;
pub use feed::*;
pub use member::*;
pub use notification::*;
pub use snapshot::*;
