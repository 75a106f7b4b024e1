mod unlocks_service;
mod unlocks_service_impl;

pub use unlocks_service::*;
pub use unlocks_service_impl::*;
