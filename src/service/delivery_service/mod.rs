mod delivery_service;
mod delivery_service_impl;

pub use delivery_service::*;
pub use delivery_service_impl::*;
