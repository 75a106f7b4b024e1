mod dto;
mod toasts_service;
mod toasts_service_impl;

pub use dto::*;
pub use toasts_service::*;
pub use toasts_service_impl::*;
