mod content_classifier;
mod moderation_service;
mod moderation_service_impl;

pub use content_classifier::*;
pub use moderation_service::*;
pub use moderation_service_impl::*;
