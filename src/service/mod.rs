pub mod badges_service;
pub mod delivery_service;
pub mod moderation_service;
pub mod notifications_service;
pub mod sounds_service;
pub mod toasts_service;
pub mod unlocks_service;
