mod audio_sink;
mod sounds_service;
mod sounds_service_impl;

pub use audio_sink::*;
pub use sounds_service::*;
pub use sounds_service_impl::*;
