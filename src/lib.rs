//!
//! In-process notification and badge engine for the media club app.
//! State lives in memory and is restored from / exported to JSON
//! snapshots; presentation reads toasts, unlocks and the notification
//! center through the services in [ApplicationState].
//!
//! [ApplicationState]: application::ApplicationState
//!

pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod repository;
pub mod service;
pub mod session;
