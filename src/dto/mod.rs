//!
//! Module with all dtos that are passed between the presentation
//! shell and the services
//!

pub mod input;
pub mod output;
