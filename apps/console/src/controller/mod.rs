//! Controller layer: console commands and screen orchestration.

pub mod events;
pub mod orchestration;
