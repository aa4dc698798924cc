//! Bridge between the egui thread and the backend worker that performs relay
//! submissions and image decoding.

pub mod commands;
pub mod runtime;
