//! Controller layer: explicit state objects with pure transition functions,
//! one per interaction unit.

pub mod carousel;
pub mod events;
pub mod menu;
pub mod orchestration;
pub mod submission;
