//! Bridge between the egui thread and the planning worker.

pub mod commands;
pub mod runtime;
