//! Shared constants for threadloom.

pub mod app;
pub mod generation;
