//! Shared utility helpers.

pub mod text_processing;
