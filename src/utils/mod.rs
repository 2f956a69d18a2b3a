//! Shared helpers for reading documents and resolving paths.

pub mod document;
pub mod path;
