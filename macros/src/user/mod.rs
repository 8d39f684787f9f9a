//! User-facing macro implementations

pub mod name;
