//! Internal expansion helpers shared by the user-facing macros.

pub mod name_stream;
