//! # Layer 0: Primitives
//!
//! Basic building blocks for type-level names:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Finite nibble streams and their equality.

pub mod bool;
pub mod nibble;
pub mod stream;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{NameStream, StreamEq, Cons, End};
