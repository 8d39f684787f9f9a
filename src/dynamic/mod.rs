//! # Layer 3: Runtime Named Tuples
//!
//! Same contract as [`ValuedTuple`](crate::ValuedTuple), with names held as
//! runtime [`Symbol`]s. Lookups scan the name list (O(N)), and every
//! failure the static layer reports at compile time is a `Result` here:
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`ConstructError::LengthMismatch`] | `new`, `with_shape` |
//! | [`ConstructError::InvalidNameKind`] | `new`, `from_entries` |
//! | [`ConstructError::MalformedEntry`] | `from_entries` |
//! | [`LookupError::NameNotFound`] | `get` |

mod error;
mod symbol;
mod tuple;

pub use error::{ConstructError, Leftover, LookupError};
pub use symbol::{is_name_token, Symbol};
pub use tuple::{Entry, NamedTuple, Shape};
