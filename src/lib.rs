#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std::error::Error for the runtime errors

//! # valued-tuples
//!
//! Tuples whose slots carry names, with repeatable names, last-match
//! indexing, multi-match lookup, deletion and merge.
//!
//! ## Architecture
//!
//! ### 1. Names in the type
//! A name token is a unit struct. `#[derive(Name)]` spells its name as a
//! type-level **nibble stream** (two 4-bit digits per byte):
//!
//! ```text
//! struct ab; -> "ab" -> 0x61 0x62 -> Cons<X6, Cons<X1, Cons<X6, Cons<X2, End>>>>
//! ```
//!
//! ### 2. Comparison
//! Two names are equal when their streams are, nibble by nibble. The trait
//! solver evaluates this into `Present` / `Absent`, so a lookup by name is
//! resolved at compile time and the result type is exact even when every
//! slot holds a different type.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Nibble (X0-XF), NameStream              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Names                                                   |
//! |  - Name, NameEq, #[derive(Name)], names!                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: ValuedTuple (static)                                    |
//! |  - Attach, Get, MatchIndex, Delete, Append                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: NamedTuple (runtime)                                    |
//! |  - Symbol, Shape, ConstructError, LookupError                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use valued_tuples::prelude::*;
//!
//! names!(a, b, c, d);
//!
//! let v = ValuedTuple::new((1, 2, 3), (a, b, a));
//! assert_eq!(v[a], 3);                       // last match wins
//! assert_eq!(v.match_index(a), [0, 2]);      // every match
//! assert_eq!(ValuedTuple::new((1,), (a,)).merge(ValuedTuple::new(("x",), (b,))).to_string(),
//!            r#"(a = 1, b = "x")"#);
//!
//! // Same contract, names checked at runtime:
//! let t = NamedTuple::new([1, 2, 3], ["a", "b", "a"])?;
//! assert_eq!(t.get("a")?, &3);
//! ```

// Allow `::valued_tuples` to work inside the crate itself
extern crate self as valued_tuples;

extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Names
// =============================================================================
pub mod name;

// =============================================================================
// Layer 2: Static valued tuples
// =============================================================================
pub mod tuple;

// =============================================================================
// Layer 3: Runtime named tuples
// =============================================================================
pub mod dynamic;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use name::{Name, NameEq};
pub use tuple::{ValuedTuple, ValueNames, value_names, value_names_of};
pub use dynamic::{NamedTuple, Shape, Symbol, Entry, ConstructError, LookupError, Leftover};

// Re-export proc-macros
pub use macros::{Name, name_stream};

/// Common items for valued tuples.
pub mod prelude {
    pub use crate::name::Name;
    pub use crate::tuple::{ValuedTuple, value_names, value_names_of};
    pub use crate::dynamic::{NamedTuple, Symbol, Entry};
    pub use macros::Name;
    // Note: names! is #[macro_export] so it's at crate root
    pub use crate::names;
}
