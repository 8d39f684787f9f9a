//! # Layer 2: Valued Tuples
//!
//! A valued tuple is a cons list of slots, each slot holding one value and
//! carrying its name in the type:
//!
//! ```text
//! ValuedTuple<Slot<a, i32, Slot<b, &str, Slot<a, i32, Nil>>>>
//!              │          │                │
//!              └ slot 0   └ slot 1         └ slot 2 (a again)
//! ```
//!
//! - **Construction**: `Attach` (values + names), `FromEntries` (pairs).
//! - **Lookup**: `Get` (last match wins), `MatchIndex` (all matches), `Contains`.
//! - **Rebuilding**: `Delete` (every match), `Append` (merge).
//!
//! Name comparisons are resolved by the trait solver, so each lookup costs
//! nothing at runtime. Very long names or very wide tuples may need a larger
//! `#![recursion_limit]` in the calling crate.

pub mod slot;
pub mod list;
pub mod lookup;
pub mod ops;
pub mod valued;

pub use slot::{Nil, Slot, Slots};
pub use list::{HNil, HCons, Tuple, ListTuple, Attach, Unpaired, Entry, FromEntries, Detach};
pub use lookup::{Contains, Get, MatchIndex};
pub use ops::{Append, Delete};
pub use valued::{ValuedTuple, ValueNames, IntoSlots, value_names, value_names_of};
