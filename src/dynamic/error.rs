//! Error types for runtime named tuples.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use super::symbol::Symbol;

/// Errors raised while building a [`NamedTuple`](super::NamedTuple).
///
/// None of them is transient: they describe malformed input, and no
/// partially built tuple is ever returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError<V> {
    /// Values and names differ in length.
    #[error("tuple size mismatch: leftovers {leftover}")]
    LengthMismatch {
        /// Unconsumed tail of the longer sequence.
        leftover: Leftover<V>,
    },

    /// A supplied name is not a name token.
    #[error("all names must be name tokens: `{found}` at position {position} is not one")]
    InvalidNameKind {
        /// Position of the offending name.
        position: usize,
        /// The rejected text.
        found: String,
    },

    /// An entry of the pair form is not a `(name, value)` pair.
    #[error("unable to decompose entry {position} into a name and a value: {entry}")]
    MalformedEntry {
        /// Position of the offending entry.
        position: usize,
        /// The entry as the front-end rendered it.
        entry: String,
    },
}

/// The part of the longer sequence that found no partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leftover<V> {
    Values(Vec<V>),
    Names(Vec<Symbol>),
}

impl<V> Leftover<V> {
    pub fn len(&self) -> usize {
        match self {
            Leftover::Values(values) => values.len(),
            Leftover::Names(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: fmt::Debug> fmt::Display for Leftover<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leftover::Values(values) => write_tuple(f, values, |f, v| write!(f, "{v:?}")),
            Leftover::Names(names) => write_tuple(f, names, |f, n| f.write_str(n)),
        }
    }
}

/// Writes `(x, y)`, or `(x,)` for a single element.
fn write_tuple<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str(if items.len() == 1 { ",)" } else { ")" })
}

/// Errors raised by name lookup on a [`NamedTuple`](super::NamedTuple).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No slot carries the requested name.
    #[error("no slot named `{name}`")]
    NameNotFound {
        /// The requested name.
        name: String,
    },
}
