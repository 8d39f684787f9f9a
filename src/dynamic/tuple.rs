//! `NamedTuple<V>`: names compared at runtime.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use super::error::{ConstructError, Leftover, LookupError};
use super::symbol::Symbol;

// =============================================================================
// Shape
// =============================================================================

/// The name sequence of a tuple, shared by every tuple built from it.
///
/// This is the runtime counterpart of a static tuple's type: everything
/// here is answered without looking at values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    names: Arc<[Symbol]>,
}

impl Shape {
    pub fn new(names: Vec<Symbol>) -> Self {
        Shape { names: Arc::from(names) }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Declared names, in slot order.
    pub fn value_names(&self) -> &[Symbol] {
        &self.names
    }

    /// Ascending positions of every slot called `name`.
    pub fn match_index(&self, name: &str) -> Vec<usize> {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, n)| n.as_str() == name)
            .map(|(i, _)| i)
            .collect()
    }

    /// Position of the last slot called `name`.
    pub fn last_match(&self, name: &str) -> Option<usize> {
        self.names.iter().rposition(|n| n.as_str() == name)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names.iter()).finish()
    }
}

// =============================================================================
// Entry (pair-form input)
// =============================================================================

/// One element handed to [`NamedTuple::from_entries`] by a construction
/// front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<V> {
    /// `name = value`
    Assign(String, V),
    /// Anything the front-end could not split into a name and a value,
    /// kept as its source text for error reporting.
    Opaque(String),
}

impl<V, S: Into<String>> From<(S, V)> for Entry<V> {
    fn from((name, value): (S, V)) -> Self {
        Entry::Assign(name.into(), value)
    }
}

// =============================================================================
// NamedTuple
// =============================================================================

/// Fixed-length, ordered `(name, value)` slots with repeatable names.
///
/// Instances are never modified: [`delete`](Self::delete) and
/// [`merge`](Self::merge) build new tuples.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NamedTuple<V> {
    shape: Shape,
    values: Box<[V]>,
}

impl<V> NamedTuple<V> {
    /// Pairs `values[i]` with `names[i]`.
    ///
    /// Names are checked first; a length mismatch then reports the
    /// unconsumed tail of whichever sequence is longer.
    pub fn new<I, S>(
        values: impl IntoIterator<Item = V>,
        names: I,
    ) -> Result<Self, ConstructError<V>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols = Vec::new();
        for (position, name) in names.into_iter().enumerate() {
            let name = name.as_ref();
            let Some(symbol) = Symbol::new(name) else {
                tracing::debug!(position, found = name, "rejected slot name");
                return Err(ConstructError::InvalidNameKind { position, found: name.to_string() });
            };
            symbols.push(symbol);
        }

        let mut values: Vec<V> = values.into_iter().collect();
        if values.len() != symbols.len() {
            tracing::debug!(values = values.len(), names = symbols.len(), "tuple size mismatch");
            let leftover = if values.len() > symbols.len() {
                Leftover::Values(values.split_off(symbols.len()))
            } else {
                Leftover::Names(symbols.split_off(values.len()))
            };
            return Err(ConstructError::LengthMismatch { leftover });
        }

        Ok(Self::from_parts(Shape::new(symbols), values))
    }

    /// Builds from already-paired entries.
    pub fn from_entries<I, E>(entries: I) -> Result<Self, ConstructError<V>>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<V>>,
    {
        let mut symbols = Vec::new();
        let mut values = Vec::new();

        for (position, entry) in entries.into_iter().enumerate() {
            match entry.into() {
                Entry::Assign(name, value) => {
                    let Some(symbol) = Symbol::new(&name) else {
                        tracing::debug!(position, found = %name, "rejected slot name");
                        return Err(ConstructError::InvalidNameKind { position, found: name });
                    };
                    symbols.push(symbol);
                    values.push(value);
                }
                Entry::Opaque(entry) => {
                    tracing::debug!(position, entry = %entry, "unable to decompose entry");
                    return Err(ConstructError::MalformedEntry { position, entry });
                }
            }
        }

        Ok(Self::from_parts(Shape::new(symbols), values))
    }

    /// Reuses an existing shape; `values` must have the shape's length.
    pub fn with_shape(
        shape: &Shape,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, ConstructError<V>> {
        let mut values: Vec<V> = values.into_iter().collect();
        if values.len() != shape.len() {
            tracing::debug!(values = values.len(), names = shape.len(), "tuple size mismatch");
            let leftover = if values.len() > shape.len() {
                Leftover::Values(values.split_off(shape.len()))
            } else {
                Leftover::Names(shape.value_names()[values.len()..].to_vec())
            };
            return Err(ConstructError::LengthMismatch { leftover });
        }
        Ok(Self::from_parts(shape.clone(), values))
    }

    pub(crate) fn from_parts(shape: Shape, values: Vec<V>) -> Self {
        debug_assert_eq!(shape.len(), values.len());
        NamedTuple { shape, values: values.into_boxed_slice() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Declared names, in slot order (same answer for every tuple of this shape).
    pub fn value_names(&self) -> &[Symbol] {
        self.shape.value_names()
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// `(name, value)` slots in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Symbol, &V)> {
        self.shape.value_names().iter().zip(self.values.iter())
    }

    /// Splits into `(values, names)`, the inverse of [`new`](Self::new).
    pub fn into_parts(self) -> (Vec<V>, Vec<Symbol>) {
        (self.values.into_vec(), self.shape.value_names().to_vec())
    }

    /// Value of the last slot called `name`.
    pub fn get(&self, name: &str) -> Result<&V, LookupError> {
        self.shape
            .last_match(name)
            .map(|i| &self.values[i])
            .ok_or_else(|| LookupError::NameNotFound { name: name.to_string() })
    }

    /// Ascending 0-based positions of every slot called `name`; empty when absent.
    pub fn match_index(&self, name: &str) -> Vec<usize> {
        self.shape.match_index(name)
    }
}

impl<V: Clone> NamedTuple<V> {
    /// A new tuple without any slot called `name`. Absent names leave an
    /// equal tuple.
    pub fn delete(&self, name: &str) -> Self {
        let (names, values): (Vec<Symbol>, Vec<V>) = self
            .iter()
            .filter(|(n, _)| n.as_str() != name)
            .map(|(n, v)| (n.clone(), v.clone()))
            .unzip();

        tracing::trace!(slot = name, removed = self.len() - values.len(), "deleted slots");
        Self::from_parts(Shape::new(names), values)
    }

    /// Slots of `self` followed by slots of `other`.
    ///
    /// Duplicates are kept, so `a.merge(&b)` and `b.merge(&a)` differ in
    /// order and in which value `get` returns for a shared name.
    pub fn merge(&self, other: &Self) -> Self {
        let names = self
            .shape
            .value_names()
            .iter()
            .chain(other.shape.value_names())
            .cloned()
            .collect();
        let values = self.values.iter().chain(other.values.iter()).cloned().collect();

        tracing::trace!(left = self.len(), right = other.len(), "merged tuples");
        Self::from_parts(Shape::new(names), values)
    }
}

impl<V> Index<&str> for NamedTuple<V> {
    type Output = V;

    fn index(&self, name: &str) -> &V {
        match self.get(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, V> IntoIterator for &'a NamedTuple<V> {
    type Item = (&'a Symbol, &'a V);
    type IntoIter = core::iter::Zip<core::slice::Iter<'a, Symbol>, core::slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.shape.value_names().iter().zip(self.values.iter())
    }
}

impl<V: fmt::Debug> fmt::Display for NamedTuple<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = {value:?}")?;
        }
        f.write_str(")")
    }
}

impl<V: fmt::Debug> fmt::Debug for NamedTuple<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedTuple{self}")
    }
}
