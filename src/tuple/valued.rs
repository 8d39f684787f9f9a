//! `ValuedTuple<L>`: the public face of a slot list.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::dynamic::{NamedTuple, Shape, Symbol};
use crate::name::Name;
use super::list::{Attach, Detach, FromEntries, ListTuple, Tuple};
use super::lookup::{Get, MatchIndex};
use super::ops::{Append, Delete};
use super::slot::{FmtSlots, Nil, Slot, Slots};

/// A fixed-length tuple whose slot names are part of its type.
///
/// Names may repeat. Indexing returns the value of the **last** slot with
/// the requested name; [`match_index`](Self::match_index) lists all of them.
///
/// ```
/// use valued_tuples::prelude::*;
///
/// names!(a, b);
///
/// let v = ValuedTuple::new((1, 2, 3), (a, b, a));
/// assert_eq!(v[a], 3);
/// assert_eq!(v[b], 2);
/// assert_eq!(v.match_index(a), vec![0, 2]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValuedTuple<L = Nil>(L);

impl ValuedTuple<Nil> {
    /// The tuple without slots.
    pub const fn empty() -> Self {
        ValuedTuple(Nil)
    }
}

impl<L: Slots> ValuedTuple<L> {
    /// Number of slots, known from the type.
    pub const LEN: usize = L::LEN;

    /// Pairs `values.i` with `names.i`.
    ///
    /// Both arguments are Rust tuples of the same arity (up to 12); every
    /// element of `names` must be a name token. Either violation is a
    /// compile error.
    ///
    /// Surplus values are reported as `tuple size mismatch: leftovers`:
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(a);
    ///
    /// let v = ValuedTuple::new((1, 2, 3), (a,));
    /// ```
    ///
    /// and so are surplus names:
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(a, b);
    ///
    /// let v = ValuedTuple::new((1,), (a, b));
    /// ```
    ///
    /// Names must be name tokens:
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(a);
    ///
    /// let v = ValuedTuple::new((1, 2), (a, "b"));
    /// ```
    #[inline]
    pub fn new<Vs, Ns>(values: Vs, names: Ns) -> Self
    where
        Vs: Tuple,
        Ns: Tuple,
        Vs::List: Attach<Ns::List, Out = L>,
    {
        ValuedTuple(values.into_list().attach(names.into_list()))
    }

    /// Builds from a Rust tuple of `(name, value)` pairs.
    ///
    /// ```
    /// use valued_tuples::prelude::*;
    /// names!(a, b);
    ///
    /// let v = ValuedTuple::from_pairs(((a, 1), (b, "x")));
    /// assert_eq!(v.to_string(), r#"(a = 1, b = "x")"#);
    /// ```
    ///
    /// Every element must decompose into a name token and a value:
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(a);
    ///
    /// let v = ValuedTuple::from_pairs(((a, 1), "x"));
    /// ```
    #[inline]
    pub fn from_pairs<Ps>(pairs: Ps) -> Self
    where
        Ps: Tuple,
        Ps::List: FromEntries<Out = L>,
    {
        ValuedTuple(pairs.into_list().into_slots())
    }

    pub fn len(&self) -> usize {
        L::LEN
    }

    pub fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// Slot names of this tuple type, in slot order.
    pub fn value_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(L::LEN);
        L::visit_names(&mut |name| names.push(name));
        names
    }

    /// Value of the last slot named `K`.
    ///
    /// Asking for a name the tuple does not carry is a compile error:
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(a, b, d);
    ///
    /// let v = ValuedTuple::new((1, 2), (a, b));
    /// let x = v.get(d);
    /// ```
    ///
    /// The same holds for indexing, including on the empty tuple:
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(a, b, d);
    ///
    /// let v = ValuedTuple::new((1, 2), (a, b));
    /// let x = v[d];
    /// ```
    ///
    /// ```compile_fail,E0277
    /// use valued_tuples::prelude::*;
    /// names!(d);
    ///
    /// let x = ValuedTuple::empty()[d];
    /// ```
    #[inline]
    pub fn get<K>(&self, _name: K) -> &<L as Get<K>>::Output
    where
        L: Get<K>,
    {
        <L as Get<K>>::get(&self.0)
    }

    /// Ascending 0-based positions of every slot named `K`.
    pub fn match_index<K>(&self, _name: K) -> Vec<usize>
    where
        L: MatchIndex<K>,
    {
        let mut out = Vec::new();
        <L as MatchIndex<K>>::collect_matches(0, &mut out);
        out
    }

    /// Drops every slot named `K`.
    #[inline]
    pub fn delete<K>(self, _name: K) -> ValuedTuple<<L as Delete<K>>::Out>
    where
        L: Delete<K>,
    {
        ValuedTuple(<L as Delete<K>>::delete(self.0))
    }

    /// Slots of `self`, then slots of `other`. Nothing is de-duplicated, so
    /// on a shared name the value from `other` wins under `get`.
    #[inline]
    pub fn merge<M: Slots>(self, other: ValuedTuple<M>) -> ValuedTuple<<L as Append<M>>::Out>
    where
        L: Append<M>,
    {
        ValuedTuple(<L as Append<M>>::append(self.0, other.0))
    }

    /// The values as a Rust tuple, in slot order.
    #[inline]
    pub fn into_values(self) -> <L::Values as ListTuple>::Out
    where
        L: Detach,
        L::Values: ListTuple,
    {
        self.0.detach().into_tuple()
    }

    /// Converts into a runtime [`NamedTuple`], turning every value into `T`.
    pub fn into_named<T>(self) -> NamedTuple<T>
    where
        L: IntoSlots<T>,
    {
        let mut names = Vec::with_capacity(L::LEN);
        let mut values = Vec::with_capacity(L::LEN);
        <L as IntoSlots<T>>::push_slots(self.0, &mut names, &mut values);
        NamedTuple::from_parts(Shape::new(names), values)
    }
}

impl<L, K> Index<K> for ValuedTuple<L>
where
    L: Slots + Get<K>,
{
    type Output = <L as Get<K>>::Output;

    #[inline]
    fn index(&self, _name: K) -> &Self::Output {
        <L as Get<K>>::get(&self.0)
    }
}

impl<L: FmtSlots> fmt::Display for ValuedTuple<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.0.fmt_slots(f, true)?;
        f.write_str(")")
    }
}

impl<L: FmtSlots> fmt::Debug for ValuedTuple<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValuedTuple{self}")
    }
}

// =============================================================================
// Shape-only introspection
// =============================================================================

/// Types whose slot names are known without an instance.
pub trait ValueNames {
    fn value_names() -> Vec<&'static str>;
}

impl<L: Slots> ValueNames for ValuedTuple<L> {
    fn value_names() -> Vec<&'static str> {
        ValuedTuple::<L>::value_names()
    }
}

/// Slot names of a valued tuple type.
///
/// ```
/// use valued_tuples::prelude::*;
/// names!(a, b);
///
/// let v = ValuedTuple::new((1, 2), (a, b));
/// assert_eq!(value_names_of(&v), ["a", "b"]);
/// ```
pub fn value_names<T: ValueNames>() -> Vec<&'static str> {
    T::value_names()
}

/// Same as [`value_names`], with the type taken from a value that is not
/// otherwise inspected.
pub fn value_names_of<T: ValueNames>(_: &T) -> Vec<&'static str> {
    T::value_names()
}

// =============================================================================
// Static → runtime
// =============================================================================

/// Moves every slot into runtime name and value lists.
pub trait IntoSlots<T> {
    fn push_slots(self, names: &mut Vec<Symbol>, values: &mut Vec<T>);
}

impl<T> IntoSlots<T> for Nil {
    fn push_slots(self, _names: &mut Vec<Symbol>, _values: &mut Vec<T>) {}
}

impl<T, N, V, R> IntoSlots<T> for Slot<N, V, R>
where
    N: Name,
    V: Into<T>,
    R: Slots + IntoSlots<T>,
{
    fn push_slots(self, names: &mut Vec<Symbol>, values: &mut Vec<T>) {
        let (value, rest) = self.into_parts();
        names.push(Symbol::from_static(N::NAME));
        values.push(value.into());
        <R as IntoSlots<T>>::push_slots(rest, names, values);
    }
}
