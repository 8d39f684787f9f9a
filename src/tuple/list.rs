//! Construction: Rust tuples → HLists → slot lists.
//!
//! ```text
//! (1, "x")  ─┐
//!            ├─ Attach ─> Slot<a, i32, Slot<b, &str, Nil>>
//! (a, b)    ─┘
//! ```

use crate::name::Name;
use super::slot::{Nil, Slot, Slots};

// =============================================================================
// HList
// =============================================================================

/// Empty HList
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HNil;

/// HList cons cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Conversion between a Rust tuple and its HList spelling.
pub trait Tuple: Sized {
    type List;
    fn into_list(self) -> Self::List;
    fn from_list(list: Self::List) -> Self;
}

/// The reverse mapping: an HList back to the Rust tuple it spells.
pub trait ListTuple {
    type Out: Tuple<List = Self>;
    fn into_tuple(self) -> Self::Out;
}

impl ListTuple for HNil {
    type Out = ();

    #[inline]
    fn into_tuple(self) {}
}

impl Tuple for () {
    type List = HNil;

    #[inline]
    fn into_list(self) -> HNil {
        HNil
    }

    #[inline]
    fn from_list(_list: HNil) -> Self {}
}

macro_rules! impl_tuple {
    (@list) => { HNil };
    (@list $H:ident $(, $T:ident)*) => { HCons<$H, impl_tuple!(@list $($T),*)> };

    (@build) => { HNil };
    (@build $h:ident $(, $t:ident)*) => { HCons { head: $h, tail: impl_tuple!(@build $($t),*) } };

    ($($T:ident $v:ident),+) => {
        impl<$($T),+> Tuple for ($($T,)+) {
            type List = impl_tuple!(@list $($T),+);

            #[inline]
            fn into_list(self) -> Self::List {
                let ($($v,)+) = self;
                impl_tuple!(@build $($v),+)
            }

            #[inline]
            fn from_list(list: Self::List) -> Self {
                let impl_tuple!(@build $($v),+) = list;
                ($($v,)+)
            }
        }

        impl<$($T),+> ListTuple for impl_tuple!(@list $($T),+) {
            type Out = ($($T,)+);

            #[inline]
            fn into_tuple(self) -> Self::Out {
                <($($T,)+) as Tuple>::from_list(self)
            }
        }
    };
}

impl_tuple!(T0 v0);
impl_tuple!(T0 v0, T1 v1);
impl_tuple!(T0 v0, T1 v1, T2 v2);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8, T9 v9);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8, T9 v9, T10 v10);
impl_tuple!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8, T9 v9, T10 v10, T11 v11);

// =============================================================================
// Attach: values + names
// =============================================================================

/// Pairs an HList of values with an HList of name tokens.
///
/// Implemented for every pair of list shapes, so a length mismatch never
/// turns into a type mismatch: it surfaces as an unmet [`Unpaired`] bound
/// naming the leftover part of the longer list.
pub trait Attach<Names> {
    type Out: Slots;
    fn attach(self, names: Names) -> Self::Out;
}

/// Leftover elements after one side of an `Attach` ran out. No type
/// implements it.
#[diagnostic::on_unimplemented(
    message = "tuple size mismatch: leftovers `{Self}`",
    label = "values and names must have the same length",
    note = "every value needs exactly one name token"
)]
pub trait Unpaired {
    #[doc(hidden)]
    fn unreachable(self) -> Nil;
}

impl Attach<HNil> for HNil {
    type Out = Nil;

    #[inline]
    fn attach(self, _names: HNil) -> Nil {
        Nil
    }
}

impl<V, VR, N, NR> Attach<HCons<N, NR>> for HCons<V, VR>
where
    N: Name,
    VR: Attach<NR>,
{
    type Out = Slot<N, V, VR::Out>;

    #[inline]
    fn attach(self, names: HCons<N, NR>) -> Self::Out {
        Slot::new(self.head, self.tail.attach(names.tail))
    }
}

// More values than names
impl<V, VR> Attach<HNil> for HCons<V, VR>
where
    HCons<V, VR>: Unpaired,
{
    type Out = Nil;

    fn attach(self, _names: HNil) -> Nil {
        self.unreachable()
    }
}

// More names than values
impl<N, NR> Attach<HCons<N, NR>> for HNil
where
    HCons<N, NR>: Unpaired,
{
    type Out = Nil;

    fn attach(self, names: HCons<N, NR>) -> Nil {
        names.unreachable()
    }
}

// =============================================================================
// Pair form: ((a, 1), (b, 2))
// =============================================================================

/// A `(name, value)` entry of the pair form.
#[diagnostic::on_unimplemented(
    message = "unable to decompose `{Self}` into a (name, value) pair",
    label = "expected `(name_token, value)`",
    note = "the first element of each pair must be a name token"
)]
pub trait Entry {
    type Name: Name;
    type Value;
    fn into_value(self) -> Self::Value;
}

impl<N: Name, V> Entry for (N, V) {
    type Name = N;
    type Value = V;

    #[inline]
    fn into_value(self) -> V {
        self.1
    }
}

/// HList of entries → slot list.
pub trait FromEntries {
    type Out: Slots;
    fn into_slots(self) -> Self::Out;
}

impl FromEntries for HNil {
    type Out = Nil;

    #[inline]
    fn into_slots(self) -> Nil {
        Nil
    }
}

impl<E: Entry, T: FromEntries> FromEntries for HCons<E, T> {
    type Out = Slot<E::Name, E::Value, T::Out>;

    #[inline]
    fn into_slots(self) -> Self::Out {
        Slot::new(self.head.into_value(), self.tail.into_slots())
    }
}

// =============================================================================
// Back to Rust tuples
// =============================================================================

/// Slot list → HList of its values.
pub trait Detach {
    type Values;
    fn detach(self) -> Self::Values;
}

impl Detach for Nil {
    type Values = HNil;

    #[inline]
    fn detach(self) -> HNil {
        HNil
    }
}

impl<N: Name, V, R: Slots + Detach> Detach for Slot<N, V, R> {
    type Values = HCons<V, R::Values>;

    #[inline]
    fn detach(self) -> Self::Values {
        let (head, rest) = self.into_parts();
        HCons { head, tail: rest.detach() }
    }
}
