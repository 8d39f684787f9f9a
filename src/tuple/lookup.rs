//! Name lookup: Contains, Get (last match wins), MatchIndex.
//!
//! Every decision is taken during trait resolution. `Get` walks the list
//! from the head and asks, at each slot, whether some *later* slot also
//! matches; if so it keeps walking, otherwise it stops at the head when the
//! head matches.

use alloc::vec::Vec;

use crate::name::{Name, NameEq};
use crate::primitives::{Absent, Bool, Present};
use super::slot::{Nil, Slot};

// =============================================================================
// Contains
// =============================================================================

/// Does any slot carry name `K`?
pub trait Contains<K> {
    type Out: Bool;
}

impl<K> Contains<K> for Nil {
    type Out = Absent;
}

impl<K, N, V, R> Contains<K> for Slot<N, V, R>
where
    N: NameEq<K>,
    R: Contains<K>,
{
    type Out = <<N as NameEq<K>>::Out as Bool>::Or<<R as Contains<K>>::Out>;
}

// =============================================================================
// Get
// =============================================================================

/// Borrow the value of the last slot named `K`.
#[diagnostic::on_unimplemented(
    message = "no slot named `{K}` in `{Self}`",
    label = "name not found",
    note = "use `match_index` to test for a name without requiring it"
)]
pub trait Get<K> {
    type Output;
    fn get(&self) -> &Self::Output;
}

impl<K, N, V, R> Get<K> for Slot<N, V, R>
where
    K: Name,
    N: Name + NameEq<K>,
    R: Contains<K>,
    <R as Contains<K>>::Out: GetStep<K, <N as NameEq<K>>::Out, N, V, R>,
{
    type Output = <<R as Contains<K>>::Out as GetStep<K, <N as NameEq<K>>::Out, N, V, R>>::Output;

    #[inline]
    fn get(&self) -> &Self::Output {
        <<R as Contains<K>>::Out as GetStep<K, <N as NameEq<K>>::Out, N, V, R>>::get(self)
    }
}

/// One step of `Get`, selected by `Self` (does a later slot match?) and
/// `HeadEq` (does this slot match?).
///
/// `Absent`/`Absent` has no impl: that is the point where a lookup fails.
#[diagnostic::on_unimplemented(
    message = "no slot named `{K}`",
    label = "name not found",
    note = "use `match_index` to test for a name without requiring it"
)]
pub trait GetStep<K, HeadEq, N, V, R> {
    type Output;
    fn get(slot: &Slot<N, V, R>) -> &Self::Output;
}

// A later slot matches: it wins.
impl<K, HeadEq, N, V, R> GetStep<K, HeadEq, N, V, R> for Present
where
    R: Get<K>,
{
    type Output = R::Output;

    #[inline]
    fn get(slot: &Slot<N, V, R>) -> &R::Output {
        <R as Get<K>>::get(&slot.rest)
    }
}

// Last match is this slot.
impl<K, N, V, R> GetStep<K, Present, N, V, R> for Absent {
    type Output = V;

    #[inline]
    fn get(slot: &Slot<N, V, R>) -> &V {
        &slot.value
    }
}

// =============================================================================
// MatchIndex
// =============================================================================

/// Positions of every slot named `K`, computed from the type alone.
pub trait MatchIndex<K> {
    fn collect_matches(offset: usize, out: &mut Vec<usize>);
}

impl<K> MatchIndex<K> for Nil {
    fn collect_matches(_offset: usize, _out: &mut Vec<usize>) {}
}

impl<K, N, V, R> MatchIndex<K> for Slot<N, V, R>
where
    N: NameEq<K>,
    R: MatchIndex<K>,
{
    fn collect_matches(offset: usize, out: &mut Vec<usize>) {
        if <N as NameEq<K>>::EQUAL {
            out.push(offset);
        }
        R::collect_matches(offset + 1, out);
    }
}
