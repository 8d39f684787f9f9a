//! Rebuilding operations on slot lists: Delete, Append
//!
//! Both consume their input and build a new list; nothing is edited in place.

use crate::name::{Name, NameEq};
use crate::primitives::{Absent, Present};
use super::slot::{Nil, Slot, Slots};

// =============================================================================
// Delete
// =============================================================================

/// Remove every slot named `K`.
pub trait Delete<K> {
    type Out: Slots;
    fn delete(self) -> Self::Out;
}

impl<K> Delete<K> for Nil {
    type Out = Nil;

    #[inline]
    fn delete(self) -> Nil {
        Nil
    }
}

impl<K, N, V, R> Delete<K> for Slot<N, V, R>
where
    N: Name + NameEq<K>,
    R: Slots + Delete<K>,
    <N as NameEq<K>>::Out: DeleteStep<N, V, <R as Delete<K>>::Out>,
{
    type Out = <<N as NameEq<K>>::Out as DeleteStep<N, V, <R as Delete<K>>::Out>>::Out;

    #[inline]
    fn delete(self) -> Self::Out {
        let (value, rest) = self.into_parts();
        <<N as NameEq<K>>::Out as DeleteStep<N, V, <R as Delete<K>>::Out>>::step(
            value,
            <R as Delete<K>>::delete(rest),
        )
    }
}

/// Keep or drop one slot once the rest has been filtered.
pub trait DeleteStep<N, V, R> {
    type Out: Slots;
    fn step(value: V, rest: R) -> Self::Out;
}

// Name matches: drop the slot.
impl<N, V, R: Slots> DeleteStep<N, V, R> for Present {
    type Out = R;

    #[inline]
    fn step(_value: V, rest: R) -> R {
        rest
    }
}

// No match: keep the slot in front of the filtered rest.
impl<N: Name, V, R: Slots> DeleteStep<N, V, R> for Absent {
    type Out = Slot<N, V, R>;

    #[inline]
    fn step(value: V, rest: R) -> Slot<N, V, R> {
        Slot::new(value, rest)
    }
}

// =============================================================================
// Append
// =============================================================================

/// Concatenate two slot lists: `Self` first, then `Other`.
pub trait Append<Other> {
    type Out: Slots;
    fn append(self, other: Other) -> Self::Out;
}

// Nil ++ X = X
impl<Other: Slots> Append<Other> for Nil {
    type Out = Other;

    #[inline]
    fn append(self, other: Other) -> Other {
        other
    }
}

// Slot<N, V, R> ++ X = Slot<N, V, R ++ X>
impl<N, V, R, Other> Append<Other> for Slot<N, V, R>
where
    N: Name,
    R: Slots + Append<Other>,
{
    type Out = Slot<N, V, <R as Append<Other>>::Out>;

    #[inline]
    fn append(self, other: Other) -> Self::Out {
        let (value, rest) = self.into_parts();
        Slot::new(value, <R as Append<Other>>::append(rest, other))
    }
}
