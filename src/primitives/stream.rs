//! Finite nibble streams spelling out a name.
//!
//! `#[derive(Name)]` turns `"ab"` into `Cons<X6, Cons<X1, Cons<X6, Cons<X2, End>>>>`.

use core::marker::PhantomData;
use super::nibble::{Nibble, NibbleEq};
use super::bool::{Bool, Present, Absent};

// =============================================================================
// Name Stream trait
// =============================================================================

/// Finite stream of nibbles via recursive type
pub trait NameStream: 'static {}

/// End of stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct End;

impl NameStream for End {}

/// Cons cell for explicit streams
pub struct Cons<H, T>(PhantomData<(H, T)>);

impl<H: Nibble, T: NameStream> NameStream for Cons<H, T> {}

// =============================================================================
// Stream comparison
// =============================================================================

/// Compare two name streams nibble by nibble.
pub trait StreamEq<Other: NameStream>: NameStream {
    type Out: Bool;
}

impl StreamEq<End> for End {
    type Out = Present;
}

// Different lengths never match
impl<H: Nibble, T: NameStream> StreamEq<Cons<H, T>> for End {
    type Out = Absent;
}

impl<H: Nibble, T: NameStream> StreamEq<End> for Cons<H, T> {
    type Out = Absent;
}

impl<HA, TA, HB, TB> StreamEq<Cons<HB, TB>> for Cons<HA, TA>
where
    HA: Nibble + NibbleEq<HB>,
    HB: Nibble,
    TA: NameStream,
    TB: NameStream,
    <HA as NibbleEq<HB>>::Out: StreamEqDispatch<TA, TB>,
{
    type Out = <<HA as NibbleEq<HB>>::Out as StreamEqDispatch<TA, TB>>::Out;
}

/// Continues the comparison only while the heads agree.
pub trait StreamEqDispatch<TailA, TailB> {
    type Out: Bool;
}

impl<TailA, TailB> StreamEqDispatch<TailA, TailB> for Absent {
    type Out = Absent;
}

impl<TailA, TailB> StreamEqDispatch<TailA, TailB> for Present
where
    TailA: StreamEq<TailB>,
    TailB: NameStream,
{
    type Out = <TailA as StreamEq<TailB>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::nibble::{X1, X2, X6};

    type AB = Cons<X6, Cons<X1, Cons<X6, Cons<X2, End>>>>;
    type A = Cons<X6, Cons<X1, End>>;
    type B = Cons<X6, Cons<X2, End>>;

    fn eq<L: StreamEq<R>, R: NameStream>() -> bool {
        <L::Out as Bool>::VALUE
    }

    #[test]
    fn stream_equality() {
        assert!(eq::<End, End>());
        assert!(eq::<A, A>());
        assert!(eq::<AB, AB>());
        assert!(!eq::<A, B>());
        assert!(!eq::<A, AB>());
        assert!(!eq::<AB, A>());
        assert!(!eq::<End, A>());
    }
}
