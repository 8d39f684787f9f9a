//! Type-level nibble system (4-bit values X0-XF).
//!
//! Every name is spelled at the type level as a stream of nibbles, two per
//! byte. Comparing two names therefore reduces to comparing nibbles.

use super::bool::{Absent, Present};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 nibbles (X0..XF).
#[macro_export]
#[doc(hidden)]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0x0); $mac!(X1, 0x1); $mac!(X2, 0x2); $mac!(X3, 0x3);
        $mac!(X4, 0x4); $mac!(X5, 0x5); $mac!(X6, 0x6); $mac!(X7, 0x7);
        $mac!(X8, 0x8); $mac!(X9, 0x9); $mac!(XA, 0xA); $mac!(XB, 0xB);
        $mac!(XC, 0xC); $mac!(XD, 0xD); $mac!(XE, 0xE); $mac!(XF, 0xF);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
#[macro_export]
#[doc(hidden)]
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        $crate::for_distinct_pairs!(
            @recurse $mac,
            [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]
        );
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        $crate::for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {}

// Define structs X0..XF and implement Nibble
macro_rules! define_nibble {
    ($n:ident, $v:literal) => {
        #[doc = concat!("Nibble `", stringify!($v), "`.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $n;
        impl Nibble for $n {}
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: super::bool::Bool;
}

// Self-equality: X == X → Present
macro_rules! impl_eq_self {
    ($($n:ident),*) => { $(impl NibbleEq<$n> for $n { type Out = Present; })* };
}
impl_eq_self!(X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF);

// Cross-inequality: X != Y → Absent
macro_rules! impl_neq {
    ($a:ident, $b:ident) => {
        impl NibbleEq<$b> for $a {
            type Out = Absent;
        }
    };
}
for_distinct_pairs!(impl_neq);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::bool::Bool;

    fn eq<A: NibbleEq<B>, B: Nibble>() -> bool {
        <A::Out as Bool>::VALUE
    }

    #[test]
    fn nibble_equality() {
        assert!(eq::<X3, X3>());
        assert!(eq::<XF, XF>());
        assert!(!eq::<X3, X4>());
        assert!(!eq::<X4, X3>());
        assert!(!eq::<X0, XF>());
    }
}
