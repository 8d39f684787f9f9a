//! Name tokens.
//!
//! A name token is a zero-sized unit struct standing for one slot name,
//! declared with `#[derive(Name)]` or [`names!`](crate::names). Two tokens
//! are the same name when their strings are equal, regardless of where the
//! structs are declared.

use crate::primitives::{Bool, NameStream, StreamEq};

/// Name Trait
///
/// Implemented by unit structs representing slot names. The name must be an
/// ASCII identifier, the same rule runtime names follow, so identifiers
/// outside it need an override:
///
/// ```compile_fail
/// use valued_tuples::Name;
///
/// #[allow(non_camel_case_types)]
/// #[derive(Name)]
/// struct é;
/// ```
///
/// ```
/// use valued_tuples::Name;
///
/// #[allow(non_camel_case_types)]
/// #[derive(Name)]
/// #[name = "e_acute"]
/// struct é;
///
/// assert_eq!(<é as Name>::NAME, "e_acute");
/// ```
#[diagnostic::on_unimplemented(
    message = "all names must be name tokens, `{Self}` is not one",
    label = "not a name token",
    note = "declare names with `#[derive(Name)] struct a;` or `names!(a, b)`"
)]
pub trait Name: 'static {
    /// The slot name as written.
    const NAME: &'static str;

    /// The name spelled as a type-level nibble stream.
    /// Used for equality checks between names during trait resolution.
    type Stream: NameStream;
}

/// Type-level name equality: `Present` when both tokens spell the same name.
pub trait NameEq<Other> {
    type Out: Bool;
    /// The comparison result as a constant.
    const EQUAL: bool = <Self::Out as Bool>::VALUE;
}

impl<A, B> NameEq<B> for A
where
    A: Name,
    B: Name,
    A::Stream: StreamEq<B::Stream>,
{
    type Out = <A::Stream as StreamEq<B::Stream>>::Out;
}

/// Declare name tokens.
///
/// Each identifier becomes a public unit struct deriving [`Name`].
///
/// ```ignore
/// names!(price, qty);
/// let t = ValuedTuple::new((10, 2), (price, qty));
/// ```
#[macro_export]
macro_rules! names {
    ($($name:ident),* $(,)?) => {
        $(
            #[allow(non_camel_case_types)]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, $crate::Name)]
            pub struct $name;
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;
    use crate::primitives::{Cons, End, X1, X2, X6};

    crate::names!(a, b, ab);

    #[allow(non_camel_case_types)]
    #[derive(crate::Name)]
    #[name = "a"]
    struct alias_of_a;

    #[test]
    fn derive_records_name() {
        assert_eq!(a::NAME, "a");
        assert_eq!(ab::NAME, "ab");
        assert_eq!(alias_of_a::NAME, "a");

        type Spelled = Cons<X6, Cons<X1, Cons<X6, Cons<X2, End>>>>;
        assert_eq!(TypeId::of::<<ab as Name>::Stream>(), TypeId::of::<Spelled>());
    }

    #[test]
    fn equality_follows_the_string() {
        assert!(<a as NameEq<a>>::EQUAL);
        assert!(!<a as NameEq<b>>::EQUAL);
        assert!(!<a as NameEq<ab>>::EQUAL);
        assert!(<a as NameEq<alias_of_a>>::EQUAL);
    }
}
