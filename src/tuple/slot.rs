//! Storage of a valued tuple: a cons list of slots ending in `Nil`.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::name::Name;

/// End of the slot list (the empty valued tuple).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// One `(name, value)` slot followed by the remaining slots.
///
/// The name lives only in the type; the slot stores the value inline.
pub struct Slot<N, V, R> {
    pub(crate) value: V,
    pub(crate) rest: R,
    _name: PhantomData<fn() -> N>,
}

impl<N: Name, V, R: Slots> Slot<N, V, R> {
    #[inline]
    pub(crate) fn new(value: V, rest: R) -> Self {
        Slot { value, rest, _name: PhantomData }
    }

    /// Splits the slot into its value and the remaining slots.
    #[inline]
    pub(crate) fn into_parts(self) -> (V, R) {
        (self.value, self.rest)
    }
}

/// Shape information of a slot list, available without an instance.
pub trait Slots: Sized {
    /// Number of slots.
    const LEN: usize;

    /// Calls `f` with every slot name, in slot order.
    fn visit_names<F: FnMut(&'static str)>(f: &mut F);
}

impl Slots for Nil {
    const LEN: usize = 0;

    fn visit_names<F: FnMut(&'static str)>(_f: &mut F) {}
}

impl<N: Name, V, R: Slots> Slots for Slot<N, V, R> {
    const LEN: usize = 1 + R::LEN;

    fn visit_names<F: FnMut(&'static str)>(f: &mut F) {
        f(N::NAME);
        R::visit_names(f);
    }
}

// =============================================================================
// Structural impls (the name is phantom, so derives would over-constrain N)
// =============================================================================

impl<N, V: Clone, R: Clone> Clone for Slot<N, V, R> {
    fn clone(&self) -> Self {
        Slot { value: self.value.clone(), rest: self.rest.clone(), _name: PhantomData }
    }
}

impl<N, V: Copy, R: Copy> Copy for Slot<N, V, R> {}

impl<N, V: PartialEq, R: PartialEq> PartialEq for Slot<N, V, R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.rest == other.rest
    }
}

impl<N, V: Eq, R: Eq> Eq for Slot<N, V, R> {}

impl<N: Name, V: Hash, R: Hash> Hash for Slot<N, V, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        N::NAME.hash(state);
        self.value.hash(state);
        self.rest.hash(state);
    }
}

impl<N: Name, V: fmt::Debug, R: fmt::Debug> fmt::Debug for Slot<N, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("name", &N::NAME)
            .field("value", &self.value)
            .field("rest", &self.rest)
            .finish()
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Writes `name = value` pairs separated by `, `.
pub trait FmtSlots {
    fn fmt_slots(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl FmtSlots for Nil {
    fn fmt_slots(&self, _f: &mut fmt::Formatter<'_>, _first: bool) -> fmt::Result {
        Ok(())
    }
}

impl<N: Name, V: fmt::Debug, R: FmtSlots> FmtSlots for Slot<N, V, R> {
    fn fmt_slots(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str(", ")?;
        }
        write!(f, "{} = {:?}", N::NAME, self.value)?;
        self.rest.fmt_slots(f, false)
    }
}
