//! Procedural macros for valued-tuples name tokens
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Name)]` | unit struct | Turn a unit struct into a slot name |
//! | `name_stream!` | - | Type-level nibble stream of a name string |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Name)]
//! struct price;
//!
//! #[derive(Name)]
//! #[name = "type"]
//! struct kind;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: inner / user)
// =============================================================================

mod inner;
mod user;

/// Generate a type-level nibble stream from a name.
///
/// Usage: `name_stream!(price)` or `name_stream!("price")` expands to
/// `Cons<X7, Cons<X0, ... End>>`, two nibbles per byte, high nibble first.
#[proc_macro]
pub fn name_stream(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::name_stream::NameStreamInput);
    inner::name_stream::expand_name_stream(input).into()
}

/// Derive macro implementing the `Name` trait for a unit struct.
///
/// The slot name is the struct's identifier, or the string given in
/// `#[name = "..."]`. The name is also encoded into the type as a nibble
/// stream so that two names can be compared during trait resolution.
///
/// # Usage
/// ```ignore
/// #[derive(Name)]
/// struct a;
///
/// let t = ValuedTuple::new((1,), (a,));
/// assert_eq!(t[a], 1);
/// ```
#[proc_macro_derive(Name, attributes(name))]
pub fn derive_name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::name::expand_derive_name(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
