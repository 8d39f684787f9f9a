use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

use crate::inner::name_stream::stream_for;

/// #[derive(Name)] implements `Name` with the struct's identifier (or the
/// `#[name = "..."]` override) as both the runtime string and the
/// type-level stream.
pub fn expand_derive_name(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Name can only be derived for unit structs, e.g. `struct price;`",
            ));
        }
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "a Name token cannot be generic",
        ));
    }

    let name = match name_override(&input)? {
        Some(name) => name,
        None => {
            let name = ident.unraw().to_string();
            if !is_name_token(&name) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!(
                        "`{name}` is not a valid name: rename the struct or add \
                         `#[name = \"...\"]` with an ASCII identifier"
                    ),
                ));
            }
            name
        }
    };
    let stream = stream_for(&name);

    Ok(quote! {
        impl ::valued_tuples::Name for #ident {
            const NAME: &'static str = #name;
            type Stream = #stream;
        }
    })
}

/// Reads `#[name = "..."]`, rejecting anything that is not a name token.
fn name_override(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut found = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("name")) {
        let Meta::NameValue(nv) = &attr.meta else {
            return Err(syn::Error::new_spanned(attr, "expected `#[name = \"...\"]`"));
        };
        let Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) = &nv.value else {
            return Err(syn::Error::new_spanned(
                &nv.value,
                "name override must be a string literal",
            ));
        };
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate `#[name]` attribute"));
        }

        let value = lit.value();
        if !is_name_token(&value) {
            return Err(syn::Error::new_spanned(
                lit,
                format!(
                    "`{value}` is not a valid name: expected an identifier like `price` or `_tmp`"
                ),
            ));
        }
        found = Some(value);
    }

    Ok(found)
}

fn is_name_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some('_') if s.len() > 1 => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> Result<String, String> {
        expand_derive_name(input)
            .map(|tokens| tokens.to_string())
            .map_err(|err| err.to_string())
    }

    #[test]
    fn plain_and_raw_identifiers() {
        let out = expand(parse_quote! { struct price; }).unwrap();
        assert!(out.contains("\"price\""));

        let out = expand(parse_quote! { struct r#type; }).unwrap();
        assert!(out.contains("\"type\""));
    }

    #[test]
    fn override_replaces_identifier() {
        let out = expand(parse_quote! {
            #[name = "price"]
            struct Cost;
        })
        .unwrap();
        assert!(out.contains("\"price\""));
    }

    #[test]
    fn non_ascii_identifier_is_rejected() {
        let err = expand(parse_quote! { struct é; }).unwrap_err();
        assert!(err.contains("not a valid name"), "{err}");

        let out = expand(parse_quote! {
            #[name = "e_acute"]
            struct é;
        })
        .unwrap();
        assert!(out.contains("\"e_acute\""));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = expand(parse_quote! {
            #[name = "a-b"]
            struct ab;
        })
        .unwrap_err();
        assert!(err.contains("not a valid name"), "{err}");
    }

    #[test]
    fn only_unit_structs() {
        assert!(expand(parse_quote! { struct Price(u32); }).is_err());
        assert!(expand(parse_quote! { enum Price { A } }).is_err());
        assert!(expand(parse_quote! { struct Price<T>; }).is_err());
    }
}
