use proc_macro2::TokenStream;
use quote::{quote, format_ident};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::Ident;

pub struct NameStreamInput {
    pub name: String,
}

impl Parse for NameStreamInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(syn::LitStr) {
            input.parse::<syn::LitStr>()?.value()
        } else {
            // Keywords are fine here (`type`, `match`), only the text matters.
            input.call(Ident::parse_any)?.unraw().to_string()
        };
        Ok(NameStreamInput { name })
    }
}

pub fn expand_name_stream(input: NameStreamInput) -> TokenStream {
    stream_for(&input.name)
}

/// Nibble stream type for `name`, high nibble of each byte first.
pub fn stream_for(name: &str) -> TokenStream {
    let mut nibbles = Vec::with_capacity(name.len() * 2);
    for byte in name.as_bytes() {
        nibbles.push((byte >> 4) & 0xF);
        nibbles.push(byte & 0xF);
    }

    build_stream_type(&nibbles)
}

fn build_stream_type(nibbles: &[u8]) -> TokenStream {
    let Some((first, rest)) = nibbles.split_first() else {
        return quote! { ::valued_tuples::primitives::stream::End };
    };

    let head = nibble_to_ident(*first);
    let tail_stream = build_stream_type(rest);

    quote! {
        ::valued_tuples::primitives::stream::Cons<
            ::valued_tuples::primitives::nibble::#head,
            #tail_stream
        >
    }
}

fn nibble_to_ident(n: u8) -> Ident {
    format_ident!("X{:X}", n)
}
