#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Not an issue in a macro crate"
)]
//! Procedural macro for compile-time checked SDDL string literals.
mod expand;
use expand::sddl_impl;
use proc_macro::TokenStream;

use syn::{LitStr, parse_macro_input};

/// Validates the structure of an SDDL string literal and expands to it.
///
/// Malformed ACEs become compile errors pointing at the literal.
#[proc_macro]
pub fn sddl(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    match sddl_impl(&lit) {
        Ok(token_stream) => token_stream,
        Err(err) => err.to_compile_error(),
    }
    .into()
}
