use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

pub fn sddl_impl(input: &LitStr) -> Result<TokenStream, syn::Error> {
    parsing::validate(&input.value()).map_err(|e| syn::Error::new_spanned(input, e))?;
    Ok(quote!(#input))
}
