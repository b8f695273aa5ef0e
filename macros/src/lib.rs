//! Derive macros for the Taskboard workspace
//!
//! This crate provides procedural macros that remove boilerplate from
//! action enums.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `taskboard_core::action::Action`
//!
//! # Example
//!
//! ```ignore
//! use taskboard_core::action::Action as _;
//! use taskboard_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum BoardAction {
//!     #[intent]
//!     ToggleCompletion { id: u64 },
//!
//!     #[event]
//!     CompletionToggled { id: u64, completed: bool },
//! }
//!
//! // Generated methods:
//! assert!(BoardAction::ToggleCompletion { id: 1 }.is_intent());
//! assert_eq!(BoardAction::ToggleCompletion { id: 1 }.name(), "ToggleCompletion");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident};

/// Derive macro for Action enums
///
/// Implements `taskboard_core::action::Action`:
/// - `name()` - Returns the variant name, for log spans and metric labels
/// - `is_intent()` - Returns true if this variant is marked `#[intent]`
/// - `is_event()` - Returns true if this variant is marked `#[event]`
///
/// Unmarked variants are neither intents nor events.
///
/// # Attributes
///
/// - `#[intent]` - Mark a variant as an intent raised by a caller
/// - `#[event]` - Mark a variant as an event produced by the reducer
///
/// # Errors
///
/// Produces a compile error if:
/// - Applied to a non-enum type
/// - A variant has both `#[intent]` and `#[event]` attributes
#[proc_macro_derive(Action, attributes(intent, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut name_arms = Vec::new();
    let mut intent_arms = Vec::new();
    let mut event_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_intent = has_attribute(&variant.attrs, "intent");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_intent && is_event {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[intent] and #[event]")
                .to_compile_error()
                .into();
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);
        let label = variant.ident.to_string();
        name_arms.push(quote! { #pattern => #label, });

        if is_intent {
            intent_arms.push(quote! { #pattern => true, });
        }
        if is_event {
            event_arms.push(quote! { #pattern => true, });
        }
    }

    // An enum with no variants has no values; `match *self {}` keeps it well-typed.
    let name_body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#name_arms)* } }
    };

    let expanded = quote! {
        impl #impl_generics ::taskboard_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #name_body
            }

            #[allow(unreachable_patterns)]
            fn is_intent(&self) -> bool {
                match self {
                    #(#intent_arms)*
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_event(&self) -> bool {
                match self {
                    #(#event_arms)*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Builds a pattern matching any value of the variant, whatever its shape
fn variant_pattern(variant: &Ident, fields: &Fields) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
