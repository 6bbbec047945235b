//! Tantear Derive Macros: Widget Objects Without Boilerplate
//!
//! Hand-written widget impls repeat the same shape over and over: a
//! root selector constant plus a `from_base` that wires each child
//! locator. The derive writes that shape from the struct itself, so a
//! widget's fields ARE its locator map:
//!
//! ```ignore
//! // BAD: Hand-wired, selectors drift from fields over time
//! impl<D: LocatorDriver> Widget<D> for CounterWidget<D> {
//!     const ROOT_SELECTOR: &'static str = ".counter";
//!     fn from_base(base: BaseWidget<D>) -> Self {
//!         Self {
//!             count: base.child(".count"),
//!             increment: base.child("button.increment"),
//!             base,
//!         }
//!     }
//! }
//! ```
//!
//! ```ignore
//! // GOOD: Selectors live on the fields they resolve
//! #[derive(Widget)]
//! #[widget(selector = ".counter")]
//! struct CounterWidget<D: LocatorDriver> {
//!     #[widget(child = ".count")]
//!     count: ChildLocator<D>,
//!     #[widget(child = "button.increment")]
//!     increment: ChildLocator<D>,
//!     base: BaseWidget<D>,
//! }
//! ```
//!
//! # Shape Requirements
//!
//! - A struct-level `#[widget(selector = "...")]` names the root.
//! - Each `#[widget(child = "...")]` field becomes a `ChildLocator`
//!   wired through `base.child(...)`.
//! - Exactly one field carries no `#[widget]` attribute; it receives
//!   the `BaseWidget`.
//! - The struct takes exactly one type parameter, the driver.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, Lit, Meta};

/// Derive macro for widget objects.
///
/// Generates the `Widget` trait implementation: the root selector
/// constant and a `from_base` that builds every child locator before
/// storing the base.
///
/// # Attributes
///
/// - `#[widget(selector = "...")]` (struct) - root selector, required
/// - `#[widget(child = "...")]` (field) - child locator selector
///
/// # Example
///
/// ```ignore
/// #[derive(Widget)]
/// #[widget(selector = "form.login")]
/// struct LoginWidget<D: LocatorDriver> {
///     #[widget(child = "input[name=user]")]
///     user: ChildLocator<D>,
///     #[widget(child = "button[type=submit]")]
///     submit: ChildLocator<D>,
///     base: BaseWidget<D>,
/// }
/// ```
#[proc_macro_derive(Widget, attributes(widget))]
pub fn derive_widget(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_widget(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_widget(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let selector = widget_string_arg(&input.attrs, "selector").ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "derive(Widget) requires #[widget(selector = \"...\")] on the struct",
        )
    })?;

    let driver = driver_param(input)?;
    let plan = plan_fields(input)?;

    let child_idents: Vec<&Ident> = plan.children.iter().map(|(ident, _)| *ident).collect();
    let child_selectors: Vec<&String> = plan.children.iter().map(|(_, sel)| sel).collect();
    let base_ident = plan.base;

    Ok(quote! {
        impl<#driver: ::tantear::LocatorDriver> ::tantear::Widget<#driver> for #name<#driver> {
            const ROOT_SELECTOR: &'static str = #selector;

            fn from_base(base: ::tantear::BaseWidget<#driver>) -> Self {
                Self {
                    #(#child_idents: base.child(#child_selectors),)*
                    #base_ident: base,
                }
            }
        }
    })
}

struct FieldPlan<'a> {
    children: Vec<(&'a Ident, String)>,
    base: &'a Ident,
}

/// The single type parameter a widget struct must declare.
fn driver_param(input: &DeriveInput) -> syn::Result<&Ident> {
    let mut params = input.generics.type_params();
    let first = params.next().ok_or_else(|| {
        syn::Error::new_spanned(
            &input.generics,
            "derive(Widget) requires one type parameter for the driver",
        )
    })?;
    if params.next().is_some() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "derive(Widget) supports exactly one type parameter",
        ));
    }
    Ok(&first.ident)
}

/// Split named fields into child locators and the one base field.
fn plan_fields(input: &DeriveInput) -> syn::Result<FieldPlan<'_>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "derive(Widget) only supports structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "derive(Widget) requires named fields",
        ));
    };

    let mut children = Vec::new();
    let mut base: Option<&Ident> = None;
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        match widget_string_arg(&field.attrs, "child") {
            Some(selector) => children.push((ident, selector)),
            None => {
                if base.replace(ident).is_some() {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "derive(Widget) found a second field without #[widget(child = ...)]; \
                         exactly one field holds the BaseWidget",
                    ));
                }
            }
        }
    }

    let base = base.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "derive(Widget) needs one field without #[widget(child = ...)] for the BaseWidget",
        )
    })?;

    Ok(FieldPlan { children, base })
}

/// Extract a string argument from `#[widget(key = "...")]`.
fn widget_string_arg(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident("widget") {
            if let Ok(Meta::NameValue(nv)) = attr.parse_args::<Meta>() {
                if nv.path.is_ident(key) {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        return Some(s.value());
                    }
                }
            }
        }
    }
    None
}
