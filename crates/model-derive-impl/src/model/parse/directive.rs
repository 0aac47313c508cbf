// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tokenization of `#[model(...)]` arguments.
//!
//! Arguments are read loosely first, as comma separated `label = value` or
//! bare values, so that label problems can be reported as precise directive
//! errors instead of generic parse failures.

use proc_macro2::{Span, TokenStream};
use syn::{
    Expr, Ident, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream, Parser},
    punctuated::Punctuated,
    spanned::Spanned
};

/// Recognized directive labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// `comparableMembers = ["field", ...]`.
    ComparableMembers,

    /// `codingMembers = ["field: Type", ...]`.
    CodingMembers,

    /// `uselessInitializations = "field = value; ..."`.
    UselessInitializations
}

impl Label {
    /// Every label, in documentation order.
    pub const ALL: [Self; 3] = [
        Self::ComparableMembers,
        Self::CodingMembers,
        Self::UselessInitializations
    ];

    /// Label as written in the directive.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComparableMembers => "comparableMembers",
            Self::CodingMembers => "codingMembers",
            Self::UselessInitializations => "uselessInitializations"
        }
    }

    /// Snake case spelling, accepted as an alias.
    pub const fn alias(self) -> &'static str {
        match self {
            Self::ComparableMembers => "comparable_members",
            Self::CodingMembers => "coding_members",
            Self::UselessInitializations => "useless_initializations"
        }
    }

    /// Resolve a label identifier, in either spelling.
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        let name = ident.unraw().to_string();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == name || label.alias() == name)
    }
}

/// One directive argument before validation.
#[derive(Debug, Clone)]
pub struct DirectiveArgument {
    /// Label, absent for bare values.
    pub label: Option<Ident>,

    /// Argument value.
    pub value: Expr
}

impl DirectiveArgument {
    /// Span of the whole argument, label included.
    pub fn span(&self) -> Span {
        match &self.label {
            Some(label) => label.span(),
            None => self.value.span()
        }
    }
}

impl Parse for DirectiveArgument {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let label = if input.peek(Ident::peek_any) && input.peek2(Token![=]) {
            let label = input.call(Ident::parse_any)?;
            let _: Token![=] = input.parse()?;
            Some(label)
        } else {
            None
        };
        let value: Expr = input.parse()?;

        Ok(Self {
            label,
            value
        })
    }
}

/// Split the attribute arguments into [`DirectiveArgument`]s.
///
/// # Errors
///
/// Returns the underlying parse error if the arguments are not a comma
/// separated list of `label = value` pairs or bare values.
pub fn parse_arguments(args: TokenStream) -> syn::Result<Vec<DirectiveArgument>> {
    let arguments = Punctuated::<DirectiveArgument, Token![,]>::parse_terminated.parse2(args)?;
    Ok(arguments.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn parses_labeled_arguments() {
        let arguments = parse_arguments(quote! {
            comparableMembers = ["age"],
            codingMembers = ["age: i64"],
            uselessInitializations = "",
        })
        .unwrap();
        assert_eq!(arguments.len(), 3);
        let labels: Vec<String> = arguments
            .iter()
            .map(|a| a.label.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(
            labels,
            ["comparableMembers", "codingMembers", "uselessInitializations"]
        );
    }

    #[test]
    fn bare_values_have_no_label() {
        let arguments = parse_arguments(quote! { ["age"], codingMembers = [] }).unwrap();
        assert!(arguments[0].label.is_none());
        assert!(arguments[1].label.is_some());
    }

    #[test]
    fn empty_arguments() {
        assert!(parse_arguments(TokenStream::new()).unwrap().is_empty());
    }

    #[test]
    fn missing_value_is_a_parse_error() {
        assert!(parse_arguments(quote! { codingMembers = }).is_err());
    }

    #[test]
    fn labels_resolve() {
        let ident: Ident = syn::parse_quote!(codingMembers);
        assert_eq!(Label::from_ident(&ident), Some(Label::CodingMembers));
        let ident: Ident = syn::parse_quote!(uselessInitializations);
        assert_eq!(
            Label::from_ident(&ident),
            Some(Label::UselessInitializations)
        );
        let ident: Ident = syn::parse_quote!(CodingMembers);
        assert_eq!(Label::from_ident(&ident), None);
    }

    #[test]
    fn snake_case_labels_are_aliases() {
        let ident: Ident = syn::parse_quote!(comparable_members);
        assert_eq!(Label::from_ident(&ident), Some(Label::ComparableMembers));
        let ident: Ident = syn::parse_quote!(coding_members);
        assert_eq!(Label::from_ident(&ident), Some(Label::CodingMembers));
    }
}
