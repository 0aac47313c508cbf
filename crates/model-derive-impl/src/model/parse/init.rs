// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Extra initializations.
//!
//! `uselessInitializations` carries statements that both generated
//! initializers (`Default` and `new`) and the decoder run after every schema
//! field is assigned. Instead of splicing the text verbatim, it is parsed into
//! a list of `field = value` assignments so malformed input fails at the
//! directive rather than somewhere inside generated code.
//!
//! Statements are separated by `;`; line breaks are plain whitespace, so one
//! expression may span several lines. A leading `self.` is accepted.
//!
//! ```rust,ignore
//! uselessInitializations = "status = 0; self.rating = 5.0"
//! uselessInitializations = ""   // no extra statements
//! ```

use syn::{
    Expr, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated
};

use super::error::{SchemaError, SchemaErrorKind};

/// Single `field = value` statement.
#[derive(Debug, Clone)]
pub struct InitAssignment {
    /// Assigned field.
    pub field: Ident,

    /// Assigned value.
    pub value: Expr
}

impl Parse for InitAssignment {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(Token![self]) {
            let _: Token![self] = input.parse()?;
            let _: Token![.] = input.parse()?;
        }
        let field: Ident = input.parse()?;
        let _: Token![=] = input.parse()?;
        let value: Expr = input.parse()?;

        Ok(Self {
            field,
            value
        })
    }
}

/// Parse the extra-initialization string into assignments.
///
/// The text is tokenized as a whole and split on top-level `;` only, so a
/// separator inside a string literal, block or closure stays part of its
/// expression. A trailing `;` is allowed. An empty or whitespace-only
/// string yields no assignments.
///
/// # Errors
///
/// `InitializationFormat` when the text does not tokenize or is not a
/// `;`-separated list of `field = value` assignments.
pub fn parse_initializations(lit: &LitStr) -> Result<Vec<InitAssignment>, SchemaError> {
    let assignments = lit
        .parse_with(Punctuated::<InitAssignment, Token![;]>::parse_terminated)
        .map_err(|err| {
            SchemaError::new(
                SchemaErrorKind::InitializationFormat {
                    reason: format!("`{}`: {}", lit.value().trim(), err)
                },
                lit.span()
            )
        })?;
    Ok(assignments.into_iter().collect())
}
