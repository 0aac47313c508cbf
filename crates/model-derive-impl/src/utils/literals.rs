// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Literal decoding for directive arguments.

use syn::{Expr, Lit, LitStr, spanned::Spanned};

use crate::model::parse::{SchemaError, SchemaErrorKind};

/// Peel invisible groups produced by `macro_rules!` forwarding.
fn peel(expr: &Expr) -> &Expr {
    match expr {
        Expr::Group(group) => peel(&group.expr),
        _ => expr
    }
}

/// Get the string literal behind `expr`, if it is one.
pub fn string_literal(expr: &Expr) -> Option<&LitStr> {
    match peel(expr) {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(lit) => Some(lit),
            _ => None
        },
        _ => None
    }
}

/// Decode `["a", "b", ...]` into its string literals.
///
/// # Errors
///
/// `ArrayExpected` if `expr` is not an array literal or any element is not a
/// string literal. The error points at the offending element when there is
/// one.
pub fn string_array(expr: &Expr, label: &'static str) -> Result<Vec<LitStr>, SchemaError> {
    let Expr::Array(array) = peel(expr) else {
        return Err(SchemaError::new(
            SchemaErrorKind::ArrayExpected {
                label
            },
            expr.span()
        ));
    };

    array
        .elems
        .iter()
        .map(|elem| {
            string_literal(elem).cloned().ok_or_else(|| {
                SchemaError::new(
                    SchemaErrorKind::ArrayExpected {
                        label
                    },
                    elem.span()
                )
            })
        })
        .collect()
}
