// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Coding field descriptors.
//!
//! A coding member is written as a string `"<name>: <Type>"`, with a trailing
//! `?` on the type marking the field nullable:
//!
//! ```rust,ignore
//! codingMembers = ["age: i64", "nickname: String?"]
//! ```
//!
//! | Descriptor | `ident` | `ty` | `nullable` |
//! |------------|---------|------|------------|
//! | `"age: i64"` | `age` | `i64` | `false` |
//! | `"nickname: String?"` | `nickname` | `String` | `true` |
//!
//! Every schema also ends with six implicit fields that are not
//! configurable; see [`implicit_fields`].

use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Ident, LitStr, Type, ext::IdentExt};

use super::error::{SchemaError, SchemaErrorKind};

/// Name of the read-only identity field.
pub const IDENTITY: &str = "id";

/// Name of the field every shallow comparison includes.
pub const NAME: &str = "name";

/// Zero-value category of a field type.
///
/// Replaces matching on type names at expansion time with a closed set of
/// primitive kinds. Everything outside the known primitives is
/// [`TypeKind::Other`] and gets its zero value through `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `String`.
    Text,

    /// Signed and unsigned integers of every width.
    Integer,

    /// `f32` and `f64`.
    Floating,

    /// Any other type, constructed through `Default::default()`.
    Other
}

impl TypeKind {
    /// Classify a bare (non-optional) type.
    pub fn of(ty: &Type) -> Self {
        let Type::Path(type_path) = ty else {
            return Self::Other;
        };
        if type_path.qself.is_some() {
            return Self::Other;
        }
        let Some(segment) = type_path.path.segments.last() else {
            return Self::Other;
        };
        if !segment.arguments.is_none() {
            return Self::Other;
        }

        match segment.ident.to_string().as_str() {
            "String" => Self::Text,
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => Self::Integer,
            "f32" | "f64" => Self::Floating,
            _ => Self::Other
        }
    }

    /// Zero value expression for a non-nullable field of type `ty`.
    pub fn zero_value(self, ty: &Type) -> TokenStream {
        match self {
            Self::Text => quote! { ::std::string::String::new() },
            Self::Integer => quote! { 0 },
            Self::Floating => quote! { 0.0 },
            Self::Other => quote! { <#ty as ::core::default::Default>::default() }
        }
    }
}

/// One schema field, declared or implicit.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field identifier, spanned at its descriptor.
    pub ident: Ident,

    /// Bare field type without the optionality marker.
    pub ty: Type,

    /// Zero-value category of `ty`.
    pub kind: TypeKind,

    /// Declared with a trailing `?`; stored as `Option<ty>`.
    pub nullable: bool,

    /// Derived accessor rather than a stored field.
    ///
    /// Read-only fields are encoded and compared but never decoded or
    /// assigned by a constructor.
    pub read_only: bool
}

impl FieldSpec {
    fn implicit(name: &str, ty: Type, nullable: bool, read_only: bool) -> Self {
        Self {
            ident: Ident::new(name, Span::call_site()),
            kind: TypeKind::of(&ty),
            ty,
            nullable,
            read_only
        }
    }

    /// Field name as written on the wire.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Variant of the coding-key enumeration for this field.
    ///
    /// The PascalCase form of the name. Forms that are not usable as a
    /// variant (`Self`, or a leading digit as in `_1`) get a `Field` prefix.
    /// Distinct names may share a variant (`field_1` and `field1`); schema
    /// validation rejects that.
    pub fn key_variant(&self) -> Ident {
        let pascal = self.name().to_case(Case::Pascal);
        let usable = pascal.starts_with(|c: char| c.is_alphabetic()) && pascal != "Self";
        if usable {
            format_ident!("{}", pascal)
        } else {
            format_ident!("Field{}", pascal)
        }
    }

    /// Stored type: `Option<ty>` for nullable fields, `ty` otherwise.
    pub fn field_type(&self) -> Type {
        let ty = &self.ty;
        if self.nullable {
            syn::parse_quote! { ::core::option::Option<#ty> }
        } else {
            ty.clone()
        }
    }

    /// Read the field from `receiver`.
    ///
    /// Read-only fields go through their accessor method.
    pub fn access(&self, receiver: &TokenStream) -> TokenStream {
        let ident = &self.ident;
        if self.read_only {
            quote! { #receiver.#ident() }
        } else {
            quote! { #receiver.#ident }
        }
    }
}

/// Parse a `"<name>: <Type>[?]"` coding member.
///
/// The text is split on the first `": "`. A trailing `?` on the type marks
/// the field nullable and is stripped. Both halves are re-spanned at the
/// descriptor literal so type errors in generated code point back at it.
///
/// # Errors
///
/// `MalformedFieldDescriptor` when the separator is missing, the name is
/// not an identifier, or the type does not parse.
pub fn parse_descriptor(lit: &LitStr) -> Result<FieldSpec, SchemaError> {
    let text = lit.value();
    let malformed = || {
        SchemaError::new(
            SchemaErrorKind::MalformedFieldDescriptor {
                entry: text.clone()
            },
            lit.span()
        )
    };

    let (name, type_text) = text.split_once(": ").ok_or_else(malformed)?;
    let (type_text, nullable) = match type_text.trim_end().strip_suffix('?') {
        Some(bare) => (bare, true),
        None => (type_text, false)
    };

    let ident: Ident = LitStr::new(name.trim(), lit.span())
        .parse()
        .map_err(|_| malformed())?;
    let ty: Type = LitStr::new(type_text.trim(), lit.span())
        .parse()
        .map_err(|_| malformed())?;

    Ok(FieldSpec {
        ident,
        kind: TypeKind::of(&ty),
        ty,
        nullable,
        read_only: false
    })
}

/// The six fields appended to every schema, in order.
///
/// | Field | Type | Notes |
/// |-------|------|-------|
/// | `id` | `String` | Read-only view of `public_identifier` |
/// | `public_identifier` | `String` | |
/// | `name` | `String` | |
/// | `created_at` | `Timestamp` | |
/// | `updated_at` | `Timestamp` | |
/// | `deleted_at` | `Timestamp` | Nullable |
pub fn implicit_fields() -> Vec<FieldSpec> {
    let text: Type = syn::parse_quote! { ::std::string::String };
    let timestamp: Type = syn::parse_quote! { ::model_core::Timestamp };

    vec![
        FieldSpec::implicit(IDENTITY, text.clone(), false, true),
        FieldSpec::implicit("public_identifier", text.clone(), false, false),
        FieldSpec::implicit(NAME, text, false, false),
        FieldSpec::implicit("created_at", timestamp.clone(), false, false),
        FieldSpec::implicit("updated_at", timestamp.clone(), false, false),
        FieldSpec::implicit("deleted_at", timestamp, true, false),
    ]
}
