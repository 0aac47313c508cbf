// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validated model schema.
//!
//! [`ModelSchema`] is built once per `#[model(...)]` occurrence, handed to the
//! synthesizer and dropped. Building it either fully succeeds or fails with
//! the first [`SchemaError`]; no partially validated schema is observable.

use std::collections::HashMap;

use proc_macro2::{Span, TokenStream};
use quote::format_ident;
use syn::{Fields, Ident, Item, ItemStruct, LitStr, Visibility, ext::IdentExt, spanned::Spanned};

use super::{
    directive::{DirectiveArgument, Label, parse_arguments},
    error::{SchemaError, SchemaErrorKind},
    field::{FieldSpec, NAME, implicit_fields, parse_descriptor},
    init::{InitAssignment, parse_initializations}
};
use crate::utils::literals::{string_array, string_literal};

/// Complete, validated schema of one annotated struct.
///
/// # Field Order
///
/// `coding_fields` holds the user-declared members in declaration order,
/// followed by the implicit fields:
///
/// ```text
/// [user fields...] id, public_identifier, name, created_at, updated_at, deleted_at
/// ```
///
/// `comparable_fields` holds the user list followed by `name`. The trailing
/// `name` is appended even when the user already listed it; comparing a field
/// twice is harmless in a conjunction.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    /// Struct identifier (e.g. `Recipe`).
    pub ident: Ident,

    /// Struct visibility, propagated to generated items.
    pub vis: Visibility,

    /// Fields compared by `properties_equal`, in order.
    pub comparable_fields: Vec<Ident>,

    /// Serialized fields, in encoding order.
    pub coding_fields: Vec<FieldSpec>,

    /// Assignments run at the end of every generated initializer.
    pub initializations: Vec<InitAssignment>,

    /// Struct fields outside the schema.
    ///
    /// Generated initializers fill them with `Default::default()`.
    pub extra_fields: Vec<Ident>
}

impl ModelSchema {
    /// Read and validate a `#[model(...)]` directive.
    ///
    /// # Arguments
    ///
    /// * `args` - Tokens inside `#[model(...)]`
    /// * `item` - The annotated item
    ///
    /// # Errors
    ///
    /// Checks run in this order and the first failure is returned:
    ///
    /// 1. `Attachment` - item is not a non-generic struct with named fields
    /// 2. `Syntax` - arguments do not tokenize
    /// 3. `ArgumentCount` - not exactly three arguments
    /// 4. `MissingLabel`, `UnknownArgument`, `DuplicateArgument` - per
    ///    argument, in source order
    /// 5. `ArrayExpected`, `MalformedFieldDescriptor`, `InitializationFormat`
    ///    - while decoding values
    /// 6. `DuplicateMember`, `KeyCollision`, `UnknownMember` - cross checks against the
    ///    struct
    pub fn from_directive(args: TokenStream, item: &Item) -> Result<Self, SchemaError> {
        let strukt = attachment(item)?;
        let arguments = parse_arguments(args)?;

        if arguments.len() != Label::ALL.len() {
            return Err(SchemaError::new(
                SchemaErrorKind::ArgumentCount {
                    found: arguments.len()
                },
                Span::call_site()
            ));
        }

        let labeled = label_arguments(&arguments)?;
        let value_of = |label: Label| {
            labeled
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    SchemaError::new(
                        SchemaErrorKind::ArgumentCount {
                            found: arguments.len()
                        },
                        Span::call_site()
                    )
                })
        };

        let comparable_literals =
            string_array(value_of(Label::ComparableMembers)?, Label::ComparableMembers.as_str())?;
        let coding_literals =
            string_array(value_of(Label::CodingMembers)?, Label::CodingMembers.as_str())?;
        let user_fields = coding_literals
            .iter()
            .map(parse_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        let initializations = decode_initializations(value_of(Label::UselessInitializations)?)?;

        let struct_fields: Vec<&Ident> =
            strukt.fields.iter().filter_map(|f| f.ident.as_ref()).collect();

        let user_count = user_fields.len();
        let mut coding_fields = user_fields;
        coding_fields.extend(implicit_fields());
        check_unique(&coding_fields, user_count)?;
        check_key_variants(&coding_fields, user_count)?;
        check_declared(&coding_fields[..user_count], &struct_fields)?;
        check_implicit_not_declared(&coding_fields[user_count..], &struct_fields)?;

        let extra_fields: Vec<Ident> = struct_fields
            .iter()
            .filter(|ident| !coding_fields.iter().any(|f| f.name() == unraw(ident)))
            .map(|ident| (*ident).clone())
            .collect();

        let mut comparable_fields = comparable_literals
            .iter()
            .map(|lit| resolve_comparable(lit, &coding_fields, &extra_fields))
            .collect::<Result<Vec<_>, _>>()?;
        comparable_fields.push(format_ident!("{}", NAME));

        for assignment in &initializations {
            let target = unraw(&assignment.field);
            let stored = coding_fields.iter().any(|f| !f.read_only && f.name() == target)
                || extra_fields.iter().any(|ident| unraw(ident) == target);
            if !stored {
                return Err(unknown_member(target, assignment.field.span()));
            }
        }

        Ok(Self {
            ident: strukt.ident.clone(),
            vis: strukt.vis.clone(),
            comparable_fields,
            coding_fields,
            initializations,
            extra_fields
        })
    }

    /// Get the struct name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Create a new identifier with the struct name and a suffix.
    ///
    /// ```rust,ignore
    /// schema.ident_with("CodingKey") // RecipeCodingKey
    /// ```
    pub fn ident_with(&self, suffix: &str) -> Ident {
        format_ident!("{}{}", self.ident, suffix)
    }

    /// Look a coding field up by name.
    pub fn coding_field(&self, name: &str) -> Option<&FieldSpec> {
        self.coding_fields.iter().find(|f| f.name() == name)
    }

    /// Coding fields declared in the directive, without the implicit ones.
    pub fn declared_fields(&self) -> &[FieldSpec] {
        let declared = self.coding_fields.len().saturating_sub(implicit_fields().len());
        &self.coding_fields[..declared]
    }

    /// Coding fields that constructors and the decoder assign.
    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.coding_fields.iter().filter(|f| !f.read_only)
    }
}

/// Ensure the directive sits on a non-generic struct with named fields.
fn attachment(item: &Item) -> Result<&ItemStruct, SchemaError> {
    match item {
        Item::Struct(strukt)
            if matches!(strukt.fields, Fields::Named(_)) && strukt.generics.params.is_empty() =>
        {
            Ok(strukt)
        }
        Item::Struct(strukt) => Err(SchemaError::new(
            SchemaErrorKind::Attachment,
            strukt.ident.span()
        )),
        other => Err(SchemaError::new(SchemaErrorKind::Attachment, item_span(other)))
    }
}

/// Name of a rejected item where it has one, so the error points at it.
fn item_span(item: &Item) -> Span {
    match item {
        Item::Enum(item) => item.ident.span(),
        Item::Union(item) => item.ident.span(),
        Item::Fn(item) => item.sig.ident.span(),
        Item::Trait(item) => item.ident.span(),
        other => other.span()
    }
}

/// Resolve each argument's label, rejecting missing, unknown and repeated
/// ones.
fn label_arguments(
    arguments: &[DirectiveArgument]
) -> Result<Vec<(Label, &syn::Expr)>, SchemaError> {
    let mut labeled: Vec<(Label, &syn::Expr)> = Vec::with_capacity(arguments.len());

    for argument in arguments {
        let Some(ident) = &argument.label else {
            return Err(SchemaError::new(
                SchemaErrorKind::MissingLabel,
                argument.span()
            ));
        };
        let Some(label) = Label::from_ident(ident) else {
            return Err(SchemaError::new(
                SchemaErrorKind::UnknownArgument {
                    label: unraw(ident)
                },
                ident.span()
            ));
        };
        if labeled.iter().any(|(seen, _)| *seen == label) {
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateArgument {
                    label: label.as_str()
                },
                ident.span()
            ));
        }
        labeled.push((label, &argument.value));
    }

    Ok(labeled)
}

fn decode_initializations(value: &syn::Expr) -> Result<Vec<InitAssignment>, SchemaError> {
    let lit = string_literal(value).ok_or_else(|| {
        SchemaError::new(
            SchemaErrorKind::InitializationFormat {
                reason: "expected a string literal".into()
            },
            value.span()
        )
    })?;
    parse_initializations(lit)
}

/// Reject two coding fields with the same name.
///
/// A user field colliding with an implicit one is reported at the user
/// descriptor, since implicit fields have no source location.
fn check_unique(fields: &[FieldSpec], user_count: usize) -> Result<(), SchemaError> {
    let mut seen: HashMap<String, Span> = HashMap::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let name = field.name();
        if let Some(first) = seen.get(&name) {
            let span = if index < user_count {
                field.ident.span()
            } else {
                *first
            };
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateMember {
                    name
                },
                span
            ));
        }
        seen.insert(name, field.ident.span());
    }

    Ok(())
}

/// Reject two coding fields whose key variants coincide, such as `field_1`
/// and `field1` (both `Field1`).
fn check_key_variants(fields: &[FieldSpec], user_count: usize) -> Result<(), SchemaError> {
    let mut seen: HashMap<String, (String, Span)> = HashMap::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let variant = field.key_variant().to_string();
        if let Some((first, first_span)) = seen.get(&variant) {
            let span = if index < user_count {
                field.ident.span()
            } else {
                *first_span
            };
            return Err(SchemaError::new(
                SchemaErrorKind::KeyCollision {
                    first: first.clone(),
                    second: field.name(),
                    variant
                },
                span
            ));
        }
        seen.insert(variant, (field.name(), field.ident.span()));
    }

    Ok(())
}

/// Every user coding member must be a field of the struct.
fn check_declared(user_fields: &[FieldSpec], struct_fields: &[&Ident]) -> Result<(), SchemaError> {
    for field in user_fields {
        let name = field.name();
        if !struct_fields.iter().any(|ident| unraw(ident) == name) {
            return Err(unknown_member(name, field.ident.span()));
        }
    }
    Ok(())
}

/// Implicit fields are added by the macro and must not be declared by hand.
fn check_implicit_not_declared(
    implicit: &[FieldSpec],
    struct_fields: &[&Ident]
) -> Result<(), SchemaError> {
    for ident in struct_fields {
        let name = unraw(ident);
        if implicit.iter().any(|f| f.name() == name) {
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateMember {
                    name
                },
                ident.span()
            ));
        }
    }
    Ok(())
}

/// A comparable member must name a coding field or a struct field.
fn resolve_comparable(
    lit: &LitStr,
    coding_fields: &[FieldSpec],
    extra_fields: &[Ident]
) -> Result<Ident, SchemaError> {
    let name = lit.value();
    if let Some(field) = coding_fields.iter().find(|f| f.name() == name) {
        return Ok(field.ident.clone());
    }
    extra_fields
        .iter()
        .find(|ident| unraw(ident) == name)
        .cloned()
        .ok_or_else(|| unknown_member(name, lit.span()))
}

fn unknown_member(name: String, span: Span) -> SchemaError {
    SchemaError::new(
        SchemaErrorKind::UnknownMember {
            name
        },
        span
    )
}

fn unraw(ident: &Ident) -> String {
    ident.unraw().to_string()
}
