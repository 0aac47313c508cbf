// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Directive validation errors.
//!
//! Every failure aborts the whole expansion for the annotated struct. Errors
//! are always schema-authoring mistakes; the synthesizer itself cannot fail.
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `Attachment` | `#[model]` is not on a non-generic struct with named fields |
//! | `ArgumentCount` | Anything other than three arguments |
//! | `MissingLabel` | An argument is a bare value without `label =` |
//! | `UnknownArgument` | Label outside the three recognized ones |
//! | `DuplicateArgument` | A recognized label given twice |
//! | `ArrayExpected` | Member list is not an array of string literals |
//! | `InitializationFormat` | Extra initializations are not a string of `field = expr` |
//! | `MalformedFieldDescriptor` | Coding member is not `"name: Type"` |
//! | `DuplicateMember` | Two coding fields share a name |
//! | `KeyCollision` | Two coding fields map to the same key variant |
//! | `UnknownMember` | A member or assignment names a field the struct lacks |
//! | `Syntax` | Arguments are not comma separated `label = value` pairs |

use std::fmt;

use proc_macro2::Span;

/// What went wrong while reading a `#[model(...)]` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaErrorKind {
    /// Directive applied to something other than a struct with named fields.
    Attachment,

    /// Wrong number of directive arguments.
    ArgumentCount {
        /// Number of arguments actually supplied.
        found: usize
    },

    /// Argument without a label.
    MissingLabel,

    /// Label that is not a recognized directive argument.
    UnknownArgument {
        /// The offending label.
        label: String
    },

    /// Recognized label supplied more than once.
    DuplicateArgument {
        /// The repeated label.
        label: &'static str
    },

    /// Argument is not an array literal, or an element is not a string.
    ArrayExpected {
        /// Label of the argument being decoded.
        label: &'static str
    },

    /// Extra initializations are not a string of `field = expr` statements.
    InitializationFormat {
        /// Why the text was rejected.
        reason: String
    },

    /// Coding member does not read `"<name>: <Type>"` or `"<name>: <Type>?"`.
    MalformedFieldDescriptor {
        /// The raw descriptor text.
        entry: String
    },

    /// Two coding fields with the same name.
    DuplicateMember {
        /// The repeated field name.
        name: String
    },

    /// Two coding fields whose key enumeration variants coincide.
    KeyCollision {
        /// Earlier field.
        first: String,

        /// Later field.
        second: String,

        /// The shared variant name.
        variant: String
    },

    /// Member or assignment target that the struct does not declare.
    UnknownMember {
        /// The unresolved field name.
        name: String
    },

    /// Argument list could not be tokenized as directive arguments.
    Syntax {
        /// Message from the underlying parser.
        message: String
    }
}

/// Spanned directive error.
#[derive(Debug, Clone)]
pub struct SchemaError {
    kind: SchemaErrorKind,
    span: Span
}

impl SchemaError {
    /// Create an error pointing at `span`.
    pub fn new(kind: SchemaErrorKind, span: Span) -> Self {
        Self {
            kind,
            span
        }
    }

    /// Error kind.
    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }

    /// Convert into a spanned darling error for `write_errors()`.
    pub fn into_darling(self) -> darling::Error {
        darling::Error::from(syn::Error::new(self.span, self.to_string()))
    }
}

impl From<syn::Error> for SchemaError {
    fn from(err: syn::Error) -> Self {
        Self::new(
            SchemaErrorKind::Syntax {
                message: err.to_string()
            },
            err.span()
        )
    }
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attachment => {
                f.write_str("#[model] can only be applied to a non-generic struct with named fields")
            }
            Self::ArgumentCount {
                found
            } => write!(
                f,
                "#[model] expects exactly 3 arguments (comparableMembers, codingMembers, \
                 uselessInitializations), found {}",
                found
            ),
            Self::MissingLabel => f.write_str(
                "#[model] argument is missing its label, expected `label = value`"
            ),
            Self::UnknownArgument {
                label
            } => write!(
                f,
                "unknown #[model] argument '{}', expected: comparableMembers, codingMembers, \
                 uselessInitializations",
                label
            ),
            Self::DuplicateArgument {
                label
            } => write!(f, "#[model] argument '{}' is given more than once", label),
            Self::ArrayExpected {
                label
            } => write!(f, "'{}' must be an array of string literals", label),
            Self::InitializationFormat {
                reason
            } => write!(
                f,
                "uselessInitializations must be a string literal of `field = value` \
                 statements: {}",
                reason
            ),
            Self::MalformedFieldDescriptor {
                entry
            } => write!(
                f,
                "malformed coding member \"{}\", expected \"<name>: <Type>\" or \
                 \"<name>: <Type>?\"",
                entry
            ),
            Self::DuplicateMember {
                name
            } => write!(f, "field '{}' is declared more than once in the model schema", name),
            Self::KeyCollision {
                first,
                second,
                variant
            } => write!(
                f,
                "coding members '{}' and '{}' both map to the coding key variant `{}`",
                first, second, variant
            ),
            Self::UnknownMember {
                name
            } => write!(f, "'{}' is not a stored field of this struct", name),
            Self::Syntax {
                message
            } => f.write_str(message)
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for SchemaError {}
