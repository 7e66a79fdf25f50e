//! Schema document model for the Quill code generators.
//!
//! This crate holds the read-only tree a generator walks: a [`Document`] made
//! of ordered [`Declaration`]s, an optional [`SchemaDeclaration`], and the
//! directives applied to the document itself.
//!
//! # Architecture
//!
//! ```text
//! schema.gql → parser (external) → quill-ast (Document) → quill-codegen-* → sink
//! ```
//!
//! Documents are produced once by a parser and are never mutated by a
//! generator. Every type is serde-enabled so a pre-parsed document can be
//! exchanged as JSON.

mod decl;
mod document;
mod literal;
mod types;

pub use decl::{
    Argument, Declaration, DeclarationKind, DirectiveLocation, DirectiveType, EnumType, EnumValue,
    Field, InputField, InputType, InterfaceType, ObjectType, UnionType,
};
pub use document::{
    DirectiveAnnotation, DirectiveArg, Document, OperationKind, RootOperation, SchemaDeclaration,
};
pub use literal::{BasicKind, Literal};
pub use types::{BuiltinScalar, TypeRef};
