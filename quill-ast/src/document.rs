//! Parsed schema documents.

use serde::{Deserialize, Serialize};

use crate::{Declaration, Literal};

/// A parsed and validated schema document.
///
/// Declarations are kept in source order; generators must preserve it.
/// The `schema { ... }` block is held apart from the other declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the source document, usually its path (e.g. `api/todo.gql`).
    pub name: String,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaDeclaration>,
    /// Directives applied to the document itself (`@go(...)` and friends).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<DirectiveAnnotation>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn with_schema(mut self, schema: SchemaDeclaration) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    /// Directives applied to the document with the given name, in order.
    pub fn directives_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a DirectiveAnnotation> + 'a {
        self.directives.iter().filter(move |d| d.name == name)
    }
}

/// `schema { query: Query mutation: Mutation }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Root operations in declaration order.
    #[serde(default)]
    pub root_operations: Vec<RootOperation>,
}

impl SchemaDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, kind: OperationKind, type_name: impl Into<String>) -> Self {
        self.root_operations.push(RootOperation {
            kind,
            type_name: type_name.into(),
        });
        self
    }

    /// Shorthand for a schema with only a query root.
    pub fn query(type_name: impl Into<String>) -> Self {
        Self::new().root(OperationKind::Query, type_name)
    }
}

/// One `operation: Type` entry of a schema declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootOperation {
    pub kind: OperationKind,
    pub type_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The operation keyword (`query`, `mutation`, `subscription`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

/// A directive applied at document level, e.g. `@go(options: { package: "api" })`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveAnnotation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<DirectiveArg>,
}

impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: Literal) -> Self {
        self.args.push(DirectiveArg {
            name: name.into(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveArg {
    pub name: String,
    pub value: Literal,
}
