//! Go code generator for Quill schema documents.
//!
//! Turns a [`quill_ast::Document`] into one Go source file declaring a
//! `graphql-go` type variable per schema declaration, plus a package-level
//! `Schema` built in `init()` when the document declares a schema.
//!
//! ```
//! use quill_ast::{Declaration, Document, Field, ObjectType, TypeRef};
//! use quill_codegen_go::{Generator, LanguageCodegen};
//!
//! let doc = Document::new("hello.gql").declaration(Declaration::object(
//!     "Query",
//!     ObjectType::new().field(Field::new("hello", TypeRef::named("String"))),
//! ));
//!
//! let file = Generator::new().preview(&doc, r#"{"package": "api"}"#).unwrap();
//! assert_eq!(file.path, "hello.go");
//! assert!(file.content.starts_with("package api\n"));
//! ```

mod emit;
mod generator;
mod options;
mod type_mapper;
mod value;

pub use generator::{GRAPHQL_IMPORT, Generator};
pub use options::{DEFAULT_PACKAGE, GeneratorOptions};
pub use quill_codegen::{GeneratorError, LanguageCodegen, PreviewFile};
pub use type_mapper::{GoTypeMapper, TYPE_SUFFIX, type_var};
pub use value::{render_value, write_value};
