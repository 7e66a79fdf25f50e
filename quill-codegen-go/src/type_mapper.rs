//! Go type mapper implementation.

use quill_ast::BuiltinScalar;
use quill_codegen::builder::TypeMapper;

/// Suffix appended to a declaration name to form its Go variable.
pub const TYPE_SUFFIX: &str = "Type";

/// Maps schema type references to `graphql-go` type expressions.
///
/// Built-in scalars use the library's predefined types; every other name
/// refers to the package-level variable emitted for that declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn map_builtin(&self, scalar: BuiltinScalar) -> String {
        match scalar {
            BuiltinScalar::Int => "graphql.Int".to_string(),
            BuiltinScalar::Float => "graphql.Float".to_string(),
            BuiltinScalar::String => "graphql.String".to_string(),
            BuiltinScalar::Boolean => "graphql.Boolean".to_string(),
            BuiltinScalar::Id => "graphql.ID".to_string(),
        }
    }

    fn map_named(&self, name: &str) -> String {
        type_var(name)
    }

    fn map_list(&self, inner: &str) -> String {
        format!("graphql.NewList({})", inner)
    }

    fn map_non_null(&self, inner: &str) -> String {
        format!("graphql.NewNonNull({})", inner)
    }
}

/// Name of the Go variable holding the declaration `name`.
pub fn type_var(name: &str) -> String {
    format!("{}{}", name, TYPE_SUFFIX)
}
