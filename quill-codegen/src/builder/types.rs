//! Rendering of schema type references.
//!
//! A [`TypeMapper`] turns a [`TypeRef`] into the expression a target language
//! uses to refer to that type. Wrappers are rendered recursively, innermost
//! first, so nesting depth follows the schema exactly.

use quill_ast::{BuiltinScalar, TypeRef};

/// Trait for mapping schema type references to a target language.
///
/// Implement this trait to support a new target language.
pub trait TypeMapper {
    /// Map a built-in scalar (`Int`, `String`, ...).
    fn map_builtin(&self, scalar: BuiltinScalar) -> String;

    /// Map a reference to a type declared in the schema.
    fn map_named(&self, name: &str) -> String;

    /// Map a list wrapper around an already rendered type.
    fn map_list(&self, inner: &str) -> String;

    /// Map a non-null wrapper around an already rendered type.
    fn map_non_null(&self, inner: &str) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) => match BuiltinScalar::from_name(name) {
                Some(scalar) => self.map_builtin(scalar),
                None => self.map_named(name),
            },
            TypeRef::List(inner) => {
                let inner_str = self.render_type(inner);
                self.map_list(&inner_str)
            }
            TypeRef::NonNull(inner) => {
                let inner_str = self.render_type(inner);
                self.map_non_null(&inner_str)
            }
        }
    }
}
