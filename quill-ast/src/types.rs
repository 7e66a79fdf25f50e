//! Type references.

use serde::{Deserialize, Serialize};

/// A possibly wrapped reference to a named type, as written in a field or
/// argument position (`String`, `[Int!]`, `User!`, ...).
///
/// `NonNull` never directly wraps another `NonNull`; the grammar rules that
/// out and it is not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A bare type name.
    Named(String),
    /// `[T]`
    List(Box<TypeRef>),
    /// `T!`
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap a type in a list.
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap a type in a non-null modifier.
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }
}

/// The scalar types every schema gets for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    Int,
    Float,
    String,
    Boolean,
    Id,
}

impl BuiltinScalar {
    /// Look up a built-in scalar by its schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "ID" => Some(Self::Id),
            _ => None,
        }
    }

    /// Get the schema name of this scalar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Id => "ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scalar_round_trip_names() {
        for name in ["Int", "Float", "String", "Boolean", "ID"] {
            let scalar = BuiltinScalar::from_name(name).unwrap();
            assert_eq!(scalar.as_str(), name);
        }
        assert_eq!(BuiltinScalar::from_name("Id"), None);
        assert_eq!(BuiltinScalar::from_name("DateTime"), None);
    }

    #[test]
    fn test_serde_shape() {
        let ty = TypeRef::list(TypeRef::non_null(TypeRef::named("String")));
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#"{"list":{"non_null":{"named":"String"}}}"#);

        let back: TypeRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
