//! Literal values used as defaults and directive arguments.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lexical kind of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicKind {
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
}

/// A parsed literal expression.
///
/// Basic literals keep their source text as written by the parser, already
/// quoted and escaped, so it can be copied into generated code unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// A scalar token (`1`, `2.5`, `"hi"`, `true`, `null`, `RED`).
    Basic { kind: BasicKind, raw: String },
    /// `[a, b, c]`
    List(Vec<Literal>),
    /// `{ key: value, ... }` in source order.
    Object(IndexMap<String, Literal>),
}

impl Literal {
    /// Create a basic literal from its kind and source text.
    pub fn basic(kind: BasicKind, raw: impl Into<String>) -> Self {
        Self::Basic {
            kind,
            raw: raw.into(),
        }
    }

    /// Convenience: integer literal.
    pub fn int(value: i64) -> Self {
        Self::basic(BasicKind::Int, value.to_string())
    }

    /// Convenience: boolean literal.
    pub fn boolean(value: bool) -> Self {
        Self::basic(BasicKind::Boolean, value.to_string())
    }

    /// Convenience: string literal. The value is quoted with `"` and
    /// backslashes and quotes are escaped, the way a parser would keep them.
    pub fn string(value: &str) -> Self {
        let mut raw = String::with_capacity(value.len() + 2);
        raw.push('"');
        for c in value.chars() {
            if matches!(c, '"' | '\\') {
                raw.push('\\');
            }
            raw.push(c);
        }
        raw.push('"');
        Self::basic(BasicKind::String, raw)
    }

    /// Create a list literal.
    pub fn list(values: impl IntoIterator<Item = Literal>) -> Self {
        Self::List(values.into_iter().collect())
    }

    /// Create an object literal; later duplicates of a key replace the value
    /// but keep the first position.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Literal)>) -> Self {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Source text of a basic literal.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Basic { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
