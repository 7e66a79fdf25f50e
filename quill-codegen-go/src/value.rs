//! Go rendering of literal values.

use quill_ast::Literal;

/// Render a literal as a Go expression.
///
/// Basic literals are copied as written. Lists become `[]interface{}`
/// composite literals; objects are written as `{ key: value, ... }`.
pub fn render_value(value: &Literal) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Append the Go rendering of `value` to `out`.
pub fn write_value(out: &mut String, value: &Literal) {
    match value {
        Literal::Basic { raw, .. } => out.push_str(raw),
        Literal::List(items) => {
            out.push_str("[]interface{}{");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push('}');
        }
        Literal::Object(entries) => {
            out.push_str("{ ");
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_value(out, item);
            }
            if !entries.is_empty() {
                out.push(' ');
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_ast::BasicKind;

    use super::*;

    #[test]
    fn test_basic_copied_verbatim() {
        assert_eq!(render_value(&Literal::int(42)), "42");
        assert_eq!(render_value(&Literal::string("hello")), "\"hello\"");
        assert_eq!(
            render_value(&Literal::basic(BasicKind::Float, "1.5e3")),
            "1.5e3"
        );
        assert_eq!(render_value(&Literal::basic(BasicKind::Enum, "RED")), "RED");
        assert_eq!(render_value(&Literal::basic(BasicKind::Null, "null")), "null");
    }

    #[test]
    fn test_list() {
        let list = Literal::list([Literal::int(1), Literal::int(2), Literal::int(3)]);
        assert_eq!(render_value(&list), "[]interface{}{1, 2, 3}");
        assert_eq!(render_value(&Literal::list([])), "[]interface{}{}");
    }

    #[test]
    fn test_object() {
        let obj = Literal::object([("a", Literal::int(1)), ("b", Literal::string("x"))]);
        assert_eq!(render_value(&obj), "{ a: 1, b: \"x\" }");

        let empty = Literal::object(Vec::<(String, Literal)>::new());
        assert_eq!(render_value(&empty), "{ }");
    }

    #[test]
    fn test_nested() {
        let value = Literal::list([
            Literal::object([(
                "tags",
                Literal::list([Literal::string("a"), Literal::string("b")]),
            )]),
            Literal::list([Literal::list([Literal::int(0)])]),
        ]);
        assert_eq!(
            render_value(&value),
            "[]interface{}{{ tags: []interface{}{\"a\", \"b\"} }, []interface{}{[]interface{}{0}}}"
        );
    }
}
