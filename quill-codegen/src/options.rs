//! Decoding of generator options embedded in schema documents.
//!
//! Generators can be configured from the document itself with a directive
//! named after the generator, carrying one object literal argument:
//!
//! ```graphql
//! @go(options: { package: "api", descriptions: true })
//! ```
//!
//! Only string and boolean leaves are understood; this is not a general
//! literal evaluator.

use quill_ast::{Document, Literal};

use crate::OptionError;

/// Visit each `key: value` entry of the option directives named `directive`,
/// in document order.
///
/// A matching directive without arguments stops the scan, keeping whatever
/// was applied so far.
pub fn visit_directive_options<F>(
    doc: &Document,
    directive: &str,
    mut visit: F,
) -> Result<(), OptionError>
where
    F: FnMut(&str, &Literal) -> Result<(), OptionError>,
{
    for annotation in doc.directives_named(directive) {
        let Some(arg) = annotation.args.first() else {
            break;
        };

        let Literal::Object(entries) = &arg.value else {
            return Err(OptionError::UnexpectedValue {
                option: format!("@{}({})", directive, arg.name),
                expected: "an object literal",
            });
        };

        for (key, value) in entries {
            visit(key, value)?;
        }
    }
    Ok(())
}

/// Raw source text of a basic literal option value.
pub fn literal_text<'a>(option: &str, value: &'a Literal) -> Result<&'a str, OptionError> {
    value.as_raw().ok_or_else(|| OptionError::UnexpectedValue {
        option: option.to_string(),
        expected: "a string or boolean literal",
    })
}

/// Boolean value of a basic literal option value.
pub fn literal_bool(option: &str, value: &Literal) -> Result<bool, OptionError> {
    let text = literal_text(option, value)?;
    parse_bool(text).ok_or_else(|| OptionError::InvalidBool {
        option: option.to_string(),
        value: text.to_string(),
    })
}

/// Parse the boolean spellings accepted in option values.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Remove one pair of surrounding double quotes, if both are present.
pub fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use quill_ast::{BasicKind, DirectiveAnnotation};

    use super::*;

    fn collect(doc: &Document) -> Result<Vec<(String, String)>, OptionError> {
        let mut seen = Vec::new();
        visit_directive_options(doc, "go", |key, value| {
            seen.push((key.to_string(), literal_text(key, value)?.to_string()));
            Ok(())
        })?;
        Ok(seen)
    }

    #[test]
    fn test_parse_bool_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Some(true), "{s}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Some(false), "{s}");
        }
        for s in ["", "yes", "tRuE", "2", "\"true\""] {
            assert_eq!(parse_bool(s), None, "{s}");
        }
    }

    #[test]
    fn test_strip_quotes_only_matching_pair() {
        assert_eq!(strip_quotes("\"api\""), "api");
        assert_eq!(strip_quotes("api"), "api");
        assert_eq!(strip_quotes("\"api"), "\"api");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_visit_in_document_order() {
        let doc = Document::new("a.gql")
            .directive(DirectiveAnnotation::new("ts").arg(
                "options",
                Literal::object([("package", Literal::string("ignored"))]),
            ))
            .directive(DirectiveAnnotation::new("go").arg(
                "options",
                Literal::object([
                    ("package", Literal::string("api")),
                    ("descriptions", Literal::boolean(true)),
                ]),
            ));

        let seen = collect(&doc).unwrap();
        assert_eq!(
            seen,
            [
                ("package".to_string(), "\"api\"".to_string()),
                ("descriptions".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_directive_without_args_stops_scan() {
        let doc = Document::new("a.gql")
            .directive(DirectiveAnnotation::new("go"))
            .directive(DirectiveAnnotation::new("go").arg(
                "options",
                Literal::object([("package", Literal::string("late"))]),
            ));

        assert!(collect(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_argument_is_rejected() {
        let doc = Document::new("a.gql")
            .directive(DirectiveAnnotation::new("go").arg("options", Literal::int(1)));

        let err = collect(&doc).unwrap_err();
        assert!(matches!(err, OptionError::UnexpectedValue { .. }));
        assert_eq!(
            err.to_string(),
            "option '@go(options)' must be an object literal"
        );
    }

    #[test]
    fn test_literal_bool() {
        let yes = Literal::basic(BasicKind::Boolean, "true");
        let bad = Literal::basic(BasicKind::String, "\"maybe\"");

        assert!(literal_bool("descriptions", &yes).unwrap());
        let err = literal_bool("descriptions", &bad).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid boolean '\"maybe\"' for option 'descriptions'"
        );
        assert!(literal_bool("descriptions", &Literal::list([])).is_err());
    }
}
