use quill_ast::EnumType;

use super::Emitter;

impl Emitter<'_> {
    /// `NewEnum(graphql.EnumConfig{ ... })`
    pub(super) fn enumeration(&mut self, name: &str, doc: Option<&str>, enumeration: &EnumType) {
        self.open_config("Enum", name);
        self.description(doc);

        self.code
            .push_line("Values: graphql.EnumValueConfigMap{")
            .push_indent();
        for value in &enumeration.values {
            self.code
                .push_line(&format!("\"{}\": &graphql.EnumValueConfig{{", value.name))
                .push_indent()
                .push_line(&format!("Value: \"{}\",", value.name));
            self.description(value.doc.as_deref());
            self.code.push_dedent().push_line("},");
        }
        self.code.push_dedent().push_line("},");

        self.close_config();
    }
}

#[cfg(test)]
mod tests {
    use quill_ast::{Declaration, EnumType, EnumValue};

    use crate::emit::tests::emit;

    #[test]
    fn test_enum() {
        let decl = Declaration::enumeration("Test", EnumType::new(["A", "B", "C"]));
        assert_eq!(
            emit(false, &decl),
            "NewEnum(graphql.EnumConfig{
\tName: \"Test\",
\tValues: graphql.EnumValueConfigMap{
\t\t\"A\": &graphql.EnumValueConfig{
\t\t\tValue: \"A\",
\t\t},
\t\t\"B\": &graphql.EnumValueConfig{
\t\t\tValue: \"B\",
\t\t},
\t\t\"C\": &graphql.EnumValueConfig{
\t\t\tValue: \"C\",
\t\t},
\t},
})
"
        );
    }

    #[test]
    fn test_enum_descriptions() {
        let enumeration = EnumType::default()
            .value(EnumValue::new("RED").with_doc("Warm.\n"))
            .value(EnumValue::new("BLUE"));
        let decl = Declaration::enumeration("Color", enumeration).with_doc("Colors.\n");

        assert_eq!(
            emit(true, &decl),
            "NewEnum(graphql.EnumConfig{
\tName: \"Color\",
\tDescription: \"Colors.\",
\tValues: graphql.EnumValueConfigMap{
\t\t\"RED\": &graphql.EnumValueConfig{
\t\t\tValue: \"RED\",
\t\t\tDescription: \"Warm.\",
\t\t},
\t\t\"BLUE\": &graphql.EnumValueConfig{
\t\t\tValue: \"BLUE\",
\t\t},
\t},
})
"
        );
    }
}
