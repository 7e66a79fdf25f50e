use quill_ast::DirectiveType;

use super::Emitter;

impl Emitter<'_> {
    /// `NewDirective(graphql.DirectiveConfig{ ... })`
    pub(super) fn directive(&mut self, name: &str, doc: Option<&str>, directive: &DirectiveType) {
        self.open_config("Directive", name);
        self.description(doc);

        let locations: Vec<String> = directive
            .locations
            .iter()
            .map(|loc| format!("\"{}\"", loc.as_str()))
            .collect();
        self.list_entry("Locations: []string", &locations);

        self.arguments(&directive.args);
        self.close_config();
    }
}

#[cfg(test)]
mod tests {
    use quill_ast::{Argument, Declaration, DirectiveLocation, DirectiveType, Literal, TypeRef};

    use crate::emit::tests::emit;

    fn locations() -> DirectiveType {
        DirectiveType::new([
            DirectiveLocation::Query,
            DirectiveLocation::Field,
            DirectiveLocation::Schema,
        ])
    }

    #[test]
    fn test_no_args() {
        assert_eq!(
            emit(false, &Declaration::directive("Test", locations())),
            "NewDirective(graphql.DirectiveConfig{
\tName: \"Test\",
\tLocations: []string{
\t\t\"QUERY\",
\t\t\"FIELD\",
\t\t\"SCHEMA\",
\t},
})
"
        );
    }

    #[test]
    fn test_with_args() {
        let directive = locations()
            .arg(Argument::new("one", TypeRef::named("Int")).with_default(Literal::int(1)))
            .arg(
                Argument::new("str", TypeRef::non_null(TypeRef::named("String")))
                    .with_default(Literal::string("hello")),
            )
            .arg(
                Argument::new("list", TypeRef::list(TypeRef::named("Int"))).with_default(
                    Literal::list([Literal::int(1), Literal::int(2), Literal::int(3)]),
                ),
            );

        assert_eq!(
            emit(false, &Declaration::directive("Test", directive)),
            "NewDirective(graphql.DirectiveConfig{
\tName: \"Test\",
\tLocations: []string{
\t\t\"QUERY\",
\t\t\"FIELD\",
\t\t\"SCHEMA\",
\t},
\tArgs: graphql.FieldConfigArgument{
\t\t\"one\": &graphql.ArgumentConfig{
\t\t\tType: graphql.Int,
\t\t\tDefaultValue: 1,
\t\t},
\t\t\"str\": &graphql.ArgumentConfig{
\t\t\tType: graphql.NewNonNull(graphql.String),
\t\t\tDefaultValue: \"hello\",
\t\t},
\t\t\"list\": &graphql.ArgumentConfig{
\t\t\tType: graphql.NewList(graphql.Int),
\t\t\tDefaultValue: []interface{}{1, 2, 3},
\t\t},
\t},
})
"
        );
    }

    #[test]
    fn test_single_location_and_description() {
        let decl = Declaration::directive(
            "deprecated",
            DirectiveType::new([DirectiveLocation::FieldDefinition]),
        )
        .with_doc("Marks a field as deprecated.\n");

        assert_eq!(
            emit(true, &decl),
            "NewDirective(graphql.DirectiveConfig{
\tName: \"deprecated\",
\tDescription: \"Marks a field as deprecated.\",
\tLocations: []string{ \"FIELD_DEFINITION\" },
})
"
        );
    }
}
