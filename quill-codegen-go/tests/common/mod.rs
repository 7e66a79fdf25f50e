//! Shared documents for the integration tests.

#![allow(dead_code)]

use quill_ast::{
    Argument, Declaration, DirectiveAnnotation, DirectiveLocation, DirectiveType, Document,
    EnumType, EnumValue, Field, InputType, InterfaceType, Literal, ObjectType, OperationKind,
    SchemaDeclaration, TypeRef, UnionType,
};

pub fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

pub fn required(name: &str) -> TypeRef {
    TypeRef::non_null(TypeRef::named(name))
}

/// `[Name!]!`
pub fn required_list(name: &str) -> TypeRef {
    TypeRef::non_null(TypeRef::list(required(name)))
}

/// `type Query { hello: String }`
pub fn hello_document() -> Document {
    Document::new("hello.gql").declaration(Declaration::object(
        "Query",
        ObjectType::new().field(Field::new("hello", named("String"))),
    ))
}

/// A todo service schema touching every declaration kind, configured with
/// `@go(options: { package: "api", descriptions: true })`.
pub fn todo_document() -> Document {
    Document::new("schemas/todo.gql")
        .directive(DirectiveAnnotation::new("go").arg(
            "options",
            Literal::object([
                ("package", Literal::string("api")),
                ("descriptions", Literal::boolean(true)),
            ]),
        ))
        .with_schema(SchemaDeclaration::query("Query").root(OperationKind::Mutation, "Mutation"))
        .declaration(Declaration::scalar("Time").with_doc("An RFC 3339 timestamp.\n"))
        .declaration(
            Declaration::interface(
                "Node",
                InterfaceType::new().field(Field::new("id", required("ID"))),
            )
            .with_doc("An object with a stable identifier.\n"),
        )
        .declaration(Declaration::interface(
            "Owner",
            InterfaceType::new().field(
                Field::new("todos", required_list("Todo"))
                    .arg(Argument::new("first", named("Int")).with_default(Literal::int(10))),
            ),
        ))
        .declaration(Declaration::enumeration(
            "Role",
            EnumType::default()
                .value(EnumValue::new("ADMIN").with_doc("Full access.\n"))
                .value(EnumValue::new("MEMBER")),
        ))
        .declaration(Declaration::object(
            "Todo",
            ObjectType::new()
                .implements("Node")
                .field(Field::new("id", required("ID")))
                .field(Field::new("title", required("String")).with_doc("Short summary.\n"))
                .field(Field::new("done", required("Boolean")))
                .field(Field::new("due", named("Time")))
                .field(Field::new("tags", required_list("String"))),
        ))
        .declaration(Declaration::object(
            "User",
            ObjectType::new()
                .implements("Node")
                .implements("Owner")
                .field(Field::new("id", required("ID")))
                .field(Field::new("name", named("String")))
                .field(Field::new("role", required("Role")))
                .field(
                    Field::new("todos", required_list("Todo"))
                        .arg(Argument::new("first", named("Int")).with_default(Literal::int(10)))
                        .arg(Argument::new("done", named("Boolean"))),
                ),
        ))
        .declaration(
            Declaration::union("SearchResult", UnionType::new(["Todo", "User"]))
                .with_doc("Anything searchable.\n"),
        )
        .declaration(
            Declaration::input(
                "TodoFilter",
                InputType::new()
                    .field(Argument::new("done", named("Boolean")))
                    .field(
                        Argument::new("tags", TypeRef::list(required("String"))).with_default(
                            Literal::list([Literal::string("work"), Literal::string("home")]),
                        ),
                    )
                    .field(Argument::new("dueBefore", named("Time")).with_doc("Inclusive.\n")),
            )
            .with_doc("Filters for todo queries.\n"),
        )
        .declaration(
            Declaration::directive(
                "auth",
                DirectiveType::new([DirectiveLocation::Object, DirectiveLocation::FieldDefinition])
                    .arg(Argument::new("role", named("Role")).with_default(Literal::basic(
                        quill_ast::BasicKind::Enum,
                        "ADMIN",
                    ))),
            )
            .with_doc("Restricts access.\n"),
        )
        .declaration(
            Declaration::object(
                "Query",
                ObjectType::new()
                    .field(
                        Field::new("node", named("Node")).arg(Argument::new("id", required("ID"))),
                    )
                    .field(
                        Field::new("search", required_list("SearchResult"))
                            .arg(Argument::new("term", required("String")))
                            .arg(Argument::new("filter", named("TodoFilter"))),
                    )
                    .field(Field::new("me", named("User"))),
            )
            .with_doc("Entry points.\n"),
        )
        .declaration(Declaration::object(
            "Mutation",
            ObjectType::new().field(
                Field::new("completeTodo", named("Todo")).arg(Argument::new("id", required("ID"))),
            ),
        ))
}
