use quill_ast::{Field, ObjectType};

use super::Emitter;
use crate::type_mapper::type_var;

const RESOLVE_STUB: &str =
    "Resolve: func(p graphql.ResolveParams) (interface{}, error) { return nil, nil }, // TODO";

impl Emitter<'_> {
    /// `NewObject(graphql.ObjectConfig{ ... })`
    pub(super) fn object(&mut self, name: &str, doc: Option<&str>, object: &ObjectType) {
        self.open_config("Object", name);

        let interfaces: Vec<String> = object.interfaces.iter().map(|i| type_var(i)).collect();
        self.list_entry("Interfaces: []*graphql.Interface", &interfaces);

        self.fields(&object.fields, true);
        self.description(doc);
        self.close_config();
    }

    /// `Fields: graphql.Fields{ ... },` shared by objects and interfaces.
    /// Only object fields get a resolver stub.
    pub(super) fn fields(&mut self, fields: &[Field], resolve: bool) {
        self.code.push_line("Fields: graphql.Fields{").push_indent();
        for field in fields {
            self.code
                .push_line(&format!("\"{}\": &graphql.Field{{", field.name))
                .push_indent();
            self.type_entry(&field.ty);
            self.arguments(&field.args);
            if resolve {
                self.code.push_line(RESOLVE_STUB);
            }
            self.description(field.doc.as_deref());
            self.code.push_dedent().push_line("},");
        }
        self.code.push_dedent().push_line("},");
    }
}
