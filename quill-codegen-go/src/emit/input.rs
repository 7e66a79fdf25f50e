use quill_ast::InputType;

use super::Emitter;

impl Emitter<'_> {
    /// `NewInputObject(graphql.InputObjectConfig{ ... })`
    pub(super) fn input(&mut self, name: &str, doc: Option<&str>, input: &InputType) {
        self.open_config("InputObject", name);

        self.code
            .push_line("Fields: graphql.InputObjectFieldConfigMap{")
            .push_indent();
        for field in &input.fields {
            self.code
                .push_line(&format!(
                    "\"{}\": &graphql.InputObjectFieldConfig{{",
                    field.name
                ))
                .push_indent();
            self.type_entry(&field.ty);
            self.default_entry(field.default.as_ref());
            self.description(field.doc.as_deref());
            self.code.push_dedent().push_line("},");
        }
        self.code.push_dedent().push_line("},");

        self.description(doc);
        self.close_config();
    }
}
