use quill_ast::InterfaceType;

use super::Emitter;

impl Emitter<'_> {
    /// `NewInterface(graphql.InterfaceConfig{ ... })`
    pub(super) fn interface(&mut self, name: &str, doc: Option<&str>, interface: &InterfaceType) {
        self.open_config("Interface", name);
        self.fields(&interface.fields, false);
        self.description(doc);
        self.close_config();
    }
}
