use quill_ast::UnionType;

use super::Emitter;
use crate::type_mapper::type_var;

const RESOLVE_TYPE_STUB: &str =
    "ResolveType: func(p graphql.ResolveParams) *graphql.Object { return nil }, // TODO";

impl Emitter<'_> {
    /// `NewUnion(graphql.UnionConfig{ ... })`
    pub(super) fn union(&mut self, name: &str, doc: Option<&str>, union: &UnionType) {
        self.open_config("Union", name);

        let members: Vec<String> = union.members.iter().map(|m| type_var(m)).collect();
        self.list_entry("Types: []*graphql.Object", &members);

        self.code.push_line(RESOLVE_TYPE_STUB);
        self.description(doc);
        self.close_config();
    }
}
