use super::Emitter;

const SERIALIZE_STUB: &str =
    "Serialize: func(value interface{}) interface{} { return nil }, // TODO";

impl Emitter<'_> {
    /// `NewScalar(graphql.ScalarConfig{ ... })`
    pub(super) fn scalar(&mut self, name: &str, doc: Option<&str>) {
        self.open_config("Scalar", name);
        self.description(doc);
        self.code.push_line(SERIALIZE_STUB);
        self.close_config();
    }
}
