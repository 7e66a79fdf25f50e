use std::sync::{Mutex, PoisonError};

use quill_ast::{Document, OperationKind, SchemaDeclaration};
use quill_codegen::{
    GeneratorError,
    builder::CodeBuilder,
    language::{LanguageCodegen, PreviewFile, write_output},
};
use quill_core::OutputSink;
use tracing::{debug, info_span};

use crate::{GeneratorOptions, emit::Emitter, type_mapper::type_var};

/// Import path of the Go GraphQL library the output targets.
pub const GRAPHQL_IMPORT: &str = "github.com/graphql-go/graphql";

/// Go code generator producing `graphql-go` type definitions.
///
/// The generator keeps one emission buffer and reuses it across calls.
/// Calls on the same instance are serialized; separate instances are
/// independent.
#[derive(Debug, Default)]
pub struct Generator {
    code: Mutex<CodeBuilder>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self, doc: &Document, options: &str) -> Result<PreviewFile, GeneratorError> {
        let mut code = self.lock();
        self.render(&mut code, doc, options)?;
        Ok(PreviewFile {
            path: self.output_name(doc),
            content: code.as_str().to_string(),
        })
    }

    fn generate(
        &self,
        doc: &Document,
        options: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), GeneratorError> {
        let mut code = self.lock();
        self.render(&mut code, doc, options)?;

        let name = self.output_name(doc);
        write_output(sink, &name, code.as_bytes())
            .map_err(|e| GeneratorError::new(&doc.name, self.language(), e))
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the buffer, ignoring poisoning; every call resets it first.
    fn lock(&self) -> std::sync::MutexGuard<'_, CodeBuilder> {
        self.code.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset `code` and render `doc` into it.
    fn render(
        &self,
        code: &mut CodeBuilder,
        doc: &Document,
        options: &str,
    ) -> Result<(), GeneratorError> {
        let _span = info_span!("generate", doc = %doc.name, generator = self.language()).entered();
        code.reset();

        let opts = GeneratorOptions::resolve(doc, self.language(), options)
            .map_err(|e| GeneratorError::new(&doc.name, self.language(), e))?;

        write_header(code, &opts.package);
        if doc.schema.is_some() {
            code.push_line("var Schema graphql.Schema").push_blank();
        }

        for (i, decl) in doc.declarations.iter().enumerate() {
            debug!(name = %decl.name, kind = decl.kind.as_str(), "emitting declaration");
            if i > 0 {
                code.push_blank();
            }
            code.push_raw("var ")
                .push_raw(&type_var(&decl.name))
                .push_raw(" = graphql.");
            Emitter::new(code, opts.descriptions).declaration(decl);
        }

        if let Some(schema) = &doc.schema {
            write_schema_init(code, schema);
        }
        Ok(())
    }
}

fn write_header(code: &mut CodeBuilder, package: &str) {
    code.push_line(&format!("package {}", package))
        .push_blank()
        .push_line(&format!("import \"{}\"", GRAPHQL_IMPORT))
        .push_blank();
}

/// `func init()` building the package-level `Schema` from its root types.
fn write_schema_init(code: &mut CodeBuilder, schema: &SchemaDeclaration) {
    code.push_blank()
        .push_line("func init() {")
        .push_indent()
        .push_line("var err error")
        .push_line("Schema, err = graphql.NewSchema(graphql.SchemaConfig{")
        .push_indent();
    for op in &schema.root_operations {
        code.push_line(&format!(
            "{}: {},",
            schema_config_key(op.kind),
            type_var(&op.type_name)
        ));
    }
    code.push_dedent()
        .push_line("})")
        .push_line("if err != nil {")
        .push_indent()
        .push_line("panic(err)")
        .push_dedent()
        .push_line("}")
        .push_dedent()
        .push_line("}");
}

fn schema_config_key(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Query => "Query",
        OperationKind::Mutation => "Mutation",
        OperationKind::Subscription => "Subscription",
    }
}
