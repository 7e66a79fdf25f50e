//! Per-declaration emitters.
//!
//! Each emitter writes the constructor call that follows
//! `var <Name>Type = graphql.`, ending with `})` and a newline. Emitters
//! share an [`Emitter`] context borrowing the generator's buffer.

mod directive;
mod enumeration;
mod input;
mod interface;
mod object;
mod scalar;
mod union;

use quill_ast::{Argument, Declaration, DeclarationKind, Literal, TypeRef};
use quill_codegen::builder::{CodeBuilder, TypeMapper};

use crate::{type_mapper::GoTypeMapper, value::write_value};

/// Emission context for one generation call.
pub struct Emitter<'a> {
    code: &'a mut CodeBuilder,
    types: GoTypeMapper,
    descriptions: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(code: &'a mut CodeBuilder, descriptions: bool) -> Self {
        Self {
            code,
            types: GoTypeMapper,
            descriptions,
        }
    }

    /// Emit the constructor call for `decl`.
    pub fn declaration(&mut self, decl: &Declaration) {
        let doc = decl.doc.as_deref();
        match &decl.kind {
            DeclarationKind::Scalar => self.scalar(&decl.name, doc),
            DeclarationKind::Object(object) => self.object(&decl.name, doc, object),
            DeclarationKind::Interface(interface) => self.interface(&decl.name, doc, interface),
            DeclarationKind::Union(union) => self.union(&decl.name, doc, union),
            DeclarationKind::Enum(enumeration) => self.enumeration(&decl.name, doc, enumeration),
            DeclarationKind::Input(input) => self.input(&decl.name, doc, input),
            DeclarationKind::Directive(directive) => self.directive(&decl.name, doc, directive),
        }
    }

    /// `New<Kind>(graphql.<Kind>Config{` then `Name: "<name>",`, leaving the
    /// config body open and indented.
    fn open_config(&mut self, kind: &str, name: &str) {
        self.code
            .push_line(&format!("New{}(graphql.{}Config{{", kind, kind))
            .push_indent()
            .push_line(&format!("Name: \"{}\",", name));
    }

    fn close_config(&mut self) {
        self.code.push_dedent().push_line("})");
    }

    /// `Description: "<text>",` when descriptions are on and `doc` has text.
    fn description(&mut self, doc: Option<&str>) {
        if !self.descriptions {
            return;
        }
        if let Some(text) = doc.and_then(description_text) {
            self.code.push_line(&format!("Description: \"{}\",", text));
        }
    }

    fn type_entry(&mut self, ty: &TypeRef) {
        let rendered = self.types.render_type(ty);
        self.code.push_line(&format!("Type: {},", rendered));
    }

    fn default_entry(&mut self, default: Option<&Literal>) {
        if let Some(value) = default {
            let mut line = String::from("DefaultValue: ");
            write_value(&mut line, value);
            line.push(',');
            self.code.push_line(&line);
        }
    }

    /// `<header>{ A },` for one item, one `A,` line per item otherwise.
    /// Nothing is written for no items.
    fn list_entry(&mut self, header: &str, items: &[String]) {
        match items {
            [] => {}
            [only] => {
                self.code.push_line(&format!("{}{{ {} }},", header, only));
            }
            _ => {
                self.code.push_line(&format!("{}{{", header));
                self.code.push_indent();
                for item in items {
                    self.code.push_line(&format!("{},", item));
                }
                self.code.push_dedent().push_line("},");
            }
        }
    }

    /// `Args: graphql.FieldConfigArgument{ ... },` for a non-empty list.
    fn arguments(&mut self, args: &[Argument]) {
        if args.is_empty() {
            return;
        }

        self.code
            .push_line("Args: graphql.FieldConfigArgument{")
            .push_indent();
        for arg in args {
            self.code
                .push_line(&format!("\"{}\": &graphql.ArgumentConfig{{", arg.name))
                .push_indent();
            self.type_entry(&arg.ty);
            self.default_entry(arg.default.as_ref());
            self.description(arg.doc.as_deref());
            self.code.push_dedent().push_line("},");
        }
        self.code.push_dedent().push_line("},");
    }
}

/// Description text with one trailing line terminator removed, if any text
/// remains.
fn description_text(doc: &str) -> Option<&str> {
    let text = doc
        .strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(doc);
    (!text.is_empty()).then_some(text)
}
