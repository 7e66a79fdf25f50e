//! Type system declarations.

use serde::{Deserialize, Serialize};

use crate::{Literal, TypeRef};

/// A top-level type system declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Declared name; unique within a document.
    pub name: String,
    /// Description attached to the declaration, as extracted by the parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// What is being declared.
    #[serde(flatten)]
    pub kind: DeclarationKind,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            doc: None,
            kind,
        }
    }

    /// `scalar Name`
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Scalar)
    }

    /// `type Name ...`
    pub fn object(name: impl Into<String>, object: ObjectType) -> Self {
        Self::new(name, DeclarationKind::Object(object))
    }

    /// `interface Name ...`
    pub fn interface(name: impl Into<String>, interface: InterfaceType) -> Self {
        Self::new(name, DeclarationKind::Interface(interface))
    }

    /// `union Name = ...`
    pub fn union(name: impl Into<String>, union: UnionType) -> Self {
        Self::new(name, DeclarationKind::Union(union))
    }

    /// `enum Name ...`
    pub fn enumeration(name: impl Into<String>, enumeration: EnumType) -> Self {
        Self::new(name, DeclarationKind::Enum(enumeration))
    }

    /// `input Name ...`
    pub fn input(name: impl Into<String>, input: InputType) -> Self {
        Self::new(name, DeclarationKind::Input(input))
    }

    /// `directive @name ...`
    pub fn directive(name: impl Into<String>, directive: DirectiveType) -> Self {
        Self::new(name, DeclarationKind::Directive(directive))
    }

    /// Attach a description.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// The closed set of declaration kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclarationKind {
    Scalar,
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    Input(InputType),
    Directive(DirectiveType),
}

impl DeclarationKind {
    /// Lowercase keyword used for this kind in schema source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object(_) => "type",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::Input(_) => "input",
            Self::Directive(_) => "directive",
        }
    }
}

/// An output field of an object or interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Arguments in declaration order; empty when the field takes none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            args: Vec::new(),
            doc: None,
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// An argument of a field or directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            doc: None,
        }
    }

    pub fn with_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A field of an input object. Same shape as an argument.
pub type InputField = Argument;

/// `type Name implements A & B { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// `interface Name { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceType {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl InterfaceType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// `union Name = A | B`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnionType {
    #[serde(default)]
    pub members: Vec<String>,
}

impl UnionType {
    pub fn new<S: Into<String>>(members: impl IntoIterator<Item = S>) -> Self {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// `enum Name { A B C }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: values.into_iter().map(EnumValue::new).collect(),
        }
    }

    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// `input Name { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputType {
    #[serde(default)]
    pub fields: Vec<InputField>,
}

impl InputType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: InputField) -> Self {
        self.fields.push(field);
        self
    }
}

/// `directive @name(args) on LOCATIONS`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectiveType {
    #[serde(default)]
    pub locations: Vec<DirectiveLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Argument>,
}

impl DirectiveType {
    pub fn new(locations: impl IntoIterator<Item = DirectiveLocation>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }
}

/// Where a directive may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// The location tag as written in schema source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}
