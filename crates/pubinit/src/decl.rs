use crate::prelude::*;

///
/// Declaration
///
/// One parsed type declaration, handed over whole by the host for a single
/// transform invocation. The core never parses source text itself and never
/// retains the declaration past the call.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,

    #[serde(default)]
    pub attrs: Vec<Attribute>,

    #[serde(default)]
    pub members: Vec<Member>,
}

impl Declaration {
    /// The attribute that triggered this expansion, if the host recorded it.
    #[must_use]
    pub fn trigger_attribute(&self) -> Option<&Attribute> {
        self.attrs.iter().find(|attr| attr.name == MACRO_NAME)
    }

    /// Span used to anchor diagnostics: the triggering attribute when
    /// present, otherwise an empty span.
    #[must_use]
    pub fn diagnostic_span(&self) -> Span {
        self.trigger_attribute()
            .map_or_else(Span::default, |attr| attr.span)
    }
}

///
/// DeclKind
///

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclKind {
    Struct,
    Class,
    Enum,
    Protocol,
    Actor,
    Extension,
}

///
/// Attribute
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,

    #[serde(default)]
    pub span: Span,
}

///
/// Member
///
/// One declared property. The type and default expression are opaque token
/// text; the flags carry everything classification needs.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub ty: TypeExpr,
    pub mutability: Mutability,

    #[serde(default)]
    pub scope: Scope,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default)]
    pub accessor: AccessorKind,
}

impl Member {
    /// A member backed by real storage, with no accessor block.
    #[must_use]
    pub const fn is_stored(&self) -> bool {
        matches!(self.accessor, AccessorKind::Stored)
    }

    /// A fixed-once member whose value is already baked in at declaration.
    /// Its storage can never be assigned again, so re-exposing it as an
    /// initializer parameter would synthesize code that cannot compile.
    #[must_use]
    pub const fn is_fixed_with_default(&self) -> bool {
        matches!(self.mutability, Mutability::Let) && self.default.is_some()
    }

    /// Whether the member participates in initializer synthesis.
    #[must_use]
    pub const fn participates(&self) -> bool {
        self.is_stored() && !self.is_fixed_with_default()
    }
}

///
/// Mutability
///

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutability {
    /// Fixed once set (`let`).
    Let,
    /// Reassignable (`var`).
    Var,
}

///
/// Scope
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    #[default]
    Instance,
    Static,
}

///
/// AccessorKind
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorKind {
    /// Plain stored property.
    #[default]
    Stored,
    /// Single-expression computed property, e.g. `var sum: Int { x + y }`.
    Computed,
    /// Explicit `get`/`set` accessor block.
    GetSet,
}

///
/// TypeExpr
///
/// The declared type as opaque token text, tagged just enough to apply the
/// escaping rule. The core never interprets the text further.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeExpr {
    pub text: String,

    #[serde(default)]
    pub shape: TypeShape,
}

impl TypeExpr {
    #[must_use]
    pub fn nominal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shape: TypeShape::Nominal,
        }
    }

    #[must_use]
    pub fn function(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shape: TypeShape::Function,
        }
    }

    #[must_use]
    pub fn optional_function(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shape: TypeShape::OptionalFunction,
        }
    }

    /// A bare function type stored past the initializer call must carry the
    /// escaping annotation. Optional wrapping already forces the escaping
    /// representation, so wrapped function types are exempt.
    #[must_use]
    pub const fn requires_escaping(&self) -> bool {
        matches!(self.shape, TypeShape::Function)
    }
}

///
/// TypeShape
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    #[default]
    Nominal,
    Function,
    OptionalFunction,
}
