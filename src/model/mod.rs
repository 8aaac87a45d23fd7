use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The kind of declaration a doc comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
    Method,
    Constructor,
    Field,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Record => "record",
            DeclKind::Annotation => "annotation",
            DeclKind::Method => "method",
            DeclKind::Constructor => "constructor",
            DeclKind::Field => "field",
        }
    }

    /// Class-like declarations that can own members.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            DeclKind::Class
                | DeclKind::Interface
                | DeclKind::Enum
                | DeclKind::Record
                | DeclKind::Annotation
        )
    }

    /// Methods and constructors.
    pub fn is_callable(&self) -> bool {
        matches!(self, DeclKind::Method | DeclKind::Constructor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    pub fn is_exposed(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::Protected)
    }
}

/// A `/** ... */` comment and the 1-based source line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    pub text: String,
    pub line: usize,
}

/// A formal parameter as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

/// A generic type parameter and the first type of its bound, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    pub bound: Option<String>,
}

/// Declaration metadata consumed by the comment checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub visibility: Visibility,
    /// Binary name of the innermost type owning this declaration (the type
    /// itself for type declarations), e.g. `com.example.Outer$Inner`.
    pub owner: String,
    /// Qualified name of the outermost type containing this declaration.
    pub outer_type: String,
    pub line: usize,
    pub comment: Option<DocComment>,
    pub parameters: Vec<Parameter>,
    pub type_parameters: Vec<TypeParameter>,
    pub throws: Vec<String>,
    /// Declared result type for methods; `None` for everything else.
    pub return_type: Option<String>,
    /// Whether a type declaration names a superclass or any interfaces.
    pub has_supertypes: bool,
    pub annotations: Vec<String>,
}

impl Declaration {
    pub fn is_void_method(&self) -> bool {
        self.kind == DeclKind::Method && self.return_type.as_deref() == Some("void")
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations
            .iter()
            .any(|a| a == name || a.rsplit('.').next() == Some(name))
    }
}

/// A member of a type declaration, recorded for the symbol table. Types are
/// kept as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberDecl {
    Field(String),
    Method {
        name: String,
        params: Vec<String>,
        type_parameters: Vec<TypeParameter>,
    },
    Constructor {
        params: Vec<String>,
        type_parameters: Vec<TypeParameter>,
    },
}

/// A type declared in a source file, with supertypes as written in source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub kind: DeclKind,
    pub binary_name: String,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub type_parameters: Vec<TypeParameter>,
    pub members: Vec<MemberDecl>,
    /// Record components, in declaration order.
    pub components: Vec<Parameter>,
}

/// An import declaration. Wildcard imports store the name without `.*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub name: String,
    pub is_wildcard: bool,
    pub is_static: bool,
}

impl ImportDecl {
    /// The package (or, for static imports, the type) the import names
    /// something inside of.
    pub fn container(&self) -> &str {
        if self.is_wildcard {
            return &self.name;
        }
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(container, _)| container)
    }
}

/// Everything extracted from one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct ParsedUnit {
    pub path: PathBuf,
    pub package: Option<String>,
    pub imports: Vec<ImportDecl>,
    pub types: Vec<TypeDecl>,
    pub declarations: Vec<Declaration>,
}

/// Diagnostic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MalformedTag,
    IllegalContext,
    UnresolvedType,
    Undocumented,
    StaleDocumentation,
    CommentTooShort,
    MissingOverride,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedTag => "malformed_tag",
            DiagnosticKind::IllegalContext => "illegal_context",
            DiagnosticKind::UnresolvedType => "unresolved_type",
            DiagnosticKind::Undocumented => "undocumented",
            DiagnosticKind::StaleDocumentation => "stale_documentation",
            DiagnosticKind::CommentTooShort => "comment_too_short",
            DiagnosticKind::MissingOverride => "missing_override",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A diagnostic raised while checking one comment. `line` is relative to the
/// first line of the comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: usize,
}
