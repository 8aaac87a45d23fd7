use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ParsedUnit;

pub mod params;
pub mod reference;

/// Names of the primitive types and `void`.
pub const PRIMITIVES: &[&str] = &[
    "byte", "short", "int", "long", "float", "double", "boolean", "char", "void",
];

/// The package every compilation unit imports implicitly.
pub const DEFAULT_NAMESPACE: &str = "java.lang";

/// Handle to a type known to a [`TypeCatalog`].
///
/// `name` is the binary name of the element type (nested types use `$`),
/// `dims` the number of array dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    name: String,
    dims: usize,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dims: 0,
        }
    }

    /// Parse a binary name with an optional array suffix (`java.lang.String[]`).
    pub fn from_binary_name(text: &str) -> Self {
        let (name, dims) = split_array_suffix(text.trim());
        Self::new(name).with_dims(dims)
    }

    pub fn with_dims(mut self, dims: usize) -> Self {
        self.dims = dims;
        self
    }

    /// The array form of this type.
    pub fn array_of(&self) -> Self {
        Self {
            name: self.name.clone(),
            dims: self.dims + 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn is_array(&self) -> bool {
        self.dims > 0
    }

    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(&self.name.as_str())
    }

    /// Unqualified name of the element type: `a.b.Outer$Inner` → `Inner`.
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(self.name.as_str())
    }

    /// Source-style name: `a.b.Outer$Inner[]` → `a.b.Outer.Inner[]`.
    pub fn canonical_name(&self) -> String {
        let mut name = self.name.replace('$', ".");
        for _ in 0..self.dims {
            name.push_str("[]");
        }
        name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// A method's name and erased parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSig {
    pub name: String,
    pub params: Vec<TypeRef>,
}

/// Read-only view of the types available for resolution.
///
/// Member queries only return what a type declares itself; walking the
/// hierarchy is left to the caller.
pub trait TypeCatalog: Send + Sync {
    /// Look up a type by binary name (`java.util.Map$Entry`).
    fn lookup(&self, name: &str) -> Option<TypeRef>;

    fn superclass_of(&self, ty: &TypeRef) -> Option<&TypeRef>;

    fn interfaces_of(&self, ty: &TypeRef) -> &[TypeRef];

    fn fields_of(&self, ty: &TypeRef) -> &[String];

    fn methods_of(&self, ty: &TypeRef) -> &[MethodSig];

    /// Parameter lists of the type's own constructors.
    fn constructors_of(&self, ty: &TypeRef) -> &[Vec<TypeRef>];

    /// Whether `ty` is a `RuntimeException` or one of its subclasses.
    fn is_unchecked_exception(&self, ty: &TypeRef) -> bool {
        let mut seen = HashSet::new();
        let mut current = Some(ty);
        while let Some(t) = current {
            if t.is_array() || !seen.insert(t.name()) {
                return false;
            }
            if t.name() == "java.lang.RuntimeException" {
                return true;
            }
            current = self.superclass_of(t);
        }
        false
    }
}

/// The qualification context used to turn a bare name into a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    /// Current package, empty for the default package.
    pub package: String,
    /// Qualified name of the outermost enclosing type.
    pub enclosing_type: String,
    /// Imported names (exact and package forms) in source order.
    pub imports: Vec<String>,
}

impl ResolutionContext {
    pub fn new(
        package: impl Into<String>,
        enclosing_type: impl Into<String>,
        imports: Vec<String>,
    ) -> Self {
        Self {
            package: package.into(),
            enclosing_type: enclosing_type.into(),
            imports,
        }
    }

    /// Build the context for declarations inside `outer_type` of `unit`.
    ///
    /// Every import contributes its full name and the package (or type) it
    /// imports from.
    pub fn for_unit(unit: &ParsedUnit, outer_type: &str) -> Self {
        let mut imports: Vec<String> = Vec::new();
        for import in &unit.imports {
            for name in [import.name.as_str(), import.container()] {
                if !name.is_empty() && !imports.iter().any(|i| i == name) {
                    imports.push(name.to_string());
                }
            }
        }
        Self {
            package: unit.package.clone().unwrap_or_default(),
            enclosing_type: outer_type.to_string(),
            imports,
        }
    }
}

/// Split `Foo[][]` / `Foo...` into the element name and its dimensions.
fn split_array_suffix(name: &str) -> (&str, usize) {
    let (base, varargs) = match name.strip_suffix("...") {
        Some(base) => (base, 1),
        None => (name, 0),
    };
    match base.find('[') {
        Some(open) if base[open..].contains(']') => {
            (base[..open].trim_end(), base[open..].matches(']').count() + varargs)
        }
        _ => (base, varargs),
    }
}

fn lookup_type<C: TypeCatalog + ?Sized>(catalog: &C, name: &str, dims: usize) -> Option<TypeRef> {
    catalog.lookup(name).map(|t| t.with_dims(dims))
}

fn lookup_primitive(name: &str, dims: usize) -> Option<TypeRef> {
    if name == "void" {
        return (dims == 0).then(|| TypeRef::new("void"));
    }
    PRIMITIVES
        .contains(&name)
        .then(|| TypeRef::new(name).with_dims(dims))
}

/// `prefix.Name`, then `prefix.Outer$Inner` for dotted names, then the
/// name nested inside `prefix` itself.
fn lookup_prefixed<C: TypeCatalog + ?Sized>(
    catalog: &C,
    prefix: &str,
    name: &str,
    dims: usize,
) -> Option<TypeRef> {
    if prefix.is_empty() {
        return None;
    }
    let nested = name.replace('.', "$");
    lookup_type(catalog, &format!("{}.{}", prefix, name), dims)
        .or_else(|| lookup_type(catalog, &format!("{}.{}", prefix, nested), dims))
        .or_else(|| lookup_type(catalog, &format!("{}${}", prefix, nested), dims))
}

/// Resolve a bare or partially qualified type name.
///
/// Strategies are tried in a fixed order and the first hit wins: direct
/// lookup, primitives, `a.b.C.Inner` as `a.b.C$Inner`, qualification with
/// the package, then with the enclosing type, exact import matches, import
/// prefixes, and finally the implicit `java.lang` namespace.
pub fn resolve_type<C: TypeCatalog + ?Sized>(
    name: &str,
    context: &ResolutionContext,
    catalog: &C,
) -> Option<TypeRef> {
    let (base, dims) = split_array_suffix(name.trim());
    if base.is_empty() {
        return None;
    }

    if let Some(t) = lookup_type(catalog, base, dims) {
        return Some(t);
    }

    if let Some(t) = lookup_primitive(base, dims) {
        return Some(t);
    }

    if let Some((outer, inner)) = base.rsplit_once('.') {
        if let Some(t) = lookup_type(catalog, &format!("{}${}", outer, inner), dims) {
            return Some(t);
        }
    }

    if let Some(t) = lookup_prefixed(catalog, &context.package, base, dims) {
        return Some(t);
    }

    if let Some(t) = lookup_prefixed(catalog, &context.enclosing_type, base, dims) {
        return Some(t);
    }

    let suffix = format!(".{}", base);
    for import in &context.imports {
        if import.ends_with(&suffix) {
            if let Some(t) = lookup_type(catalog, import, dims) {
                return Some(t);
            }
        }
    }

    for import in &context.imports {
        if let Some(t) = lookup_prefixed(catalog, import, base, dims) {
            return Some(t);
        }
    }

    lookup_type(catalog, &format!("{}.{}", DEFAULT_NAMESPACE, base), dims)
}
