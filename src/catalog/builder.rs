use tracing::debug;

use super::SymbolTable;
use crate::model::{DeclKind, Declaration, MemberDecl, ParsedUnit, TypeDecl, TypeParameter};
use crate::resolver::{resolve_type, MethodSig, ResolutionContext, TypeRef};

/// Drop every `<...>` section, nested ones included, and any whitespace.
fn strip_type_arguments(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for ch in name.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Outermost type of a binary name: `a.b.Outer$Inner` → `a.b.Outer`.
pub fn outer_type_of(binary_name: &str) -> &str {
    binary_name.split('$').next().unwrap_or(binary_name)
}

/// Erases source type names and resolves them in one unit's context.
struct Eraser<'a> {
    context: ResolutionContext,
    table: &'a SymbolTable,
}

impl Eraser<'_> {
    /// Erase `name` with the given type variables in scope, innermost scope
    /// first. Unresolvable names are kept as written.
    fn erase(&self, name: &str, scopes: &[&[TypeParameter]]) -> TypeRef {
        let erased = strip_type_arguments(name).replace("...", "[]");
        let base = erased.split('[').next().unwrap_or(erased.as_str());
        let dims = erased.matches("[]").count();

        let variable = scopes
            .iter()
            .flat_map(|scope| scope.iter())
            .find(|tp| tp.name == base);
        if let Some(tp) = variable {
            let bound = match &tp.bound {
                Some(bound) => self.resolve(&strip_type_arguments(bound)),
                None => TypeRef::new("java.lang.Object"),
            };
            return bound.with_dims(dims);
        }

        self.resolve(base).with_dims(dims)
    }

    fn resolve(&self, name: &str) -> TypeRef {
        match resolve_type(name, &self.context, self.table) {
            Some(t) => t,
            None => {
                debug!(name, "unresolved type in declaration");
                TypeRef::new(name)
            }
        }
    }
}

/// Supertypes and members of one type, erased and resolved.
#[derive(Default)]
struct Members {
    superclass: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    fields: Vec<String>,
    methods: Vec<MethodSig>,
    constructors: Vec<Vec<TypeRef>>,
}

impl Members {
    fn method(&mut self, name: &str, params: Vec<TypeRef>) {
        self.methods.push(MethodSig {
            name: name.to_string(),
            params,
        });
    }

    fn constructor(&mut self, params: Vec<TypeRef>) {
        if !self.constructors.contains(&params) {
            self.constructors.push(params);
        }
    }
}

fn collect_members(eraser: &Eraser<'_>, ty: &TypeDecl) -> Members {
    let mut members = Members::default();
    let type_scope: &[TypeParameter] = &ty.type_parameters;

    members.superclass = ty
        .superclass
        .as_ref()
        .map(|s| eraser.erase(s, &[type_scope]));
    members.interfaces = ty
        .interfaces
        .iter()
        .map(|i| eraser.erase(i, &[type_scope]))
        .collect();

    let mut has_constructor = false;
    for member in &ty.members {
        match member {
            MemberDecl::Field(name) => members.fields.push(name.clone()),
            MemberDecl::Method {
                name,
                params,
                type_parameters,
            } => {
                let scopes = [type_parameters.as_slice(), type_scope];
                let params = params.iter().map(|p| eraser.erase(p, &scopes)).collect();
                members.method(name, params);
            }
            MemberDecl::Constructor {
                params,
                type_parameters,
            } => {
                has_constructor = true;
                let scopes = [type_parameters.as_slice(), type_scope];
                let params = params.iter().map(|p| eraser.erase(p, &scopes)).collect();
                members.constructor(params);
            }
        }
    }

    match ty.kind {
        DeclKind::Record => {
            let canonical = ty
                .components
                .iter()
                .map(|c| eraser.erase(&c.type_name, &[type_scope]))
                .collect();
            for component in &ty.components {
                members.fields.push(component.name.clone());
                members.method(&component.name, Vec::new());
            }
            members.constructor(canonical);
        }
        DeclKind::Enum => {
            members.method("values", Vec::new());
            members.method("valueOf", vec![TypeRef::new("java.lang.String")]);
        }
        DeclKind::Class if !has_constructor => members.constructor(Vec::new()),
        _ => {}
    }

    members
}

/// Erased parameter types of a method or constructor declared in `unit`,
/// matching what [`build_symbol_table`] stores for it.
pub fn erased_parameters(
    unit: &ParsedUnit,
    declaration: &Declaration,
    table: &SymbolTable,
) -> Vec<TypeRef> {
    let eraser = Eraser {
        context: ResolutionContext::for_unit(unit, &declaration.outer_type),
        table,
    };
    let type_scope: &[TypeParameter] = unit
        .types
        .iter()
        .find(|t| t.binary_name == declaration.owner)
        .map(|t| t.type_parameters.as_slice())
        .unwrap_or_default();
    let scopes = [declaration.type_parameters.as_slice(), type_scope];
    declaration
        .parameters
        .iter()
        .map(|p| eraser.erase(&p.type_name, &scopes))
        .collect()
}

/// Build the symbol table for a project: the core library types plus every
/// type declared in `units`.
///
/// All types are declared before any member is resolved, so signatures can
/// refer to types from any unit.
pub fn build_symbol_table(units: &[ParsedUnit]) -> SymbolTable {
    let mut table = SymbolTable::with_builtins();

    for unit in units {
        for ty in &unit.types {
            table.declare(&ty.binary_name, ty.kind);
        }
    }

    let mut resolved = Vec::new();
    for unit in units {
        for ty in &unit.types {
            let eraser = Eraser {
                context: ResolutionContext::for_unit(unit, outer_type_of(&ty.binary_name)),
                table: &table,
            };
            resolved.push((ty.binary_name.as_str(), collect_members(&eraser, ty)));
        }
    }

    for (name, members) in resolved {
        let Some(entry) = table.types.get_mut(name) else {
            continue;
        };
        if members.superclass.is_some() {
            entry.superclass = members.superclass;
        }
        entry.interfaces = members.interfaces;
        entry.fields = members.fields;
        entry.methods = members.methods;
        entry.constructors = members.constructors;
    }

    debug!(types = table.len(), "built symbol table");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImportDecl, Parameter};
    use crate::resolver::TypeCatalog;

    fn type_decl(kind: DeclKind, binary_name: &str) -> TypeDecl {
        TypeDecl {
            kind,
            binary_name: binary_name.to_string(),
            superclass: None,
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            members: Vec::new(),
            components: Vec::new(),
        }
    }

    fn unit(types: Vec<TypeDecl>) -> ParsedUnit {
        ParsedUnit {
            package: Some("com.example".to_string()),
            imports: vec![ImportDecl {
                name: "java.util.List".to_string(),
                is_wildcard: false,
                is_static: false,
            }],
            types,
            ..Default::default()
        }
    }

    fn params_of(table: &SymbolTable, ty: &str, method: &str) -> Vec<String> {
        table
            .methods_of(&TypeRef::new(ty))
            .iter()
            .find(|m| m.name == method)
            .map(|m| m.params.iter().map(|p| p.canonical_name()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_strip_type_arguments() {
        assert_eq!(strip_type_arguments("List<String>"), "List");
        assert_eq!(strip_type_arguments("Map<K, List<V>>[]"), "Map[]");
        assert_eq!(strip_type_arguments("Map.Entry<K,V>"), "Map.Entry");
    }

    #[test]
    fn test_outer_type_of() {
        assert_eq!(outer_type_of("a.b.Outer$Inner$Deep"), "a.b.Outer");
        assert_eq!(outer_type_of("a.b.Top"), "a.b.Top");
    }

    #[test]
    fn test_cross_unit_supertypes() {
        let mut base = type_decl(DeclKind::Class, "com.example.Base");
        base.members.push(MemberDecl::Field("count".to_string()));
        let mut derived = type_decl(DeclKind::Class, "com.example.sub.Derived");
        derived.superclass = Some("com.example.Base".to_string());
        derived.interfaces.push("Comparable<Derived>".to_string());

        let table = build_symbol_table(&[unit(vec![derived]), unit(vec![base])]);
        let derived = TypeRef::new("com.example.sub.Derived");
        assert_eq!(
            table.superclass_of(&derived).map(|t| t.name()),
            Some("com.example.Base")
        );
        assert_eq!(table.interfaces_of(&derived), &[TypeRef::new("java.lang.Comparable")]);
    }

    #[test]
    fn test_method_signatures_are_erased() {
        let mut ty = type_decl(DeclKind::Class, "com.example.Repo");
        ty.type_parameters.push(TypeParameter {
            name: "T".to_string(),
            bound: Some("Comparable<T>".to_string()),
        });
        ty.members.push(MemberDecl::Method {
            name: "save".to_string(),
            params: vec!["T".to_string(), "List<String>".to_string(), "int...".to_string()],
            type_parameters: Vec::new(),
        });
        ty.members.push(MemberDecl::Method {
            name: "convert".to_string(),
            params: vec!["U[]".to_string()],
            type_parameters: vec![TypeParameter {
                name: "U".to_string(),
                bound: None,
            }],
        });

        let table = build_symbol_table(&[unit(vec![ty])]);
        assert_eq!(
            params_of(&table, "com.example.Repo", "save"),
            vec!["java.lang.Comparable", "java.util.List", "int[]"]
        );
        assert_eq!(
            params_of(&table, "com.example.Repo", "convert"),
            vec!["java.lang.Object[]"]
        );
    }

    #[test]
    fn test_implicit_constructors() {
        let plain = type_decl(DeclKind::Class, "com.example.Plain");
        let mut explicit = type_decl(DeclKind::Class, "com.example.Explicit");
        explicit.members.push(MemberDecl::Constructor {
            params: vec!["String".to_string()],
            type_parameters: Vec::new(),
        });
        let mut point = type_decl(DeclKind::Record, "com.example.Point");
        point.components = vec![
            Parameter {
                name: "x".to_string(),
                type_name: "int".to_string(),
            },
            Parameter {
                name: "y".to_string(),
                type_name: "int".to_string(),
            },
        ];

        let table = build_symbol_table(&[unit(vec![plain, explicit, point])]);
        assert_eq!(
            table.constructors_of(&TypeRef::new("com.example.Plain")),
            &[Vec::<TypeRef>::new()]
        );
        assert_eq!(
            table.constructors_of(&TypeRef::new("com.example.Explicit")),
            &[vec![TypeRef::new("java.lang.String")]]
        );
        let point = TypeRef::new("com.example.Point");
        assert_eq!(
            table.constructors_of(&point),
            &[vec![TypeRef::new("int"), TypeRef::new("int")]]
        );
        assert!(table.fields_of(&point).contains(&"x".to_string()));
        assert!(table.methods_of(&point).iter().any(|m| m.name == "y"));
    }

    #[test]
    fn test_nested_types_resolve_through_outer_type() {
        let mut outer = type_decl(DeclKind::Class, "com.example.Outer");
        outer.members.push(MemberDecl::Method {
            name: "use".to_string(),
            params: vec!["Inner".to_string()],
            type_parameters: Vec::new(),
        });
        let inner = type_decl(DeclKind::Class, "com.example.Outer$Inner");

        let table = build_symbol_table(&[unit(vec![outer, inner])]);
        assert_eq!(
            params_of(&table, "com.example.Outer", "use"),
            vec!["com.example.Outer.Inner"]
        );
    }

    #[test]
    fn test_unresolved_supertype_is_kept() {
        let mut ty = type_decl(DeclKind::Class, "com.example.Widget");
        ty.superclass = Some("org.external.Component".to_string());
        let table = build_symbol_table(&[unit(vec![ty])]);
        let widget = TypeRef::new("com.example.Widget");
        let superclass = table.superclass_of(&widget).unwrap();
        assert_eq!(superclass.name(), "org.external.Component");
        assert_eq!(table.lookup("org.external.Component"), None);
    }

    #[test]
    fn test_erased_parameters_match_table() {
        let mut ty = type_decl(DeclKind::Class, "com.example.Repo");
        ty.type_parameters.push(TypeParameter {
            name: "T".to_string(),
            bound: None,
        });
        let unit = unit(vec![ty]);
        let table = build_symbol_table(std::slice::from_ref(&unit));

        let declaration = Declaration {
            kind: DeclKind::Method,
            name: "save".to_string(),
            visibility: crate::model::Visibility::Public,
            owner: "com.example.Repo".to_string(),
            outer_type: "com.example.Repo".to_string(),
            line: 1,
            comment: None,
            parameters: vec![
                Parameter {
                    name: "item".to_string(),
                    type_name: "T".to_string(),
                },
                Parameter {
                    name: "names".to_string(),
                    type_name: "List<String>".to_string(),
                },
            ],
            type_parameters: Vec::new(),
            throws: Vec::new(),
            return_type: Some("void".to_string()),
            has_supertypes: false,
            annotations: Vec::new(),
        };
        let erased: Vec<String> = erased_parameters(&unit, &declaration, &table)
            .iter()
            .map(|t| t.canonical_name())
            .collect();
        assert_eq!(erased, vec!["java.lang.Object", "java.util.List"]);
    }
}
