use std::collections::HashSet;

use super::params::resolve_parameter_types;
use super::{resolve_type, ResolutionContext, TypeCatalog, TypeRef};
use crate::checker::violation::Violation;

/// Visit `ty` and its supertypes (superclass chain before interfaces) until
/// `found` returns true.
fn search_hierarchy<C, F>(catalog: &C, ty: &TypeRef, found: &mut F) -> bool
where
    C: TypeCatalog + ?Sized,
    F: FnMut(&TypeRef) -> bool,
{
    let mut seen = HashSet::new();
    let mut stack = vec![ty.clone()];
    while let Some(current) = stack.pop() {
        if !seen.insert(current.clone()) {
            continue;
        }
        if found(&current) {
            return true;
        }
        // pushed in reverse so the superclass is visited first
        stack.extend(catalog.interfaces_of(&current).iter().rev().cloned());
        if let Some(superclass) = catalog.superclass_of(&current) {
            stack.push(superclass.clone());
        }
    }
    false
}

/// Whether `ty` or any supertype declares a field or method called `name`.
pub fn has_field_or_method<C: TypeCatalog + ?Sized>(catalog: &C, ty: &TypeRef, name: &str) -> bool {
    search_hierarchy(catalog, ty, &mut |t| {
        catalog.fields_of(t).iter().any(|f| f == name)
            || catalog.methods_of(t).iter().any(|m| m.name == name)
    })
}

/// Whether `ty` or any supertype declares `name` with exactly `params`.
pub fn has_method_overload<C: TypeCatalog + ?Sized>(
    catalog: &C,
    ty: &TypeRef,
    name: &str,
    params: &[TypeRef],
) -> bool {
    search_hierarchy(catalog, ty, &mut |t| {
        catalog
            .methods_of(t)
            .iter()
            .any(|m| m.name == name && m.params == params)
    })
}

/// Constructors are not inherited, so only `ty` itself is searched.
pub fn has_constructor<C: TypeCatalog + ?Sized>(catalog: &C, ty: &TypeRef, params: &[TypeRef]) -> bool {
    catalog.constructors_of(ty).iter().any(|c| c == params)
}

/// Whether a supertype of `ty` (not `ty` itself) declares `name` with
/// exactly `params`.
pub fn overrides_method<C: TypeCatalog + ?Sized>(
    catalog: &C,
    ty: &TypeRef,
    name: &str,
    params: &[TypeRef],
) -> bool {
    let mut supertypes: Vec<TypeRef> = catalog.interfaces_of(ty).to_vec();
    if let Some(superclass) = catalog.superclass_of(ty) {
        supertypes.insert(0, superclass.clone());
    }
    supertypes
        .iter()
        .filter(|s| *s != ty)
        .any(|s| has_method_overload(catalog, s, name, params))
}

/// Split `Type#member(a, b) label text` into the reference and its label.
/// Whitespace inside the parameter list belongs to the reference.
fn split_reference(text: &str) -> (&str, &str) {
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return (&text[..i], text[i..].trim_start()),
            _ => {}
        }
    }
    (text, "")
}

/// Validates `Type`, `Type#member` and `Type#member(params)` references
/// against a type catalog.
pub struct ReferenceResolver<'a, C: TypeCatalog + ?Sized> {
    context: &'a ResolutionContext,
    catalog: &'a C,
    /// Binary name of the documented declaration's type, used for `#member`.
    own_type: &'a str,
}

impl<'a, C: TypeCatalog + ?Sized> ReferenceResolver<'a, C> {
    pub fn new(context: &'a ResolutionContext, catalog: &'a C, own_type: &'a str) -> Self {
        Self {
            context,
            catalog,
            own_type,
        }
    }

    /// Check the reference at the start of a `tag` argument.
    pub fn check(&self, tag: &str, text: &str) -> Result<(), Violation> {
        let (reference, _label) = split_reference(text.trim());
        if reference.is_empty() {
            return Ok(());
        }

        let Some((type_part, member)) = reference.split_once('#') else {
            return match resolve_type(reference, self.context, self.catalog) {
                Some(_) => Ok(()),
                None => Err(Violation::UnresolvedSpecifiedType {
                    name: reference.to_string(),
                }),
            };
        };

        let type_name = if type_part.is_empty() {
            self.own_type
        } else {
            type_part
        };
        let ty = resolve_type(type_name, self.context, self.catalog).ok_or_else(|| {
            Violation::UnresolvedReferencedType {
                name: type_name.to_string(),
            }
        })?;

        match member.find('(') {
            Some(open) => self.check_overload(tag, &ty, member, open),
            None => {
                if has_field_or_method(self.catalog, &ty, member) {
                    Ok(())
                } else {
                    Err(Violation::MemberNotFound {
                        tag: tag.to_string(),
                        text: reference.to_string(),
                        type_name: ty.canonical_name(),
                    })
                }
            }
        }
    }

    fn check_overload(&self, tag: &str, ty: &TypeRef, member: &str, open: usize) -> Result<(), Violation> {
        let close = member[open..]
            .find(')')
            .map(|i| open + i)
            .ok_or_else(|| Violation::MalformedOverload {
                tag: tag.to_string(),
            })?;

        let name = member[..open].trim();
        let params = resolve_parameter_types(&member[open + 1..close], self.context, self.catalog)?;

        if name == ty.simple_name() {
            if has_constructor(self.catalog, ty, &params) {
                return Ok(());
            }
            return Err(Violation::ConstructorNotFound {
                signature: member.to_string(),
                type_name: ty.canonical_name(),
            });
        }

        if has_method_overload(self.catalog, ty, name, &params) {
            Ok(())
        } else {
            Err(Violation::MethodNotFound {
                signature: member.to_string(),
                type_name: ty.canonical_name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SymbolTable;
    use crate::model::DeclKind;

    fn catalog() -> SymbolTable {
        let mut table = SymbolTable::with_builtins();
        table.declare("com.example.Base", DeclKind::Class);
        table.add_field("com.example.Base", "counter");
        table.add_method("com.example.Base", "reset", &[]);

        table.declare("com.example.Shape", DeclKind::Interface);
        table.add_method("com.example.Shape", "area", &[]);

        table.declare("com.example.Foo", DeclKind::Class);
        table.set_superclass("com.example.Foo", "com.example.Base");
        table.add_interface("com.example.Foo", "com.example.Shape");
        table.add_field("com.example.Foo", "name");
        table.add_method(
            "com.example.Foo",
            "bar",
            &[TypeRef::new("int"), TypeRef::new("java.lang.String")],
        );
        table.add_constructor("com.example.Foo", &[TypeRef::new("int")]);
        table
    }

    fn context() -> ResolutionContext {
        ResolutionContext::new("com.example", "com.example.Foo", vec![])
    }

    fn check(text: &str) -> Result<(), Violation> {
        let table = catalog();
        let ctx = context();
        ReferenceResolver::new(&ctx, &table, "com.example.Foo").check("link", text)
    }

    #[test]
    fn test_plain_type_reference() {
        assert_eq!(check("Foo"), Ok(()));
        assert_eq!(check("java.util.List the list"), Ok(()));
        assert_eq!(
            check("Missing label"),
            Err(Violation::UnresolvedSpecifiedType {
                name: "Missing".to_string()
            })
        );
    }

    #[test]
    fn test_field_and_method_references() {
        assert_eq!(check("Foo#name"), Ok(()));
        assert_eq!(check("#name"), Ok(()));
        assert_eq!(check("Foo#bar"), Ok(()));
        // inherited from the superclass and an interface
        assert_eq!(check("Foo#counter"), Ok(()));
        assert_eq!(check("Foo#area"), Ok(()));
        assert_eq!(
            check("Foo#nothing"),
            Err(Violation::MemberNotFound {
                tag: "link".to_string(),
                text: "Foo#nothing".to_string(),
                type_name: "com.example.Foo".to_string(),
            })
        );
    }

    #[test]
    fn test_unresolved_type_part() {
        assert_eq!(
            check("Nope#bar"),
            Err(Violation::UnresolvedReferencedType {
                name: "Nope".to_string()
            })
        );
    }

    #[test]
    fn test_method_overload() {
        assert_eq!(check("Foo#bar(int, String)"), Ok(()));
        assert_eq!(check("Foo#bar(int count, String name) the bar"), Ok(()));
        assert_eq!(check("#reset()"), Ok(()));
        assert_eq!(
            check("Foo#bar(int)"),
            Err(Violation::MethodNotFound {
                signature: "bar(int)".to_string(),
                type_name: "com.example.Foo".to_string(),
            })
        );
        // no widening or boxing
        assert!(check("Foo#bar(long, String)").is_err());
        assert!(check("Foo#bar(Integer, String)").is_err());
    }

    #[test]
    fn test_constructor_overload() {
        assert_eq!(check("Foo#Foo(int)"), Ok(()));
        assert_eq!(
            check("Foo#Foo()"),
            Err(Violation::ConstructorNotFound {
                signature: "Foo()".to_string(),
                type_name: "com.example.Foo".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_overload() {
        assert_eq!(
            check("Foo#bar(int"),
            Err(Violation::MalformedOverload {
                tag: "link".to_string()
            })
        );
    }

    #[test]
    fn test_unresolved_argument_type() {
        assert_eq!(
            check("Foo#bar(int, Unknown)"),
            Err(Violation::UnresolvedArgumentType {
                name: "Unknown".to_string()
            })
        );
    }

    #[test]
    fn test_overrides_method() {
        let table = catalog();
        let foo = TypeRef::new("com.example.Foo");
        assert!(overrides_method(&table, &foo, "reset", &[]));
        assert!(overrides_method(&table, &foo, "area", &[]));
        assert!(overrides_method(&table, &foo, "toString", &[]));
        assert!(!overrides_method(&table, &foo, "bar", &[TypeRef::new("int"), TypeRef::new("java.lang.String")]));
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let mut table = SymbolTable::new();
        table.declare("a.A", DeclKind::Class);
        table.declare("a.B", DeclKind::Class);
        table.set_superclass("a.A", "a.B");
        table.set_superclass("a.B", "a.A");
        assert!(!has_field_or_method(&table, &TypeRef::new("a.A"), "missing"));
    }
}
