use super::{resolve_type, ResolutionContext, TypeCatalog, TypeRef};
use crate::checker::violation::Violation;

fn is_terminator(ch: char) -> bool {
    ch == ',' || ch == ')'
}

/// Walks a parameter list such as `int count, float, String name` and yields
/// the type of each parameter. Parameter names are optional and skipped.
pub struct ParameterListParser<'a> {
    list: &'a str,
    offset: usize,
}

impl<'a> ParameterListParser<'a> {
    /// Accepts the list with or without its opening parenthesis.
    pub fn new(list: &'a str) -> Self {
        let list = list.trim_start();
        let list = list.strip_prefix('(').unwrap_or(list);
        Self { list, offset: 0 }
    }

    pub fn next_parameter_type_name(&mut self) -> Option<&'a str> {
        loop {
            self.skip_whitespace();
            if self.offset >= self.list.len() {
                return None;
            }

            let type_name = self.take_word();
            self.skip_whitespace();
            if !self.take_terminator() {
                // parameter name
                self.take_word();
                self.skip_whitespace();
                self.take_terminator();
            }

            if !type_name.is_empty() {
                return Some(type_name);
            }
        }
    }

    fn rest(&self) -> &'a str {
        &self.list[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }

    fn take_word(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || is_terminator(c))
            .unwrap_or(rest.len());
        self.offset += end;
        &rest[..end]
    }

    /// Consume a `,`. A `)` ends the list.
    fn take_terminator(&mut self) -> bool {
        match self.rest().chars().next() {
            Some(',') => {
                self.offset += 1;
                true
            }
            Some(')') => {
                self.offset = self.list.len();
                true
            }
            _ => false,
        }
    }
}

impl<'a> Iterator for ParameterListParser<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_parameter_type_name()
    }
}

/// Resolve every type of a parameter list. The first unresolvable type
/// aborts with a violation.
pub fn resolve_parameter_types<C: TypeCatalog + ?Sized>(
    list: &str,
    context: &ResolutionContext,
    catalog: &C,
) -> Result<Vec<TypeRef>, Violation> {
    ParameterListParser::new(list)
        .map(|name| {
            resolve_type(name, context, catalog).ok_or_else(|| Violation::UnresolvedArgumentType {
                name: name.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SymbolTable;

    fn names(list: &str) -> Vec<&str> {
        ParameterListParser::new(list).collect()
    }

    #[test]
    fn test_types_with_and_without_names() {
        assert_eq!(
            names("(int name, float, String)"),
            vec!["int", "float", "String"]
        );
        assert_eq!(
            names("int count, my.pkg.Foo param, String"),
            vec!["int", "my.pkg.Foo", "String"]
        );
    }

    #[test]
    fn test_empty_lists() {
        assert!(names("").is_empty());
        assert!(names("()").is_empty());
        assert!(names("   ").is_empty());
    }

    #[test]
    fn test_irregular_spacing() {
        assert_eq!(
            names("  int   a ,String b ,  char[]  "),
            vec!["int", "String", "char[]"]
        );
        assert_eq!(names("int,,long"), vec!["int", "long"]);
    }

    #[test]
    fn test_stops_at_closing_paren() {
        assert_eq!(names("int a) trailing"), vec!["int"]);
    }

    #[test]
    fn test_resolve_parameter_types() {
        let table = SymbolTable::with_builtins();
        let ctx = ResolutionContext::default();
        let types = resolve_parameter_types("int, String, Object[]", &ctx, &table).unwrap();
        let rendered: Vec<String> = types.iter().map(|t| t.canonical_name()).collect();
        assert_eq!(rendered, vec!["int", "java.lang.String", "java.lang.Object[]"]);
    }

    #[test]
    fn test_resolve_parameter_types_reports_first_failure() {
        let table = SymbolTable::with_builtins();
        let ctx = ResolutionContext::default();
        let err = resolve_parameter_types("int, Nope, AlsoNope", &ctx, &table).unwrap_err();
        assert_eq!(
            err,
            Violation::UnresolvedArgumentType {
                name: "Nope".to_string()
            }
        );
    }
}
