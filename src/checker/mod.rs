//! Doc comment validation for a single declaration.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::javadoc::{CommentHandler, CommentParser};
use crate::model::{DeclKind, Declaration};
use crate::resolver::{resolve_type, ResolutionContext, TypeCatalog, TypeRef};

pub mod tags;
pub mod violation;

pub use violation::{DiagnosticSink, Violation};

/// Settings consumed by [`CommentChecker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Minimum number of non-whitespace, non-markup characters.
    pub minimum_comment_length: usize,
    /// Resolve `@link`, `@see` and `@value` references.
    pub check_references: bool,
    /// Report overriding methods that lack `@Override`.
    pub require_override_annotation: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            minimum_comment_length: 10,
            check_references: true,
            require_override_annotation: false,
        }
    }
}

/// Characters that count towards the comment length.
fn count_real_characters(text: &str) -> usize {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '/' && *c != '*')
        .count()
}

/// Validates the doc comment of one declaration.
///
/// The comment is parsed twice. The first pass only looks for
/// `{@inheritDoc}`, which suppresses the completeness checks of the second
/// pass. Diagnostics carry comment-relative lines.
pub struct CommentChecker<'a, C: TypeCatalog + ?Sized> {
    declaration: &'a Declaration,
    context: &'a ResolutionContext,
    catalog: &'a C,
    config: &'a CheckerConfig,
    sink: &'a mut dyn DiagnosticSink,
    is_override: bool,

    preprocessing: bool,
    comment_line: usize,
    inherit_doc: bool,
    return_documented: bool,
    character_count: usize,

    /// Parameter names plus `<T>` for each type parameter.
    parameter_names: Vec<String>,
    documented_parameters: Vec<String>,
    throws: Vec<TypeRef>,
    documented_throws: Vec<TypeRef>,
}

impl<'a, C: TypeCatalog + ?Sized> CommentChecker<'a, C> {
    pub fn new(
        declaration: &'a Declaration,
        context: &'a ResolutionContext,
        catalog: &'a C,
        config: &'a CheckerConfig,
        is_override: bool,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        let parameter_names = declaration
            .parameters
            .iter()
            .map(|p| p.name.clone())
            .chain(
                declaration
                    .type_parameters
                    .iter()
                    .map(|tp| format!("<{}>", tp.name)),
            )
            .collect();

        Self {
            declaration,
            context,
            catalog,
            config,
            sink,
            is_override,
            preprocessing: true,
            comment_line: 0,
            inherit_doc: false,
            return_documented: false,
            character_count: 0,
            parameter_names,
            documented_parameters: Vec::new(),
            throws: Vec::new(),
            documented_throws: Vec::new(),
        }
    }

    /// Run both passes over the declaration's comment. Declarations without
    /// a comment, annotation types, and fields or methods that are neither
    /// public nor protected are skipped.
    pub fn check(mut self) {
        let declaration = self.declaration;
        let Some(comment) = &declaration.comment else {
            return;
        };
        if !self.should_check() {
            return;
        }

        self.collect_throws();

        CommentParser::new(&comment.text).parse(&mut self);
        self.preprocessing = false;
        CommentParser::new(&comment.text).parse(&mut self);
    }

    fn should_check(&self) -> bool {
        match self.declaration.kind {
            DeclKind::Annotation => false,
            DeclKind::Field | DeclKind::Method => self.declaration.visibility.is_exposed(),
            _ => true,
        }
    }

    /// Resolve the declared throws list. The first name that does not
    /// resolve is reported and ends collection.
    fn collect_throws(&mut self) {
        let declaration = self.declaration;
        if !declaration.kind.is_callable() {
            return;
        }
        for name in &declaration.throws {
            match resolve_type(name, self.context, self.catalog) {
                Some(ty) => self.throws.push(ty),
                None => {
                    warn!(
                        exception = name.as_str(),
                        declaration = declaration.name.as_str(),
                        "unresolved exception in throws list"
                    );
                    self.report(
                        Violation::UnresolvedException {
                            name: name.to_string(),
                        },
                        0,
                    );
                    return;
                }
            }
        }
    }

    fn report(&mut self, violation: Violation, line: usize) {
        self.sink.report(violation, line);
    }

    fn count(&mut self, text: &str) {
        self.character_count += count_real_characters(text);
    }

    fn kind(&self) -> DeclKind {
        self.declaration.kind
    }
}

impl<C: TypeCatalog + ?Sized> CommentHandler for CommentChecker<'_, C> {
    fn on_tag(&mut self, line: usize, name: &str, arg: &str) {
        if self.preprocessing {
            if name == "inheritDoc" {
                self.inherit_doc = true;
                self.check_inherit_doc(line);
            }
            return;
        }

        match name {
            "author" => self.check_author(line, arg),
            "version" => self.check_version(line, arg),
            "since" => self.check_since(line, arg),
            "return" => self.check_return(line, arg),
            "param" => self.check_param(line, arg),
            "link" | "linkplain" => self.check_link(line, name, arg),
            "value" => self.check_value(line, arg),
            "see" => self.check_see(line, arg),
            "throws" | "exception" => self.check_throws(line, name, arg),
            "deprecated" => self.check_deprecated(line, arg),
            _ => {}
        }
    }

    fn on_comment_enter(&mut self, line: usize) {
        self.comment_line = line;
    }

    fn on_comment_text(&mut self, text: &str) {
        if !self.preprocessing {
            self.count(text);
        }
    }

    fn on_comment_exit(&mut self) {
        // documentation is inherited, the supertype is checked on its own
        if self.preprocessing || self.inherit_doc || self.is_override {
            return;
        }
        let line = self.comment_line;

        if self.character_count < self.config.minimum_comment_length {
            self.report(
                Violation::CommentTooShort {
                    minimum: self.config.minimum_comment_length,
                    actual: self.character_count,
                },
                line,
            );
        }

        if !self.return_documented
            && self.kind() == DeclKind::Method
            && !self.declaration.is_void_method()
        {
            self.report(Violation::MissingReturn, line);
        }

        let undocumented: Vec<String> = self
            .parameter_names
            .iter()
            .filter(|name| !self.documented_parameters.contains(*name))
            .cloned()
            .collect();
        for name in undocumented {
            self.report(Violation::UndocumentedParameter { name }, line);
        }

        let undocumented: Vec<String> = self
            .throws
            .iter()
            .filter(|ty| !self.documented_throws.contains(*ty))
            .map(|ty| ty.canonical_name())
            .collect();
        for name in undocumented {
            self.report(Violation::UndocumentedException { name }, line);
        }
    }
}

/// Check `declaration`'s doc comment, reporting into `sink`.
pub fn check_declaration<C: TypeCatalog + ?Sized>(
    declaration: &Declaration,
    context: &ResolutionContext,
    catalog: &C,
    config: &CheckerConfig,
    is_override: bool,
    sink: &mut dyn DiagnosticSink,
) {
    debug!(
        kind = declaration.kind.as_str(),
        name = declaration.name.as_str(),
        owner = declaration.owner.as_str(),
        "checking doc comment"
    );
    CommentChecker::new(declaration, context, catalog, config, is_override, sink).check();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SymbolTable;
    use crate::model::{Diagnostic, DiagnosticKind, DocComment, Parameter, TypeParameter, Visibility};

    pub(super) fn declaration(kind: DeclKind, comment: &str) -> Declaration {
        Declaration {
            kind,
            name: "subject".to_string(),
            visibility: Visibility::Public,
            owner: "com.example.Foo".to_string(),
            outer_type: "com.example.Foo".to_string(),
            line: 5,
            comment: Some(DocComment {
                text: comment.to_string(),
                line: 1,
            }),
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            throws: Vec::new(),
            return_type: None,
            has_supertypes: false,
            annotations: Vec::new(),
        }
    }

    pub(super) fn method(comment: &str, params: &[(&str, &str)], return_type: &str) -> Declaration {
        let mut decl = declaration(DeclKind::Method, comment);
        decl.return_type = Some(return_type.to_string());
        decl.parameters = params
            .iter()
            .map(|(type_name, name)| Parameter {
                name: name.to_string(),
                type_name: type_name.to_string(),
            })
            .collect();
        decl
    }

    pub(super) fn catalog() -> SymbolTable {
        let mut table = SymbolTable::with_builtins();
        table.declare("com.example.Foo", DeclKind::Class);
        table.add_method(
            "com.example.Foo",
            "bar",
            &[TypeRef::new("int"), TypeRef::new("java.lang.String")],
        );
        table.add_field("com.example.Foo", "LIMIT");
        table.declare("com.example.FooException", DeclKind::Class);
        table.set_superclass("com.example.FooException", "java.lang.Exception");
        table
    }

    pub(super) fn run_with(
        decl: &Declaration,
        table: &SymbolTable,
        config: &CheckerConfig,
        is_override: bool,
    ) -> Vec<Diagnostic> {
        let context = ResolutionContext::new("com.example", "com.example.Foo", vec![]);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        check_declaration(decl, &context, table, config, is_override, &mut diagnostics);
        diagnostics
    }

    pub(super) fn run(decl: &Declaration) -> Vec<Diagnostic> {
        run_with(decl, &catalog(), &CheckerConfig::default(), false)
    }

    pub(super) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn test_count_real_characters() {
        assert_eq!(count_real_characters("/**\n * \n */"), 0);
        assert_eq!(count_real_characters(" a b/c*d "), 4);
    }

    #[test]
    fn test_markup_only_comment_is_too_short() {
        let decl = declaration(DeclKind::Class, "/**\n *\n * /\n */");
        let diagnostics = run(&decl);
        assert_eq!(
            messages(&diagnostics),
            vec!["Comment is too short: need 10 actual text characters, got 0"]
        );
        assert_eq!(diagnostics[0].kind, DiagnosticKind::CommentTooShort);
        assert_eq!(diagnostics[0].line, 0);
    }

    #[test]
    fn test_long_enough_comment_is_clean() {
        let decl = declaration(DeclKind::Class, "/** A well documented class. */");
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_minimum_length_is_configurable() {
        let decl = declaration(DeclKind::Field, "/** Short. */");
        assert!(!run(&decl).is_empty());

        let config = CheckerConfig {
            minimum_comment_length: 3,
            ..Default::default()
        };
        assert!(run_with(&decl, &catalog(), &config, false).is_empty());
    }

    #[test]
    fn test_tag_text_counts_towards_length() {
        let decl = declaration(DeclKind::Class, "/**\n * @since release 2.0\n */");
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_undocumented_parameter() {
        let decl = method(
            "/**\n * Joins two values.\n * @param a the first value\n */",
            &[("int", "a"), ("String", "b")],
            "void",
        );
        let diagnostics = run(&decl);
        assert_eq!(messages(&diagnostics), vec!["Parameter 'b' is undocumented"]);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Undocumented);
    }

    #[test]
    fn test_type_parameters_need_documentation() {
        let mut decl = declaration(DeclKind::Class, "/** A box holding one value. */");
        decl.type_parameters.push(TypeParameter {
            name: "T".to_string(),
            bound: None,
        });
        assert_eq!(messages(&run(&decl)), vec!["Parameter '<T>' is undocumented"]);

        let mut decl = declaration(
            DeclKind::Class,
            "/**\n * A box holding one value.\n * @param <T> the value type\n */",
        );
        decl.type_parameters.push(TypeParameter {
            name: "T".to_string(),
            bound: None,
        });
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_missing_return() {
        let decl = method("/** Computes the total size. */", &[], "int");
        assert_eq!(
            messages(&run(&decl)),
            vec!["Methods returning anything other than void must have a @return tag"]
        );
    }

    #[test]
    fn test_return_on_void_method() {
        let decl = method(
            "/**\n * Runs the job.\n * @return nothing at all\n */",
            &[],
            "void",
        );
        assert_eq!(
            messages(&run(&decl)),
            vec!["Illegal @return tag, may not be specified on void methods"]
        );
    }

    #[test]
    fn test_undocumented_exception_uses_canonical_name() {
        let mut decl = method("/** Loads the configuration file. */", &[], "void");
        decl.throws = vec!["java.io.IOException".to_string()];
        assert_eq!(
            messages(&run(&decl)),
            vec!["Exception 'java.io.IOException' is undocumented"]
        );
    }

    #[test]
    fn test_unresolved_throws_entry_truncates_list() {
        let mut decl = method("/** Loads the configuration file. */", &[], "void");
        decl.throws = vec![
            "Missing".to_string(),
            "java.io.IOException".to_string(),
        ];
        let diagnostics = run(&decl);
        // IOException was never collected, so it is not reported as undocumented
        assert_eq!(
            messages(&diagnostics),
            vec!["Exception 'Missing' could not be resolved"]
        );
        assert_eq!(diagnostics[0].line, 0);
    }

    #[test]
    fn test_inherit_doc_suppresses_completeness_checks() {
        let decl = method("/** {@inheritDoc} */", &[("int", "a")], "int");
        assert!(run_with(&decl, &catalog(), &CheckerConfig::default(), true).is_empty());
    }

    #[test]
    fn test_override_suppresses_completeness_checks() {
        let decl = method("/** Short */", &[("int", "a")], "int");
        assert!(run_with(&decl, &catalog(), &CheckerConfig::default(), true).is_empty());
    }

    #[test]
    fn test_inherit_doc_on_non_override() {
        let decl = method("/** {@inheritDoc} */", &[], "void");
        assert_eq!(
            messages(&run(&decl)),
            vec!["@inheritDoc may not be specified on non-override methods"]
        );
    }

    #[test]
    fn test_inherit_doc_on_type_without_supertypes() {
        let decl = declaration(DeclKind::Class, "/** {@inheritDoc} */");
        assert_eq!(
            messages(&run(&decl)),
            vec!["@inheritDoc may not be specified on classes without a super class or a class implementing interfaces"]
        );

        let mut decl = declaration(DeclKind::Class, "/** {@inheritDoc} */");
        decl.has_supertypes = true;
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_inherit_doc_on_constructor_is_allowed() {
        let decl = declaration(DeclKind::Constructor, "/** {@inheritDoc} */");
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_private_members_are_skipped() {
        let mut decl = method("/** x */", &[("int", "a")], "int");
        decl.visibility = Visibility::Private;
        assert!(run(&decl).is_empty());

        decl.visibility = Visibility::PackagePrivate;
        assert!(run(&decl).is_empty());

        decl.visibility = Visibility::Protected;
        assert!(!run(&decl).is_empty());
    }

    #[test]
    fn test_private_types_and_constructors_are_checked() {
        let mut decl = declaration(DeclKind::Constructor, "/** x */");
        decl.visibility = Visibility::Private;
        assert_eq!(run(&decl).len(), 1);
    }

    #[test]
    fn test_annotation_types_are_skipped() {
        let decl = declaration(DeclKind::Annotation, "/** x */");
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_declaration_without_comment() {
        let mut decl = method("", &[("int", "a")], "int");
        decl.comment = None;
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let decl = declaration(DeclKind::Class, "/**\n * A documented class.\n * @custom thing\n */");
        assert!(run(&decl).is_empty());
    }
}
