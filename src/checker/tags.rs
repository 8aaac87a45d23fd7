//! Per-tag validation rules.
//!
//! Each rule first checks where the tag may appear, then that its argument
//! is present, and only then looks at what the argument refers to. The
//! first failing step is reported and ends processing of that tag.

use super::{CommentChecker, Violation};
use crate::model::DeclKind;
use crate::resolver::reference::ReferenceResolver;
use crate::resolver::{resolve_type, TypeCatalog};

fn is_type_kind(kind: DeclKind) -> bool {
    matches!(
        kind,
        DeclKind::Class | DeclKind::Interface | DeclKind::Enum | DeclKind::Record
    )
}

impl<C: TypeCatalog + ?Sized> CommentChecker<'_, C> {
    pub(super) fn check_inherit_doc(&mut self, line: usize) {
        let declaration = self.declaration;
        match declaration.kind {
            DeclKind::Method if !self.is_override => {
                self.report(Violation::InheritDocOnNonOverride, line);
            }
            DeclKind::Class | DeclKind::Interface if !declaration.has_supertypes => {
                self.report(Violation::InheritDocWithoutSupertype, line);
            }
            _ => {}
        }
    }

    pub(super) fn check_author(&mut self, line: usize, arg: &str) {
        if !is_type_kind(self.kind()) {
            self.report(Violation::IllegalAuthor, line);
            return;
        }
        if arg.trim().is_empty() {
            self.report(Violation::MalformedAuthor, line);
            return;
        }
        self.count(arg);
    }

    pub(super) fn check_version(&mut self, line: usize, arg: &str) {
        if !is_type_kind(self.kind()) {
            self.report(Violation::IllegalVersion, line);
            return;
        }
        if arg.trim().is_empty() {
            self.report(Violation::MalformedVersion, line);
            return;
        }
        self.count(arg);
    }

    /// Every kind that reaches the tag rules may carry `@since`.
    pub(super) fn check_since(&mut self, line: usize, arg: &str) {
        if arg.trim().is_empty() {
            self.report(Violation::MalformedSince, line);
            return;
        }
        self.count(arg);
    }

    pub(super) fn check_deprecated(&mut self, line: usize, arg: &str) {
        if arg.trim().is_empty() {
            self.report(Violation::MalformedDeprecated, line);
            return;
        }
        self.count(arg);
    }

    /// A `@return` tag counts as documented even where it is illegal, so
    /// the misuse is reported once.
    pub(super) fn check_return(&mut self, line: usize, arg: &str) {
        self.return_documented = true;

        if self.kind() != DeclKind::Method {
            self.report(Violation::IllegalReturn, line);
            return;
        }
        if self.declaration.is_void_method() {
            self.report(Violation::ReturnOnVoidMethod, line);
            return;
        }
        if arg.trim().is_empty() {
            self.report(Violation::MalformedReturn, line);
            return;
        }
        self.count(arg);
    }

    fn param_allowed(&self) -> bool {
        let declaration = self.declaration;
        declaration.kind.is_callable()
            || declaration.kind == DeclKind::Record
            || (is_type_kind(declaration.kind) && !declaration.type_parameters.is_empty())
    }

    pub(super) fn check_param(&mut self, line: usize, arg: &str) {
        let text = arg.trim();
        if !self.param_allowed() {
            self.report(
                Violation::IllegalParam {
                    text: text.to_string(),
                },
                line,
            );
            return;
        }

        let Some((name, description)) = text.split_once(char::is_whitespace) else {
            self.report(
                Violation::MalformedParam {
                    text: text.to_string(),
                },
                line,
            );
            return;
        };
        if name.is_empty() || description.trim().is_empty() {
            self.report(
                Violation::MalformedParam {
                    text: text.to_string(),
                },
                line,
            );
            return;
        }

        self.count(arg);

        if self.parameter_names.iter().any(|p| p == name) {
            self.documented_parameters.push(name.to_string());
        } else {
            self.report(
                Violation::UnknownParameter {
                    name: name.to_string(),
                },
                line,
            );
        }
    }

    pub(super) fn check_link(&mut self, line: usize, tag: &str, arg: &str) {
        if arg.trim().is_empty() {
            self.report(Violation::MalformedReference { tag: tag.to_string() }, line);
            return;
        }
        self.count(arg);
        self.check_reference(line, tag, arg);
    }

    pub(super) fn check_value(&mut self, line: usize, arg: &str) {
        if arg.trim().is_empty() {
            self.report(Violation::MalformedValue, line);
            return;
        }
        self.count(arg);
        self.check_reference(line, "value", arg);
    }

    /// `@see "Title"` and `@see <a href="...">` are not references.
    pub(super) fn check_see(&mut self, line: usize, arg: &str) {
        let text = arg.trim();
        if text.is_empty() {
            self.report(
                Violation::MalformedReference {
                    tag: "see".to_string(),
                },
                line,
            );
            return;
        }
        self.count(arg);
        if !text.starts_with('"') && !text.starts_with('<') {
            self.check_reference(line, "see", text);
        }
    }

    pub(super) fn check_throws(&mut self, line: usize, tag: &str, arg: &str) {
        if !self.kind().is_callable() {
            self.report(Violation::IllegalThrows { tag: tag.to_string() }, line);
            return;
        }
        let text = arg.trim();
        if text.is_empty() {
            self.report(Violation::MalformedThrows { tag: tag.to_string() }, line);
            return;
        }
        self.count(arg);

        let name = text.split(char::is_whitespace).next().unwrap_or(text);
        let Some(ty) = resolve_type(name, self.context, self.catalog) else {
            self.report(
                Violation::UnresolvedException {
                    name: name.to_string(),
                },
                line,
            );
            return;
        };

        // unchecked exceptions never have to be declared
        if self.catalog.is_unchecked_exception(&ty) || self.throws.contains(&ty) {
            self.documented_throws.push(ty);
            return;
        }
        self.report(
            Violation::ExceptionNotThrown {
                name: name.to_string(),
            },
            line,
        );
    }

    fn check_reference(&mut self, line: usize, tag: &str, text: &str) {
        if !self.config.check_references {
            return;
        }
        let declaration = self.declaration;
        let resolver = ReferenceResolver::new(self.context, self.catalog, &declaration.owner);
        if let Err(violation) = resolver.check(tag, text) {
            self.report(violation, line);
        }
    }
}
