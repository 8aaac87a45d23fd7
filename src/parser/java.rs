use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

use crate::model::{
    DeclKind, Declaration, DocComment, ImportDecl, MemberDecl, Parameter, ParsedUnit, TypeDecl,
    TypeParameter, Visibility,
};

use super::LanguageParser;

#[derive(Default)]
pub struct JavaParser;

impl JavaParser {
    pub fn new() -> Self {
        Self
    }

    fn create_parser() -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .context("failed to set Java parser language")?;
        Ok(parser)
    }
}

impl LanguageParser for JavaParser {
    fn parse(&self, source: &str, path: &Path) -> Result<ParsedUnit> {
        let mut parser = Self::create_parser()?;
        let tree = parser
            .parse(source, None)
            .context("tree-sitter failed to parse Java")?;
        if tree.root_node().has_error() {
            debug!(path = %path.display(), "syntax errors in source, extracting what parsed");
        }

        let mut extractor = Extractor::new(source, &tree);
        extractor.extract();

        Ok(ParsedUnit {
            path: path.to_path_buf(),
            package: extractor.package,
            imports: extractor.imports,
            types: extractor.types,
            declarations: extractor.declarations,
        })
    }
}

/// A type whose body is being walked.
struct TypeFrame {
    kind: DeclKind,
    binary_name: String,
    /// Index into `Extractor::types`.
    index: usize,
}

/// Walks a Java tree-sitter CST and extracts types, members and documented
/// declarations.
struct Extractor<'a> {
    source: &'a str,
    tree: &'a Tree,
    package: Option<String>,
    imports: Vec<ImportDecl>,
    types: Vec<TypeDecl>,
    declarations: Vec<Declaration>,
    type_stack: Vec<TypeFrame>,
}

impl<'a> Extractor<'a> {
    fn new(source: &'a str, tree: &'a Tree) -> Self {
        Self {
            source,
            tree,
            package: None,
            imports: Vec::new(),
            types: Vec::new(),
            declarations: Vec::new(),
            type_stack: Vec::new(),
        }
    }

    fn node_text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn node_line(&self, node: Node) -> usize {
        node.start_position().row + 1
    }

    fn extract(&mut self) {
        let root = self.tree.root_node();
        self.extract_package(&root);
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "import_declaration" => self.extract_import(child),
                _ => self.visit_type_declaration(child),
            }
        }
    }

    fn extract_package(&mut self, root: &Node) {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "package_declaration" {
                let mut inner_cursor = child.walk();
                for inner_child in child.children(&mut inner_cursor) {
                    match inner_child.kind() {
                        "scoped_identifier" | "identifier" => {
                            self.package = Some(self.node_text(inner_child).to_string());
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn extract_import(&mut self, node: Node) {
        let mut name = String::new();
        let mut is_wildcard = false;
        let mut is_static = false;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "scoped_identifier" | "identifier" => {
                    name = self.node_text(child).to_string();
                }
                "asterisk" => is_wildcard = true,
                "static" => is_static = true,
                _ => {}
            }
        }

        if name.is_empty() {
            return;
        }
        self.imports.push(ImportDecl {
            name,
            is_wildcard,
            is_static,
        });
    }

    /// Extract `node` if it declares a type; anything else is ignored.
    fn visit_type_declaration(&mut self, node: Node) {
        let kind = match node.kind() {
            "class_declaration" => DeclKind::Class,
            "interface_declaration" => DeclKind::Interface,
            "enum_declaration" => DeclKind::Enum,
            "record_declaration" => DeclKind::Record,
            "annotation_type_declaration" => DeclKind::Annotation,
            _ => return,
        };
        self.extract_type(node, kind);
    }

    /// The closest preceding `/** ... */` comment, skipping other comments.
    fn doc_comment(&self, node: Node) -> Option<DocComment> {
        let mut sibling = node.prev_sibling();
        while let Some(prev) = sibling {
            match prev.kind() {
                "block_comment" => {
                    let text = self.node_text(prev);
                    if text.starts_with("/**") && text != "/**/" {
                        return Some(DocComment {
                            text: text.to_string(),
                            line: self.node_line(prev),
                        });
                    }
                }
                "line_comment" => {}
                _ => return None,
            }
            sibling = prev.prev_sibling();
        }
        None
    }

    fn modifiers<'n>(&self, node: Node<'n>) -> Option<Node<'n>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| c.kind() == "modifiers");
        found
    }

    fn has_modifier(&self, node: Node, modifier: &str) -> bool {
        let Some(modifiers) = self.modifiers(node) else {
            return false;
        };
        let mut cursor = modifiers.walk();
        let found = modifiers.children(&mut cursor).any(|c| c.kind() == modifier);
        found
    }

    /// Declared visibility. Members of interfaces and annotation types are
    /// public unless marked private.
    fn visibility(&self, node: Node) -> Visibility {
        if self.has_modifier(node, "public") {
            Visibility::Public
        } else if self.has_modifier(node, "protected") {
            Visibility::Protected
        } else if self.has_modifier(node, "private") {
            Visibility::Private
        } else if matches!(
            self.type_stack.last().map(|f| f.kind),
            Some(DeclKind::Interface | DeclKind::Annotation)
        ) {
            Visibility::Public
        } else {
            Visibility::PackagePrivate
        }
    }

    fn annotations(&self, node: Node) -> Vec<String> {
        let Some(modifiers) = self.modifiers(node) else {
            return Vec::new();
        };
        let mut names = Vec::new();
        let mut cursor = modifiers.walk();
        for child in modifiers.children(&mut cursor) {
            if child.kind() == "marker_annotation" || child.kind() == "annotation" {
                if let Some(name_n) = child.child_by_field_name("name") {
                    names.push(self.node_text(name_n).to_string());
                }
            }
        }
        names
    }

    fn type_parameters(&self, node: Node) -> Vec<TypeParameter> {
        let Some(params) = node.child_by_field_name("type_parameters") else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut cursor = params.walk();
        for param in params.children(&mut cursor) {
            if param.kind() != "type_parameter" {
                continue;
            }
            let mut name = None;
            let mut bound = None;
            let mut inner_cursor = param.walk();
            for child in param.children(&mut inner_cursor) {
                match child.kind() {
                    "type_identifier" | "identifier" if name.is_none() => {
                        name = Some(self.node_text(child).to_string());
                    }
                    "type_bound" => {
                        bound = child
                            .named_child(0)
                            .map(|b| self.node_text(b).to_string());
                    }
                    _ => {}
                }
            }
            if let Some(name) = name {
                result.push(TypeParameter { name, bound });
            }
        }
        result
    }

    /// Formal parameters in order; varargs keep their `...` suffix and C-style
    /// array names (`int a[]`) move their brackets to the type.
    fn parameters(&self, node: Node) -> Vec<Parameter> {
        let Some(params) = node.child_by_field_name("parameters") else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut cursor = params.walk();
        for param in params.children(&mut cursor) {
            match param.kind() {
                "formal_parameter" => {
                    let name = param
                        .child_by_field_name("name")
                        .map(|n| self.node_text(n).to_string())
                        .unwrap_or_default();
                    let mut type_name = param
                        .child_by_field_name("type")
                        .map(|n| self.node_text(n).to_string())
                        .unwrap_or_default();
                    if let Some(dims) = param.child_by_field_name("dimensions") {
                        type_name.push_str(&self.node_text(dims).replace(' ', ""));
                    }
                    result.push(Parameter { name, type_name });
                }
                "spread_parameter" => {
                    let mut name = String::new();
                    let mut type_name = String::new();
                    let mut inner_cursor = param.walk();
                    for child in param.named_children(&mut inner_cursor) {
                        match child.kind() {
                            "modifiers" => {}
                            "variable_declarator" => {
                                name = child
                                    .child_by_field_name("name")
                                    .map(|n| self.node_text(n).to_string())
                                    .unwrap_or_default();
                            }
                            "identifier" => name = self.node_text(child).to_string(),
                            _ if type_name.is_empty() => {
                                type_name = self.node_text(child).to_string();
                            }
                            _ => {}
                        }
                    }
                    type_name.push_str("...");
                    result.push(Parameter { name, type_name });
                }
                _ => {}
            }
        }
        result
    }

    fn throws(&self, node: Node) -> Vec<String> {
        let mut cursor = node.walk();
        let Some(throws) = node.children(&mut cursor).find(|c| c.kind() == "throws") else {
            return Vec::new();
        };
        let mut inner_cursor = throws.walk();
        let names = throws
            .named_children(&mut inner_cursor)
            .map(|t| self.node_text(t).to_string())
            .collect();
        names
    }

    /// Type names in a `superclass`, `super_interfaces` or
    /// `extends_interfaces` node.
    fn type_list(&self, node: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "type_list" {
                names.extend(self.type_list(child));
            } else {
                names.push(self.node_text(child).to_string());
            }
        }
        names
    }

    fn binary_name(&self, name: &str) -> String {
        match (self.type_stack.last(), &self.package) {
            (Some(parent), _) => format!("{}${}", parent.binary_name, name),
            (None, Some(pkg)) => format!("{}.{}", pkg, name),
            (None, None) => name.to_string(),
        }
    }

    fn outer_type(&self) -> String {
        self.type_stack
            .first()
            .map(|f| f.binary_name.clone())
            .unwrap_or_default()
    }

    fn current_owner(&self) -> String {
        self.type_stack
            .last()
            .map(|f| f.binary_name.clone())
            .unwrap_or_default()
    }

    fn add_member(&mut self, member: MemberDecl) {
        if let Some(frame) = self.type_stack.last() {
            self.types[frame.index].members.push(member);
        }
    }

    fn declaration(&self, node: Node, kind: DeclKind, name: &str) -> Declaration {
        Declaration {
            kind,
            name: name.to_string(),
            visibility: self.visibility(node),
            owner: self.current_owner(),
            outer_type: self.outer_type(),
            line: self.node_line(node),
            comment: self.doc_comment(node),
            parameters: Vec::new(),
            type_parameters: self.type_parameters(node),
            throws: Vec::new(),
            return_type: None,
            has_supertypes: false,
            annotations: self.annotations(node),
        }
    }

    fn extract_type(&mut self, node: Node, kind: DeclKind) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n).to_string(),
            None => return,
        };
        let binary_name = self.binary_name(&name);

        let superclass = node
            .child_by_field_name("superclass")
            .and_then(|s| self.type_list(s).into_iter().next());
        let mut interfaces = Vec::new();
        if let Some(list) = node.child_by_field_name("interfaces") {
            interfaces.extend(self.type_list(list));
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "extends_interfaces" {
                interfaces.extend(self.type_list(child));
            }
        }

        let components = if kind == DeclKind::Record {
            self.parameters(node)
        } else {
            Vec::new()
        };

        let mut decl = self.declaration(node, kind, &name);
        decl.has_supertypes = superclass.is_some() || !interfaces.is_empty();
        decl.parameters = components.clone();

        self.types.push(TypeDecl {
            kind,
            binary_name: binary_name.clone(),
            superclass,
            interfaces,
            type_parameters: decl.type_parameters.clone(),
            members: Vec::new(),
            components,
        });
        let index = self.types.len() - 1;

        self.type_stack.push(TypeFrame {
            kind,
            binary_name: binary_name.clone(),
            index,
        });
        decl.owner = binary_name;
        decl.outer_type = self.outer_type();
        self.declarations.push(decl);

        if let Some(body) = node.child_by_field_name("body") {
            self.visit_body(body);
        }
        self.type_stack.pop();
    }

    fn visit_body(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "method_declaration" => self.extract_method(child),
                "constructor_declaration" => self.extract_constructor(child),
                "field_declaration" | "constant_declaration" => self.extract_field(child),
                "annotation_type_element_declaration" => self.extract_annotation_element(child),
                "enum_constant" => self.extract_enum_constant(child),
                "enum_body_declarations" => self.visit_body(child),
                _ => self.visit_type_declaration(child),
            }
        }
    }

    fn extract_method(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n).to_string(),
            None => return,
        };

        let mut decl = self.declaration(node, DeclKind::Method, &name);
        decl.parameters = self.parameters(node);
        decl.throws = self.throws(node);
        decl.return_type = node
            .child_by_field_name("type")
            .map(|n| self.node_text(n).to_string());

        self.add_member(MemberDecl::Method {
            name,
            params: decl.parameters.iter().map(|p| p.type_name.clone()).collect(),
            type_parameters: decl.type_parameters.clone(),
        });
        self.declarations.push(decl);
    }

    fn extract_constructor(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n).to_string(),
            None => return,
        };

        let mut decl = self.declaration(node, DeclKind::Constructor, &name);
        decl.parameters = self.parameters(node);
        decl.throws = self.throws(node);

        self.add_member(MemberDecl::Constructor {
            params: decl.parameters.iter().map(|p| p.type_name.clone()).collect(),
            type_parameters: decl.type_parameters.clone(),
        });
        self.declarations.push(decl);
    }

    /// One declaration per field statement, named after its declarators
    /// (`int x, y;` → `x, y`).
    fn extract_field(&mut self, node: Node) {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "variable_declarator" {
                if let Some(name_node) = child.child_by_field_name("name") {
                    names.push(self.node_text(name_node).to_string());
                }
            }
        }
        if names.is_empty() {
            return;
        }

        let decl = self.declaration(node, DeclKind::Field, &names.join(", "));
        for name in names {
            self.add_member(MemberDecl::Field(name));
        }
        self.declarations.push(decl);
    }

    fn extract_annotation_element(&mut self, node: Node) {
        if let Some(name) = node.child_by_field_name("name") {
            let name = self.node_text(name).to_string();
            self.add_member(MemberDecl::Method {
                name,
                params: Vec::new(),
                type_parameters: Vec::new(),
            });
        }
    }

    fn extract_enum_constant(&mut self, node: Node) {
        if let Some(name) = node.child_by_field_name("name") {
            let name = self.node_text(name).to_string();
            self.add_member(MemberDecl::Field(name));
        }
    }
}
