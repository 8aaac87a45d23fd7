//! Static symbol table backing type and member lookups.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::model::DeclKind;
use crate::resolver::{MethodSig, TypeCatalog, TypeRef};

pub mod builder;
pub mod builtin;

pub use builder::{build_symbol_table, erased_parameters};

/// What the table knows about one type.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub kind: DeclKind,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub fields: Vec<String>,
    pub methods: Vec<MethodSig>,
    pub constructors: Vec<Vec<TypeRef>>,
}

impl TypeEntry {
    fn new(name: &str, kind: DeclKind) -> Self {
        let superclass = match kind {
            DeclKind::Class if name != "java.lang.Object" => Some("java.lang.Object"),
            DeclKind::Enum => Some("java.lang.Enum"),
            DeclKind::Record => Some("java.lang.Record"),
            _ => None,
        };
        Self {
            kind,
            superclass: superclass.map(TypeRef::new),
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }
}

/// Types keyed by binary name.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: HashMap<String, TypeEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with the core library types.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        builtin::install(&mut table);
        table
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn entry(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    /// Add `name`, replacing any previous entry. Classes, enums and records
    /// start out with their implicit superclass.
    pub fn declare(&mut self, name: &str, kind: DeclKind) -> &mut TypeEntry {
        let entry = TypeEntry::new(name, kind);
        match self.types.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        }
    }

    pub fn set_superclass(&mut self, name: &str, superclass: &str) {
        if let Some(entry) = self.types.get_mut(name) {
            entry.superclass = Some(TypeRef::new(superclass));
        }
    }

    pub fn add_interface(&mut self, name: &str, interface: &str) {
        if let Some(entry) = self.types.get_mut(name) {
            entry.interfaces.push(TypeRef::new(interface));
        }
    }

    pub fn add_field(&mut self, name: &str, field: &str) {
        if let Some(entry) = self.types.get_mut(name) {
            entry.fields.push(field.to_string());
        }
    }

    pub fn add_method(&mut self, name: &str, method: &str, params: &[TypeRef]) {
        if let Some(entry) = self.types.get_mut(name) {
            entry.methods.push(MethodSig {
                name: method.to_string(),
                params: params.to_vec(),
            });
        }
    }

    pub fn add_constructor(&mut self, name: &str, params: &[TypeRef]) {
        if let Some(entry) = self.types.get_mut(name) {
            entry.constructors.push(params.to_vec());
        }
    }

    fn entry_of(&self, ty: &TypeRef) -> Option<&TypeEntry> {
        if ty.is_array() {
            return None;
        }
        self.types.get(ty.name())
    }
}

impl TypeCatalog for SymbolTable {
    fn lookup(&self, name: &str) -> Option<TypeRef> {
        self.types.contains_key(name).then(|| TypeRef::new(name))
    }

    fn superclass_of(&self, ty: &TypeRef) -> Option<&TypeRef> {
        self.entry_of(ty)?.superclass.as_ref()
    }

    fn interfaces_of(&self, ty: &TypeRef) -> &[TypeRef] {
        self.entry_of(ty)
            .map(|e| e.interfaces.as_slice())
            .unwrap_or_default()
    }

    fn fields_of(&self, ty: &TypeRef) -> &[String] {
        self.entry_of(ty)
            .map(|e| e.fields.as_slice())
            .unwrap_or_default()
    }

    fn methods_of(&self, ty: &TypeRef) -> &[MethodSig] {
        self.entry_of(ty)
            .map(|e| e.methods.as_slice())
            .unwrap_or_default()
    }

    fn constructors_of(&self, ty: &TypeRef) -> &[Vec<TypeRef>] {
        self.entry_of(ty)
            .map(|e| e.constructors.as_slice())
            .unwrap_or_default()
    }
}
