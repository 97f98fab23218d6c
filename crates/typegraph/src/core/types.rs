//! Core type definitions for type-graph processing
//!
//! This module contains the metadata vocabulary shared by every stage:
//! type references, type kinds, field visibility, field descriptors and the
//! per-type metadata record returned by a [`TypeIntrospector`](super::TypeIntrospector).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a type by its fully-qualified name
///
/// The simple name and package are derived once from the fully-qualified
/// name: the package is everything before the last `.`, the simple name is
/// everything after it (and after the last `$` for nested types).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TypeRef {
    full_name: String,
    simple_name: String,
    package: Option<String>,
}

impl TypeRef {
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let (package, tail) = match full_name.rfind('.') {
            Some(0) | None => (None, full_name.as_str()),
            Some(idx) => (Some(full_name[..idx].to_string()), &full_name[idx + 1..]),
        };
        let simple_name = tail.rsplit('$').next().unwrap_or(tail).to_string();
        Self {
            simple_name,
            package,
            full_name,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }
}

impl From<String> for TypeRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.full_name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// Kind of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    /// Keyword used in diagram declarations
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Visibility modifier for fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,   // -
    Protected, // #
    Public,    // +
    #[default]
    Package, // no marker
}

impl Visibility {
    pub fn symbol(self) -> Option<char> {
        match self {
            Visibility::Private => Some('-'),
            Visibility::Protected => Some('#'),
            Visibility::Public => Some('+'),
            Visibility::Package => None,
        }
    }
}

/// A declared field of a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(rename = "type")]
    pub declared_type: TypeRef,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Package,
            is_static: false,
            declared_type: declared_type.into(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Diagram label: `{static} ` marker, visibility symbol, then the name
    pub fn label(&self) -> String {
        let mut label = String::new();
        if self.is_static {
            label.push_str("{static} ");
        }
        if let Some(symbol) = self.visibility.symbol() {
            label.push(symbol);
            label.push(' ');
        }
        label.push_str(&self.name);
        label
    }
}

/// Metadata describing one type, as returned by a metadata provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    #[serde(rename = "name")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeMetadata {
    pub fn new(type_ref: impl Into<TypeRef>, kind: TypeKind) -> Self {
        Self {
            type_ref: type_ref.into(),
            kind,
            is_abstract: false,
            supertype: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn class(type_ref: impl Into<TypeRef>) -> Self {
        Self::new(type_ref, TypeKind::Class)
    }

    pub fn interface(type_ref: impl Into<TypeRef>) -> Self {
        Self::new(type_ref, TypeKind::Interface)
    }

    pub fn enumeration(type_ref: impl Into<TypeRef>) -> Self {
        Self::new(type_ref, TypeKind::Enum)
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_supertype(mut self, supertype: impl Into<TypeRef>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<TypeRef>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn package(&self) -> Option<&str> {
        self.type_ref.package()
    }
}
