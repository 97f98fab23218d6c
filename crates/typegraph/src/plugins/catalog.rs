//! JSON type catalog
//!
//! A [`TypeIntrospector`] backed by a JSON document, so that type metadata
//! can be exported once from whatever environment owns the types and
//! diagrammed anywhere.
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "shop.Order",
//!       "kind": "class",
//!       "supertype": "shop.BaseEntity",
//!       "fields": [
//!         { "name": "customer", "visibility": "private", "type": "shop.Customer" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::core::{DiagramError, TypeIntrospector, TypeMetadata};

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    types: Vec<TypeMetadata>,
}

/// In-memory type catalog keyed by fully-qualified name
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<String, TypeMetadata>,
    order: Vec<String>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog document
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        let document: CatalogDocument = serde_json::from_str(input)?;
        let mut catalog = Self::new();
        for metadata in document.types {
            catalog.insert(metadata)?;
        }
        debug!(type_count = catalog.len(), "Catalog parsed");
        Ok(catalog)
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(path = %path.display(), type_count = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Serialize the catalog, types in insertion order
    pub fn to_json(&self) -> Result<String, DiagramError> {
        let document = CatalogDocument {
            types: self
                .order
                .iter()
                .filter_map(|name| self.types.get(name).cloned())
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Add a type; a second entry with the same name is rejected
    pub fn insert(&mut self, metadata: TypeMetadata) -> Result<(), DiagramError> {
        let name = metadata.type_ref.full_name().to_string();
        if self.types.contains_key(&name) {
            return Err(DiagramError::catalog_error(format!(
                "duplicate type: {}",
                name
            )));
        }
        self.order.push(name.clone());
        self.types.insert(name, metadata);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl TypeIntrospector for TypeCatalog {
    fn lookup(&self, full_name: &str) -> Result<TypeMetadata, DiagramError> {
        self.types
            .get(full_name)
            .cloned()
            .ok_or_else(|| DiagramError::type_not_found(full_name))
    }

    fn name(&self) -> &'static str {
        "json-catalog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldDescriptor, TypeKind, Visibility};
    use std::io::Write;

    const SHOP: &str = r#"{
        "types": [
            {
                "name": "shop.Order",
                "supertype": "shop.BaseEntity",
                "interfaces": ["java.io.Serializable"],
                "fields": [
                    { "name": "customer", "visibility": "private", "type": "shop.Customer" },
                    { "name": "COUNT", "visibility": "public", "static": true, "type": "int" }
                ]
            },
            { "name": "shop.BaseEntity", "abstract": true },
            { "name": "shop.Status", "kind": "enum" }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = TypeCatalog::from_json(SHOP).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["shop.Order", "shop.BaseEntity", "shop.Status"]
        );

        let order = catalog.lookup("shop.Order").unwrap();
        assert_eq!(order.supertype.as_ref().unwrap().full_name(), "shop.BaseEntity");
        assert_eq!(order.interfaces.len(), 1);
        assert_eq!(order.fields[0].visibility, Visibility::Private);
        assert!(order.fields[1].is_static);

        assert!(catalog.lookup("shop.BaseEntity").unwrap().is_abstract);
        assert_eq!(catalog.lookup("shop.Status").unwrap().kind, TypeKind::Enum);
    }

    #[test]
    fn test_unknown_type() {
        let catalog = TypeCatalog::from_json(SHOP).unwrap();
        let err = catalog.lookup("shop.Nope").unwrap_err();
        assert!(matches!(err, DiagramError::TypeNotFound { ref name } if name == "shop.Nope"));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let json = r#"{"types": [{"name": "a.A"}, {"name": "a.A"}]}"#;
        let err = TypeCatalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate type: a.A"));
    }

    #[test]
    fn test_malformed_json() {
        let err = TypeCatalog::from_json("{\"types\": [").unwrap_err();
        assert!(matches!(err, DiagramError::CatalogError { .. }));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut catalog = TypeCatalog::new();
        catalog
            .insert(TypeMetadata::class("b.Second").with_field(FieldDescriptor::new("x", "int")))
            .unwrap();
        catalog.insert(TypeMetadata::interface("a.First")).unwrap();

        let reparsed = TypeCatalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(reparsed.names().collect::<Vec<_>>(), vec!["b.Second", "a.First"]);
        assert_eq!(reparsed.lookup("b.Second").unwrap(), catalog.lookup("b.Second").unwrap());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SHOP.as_bytes()).unwrap();
        let catalog = TypeCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let missing = TypeCatalog::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(DiagramError::IoError { .. })));
    }
}
