//! Metadata provider trait
//!
//! The graph builder never inspects types itself. It asks a
//! [`TypeIntrospector`] for the metadata of each type it wants to expand, so
//! any source of metadata (a JSON catalog, a compiler plugin, a reflection
//! bridge) can drive diagram generation.

use super::{DiagramError, TypeMetadata};

/// Capability for looking up type metadata by fully-qualified name
///
/// Implementations must be deterministic: the same name always yields the
/// same metadata for the lifetime of one diagram-generation call.
///
/// # Example
/// ```
/// use typegraph::core::{TypeIntrospector, TypeMetadata};
/// use typegraph::plugins::catalog::TypeCatalog;
///
/// let mut catalog = TypeCatalog::new();
/// catalog.insert(TypeMetadata::class("shop.Order")).unwrap();
/// assert!(catalog.lookup("shop.Order").is_ok());
/// assert!(catalog.lookup("shop.Missing").is_err());
/// ```
pub trait TypeIntrospector: Send + Sync {
    /// Look up the metadata for a fully-qualified type name
    fn lookup(&self, full_name: &str) -> Result<TypeMetadata, DiagramError>;

    /// Get the name of this provider
    fn name(&self) -> &'static str;
}
