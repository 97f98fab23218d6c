//! Field exclusion rules
//!
//! Persistence frameworks and compilers add bookkeeping fields to entity
//! types. None of them belong in a relationship diagram.

use std::collections::HashSet;

use crate::core::{FieldDescriptor, TypeKind};

/// Serialization version marker
const SERIAL_VERSION_FIELD: &str = "serialVersionUID";
/// Internal record id added by the persistence layer
const RECORD_ID_FIELD: &str = "recordId";
/// Prefix of fields woven in by the persistence provider
const PERSISTENCE_PREFIX: &str = "_persistence_";
/// Synthetic value table of enum types
const ENUM_VALUES_PREFIX: &str = "$VALUES";
/// Lazy-loading holder type woven in by the persistence provider
const WEAVED_HOLDER_TYPE: &str =
    "org.eclipse.persistence.indirection.WeavedAttributeValueHolderInterface";

/// Decides which declared fields are left out of nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    excluded_names: HashSet<String>,
    excluded_prefixes: Vec<String>,
    excluded_types: HashSet<String>,
    enum_table_prefix: Option<String>,
}

impl FieldFilter {
    /// A filter that excludes nothing
    pub fn none() -> Self {
        Self {
            excluded_names: HashSet::new(),
            excluded_prefixes: Vec::new(),
            excluded_types: HashSet::new(),
            enum_table_prefix: None,
        }
    }

    pub fn with_excluded_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_names.insert(name.into());
        self
    }

    pub fn with_excluded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_prefixes.push(prefix.into());
        self
    }

    pub fn with_excluded_type(mut self, full_name: impl Into<String>) -> Self {
        self.excluded_types.insert(full_name.into());
        self
    }

    pub fn with_enum_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.enum_table_prefix = Some(prefix.into());
        self
    }

    /// Whether `field`, declared on a type of kind `owner_kind`, is left out
    pub fn is_excluded(&self, field: &FieldDescriptor, owner_kind: TypeKind) -> bool {
        if self.excluded_names.contains(&field.name) {
            return true;
        }
        if self
            .excluded_prefixes
            .iter()
            .any(|p| field.name.starts_with(p.as_str()))
        {
            return true;
        }
        if self
            .excluded_types
            .contains(field.declared_type.full_name())
        {
            return true;
        }
        match (&self.enum_table_prefix, owner_kind) {
            (Some(prefix), TypeKind::Enum) => field.name.starts_with(prefix.as_str()),
            _ => false,
        }
    }
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self::none()
            .with_excluded_name(SERIAL_VERSION_FIELD)
            .with_excluded_name(RECORD_ID_FIELD)
            .with_excluded_prefix(PERSISTENCE_PREFIX)
            .with_excluded_type(WEAVED_HOLDER_TYPE)
            .with_enum_table_prefix(ENUM_VALUES_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, "long")
    }

    #[test]
    fn test_default_excluded_names() {
        let filter = FieldFilter::default();
        assert!(filter.is_excluded(&field("serialVersionUID"), TypeKind::Class));
        assert!(filter.is_excluded(&field("recordId"), TypeKind::Class));
        assert!(!filter.is_excluded(&field("id"), TypeKind::Class));
    }

    #[test]
    fn test_persistence_prefix() {
        let filter = FieldFilter::default();
        assert!(filter.is_excluded(&field("_persistence_fetchGroup"), TypeKind::Class));
        assert!(!filter.is_excluded(&field("persistence"), TypeKind::Class));
    }

    #[test]
    fn test_enum_value_table_only_on_enums() {
        let filter = FieldFilter::default();
        assert!(filter.is_excluded(&field("$VALUES"), TypeKind::Enum));
        assert!(!filter.is_excluded(&field("$VALUES"), TypeKind::Class));
    }

    #[test]
    fn test_weaved_holder_type() {
        let filter = FieldFilter::default();
        let holder = FieldDescriptor::new("_holder", WEAVED_HOLDER_TYPE);
        assert!(filter.is_excluded(&holder, TypeKind::Class));
        let renamed = FieldDescriptor::new("customerHolder", WEAVED_HOLDER_TYPE);
        assert!(filter.is_excluded(&renamed, TypeKind::Class));
    }

    #[test]
    fn test_none_excludes_nothing() {
        let filter = FieldFilter::none();
        assert!(!filter.is_excluded(&field("serialVersionUID"), TypeKind::Class));
        assert!(!filter.is_excluded(&field("$VALUES"), TypeKind::Enum));
    }

    #[test]
    fn test_custom_rules() {
        let filter = FieldFilter::none()
            .with_excluded_name("version")
            .with_excluded_prefix("jdo");
        assert!(filter.is_excluded(&field("version"), TypeKind::Class));
        assert!(filter.is_excluded(&field("jdoStateManager"), TypeKind::Interface));
        assert!(!filter.is_excluded(&field("name"), TypeKind::Class));
    }
}
