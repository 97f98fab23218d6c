//! Core error types for diagram generation
//!
//! This module defines the error types surfaced by the type-graph pipeline.
//! Most lookup problems are recovered inside the builder and never reach the
//! caller; the variants here are the ones that do.

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Empty working set: at least one root type is required")]
    EmptyWorkingSet,

    #[error("Type not found: {name}")]
    TypeNotFound { name: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new type-not-found error
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Create a new catalog error
    pub fn catalog_error(message: String) -> Self {
        Self::CatalogError { message }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }
}

impl From<serde_json::Error> for DiagramError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog_error(format!("invalid catalog JSON: {}", err))
    }
}
