//! Core abstractions for type-graph processing
//!
//! This module defines the metadata vocabulary, the provider and renderer
//! traits, error types and logging setup shared by every plugin.

mod error;
mod introspector;
pub mod logging;
mod renderer;
mod types;

pub use error::*;
pub use introspector::*;
pub use logging::*;
pub use renderer::*;
pub use types::*;
