//! Pipeline stages
//!
//! The metadata catalog, graph construction, PlantUML output and the
//! orchestrator that runs them in sequence.

pub mod catalog;
pub mod graph;
pub mod orchestrator;
pub mod plantuml;

pub use catalog::*;
pub use graph::*;
pub use orchestrator::*;
pub use plantuml::*;
