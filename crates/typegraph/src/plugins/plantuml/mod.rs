//! PlantUML plugin
//!
//! Serializes a resolved type graph into PlantUML class-diagram markup.

mod renderer;

pub use renderer::{
    PlantUmlRenderer, END_BANNER, END_MARKER, GENERATED_BANNER, START_MARKER,
};
