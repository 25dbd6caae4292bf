pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileEditor, MemoryEditor};
pub use app::commands::{activate, deactivate, CommandRegistry, GEN_GETTERS_SETTERS};
pub use config::TomlConfig;
pub use crate::core::{
    extractor::FieldExtractor, generator::AccessorGenerator, renderer::AccessorRenderer,
    EditorPort, GenerationOutcome, Position, Property,
};
pub use utils::error::{AccessorGenError, Result};
