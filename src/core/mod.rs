pub mod extractor;
pub mod generator;
pub mod renderer;

pub use crate::domain::model::{AccessorPair, GenerationOutcome, Position, Property};
pub use crate::domain::ports::{ConfigProvider, EditorPort};
pub use crate::utils::error::Result;
