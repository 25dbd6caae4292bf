// Adapters layer: concrete editors behind the EditorPort.

pub mod file;
pub mod memory;
pub mod text;

pub use file::FileEditor;
pub use memory::MemoryEditor;
