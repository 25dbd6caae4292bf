use serde::{Deserialize, Serialize};

/// One field pulled out of a data declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

impl Property {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

/// 0-based line and character, as the editor reports the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    pub fn line_start(line: u32) -> Self {
        Self { line, character: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorPair {
    pub getter: String,
    pub setter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    NoActiveDocument,
    NoProperties {
        declaration: String,
    },
    Inserted {
        declaration: String,
        properties: usize,
        position: Position,
    },
}

impl GenerationOutcome {
    pub fn inserted(&self) -> bool {
        matches!(self, GenerationOutcome::Inserted { .. })
    }
}
