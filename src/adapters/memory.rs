use crate::adapters::text::{document_lines, splice};
use crate::domain::model::Position;
use crate::domain::ports::EditorPort;
use crate::utils::error::{AccessorGenError, Result};

#[derive(Debug, Clone)]
struct OpenDocument {
    file_name: String,
    text: String,
    cursor: Position,
}

/// An editor that keeps its single document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    document: Option<OpenDocument>,
    edits: usize,
}

impl MemoryEditor {
    /// An editor with no open document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(file_name: impl Into<String>, text: impl Into<String>, cursor: Position) -> Self {
        Self {
            document: Some(OpenDocument {
                file_name: file_name.into(),
                text: text.into(),
                cursor,
            }),
            edits: 0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.document.as_ref().map(|doc| doc.text.as_str())
    }

    pub fn set_cursor(&mut self, cursor: Position) {
        if let Some(doc) = self.document.as_mut() {
            doc.cursor = cursor;
        }
    }

    /// Number of edits applied so far.
    pub fn edit_count(&self) -> usize {
        self.edits
    }
}

impl EditorPort for MemoryEditor {
    fn active_document_lines(&self) -> Option<Vec<String>> {
        self.document.as_ref().map(|doc| document_lines(&doc.text))
    }

    fn active_file_name(&self) -> Option<String> {
        self.document.as_ref().map(|doc| doc.file_name.clone())
    }

    fn cursor_position(&self) -> Option<Position> {
        self.document.as_ref().map(|doc| doc.cursor)
    }

    fn apply_insertions(&mut self, position: Position, fragments: &[String]) -> Result<()> {
        let Some(doc) = self.document.as_mut() else {
            return Err(AccessorGenError::EditorError {
                message: "no document is open".to_string(),
            });
        };

        doc.text = splice(&doc.text, position, fragments);
        self.edits += 1;
        Ok(())
    }
}
