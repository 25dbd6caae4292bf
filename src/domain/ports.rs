use crate::domain::model::Position;
use crate::utils::error::Result;

/// The slice of a host editor the generator needs.
///
/// Every query returns `None` when there is nothing to answer with (no open
/// document, no cursor); callers treat that as a no-op rather than an error.
pub trait EditorPort {
    fn active_document_lines(&self) -> Option<Vec<String>>;

    fn active_file_name(&self) -> Option<String>;

    fn cursor_position(&self) -> Option<Position>;

    /// Applies every fragment at `position`, in order, as one edit. Either the
    /// whole batch lands or the document is left untouched.
    fn apply_insertions(&mut self, position: Position, fragments: &[String]) -> Result<()>;
}

pub trait ConfigProvider {
    fn declaration_prefix(&self) -> &str;
    fn declaration_suffix(&self) -> &str;
    fn skip_blank_lines(&self) -> bool;
    fn indent_width(&self) -> usize;
}
