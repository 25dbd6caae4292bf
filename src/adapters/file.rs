use crate::adapters::text::{document_lines, splice};
use crate::domain::model::Position;
use crate::domain::ports::EditorPort;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Treats a file on disk as the active document. Edits are spliced in memory
/// and written back through a temporary sibling file, so the original is
/// either fully replaced or left as it was.
#[derive(Debug, Clone)]
pub struct FileEditor {
    path: PathBuf,
    /// `path` with symlinks resolved; the file that actually gets replaced.
    target: PathBuf,
    text: String,
    line_ending: &'static str,
    cursor: Position,
}

/// `\r\n` when the first line break of `text` is CRLF, `\n` otherwise.
pub fn detect_line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(idx) if text[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

impl FileEditor {
    pub fn open<P: AsRef<Path>>(path: P, cursor: Position) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path)?;
        let target = fs::canonicalize(&path)?;
        let line_ending = detect_line_ending(&text);
        tracing::debug!(
            "Opened {} ({} bytes, {:?} line endings)",
            path.display(),
            text.len(),
            line_ending
        );

        Ok(Self {
            path,
            target,
            text,
            line_ending,
            cursor,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_ending(&self) -> &'static str {
        self.line_ending
    }

    fn normalize_line_endings(&self, fragment: &str) -> String {
        if self.line_ending == "\n" {
            fragment.replace("\r\n", "\n")
        } else {
            fragment.replace("\r\n", "\n").replace('\n', self.line_ending)
        }
    }

    fn write_atomically(&self, contents: &str) -> Result<()> {
        let permissions = fs::metadata(&self.target)?.permissions();

        let mut tmp_name = self
            .target
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        tmp_name.push(".accessor-gen.tmp");
        let tmp_path = self.target.with_file_name(tmp_name);

        let written = fs::write(&tmp_path, contents)
            .and_then(|_| fs::set_permissions(&tmp_path, permissions))
            .and_then(|_| fs::rename(&tmp_path, &self.target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl EditorPort for FileEditor {
    fn active_document_lines(&self) -> Option<Vec<String>> {
        Some(document_lines(&self.text))
    }

    fn active_file_name(&self) -> Option<String> {
        Some(self.path.to_string_lossy().into_owned())
    }

    fn cursor_position(&self) -> Option<Position> {
        Some(self.cursor)
    }

    fn apply_insertions(&mut self, position: Position, fragments: &[String]) -> Result<()> {
        let fragments: Vec<String> = fragments
            .iter()
            .map(|fragment| self.normalize_line_endings(fragment))
            .collect();
        let updated = splice(&self.text, position, &fragments);
        self.write_atomically(&updated)?;

        tracing::debug!(
            "Wrote {} bytes to {}",
            updated.len() - self.text.len(),
            self.target.display()
        );
        self.text = updated;
        Ok(())
    }
}
