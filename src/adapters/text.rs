use crate::domain::model::Position;

/// Byte offset of `position` in `text`. Lines past the end clamp to the end
/// of the text and characters past the end of a line clamp to the line end
/// (before its `\r\n` or `\n`).
pub fn byte_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(idx) => line_start += idx + 1,
            None => return text.len(),
        }
    }

    let rest = &text[line_start..];
    let line_len = rest.find('\n').unwrap_or(rest.len());
    let line = rest[..line_len].strip_suffix('\r').unwrap_or(&rest[..line_len]);

    let column = line
        .char_indices()
        .nth(position.character as usize)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());

    line_start + column
}

pub fn splice(text: &str, position: Position, fragments: &[String]) -> String {
    let offset = byte_offset(text, position);
    let inserted: usize = fragments.iter().map(String::len).sum();

    let mut result = String::with_capacity(text.len() + inserted);
    result.push_str(&text[..offset]);
    for fragment in fragments {
        result.push_str(fragment);
    }
    result.push_str(&text[offset..]);
    result
}

pub fn document_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
