use crate::core::{ConfigProvider, Property};
use crate::utils::error::Result;
use regex::Regex;
use std::path::Path;

pub const DEFAULT_PREFIX: &str = "I";
pub const DEFAULT_SUFFIX: &str = "Data";

/// Scans document lines for an `interface <prefix><Name><suffix>` block and
/// collects its fields.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    prefix: String,
    suffix: String,
    skip_blank_lines: bool,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            skip_blank_lines: false,
        }
    }
}

impl FieldExtractor {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            skip_blank_lines: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.declaration_prefix(), config.declaration_suffix())
            .with_skip_blank_lines(config.skip_blank_lines())
    }

    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// The interface name this extractor looks for, e.g. `IFooData`.
    pub fn interface_name(&self, declaration: &str) -> String {
        format!("{}{}{}", self.prefix, declaration, self.suffix)
    }

    /// Header pattern: the interface keyword, the exact interface name, an
    /// optional generic parameter list, then whitespace.
    pub fn header_pattern(&self, declaration: &str) -> Result<Regex> {
        let pattern = format!(
            r"interface {}(<[\w\s]+>)?\s",
            regex::escape(&self.interface_name(declaration))
        );
        Ok(Regex::new(&pattern)?)
    }

    pub fn extract<S: AsRef<str>>(&self, lines: &[S], declaration: &str) -> Result<Vec<Property>> {
        let header = self.header_pattern(declaration)?;

        let Some(header_index) = lines.iter().position(|line| header.is_match(line.as_ref())) else {
            tracing::debug!(
                "No declaration of {} found in {} lines",
                self.interface_name(declaration),
                lines.len()
            );
            return Ok(Vec::new());
        };

        tracing::debug!(
            "Found {} on line {}",
            self.interface_name(declaration),
            header_index + 1
        );

        let mut properties = Vec::new();
        for line in &lines[header_index + 1..] {
            let text = line.as_ref();
            if is_block_end(text) {
                break;
            }
            if self.skip_blank_lines && text.trim().is_empty() {
                continue;
            }
            properties.push(parse_field_line(text));
        }

        Ok(properties)
    }
}

/// Only a bare `}` or `};` closes the block; indented braces belong to
/// nested object types.
pub fn is_block_end(line: &str) -> bool {
    line == "}" || line == "};"
}

/// Splits a field line at its first colon. A line without a colon yields an
/// empty name and the whole line as the type.
pub fn parse_field_line(line: &str) -> Property {
    let (raw_name, raw_type) = match line.find(':') {
        Some(idx) => (&line[..idx], &line[idx + 1..]),
        None => ("", line),
    };

    let name = raw_name.trim();
    let name = name.strip_suffix('?').unwrap_or(name);

    let r#type = raw_type
        .trim()
        .trim_end_matches(|c: char| c == ',' || c == ';')
        .trim_end();

    Property::new(name, r#type)
}

/// File name without its final extension: `src/Foo.ts` -> `Foo`.
pub fn declaration_name(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_extracts_fields_in_order() {
        let doc = lines("interface IFooData {\n  id: number;\n  name?: string;\n}");
        let properties = FieldExtractor::default().extract(&doc, "Foo").unwrap();

        assert_eq!(
            properties,
            vec![Property::new("id", "number"), Property::new("name", "string")]
        );
    }

    #[test]
    fn test_header_with_export_and_generics() {
        let doc = lines(
            "import { Model } from './model';\n\
             export interface IFooData<T extends object> {\n\
             \x20 items: T[],\n\
             };\n\
             export class Foo extends Model<IFooData<object>> {}",
        );
        let properties = FieldExtractor::default().extract(&doc, "Foo").unwrap();

        assert_eq!(properties, vec![Property::new("items", "T[]")]);
    }

    #[test]
    fn test_no_header_returns_empty() {
        let doc = lines("interface IBarData {\n  id: number;\n}");
        assert!(FieldExtractor::default().extract(&doc, "Foo").unwrap().is_empty());
    }

    #[test]
    fn test_header_requires_exact_name() {
        let doc = lines("interface IFooDataExtra {\n  id: number;\n}");
        assert!(FieldExtractor::default().extract(&doc, "Foo").unwrap().is_empty());
    }

    #[test]
    fn test_declaration_is_matched_literally() {
        let doc = lines("interface IFooXmodelData {\n  id: number;\n}");
        let properties = FieldExtractor::default().extract(&doc, "Foo.model").unwrap();
        assert!(properties.is_empty());
    }

    #[test]
    fn test_lines_before_header_are_ignored() {
        let doc = lines("const x: number = 1;\ninterface IFooData {\n  id: number;\n}\n  after: string;");
        let properties = FieldExtractor::default().extract(&doc, "Foo").unwrap();

        assert_eq!(properties, vec![Property::new("id", "number")]);
    }

    #[test]
    fn test_first_header_wins() {
        let doc = lines("interface IFooData {\n  a: number;\n}\ninterface IFooData {\n  b: string;\n}");
        let properties = FieldExtractor::default().extract(&doc, "Foo").unwrap();

        assert_eq!(properties, vec![Property::new("a", "number")]);
    }

    #[test]
    fn test_indented_brace_does_not_terminate() {
        let doc = lines("interface IFooData {\n  id: number;\n  }\n}");
        let properties = FieldExtractor::default().extract(&doc, "Foo").unwrap();

        assert_eq!(properties.len(), 2);
        assert_eq!(properties[1], Property::new("", "}"));
    }

    #[test]
    fn test_unterminated_block_reads_to_end() {
        let doc = lines("interface IFooData {\n  id: number;\n  name: string;");
        let properties = FieldExtractor::default().extract(&doc, "Foo").unwrap();

        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn test_blank_lines_are_kept_unless_skipped() {
        let doc = lines("interface IFooData {\n  id: number;\n\n  name: string;\n}");

        let kept = FieldExtractor::default().extract(&doc, "Foo").unwrap();
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[1], Property::new("", ""));

        let skipped = FieldExtractor::default()
            .with_skip_blank_lines(true)
            .extract(&doc, "Foo")
            .unwrap();
        assert_eq!(
            skipped,
            vec![Property::new("id", "number"), Property::new("name", "string")]
        );
    }

    #[test]
    fn test_custom_affixes() {
        let doc = lines("interface FooProps {\n  id: number;\n}");
        let extractor = FieldExtractor::new("", "Props");

        assert_eq!(extractor.interface_name("Foo"), "FooProps");
        assert_eq!(
            extractor.extract(&doc, "Foo").unwrap(),
            vec![Property::new("id", "number")]
        );
    }

    #[test]
    fn test_parse_field_line() {
        assert_eq!(parse_field_line("  id: number;"), Property::new("id", "number"));
        assert_eq!(parse_field_line("  name?: string,"), Property::new("name", "string"));
        assert_eq!(
            parse_field_line("  onChange: (a: number, b: string) => void;"),
            Property::new("onChange", "(a: number, b: string) => void")
        );
        assert_eq!(
            parse_field_line("  tags: Array<string>;;"),
            Property::new("tags", "Array<string>")
        );
        assert_eq!(parse_field_line("  broken line"), Property::new("", "broken line"));
    }

    #[test]
    fn test_declaration_name() {
        assert_eq!(declaration_name("Foo.ts").as_deref(), Some("Foo"));
        assert_eq!(declaration_name("/src/models/User.ts").as_deref(), Some("User"));
        assert_eq!(declaration_name("Foo.model.ts").as_deref(), Some("Foo.model"));
        assert_eq!(declaration_name("Makefile").as_deref(), Some("Makefile"));
        assert_eq!(declaration_name(""), None);
    }
}
